//! Sheet display formatting
//!
//! Renders the grid and the annual summary for terminal output.

use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};

use crate::models::{format_money, BudgetState, CategoryType, Month};
use crate::reports::{PeriodTotals, SheetOverview};

/// Grid cell text: thousands separators, fraction only when non-zero
pub fn format_cell(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::new();
    if value < 0.0 && fixed != "0.00" {
        grouped.push('-');
    }
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if fraction != "00" {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}

/// Savings rate with one decimal place
pub fn format_percent(rate: f64) -> String {
    format!("{:.1}%", rate)
}

/// Format the full grid: every row, then per-type totals and net
pub fn format_sheet(state: &BudgetState, overview: &SheetOverview) -> String {
    let mut builder = Builder::default();

    let mut header = vec!["Category".to_string(), "Type".to_string()];
    header.extend(Month::ALL.iter().map(|m| m.key().to_string()));
    header.push("Annual".to_string());
    builder.push_record(header);

    for row in state.rows() {
        let mut record = vec![row.label.clone(), row.kind().to_string()];
        record.extend(row.values.iter().map(|(_, v)| format_cell(v)));
        record.push(format_cell(row.annual_total()));
        builder.push_record(record);
    }

    let totals: [(&str, fn(&PeriodTotals) -> f64); 4] = [
        ("Total income", |t| t.of(CategoryType::Income)),
        ("Total expenses", |t| t.of(CategoryType::Expense)),
        ("Total savings", |t| t.of(CategoryType::Savings)),
        ("Net", |t| t.net),
    ];
    for (label, pick) in totals {
        let mut record = vec![label.to_string(), String::new()];
        record.extend(overview.monthly.iter().map(|(_, t)| format_cell(pick(t))));
        record.push(format_cell(pick(&overview.annual)));
        builder.push_record(record);
    }

    let mut table = builder.build();
    table
        .with(Style::modern())
        .with(Modify::new(Columns::new(2..)).with(Alignment::right()));

    format!(
        "Amounts in {} ({})\n{}\n",
        state.currency(),
        state.currency().symbol(),
        table
    )
}

/// Format the annual summary
pub fn format_summary(overview: &SheetOverview) -> String {
    let currency = overview.currency;
    let mut output = String::new();

    output.push_str(&format!("Annual Summary ({})\n", currency));
    output.push_str(&format!(
        "  Income:          {}\n",
        format_money(overview.annual.income, currency)
    ));
    output.push_str(&format!(
        "  Expenses:        {}\n",
        format_money(overview.annual.expense, currency)
    ));
    output.push_str(&format!(
        "  Savings:         {}\n",
        format_money(overview.annual.savings, currency)
    ));
    output.push_str(&format!(
        "  Net:             {}\n",
        format_money(overview.annual.net, currency)
    ));
    output.push_str(&format!(
        "  Savings rate:    {}\n",
        format_percent(overview.savings_rate)
    ));

    match &overview.largest_expense {
        Some(row) => output.push_str(&format!(
            "  Largest expense: {} ({})\n",
            row.label,
            format_money(row.annual_total, currency)
        )),
        None => output.push_str("  Largest expense: -\n"),
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryRow, Currency, MonthValues};

    #[test]
    fn test_format_cell() {
        assert_eq!(format_cell(0.0), "0");
        assert_eq!(format_cell(1840.0), "1,840");
        assert_eq!(format_cell(22200.0), "22,200");
        assert_eq!(format_cell(12.5), "12.50");
        assert_eq!(format_cell(-1500.0), "-1,500");
        assert_eq!(format_cell(1234567.891), "1,234,567.89");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.0), "0.0%");
        assert_eq!(format_percent(25.0), "25.0%");
        assert_eq!(format_percent(17.6543), "17.7%");
    }

    #[test]
    fn test_format_sheet_contains_rows_and_totals() {
        let state = BudgetState::template();
        let overview = SheetOverview::generate(&state);
        let output = format_sheet(&state, &overview);

        assert!(output.starts_with("Amounts in USD ($)"));
        assert!(output.contains("Housing & Rent"));
        assert!(output.contains("1,840"));
        assert!(output.contains("Total expenses"));
        assert!(output.contains("Net"));
    }

    #[test]
    fn test_format_summary() {
        let state = BudgetState::from_rows(
            vec![
                CategoryRow::new("p", "Pay", CategoryType::Income, MonthValues::uniform(1000.0)),
                CategoryRow::new("r", "Rent", CategoryType::Expense, MonthValues::uniform(400.0)),
                CategoryRow::new("s", "Save", CategoryType::Savings, MonthValues::uniform(100.0)),
            ],
            Currency::Gbp,
        )
        .unwrap();
        let output = format_summary(&SheetOverview::generate(&state));

        assert!(output.contains("Annual Summary (GBP)"));
        assert!(output.contains("Income:          £12,000.00"));
        assert!(output.contains("Net:             £6,000.00"));
        assert!(output.contains("Savings rate:    10.0%"));
        assert!(output.contains("Largest expense: Rent (£4,800.00)"));
    }

    #[test]
    fn test_format_summary_without_expenses() {
        let state = BudgetState::from_rows(Vec::new(), Currency::Usd).unwrap();
        let output = format_summary(&SheetOverview::generate(&state));
        assert!(output.contains("Largest expense: -"));
        assert!(output.contains("Savings rate:    0.0%"));
    }
}
