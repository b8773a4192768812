//! Aggregation functions
//!
//! Pure functions over rows; nothing here is cached or stored.

use crate::models::{CategoryRow, CategoryType, Month, MonthValues};

/// Sum of one type's rows for a month
pub fn monthly_total(rows: &[CategoryRow], kind: CategoryType, month: Month) -> f64 {
    rows.iter()
        .filter(|r| r.kind() == kind)
        .map(|r| r.values[month])
        .sum()
}

/// Income minus expense minus savings for a month
pub fn monthly_net(rows: &[CategoryRow], month: Month) -> f64 {
    monthly_total(rows, CategoryType::Income, month)
        - monthly_total(rows, CategoryType::Expense, month)
        - monthly_total(rows, CategoryType::Savings, month)
}

/// Sum of all twelve months
pub fn annual_total(values: &MonthValues) -> f64 {
    values.as_array().iter().sum()
}

/// Sum of one type's monthly totals across the year
pub fn annual_type_total(rows: &[CategoryRow], kind: CategoryType) -> f64 {
    Month::ALL
        .into_iter()
        .map(|m| monthly_total(rows, kind, m))
        .sum()
}

/// Savings as a percentage of income; 0 when there is no income
pub fn savings_rate(annual_income: f64, annual_savings: f64) -> f64 {
    if annual_income == 0.0 {
        0.0
    } else {
        annual_savings / annual_income * 100.0
    }
}

/// The expense row with the highest annual total
///
/// Ties go to the row that comes first. `None` when there are no expense rows.
pub fn largest_expense(rows: &[CategoryRow]) -> Option<&CategoryRow> {
    let mut best: Option<(&CategoryRow, f64)> = None;
    for row in rows.iter().filter(|r| r.kind() == CategoryType::Expense) {
        let total = row.annual_total();
        match best {
            Some((_, best_total)) if total <= best_total => {}
            _ => best = Some((row, total)),
        }
    }
    best.map(|(row, _)| row)
}
