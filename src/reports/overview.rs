//! Sheet Overview Report
//!
//! Collects every derived figure the front end shows: per-month totals and
//! net, annual totals, savings rate, largest expense and per-row annual
//! totals.

use crate::models::{BudgetState, CategoryType, Currency, Month, RowId};

use super::totals::{largest_expense, monthly_total, savings_rate};

/// Totals for one month (or the whole year)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PeriodTotals {
    pub income: f64,
    pub expense: f64,
    pub savings: f64,
    /// income - expense - savings
    pub net: f64,
}

impl PeriodTotals {
    fn new(income: f64, expense: f64, savings: f64) -> Self {
        Self {
            income,
            expense,
            savings,
            net: income - expense - savings,
        }
    }

    /// Total for one row type
    pub fn of(&self, kind: CategoryType) -> f64 {
        match kind {
            CategoryType::Income => self.income,
            CategoryType::Expense => self.expense,
            CategoryType::Savings => self.savings,
        }
    }
}

/// A row in the overview with its annual total
#[derive(Debug, Clone, PartialEq)]
pub struct RowSummary {
    pub row_id: RowId,
    pub label: String,
    pub kind: CategoryType,
    pub annual_total: f64,
}

/// Sheet Overview Report
#[derive(Debug, Clone, PartialEq)]
pub struct SheetOverview {
    pub currency: Currency,
    /// Twelve entries in column order
    pub monthly: Vec<(Month, PeriodTotals)>,
    /// Sums of the monthly totals
    pub annual: PeriodTotals,
    /// Annual savings as a percentage of annual income
    pub savings_rate: f64,
    pub largest_expense: Option<RowSummary>,
    /// Every row with its annual total, in display order
    pub rows: Vec<RowSummary>,
}

impl SheetOverview {
    /// Derive the overview from the current state
    pub fn generate(state: &BudgetState) -> Self {
        let rows = state.rows();

        let monthly: Vec<(Month, PeriodTotals)> = Month::ALL
            .into_iter()
            .map(|month| {
                let totals = PeriodTotals::new(
                    monthly_total(rows, CategoryType::Income, month),
                    monthly_total(rows, CategoryType::Expense, month),
                    monthly_total(rows, CategoryType::Savings, month),
                );
                (month, totals)
            })
            .collect();

        let annual = monthly.iter().fold(PeriodTotals::default(), |acc, (_, m)| {
            PeriodTotals {
                income: acc.income + m.income,
                expense: acc.expense + m.expense,
                savings: acc.savings + m.savings,
                net: acc.net + m.net,
            }
        });

        let summarize = |row: &crate::models::CategoryRow| RowSummary {
            row_id: row.id.clone(),
            label: row.label.clone(),
            kind: row.kind(),
            annual_total: row.annual_total(),
        };

        Self {
            currency: state.currency(),
            savings_rate: savings_rate(annual.income, annual.savings),
            largest_expense: largest_expense(rows).map(summarize),
            rows: rows.iter().map(summarize).collect(),
            monthly,
            annual,
        }
    }

    /// Totals for a single month
    pub fn month(&self, month: Month) -> PeriodTotals {
        self.monthly[month.index()].1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryRow, MonthValues};

    fn sample_state() -> BudgetState {
        BudgetState::from_rows(
            vec![
                CategoryRow::new("pay", "Pay", CategoryType::Income, MonthValues::uniform(4000.0)),
                CategoryRow::new("rent", "Rent", CategoryType::Expense, MonthValues::uniform(1500.0)),
                CategoryRow::new("food", "Food", CategoryType::Expense, MonthValues::uniform(500.0)),
                CategoryRow::new("save", "Save", CategoryType::Savings, MonthValues::uniform(1000.0)),
            ],
            Currency::Eur,
        )
        .unwrap()
    }

    #[test]
    fn test_monthly_totals() {
        let overview = SheetOverview::generate(&sample_state());
        assert_eq!(overview.monthly.len(), 12);

        let jan = overview.month(Month::Jan);
        assert_eq!(jan.income, 4000.0);
        assert_eq!(jan.expense, 2000.0);
        assert_eq!(jan.savings, 1000.0);
        assert_eq!(jan.net, 1000.0);
    }

    #[test]
    fn test_annual_totals() {
        let overview = SheetOverview::generate(&sample_state());
        assert_eq!(overview.annual.income, 48000.0);
        assert_eq!(overview.annual.expense, 24000.0);
        assert_eq!(overview.annual.savings, 12000.0);
        assert_eq!(overview.annual.net, 12000.0);
        assert_eq!(
            overview.annual.net,
            overview.annual.income - overview.annual.expense - overview.annual.savings
        );
        assert_eq!(overview.annual.of(CategoryType::Savings), 12000.0);
    }

    #[test]
    fn test_savings_rate_and_largest_expense() {
        let overview = SheetOverview::generate(&sample_state());
        assert_eq!(overview.savings_rate, 25.0);

        let largest = overview.largest_expense.unwrap();
        assert_eq!(largest.label, "Rent");
        assert_eq!(largest.annual_total, 18000.0);
        assert_eq!(overview.currency, Currency::Eur);
    }

    #[test]
    fn test_row_summaries_in_order() {
        let overview = SheetOverview::generate(&sample_state());
        let labels: Vec<_> = overview.rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, ["Pay", "Rent", "Food", "Save"]);
        assert_eq!(overview.rows[3].annual_total, 12000.0);
    }

    #[test]
    fn test_empty_sheet() {
        let state = BudgetState::from_rows(Vec::new(), Currency::Usd).unwrap();
        let overview = SheetOverview::generate(&state);

        assert_eq!(overview.annual, PeriodTotals::default());
        assert_eq!(overview.savings_rate, 0.0);
        assert!(overview.largest_expense.is_none());
        assert!(overview.rows.is_empty());
    }
}
