//! The built-in starting sheet
//!
//! Eight sample rows whose monthly values zig-zag around a base amount so a
//! fresh sheet looks lived-in.

use super::month::Month;
use super::row::{CategoryRow, CategoryType, MonthValues};

/// (id, label, type, base, variation) for each template row, in display order
const TEMPLATE_ROWS: [(&str, &str, CategoryType, f64, f64); 8] = [
    ("income-salary", "Salary", CategoryType::Income, 5200.0, 0.0),
    ("income-freelance", "Freelance & Side Work", CategoryType::Income, 650.0, 120.0),
    ("expense-housing", "Housing & Rent", CategoryType::Expense, 1850.0, 20.0),
    ("expense-groceries", "Groceries", CategoryType::Expense, 520.0, 60.0),
    ("expense-transport", "Transportation", CategoryType::Expense, 240.0, 40.0),
    ("expense-utilities", "Utilities & Internet", CategoryType::Expense, 180.0, 30.0),
    ("savings-emergency", "Emergency Fund", CategoryType::Savings, 400.0, 0.0),
    ("savings-retirement", "Retirement", CategoryType::Savings, 600.0, 50.0),
];

/// Number of rows in the template
pub const TEMPLATE_ROW_COUNT: usize = TEMPLATE_ROWS.len();

/// Deterministic sample values around `base`
///
/// Even month indices (Jan, Mar, ...) sit `variation / 2` below the base, odd
/// ones the same distance above. Each value is rounded half away from zero
/// and floored at 0.
pub fn create_blank_values(base: f64, variation: f64) -> MonthValues {
    let half = variation / 2.0;
    let mut values = [0.0; 12];
    for month in Month::ALL {
        let i = month.index();
        let drift = if i % 2 == 1 { half } else { -half };
        values[i] = (base + drift).round().max(0.0);
    }
    MonthValues::from_array(values)
}

/// A freshly built copy of the template rows
///
/// Every call returns independent rows; nothing is shared with earlier calls.
pub fn template_rows() -> Vec<CategoryRow> {
    TEMPLATE_ROWS
        .iter()
        .map(|&(id, label, kind, base, variation)| {
            CategoryRow::new(id, label, kind, create_blank_values(base, variation))
        })
        .collect()
}
