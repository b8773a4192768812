//! Reports module for finance-sheet
//!
//! Derived figures are recomputed from the state on every read.

pub mod overview;
pub mod totals;

pub use overview::{PeriodTotals, RowSummary, SheetOverview};
pub use totals::{
    annual_total, annual_type_total, largest_expense, monthly_net, monthly_total, savings_rate,
};
