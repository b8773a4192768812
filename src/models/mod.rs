//! Core data models for finance-sheet
//!
//! Months, currencies, rows and the sheet state, plus the built-in template.

pub mod amount;
pub mod currency;
pub mod ids;
pub mod month;
pub mod row;
pub mod state;
pub mod template;

pub use amount::{format_money, format_plain, parse_amount};
pub use currency::Currency;
pub use ids::RowId;
pub use month::Month;
pub use row::{CategoryRow, CategoryType, MonthValues};
pub use state::BudgetState;
pub use template::{create_blank_values, template_rows, TEMPLATE_ROW_COUNT};
