//! Display formatting for terminal output

pub mod sheet;

pub use sheet::{format_cell, format_percent, format_sheet, format_summary};
