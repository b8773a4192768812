//! finance-sheet - twelve-month personal finance spreadsheet
//!
//! Tracks income, expense and savings rows across twelve fixed months,
//! derives monthly and annual totals, persists the sheet locally and exports
//! it as CSV.
//!
//! # Architecture
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Months, currencies, rows, the sheet state and its template
//! - `reports`: Derived totals, savings rate and largest expense
//! - `storage`: Key-value persistence of the sheet
//! - `services`: The live sheet with write-through persistence
//! - `export`: CSV export and JSON/YAML snapshots
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the binary
//!
//! # Example
//!
//! ```rust
//! use finance_sheet::models::{CategoryType, Month};
//! use finance_sheet::services::SheetService;
//! use finance_sheet::storage::{MemoryStore, SheetRepository};
//!
//! let repository = SheetRepository::new(MemoryStore::new(), "personal-finance-sheet-v1");
//! let mut sheet = SheetService::open(repository);
//!
//! let id = sheet.add_row(CategoryType::Expense, "Gym").unwrap().unwrap();
//! sheet.set_cell_value(&id, Month::Jan, "45").unwrap();
//!
//! assert_eq!(sheet.state().rows().len(), 9);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{SheetError, SheetResult};
