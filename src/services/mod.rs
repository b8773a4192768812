//! Service layer for finance-sheet
//!
//! The service layer owns the live state and keeps storage in step with it.

pub mod sheet;

pub use sheet::SheetService;
