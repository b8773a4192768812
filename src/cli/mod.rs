//! CLI command handlers
//!
//! Bridges the clap argument parsing with the service layer.

pub mod export;
pub mod sheet;

pub use export::{handle_export_command, ExportCommands};
pub use sheet::{handle_sheet_command, SheetCommands};
