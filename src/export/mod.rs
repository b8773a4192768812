//! Export module for finance-sheet
//!
//! - CSV: the sheet grid for spreadsheet tools
//! - JSON: machine-readable snapshot of the full state
//! - YAML: human-readable snapshot of the full state

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{export_csv, to_csv, CSV_FILE_NAME, CSV_MIME_TYPE};
pub use json::{export_snapshot_json, SheetSnapshot, SnapshotSummary, SNAPSHOT_SCHEMA_VERSION};
pub use yaml::export_snapshot_yaml;
