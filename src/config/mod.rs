//! Configuration module for finance-sheet
//!
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::SheetPaths;
pub use settings::Settings;
