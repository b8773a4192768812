//! User settings for finance-sheet
//!
//! Every field has a serde default so older or hand-edited config files keep
//! loading as new settings are added.

use serde::{Deserialize, Serialize};

use super::paths::SheetPaths;
use crate::error::SheetError;

/// Default store key; the suffix versions the persisted layout
pub const DEFAULT_STORAGE_KEY: &str = "personal-finance-sheet-v1";

/// User settings for finance-sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Key the sheet state is persisted under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// File name used by `export csv` when no output path is given
    #[serde(default = "default_export_file_name")]
    pub export_file_name: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_export_file_name() -> String {
    crate::export::CSV_FILE_NAME.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            storage_key: default_storage_key(),
            export_file_name: default_export_file_name(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &SheetPaths) -> Result<Self, SheetError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| SheetError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| SheetError::Config(format!("Failed to parse settings file: {}", e)))?;

        if settings.storage_key.trim().is_empty() {
            return Err(SheetError::Config("storage_key cannot be empty".into()));
        }

        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SheetPaths) -> Result<(), SheetError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| SheetError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| SheetError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
