//! Path management for finance-sheet
//!
//! ## Path Resolution Order
//!
//! 1. `FINANCE_SHEET_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/finance-sheet` or `~/.config/finance-sheet`
//! 3. Windows: `%APPDATA%\finance-sheet`

use std::path::PathBuf;

use crate::error::SheetError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "FINANCE_SHEET_DATA_DIR";

/// Manages all paths used by finance-sheet
#[derive(Debug, Clone)]
pub struct SheetPaths {
    base_dir: PathBuf,
}

impl SheetPaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home/config directory can be determined.
    pub fn new() -> Result<Self, SheetError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create SheetPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding persisted sheet state
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Path of the file backing a store key
    pub fn state_file(&self, key: &str) -> PathBuf {
        self.data_dir().join(format!("{}.json", key))
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), SheetError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SheetError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| SheetError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, SheetError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                SheetError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("finance-sheet"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, SheetError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| SheetError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("finance-sheet"))
}
