//! Storage layer for finance-sheet
//!
//! A string key-value port ([`KeyValueStore`]) with file and in-memory
//! backends, and the [`SheetRepository`] that stores the sheet as JSON on top
//! of it.

pub mod backend;
pub mod file_io;
pub mod repository;

pub use backend::{FileStore, KeyValueStore, MemoryStore};
pub use file_io::{read_text_if_exists, remove_if_exists, write_text_atomic};
pub use repository::SheetRepository;

use crate::config::{SheetPaths, Settings};
use crate::error::SheetError;

/// Open the file-backed repository described by paths and settings
pub fn open_file_repository(
    paths: &SheetPaths,
    settings: &Settings,
) -> Result<SheetRepository<FileStore>, SheetError> {
    paths.ensure_directories()?;
    Ok(SheetRepository::new(
        FileStore::new(paths.clone()),
        settings.storage_key.clone(),
    ))
}
