//! Key-value backends
//!
//! The sheet is persisted as one text value under one key. Backends only move
//! strings around; parsing and validation live in the repository.

use std::collections::HashMap;

use crate::config::paths::SheetPaths;
use crate::error::SheetResult;

use super::file_io::{read_text_if_exists, remove_if_exists, write_text_atomic};

/// A string key-value store
pub trait KeyValueStore {
    /// Value stored under `key`, if any
    fn get(&self, key: &str) -> SheetResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> SheetResult<()>;

    /// Delete `key`; deleting a missing key succeeds
    fn remove(&mut self, key: &str) -> SheetResult<()>;
}

/// One JSON file per key inside the data directory
#[derive(Debug, Clone)]
pub struct FileStore {
    paths: SheetPaths,
}

impl FileStore {
    pub fn new(paths: SheetPaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &SheetPaths {
        &self.paths
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> SheetResult<Option<String>> {
        read_text_if_exists(self.paths.state_file(key))
    }

    fn set(&mut self, key: &str, value: &str) -> SheetResult<()> {
        write_text_atomic(self.paths.state_file(key), value)
    }

    fn remove(&mut self, key: &str) -> SheetResult<()> {
        remove_if_exists(self.paths.state_file(key))
    }
}

/// In-process store, for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with one entry
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.into(), value.into());
        Self { entries }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> SheetResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> SheetResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> SheetResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}
