//! Sheet state persistence
//!
//! Loads and saves [`BudgetState`] as JSON under a single store key. Loading
//! never fails: anything unusable is reported as absent so the caller falls
//! back to the template.

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::SheetResult;
use crate::models::BudgetState;

use super::backend::KeyValueStore;

/// Repository for sheet state persistence
#[derive(Debug, Clone)]
pub struct SheetRepository<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> SheetRepository<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Restore the persisted state, if there is a usable one
    ///
    /// Returns `None` when the key is absent, the value is not JSON, the
    /// `rows` array or `currency` string is missing, or the contents break a
    /// row invariant. Nothing is partially applied.
    pub fn load(&self) -> Option<BudgetState> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to read saved sheet");
                return None;
            }
        };

        let value: Value = match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!(key = %self.key, error = %e, "Saved sheet is not valid JSON, ignoring it");
                return None;
            }
        };

        let has_shape = value.get("rows").is_some_and(Value::is_array)
            && value.get("currency").is_some_and(Value::is_string);
        if !has_shape {
            warn!(key = %self.key, "Saved sheet is missing rows or currency, ignoring it");
            return None;
        }

        let state: BudgetState = match serde_json::from_value(value) {
            Ok(state) => state,
            Err(e) => {
                warn!(key = %self.key, error = %e, "Saved sheet is malformed, ignoring it");
                return None;
            }
        };

        if !state.has_unique_ids() {
            warn!(key = %self.key, "Saved sheet has duplicate row ids, ignoring it");
            return None;
        }

        debug!(key = %self.key, rows = state.rows().len(), "Restored saved sheet");
        Some(state)
    }

    /// Persist the state, replacing whatever was stored
    pub fn save(&mut self, state: &BudgetState) -> SheetResult<()> {
        let json = serde_json::to_string(state)?;
        self.store.set(&self.key, &json)?;
        debug!(key = %self.key, rows = state.rows().len(), "Saved sheet");
        Ok(())
    }

    /// Forget the persisted state
    pub fn clear(&mut self) -> SheetResult<()> {
        self.store.remove(&self.key)?;
        debug!(key = %self.key, "Cleared saved sheet");
        Ok(())
    }
}
