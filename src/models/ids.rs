//! Row identifiers
//!
//! Row ids are opaque strings: generated rows get a random UUIDv4, template
//! rows carry fixed slugs, and restored rows keep whatever id was persisted.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable identity of a sheet row across edits
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowId(String);

impl RowId {
    /// Create a new random ID
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Generate an ID not accepted by `taken`
    ///
    /// UUIDv4 collisions are not expected; the loop only guards against
    /// restored rows that happen to reuse a generated value.
    pub fn generate_unique(taken: impl Fn(&RowId) -> bool) -> Self {
        loop {
            let id = Self::generate();
            if !taken(&id) {
                return id;
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RowId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for RowId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_uuids() {
        let id = RowId::generate();
        assert!(Uuid::parse_str(id.as_str()).is_ok());
    }

    #[test]
    fn test_generated_ids_differ() {
        assert_ne!(RowId::generate(), RowId::generate());
    }

    #[test]
    fn test_generate_unique_skips_taken() {
        let rejected = std::cell::Cell::new(0);
        let id = RowId::generate_unique(|_| {
            rejected.set(rejected.get() + 1);
            rejected.get() < 3
        });

        assert_eq!(rejected.get(), 3);
        assert!(Uuid::parse_str(id.as_str()).is_ok());
    }

    #[test]
    fn test_id_serialization_is_plain_string() {
        let id = RowId::from("expense-housing");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"expense-housing\"");

        let deserialized: RowId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
