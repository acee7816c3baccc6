//! Read-only restaurant store.
//!
//! DESIGN
//! ======
//! The JSON file is read exactly once at startup into an immutable `Vec`.
//! The store is shared behind an `Arc` in `AppState`; nothing mutates or
//! reloads it afterwards, so handlers read it without locking.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse restaurant data: {0}")]
    Parse(#[from] serde_json::Error),
}

// =============================================================================
// RECORDS
// =============================================================================

/// One restaurant as stored in the data file.
///
/// Only `name` is interpreted. Everything else (location, price, rating,
/// website, cuisines, ...) is kept as raw JSON in `fields` and serialized
/// back out unchanged, so a fractional price or an explicit `null` survives
/// the round trip through `/search`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantRecord {
    pub name: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

// =============================================================================
// STORE
// =============================================================================

#[derive(Debug, Default)]
pub struct RestaurantStore {
    records: Vec<RestaurantRecord>,
}

impl RestaurantStore {
    #[must_use]
    pub fn from_records(records: Vec<RestaurantRecord>) -> Self {
        Self { records }
    }

    /// Parse a JSON array of restaurants.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Parse`] if the text is not an array of records.
    pub fn from_json_str(raw: &str) -> Result<Self, StoreError> {
        let records: Vec<RestaurantRecord> = serde_json::from_str(raw)?;
        Ok(Self::from_records(records))
    }

    /// Read and parse the data file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a JSON array of
    /// restaurant records.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|source| StoreError::Read { path: path.display().to_string(), source })?;
        Self::from_json_str(&raw)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Case-insensitive substring match on `name`, in file order.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&RestaurantRecord> {
        let needle = query.to_lowercase();
        self.records
            .iter()
            .filter(|r| r.name.to_lowercase().contains(&needle))
            .collect()
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
