//! Record store trait and the in-memory seed-file implementation
//!
//! Lookups are case-insensitive. By-name lookup runs three passes: exact
//! match, substring match, then a substring match with the "samsung" and
//! "galaxy" marketing tokens stripped from the needle. A miss is an absence,
//! not an error.

use serde::Deserialize;
use std::path::Path;

use crate::catalog::types::PhoneRecord;
use crate::errors::{AdvisorError, Result};

/// Read capability over the phone catalog. Implementations must support
/// concurrent readers; the advisor never writes.
pub trait PhoneStore: Send + Sync {
    /// All known model names, in catalog order
    fn list_model_names(&self) -> Vec<String>;

    /// Find one record by name (exact, then substring, then stripped passes)
    fn find_by_name(&self, name: &str) -> Option<PhoneRecord>;

    /// Records whose parsed price is at most `max`, in catalog order.
    /// Records without a parseable price never qualify.
    fn filter_by_max_price(&self, max: f64) -> Vec<PhoneRecord>;

    /// Every record in the catalog
    fn list_all(&self) -> Vec<PhoneRecord>;
}

/// Immutable in-memory catalog, loaded once from a TOML seed file
pub struct InMemoryStore {
    records: Vec<PhoneRecord>,
}

#[derive(Deserialize)]
struct SeedFile {
    #[serde(default)]
    phones: Vec<PhoneRecord>,
}

impl InMemoryStore {
    /// Build a store directly from records (test and embedding entry point)
    pub fn from_records(records: Vec<PhoneRecord>) -> Self {
        Self { records }
    }

    /// Load the seed catalog from a TOML file with a `[[phones]]` table array
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AdvisorError::CatalogError(format!(
                "failed to read seed file {}: {e}",
                path.display()
            ))
        })?;
        Self::from_toml_str(&contents)
    }

    /// Parse a seed catalog from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let seed: SeedFile = toml::from_str(contents)
            .map_err(|e| AdvisorError::CatalogError(format!("failed to parse catalog seed: {e}")))?;
        Ok(Self::from_records(seed.phones))
    }

    /// Number of records in the catalog
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl PhoneStore for InMemoryStore {
    fn list_model_names(&self) -> Vec<String> {
        self.records.iter().map(|r| r.model_name.clone()).collect()
    }

    fn find_by_name(&self, name: &str) -> Option<PhoneRecord> {
        let needle = name.to_lowercase();

        if let Some(record) = self
            .records
            .iter()
            .find(|r| r.model_name.to_lowercase() == needle)
        {
            return Some(record.clone());
        }

        if let Some(record) = self
            .records
            .iter()
            .find(|r| r.model_name.to_lowercase().contains(&needle))
        {
            return Some(record.clone());
        }

        // Marketing tokens carry no identity; retry without them
        let stripped = needle
            .replace("samsung", "")
            .replace("galaxy", "")
            .trim()
            .to_string();
        if !stripped.is_empty() {
            return self
                .records
                .iter()
                .find(|r| r.model_name.to_lowercase().contains(&stripped))
                .cloned();
        }

        None
    }

    fn filter_by_max_price(&self, max: f64) -> Vec<PhoneRecord> {
        self.records
            .iter()
            .filter(|r| r.price_usd().map(|p| p <= max).unwrap_or(false))
            .cloned()
            .collect()
    }

    fn list_all(&self) -> Vec<PhoneRecord> {
        self.records.clone()
    }
}
