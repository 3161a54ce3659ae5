//! Structured comparison of exactly two records
//!
//! Differences are computed by exact string inequality over the canonical
//! attribute order; no semantic normalization happens here. Callers guarantee
//! two records (the engine never builds a comparison from fewer).

use serde::{Deserialize, Serialize};

use crate::catalog::{PhoneRecord, SpecField};

/// One differing attribute between two records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecDiff {
    pub field: SpecField,
    pub value_a: String,
    pub value_b: String,
}

/// Side-by-side comparison payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub record_a: PhoneRecord,
    pub record_b: PhoneRecord,
    pub differences: Vec<SpecDiff>,
}

/// Diff two records over the canonical attribute sequence
pub fn diff(a: &PhoneRecord, b: &PhoneRecord) -> ComparisonResult {
    let differences = SpecField::ALL
        .iter()
        .filter(|field| a.field_value(**field) != b.field_value(**field))
        .map(|field| SpecDiff {
            field: *field,
            value_a: a.field_value(*field).to_string(),
            value_b: b.field_value(*field).to_string(),
        })
        .collect();

    ComparisonResult {
        record_a: a.clone(),
        record_b: b.clone(),
        differences,
    }
}
