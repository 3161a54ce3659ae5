//! Retrieval engine: classify, resolve, fetch, attach payloads
//!
//! Composes the query-understanding pieces over a record store capability.
//! Holds no per-query state; every call builds a fresh [`RetrievalResult`].

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use crate::catalog::{PhoneRecord, PhoneStore};
use crate::query::{classify, resolve_names, CriteriaSet, Intent};
use crate::retrieval::compare::{diff, ComparisonResult};
use crate::retrieval::ranking::rank;

/// Cap on records fetched through the price-ceiling fallback path
const PRICE_FILTER_LIMIT: usize = 10;

/// Everything the renderer needs, derived from one query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalResult {
    /// Original query text
    pub query: String,
    /// Classified intent
    pub intent: Intent,
    /// Extracted soft constraints
    pub criteria: CriteriaSet,
    /// Fetched records, resolver order preserved
    pub records: Vec<PhoneRecord>,
    /// Comparison payload (comparison intent with two or more records)
    pub comparison: Option<ComparisonResult>,
    /// Ranked shortlist (recommendation intent)
    pub top_picks: Vec<PhoneRecord>,
}

/// Stateless retrieval orchestrator over a shared record store
pub struct RetrievalEngine {
    store: Arc<dyn PhoneStore>,
}

impl RetrievalEngine {
    pub fn new(store: Arc<dyn PhoneStore>) -> Self {
        Self { store }
    }

    /// Run the full retrieval pipeline for one query
    pub fn retrieve(&self, text: &str) -> RetrievalResult {
        let (intent, criteria) = classify(text);

        let known_names = self.store.list_model_names();
        let resolved = resolve_names(text, &known_names);
        debug!(
            intent = intent.as_str(),
            resolved = resolved.len(),
            "query classified"
        );

        let records = if !resolved.is_empty() {
            // Fetch in resolver order; a by-name miss is skipped, not an error
            resolved
                .iter()
                .filter_map(|name| self.store.find_by_name(name))
                .collect()
        } else if let Some(max) = criteria.price_max {
            let mut matches = self.store.filter_by_max_price(max);
            matches.truncate(PRICE_FILTER_LIMIT);
            matches
        } else if intent == Intent::Recommendation {
            self.store.list_all()
        } else {
            Vec::new()
        };

        let comparison = if intent == Intent::Comparison && records.len() >= 2 {
            Some(diff(&records[0], &records[1]))
        } else {
            None
        };

        let top_picks = if intent == Intent::Recommendation {
            rank(&records, criteria.focus, &criteria)
        } else {
            Vec::new()
        };

        RetrievalResult {
            query: text.to_string(),
            intent,
            criteria,
            records,
            comparison,
            top_picks,
        }
    }
}
