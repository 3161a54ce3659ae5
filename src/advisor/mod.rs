//! Top-level advisor: one question in, one answer out
//!
//! Explicit dependency injection: the advisor is constructed from a record
//! store capability and a generation chain; it holds no global state and no
//! cross-query state. `answer` is total: every path ends in a string.

use std::sync::Arc;
use tracing::info;

use crate::catalog::{InMemoryStore, PhoneStore};
use crate::config::Config;
use crate::generation::{GenerationChain, OllamaGenerator};
use crate::retrieval::{RetrievalEngine, RetrievalResult};

/// Query-answering facade over retrieval + generation
pub struct PhoneAdvisor {
    engine: RetrievalEngine,
    chain: GenerationChain,
}

impl PhoneAdvisor {
    /// Wire an advisor from explicit capabilities
    pub fn new(store: Arc<dyn PhoneStore>, chain: GenerationChain) -> Self {
        Self {
            engine: RetrievalEngine::new(store),
            chain,
        }
    }

    /// Convenience constructor: seed store from the configured catalog file
    /// and build the configured generation chain.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let store = InMemoryStore::load(&config.catalog.path)?;
        Ok(Self::new(Arc::new(store), build_chain(config)))
    }

    /// Answer a natural-language question about the catalog.
    ///
    /// Never fails for business reasons: unresolvable queries, generator
    /// outages, and empty catalogs all degrade to deterministic text. Input
    /// validation (empty/too-short questions) belongs to the transport layer.
    pub async fn answer(&self, question: &str) -> String {
        let result = self.retrieve(question);
        info!(
            intent = result.intent.as_str(),
            records = result.records.len(),
            "answering query"
        );
        self.chain.render(&result).await
    }

    /// Run retrieval only, exposing the structured result
    pub fn retrieve(&self, question: &str) -> RetrievalResult {
        self.engine.retrieve(question)
    }
}

/// Build the generation chain the config asks for: primary model, optional
/// fallback model, template tail always implied.
pub fn build_chain(config: &Config) -> GenerationChain {
    let mut chain = GenerationChain::template_only();

    if config.generator.enabled {
        chain.push(Box::new(OllamaGenerator::new(
            &config.generator.base_url,
            &config.generator.model,
            config.generator.timeout_secs,
        )));
        if let Some(fallback) = &config.generator.fallback_model {
            chain.push(Box::new(OllamaGenerator::new(
                &config.generator.base_url,
                fallback,
                config.generator.timeout_secs,
            )));
        }
    }

    chain
}
