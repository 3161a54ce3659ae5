//! Ordered generation strategy chain
//!
//! Strategies run in sequence; the first success wins. Each failure carries a
//! typed reason and is logged, never propagated; the deterministic template
//! renderer closes the chain, so rendering is total.

use tracing::warn;

use crate::generation::{template, PromptContext, ReviewGenerator};
use crate::retrieval::RetrievalResult;

/// Ordered list of generation strategies with a deterministic tail
pub struct GenerationChain {
    strategies: Vec<Box<dyn ReviewGenerator>>,
}

impl GenerationChain {
    /// A chain with no generative strategies; rendering is template-only
    pub fn template_only() -> Self {
        Self {
            strategies: Vec::new(),
        }
    }

    /// Build a chain from strategies tried front to back
    pub fn new(strategies: Vec<Box<dyn ReviewGenerator>>) -> Self {
        Self { strategies }
    }

    /// Append a strategy at the end (still ahead of the template tail)
    pub fn push(&mut self, strategy: Box<dyn ReviewGenerator>) {
        self.strategies.push(strategy);
    }

    /// Number of generative strategies ahead of the template tail
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Render an answer for the retrieval result. Never fails: a zero-record
    /// result short-circuits to the not-found message, and exhausting every
    /// generative strategy falls through to the templates.
    pub async fn render(&self, result: &RetrievalResult) -> String {
        if result.records.is_empty() {
            return template::no_phones_message();
        }

        let context = PromptContext::from_retrieval(result);
        for strategy in &self.strategies {
            match strategy.generate(&context).await {
                Ok(text) => return text,
                Err(reason) => {
                    warn!(strategy = strategy.name(), %reason, "generation strategy failed");
                }
            }
        }

        template::render(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PhoneRecord;
    use crate::generation::GenerationError;
    use crate::query::{CriteriaSet, Intent};
    use async_trait::async_trait;

    struct FixedGenerator(&'static str);

    #[async_trait]
    impl ReviewGenerator for FixedGenerator {
        fn name(&self) -> &str {
            "fixed"
        }

        async fn generate(&self, _context: &PromptContext) -> Result<String, GenerationError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingGenerator(fn() -> GenerationError);

    #[async_trait]
    impl ReviewGenerator for FailingGenerator {
        fn name(&self) -> &str {
            "failing"
        }

        async fn generate(&self, _context: &PromptContext) -> Result<String, GenerationError> {
            Err((self.0)())
        }
    }

    fn phone(name: &str) -> PhoneRecord {
        PhoneRecord {
            model_name: name.to_string(),
            release_date: String::new(),
            display: String::new(),
            battery: "5000 mAh".to_string(),
            camera: String::new(),
            ram: String::new(),
            storage: String::new(),
            price: "$999".to_string(),
            chipset: String::new(),
            os: String::new(),
            body: String::new(),
            url: String::new(),
        }
    }

    fn specs_result(records: Vec<PhoneRecord>) -> RetrievalResult {
        RetrievalResult {
            query: "specs".to_string(),
            intent: Intent::Specs,
            criteria: CriteriaSet::default(),
            records,
            comparison: None,
            top_picks: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_first_success_wins() {
        let chain = GenerationChain::new(vec![
            Box::new(FixedGenerator("primary answer")),
            Box::new(FixedGenerator("secondary answer")),
        ]);
        let rendered = chain.render(&specs_result(vec![phone("Galaxy S24")])).await;
        assert_eq!(rendered, "primary answer");
    }

    #[tokio::test]
    async fn test_failure_falls_through_to_next() {
        let chain = GenerationChain::new(vec![
            Box::new(FailingGenerator(|| GenerationError::RateLimited)),
            Box::new(FixedGenerator("secondary answer")),
        ]);
        let rendered = chain.render(&specs_result(vec![phone("Galaxy S24")])).await;
        assert_eq!(rendered, "secondary answer");
    }

    #[tokio::test]
    async fn test_all_failures_reach_template() {
        let chain = GenerationChain::new(vec![
            Box::new(FailingGenerator(|| GenerationError::Timeout)),
            Box::new(FailingGenerator(|| GenerationError::Http("refused".to_string()))),
        ]);
        let rendered = chain.render(&specs_result(vec![phone("Galaxy S24")])).await;
        assert!(rendered.starts_with("Galaxy S24 specifications:"));
    }

    #[tokio::test]
    async fn test_zero_records_skips_generators() {
        // The not-found message wins even over a generator that would succeed
        let chain = GenerationChain::new(vec![Box::new(FixedGenerator("should not run"))]);
        let rendered = chain.render(&specs_result(vec![])).await;
        assert!(rendered.contains("couldn't find any Samsung phones"));
    }

    #[tokio::test]
    async fn test_template_only_chain() {
        let chain = GenerationChain::template_only();
        assert!(chain.is_empty());
        let rendered = chain.render(&specs_result(vec![phone("Galaxy A54")])).await;
        assert!(rendered.starts_with("Galaxy A54 specifications:"));
    }
}
