//! Answer generation: LLM-backed strategies with a deterministic tail
//!
//! Generators are capabilities behind the [`ReviewGenerator`] trait. The
//! advisor composes them into an ordered [`strategy::GenerationChain`]; every
//! failure is a typed [`GenerationError`] consumed inside the chain, and the
//! template renderer at the tail cannot fail, so callers always get a string.

pub mod client;
pub mod prompt;
pub mod strategy;
pub mod template;

use async_trait::async_trait;
use thiserror::Error;

pub use client::OllamaGenerator;
pub use prompt::PromptContext;
pub use strategy::GenerationChain;

/// Why a generation strategy produced no answer
#[derive(Error, Debug)]
pub enum GenerationError {
    /// No backend configured for this strategy
    #[error("generator disabled")]
    Disabled,

    /// Transport-level failure reaching the backend
    #[error("transport error: {0}")]
    Http(String),

    /// The bounded request ran out of time
    #[error("generation timed out")]
    Timeout,

    /// Quota or rate limit exhausted (429-class)
    #[error("rate limited by backend")]
    RateLimited,

    /// Backend answered with a non-success status
    #[error("backend error: {0}")]
    Api(String),

    /// Backend answered successfully but produced no text
    #[error("backend returned empty response")]
    EmptyResponse,
}

/// A single answer-generation capability. Implementations must not block
/// unboundedly; the shipped HTTP client carries a request timeout.
#[async_trait]
pub trait ReviewGenerator: Send + Sync {
    /// Short label used in logs when the strategy fails
    fn name(&self) -> &str;

    /// Produce prose for the prompt context, or a typed failure
    async fn generate(&self, context: &PromptContext) -> Result<String, GenerationError>;
}
