//! HTTP client for an Ollama-compatible generation backend
//!
//! Non-streaming POST to `/api/generate` with a hard request timeout. Every
//! failure maps to a typed [`GenerationError`] so the strategy chain can
//! decide what to do next; nothing here panics or retries.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

use crate::generation::{GenerationError, PromptContext, ReviewGenerator};

/// Default bound on a single generation request
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Generator backed by a local Ollama-compatible HTTP endpoint
pub struct OllamaGenerator {
    client: Client,
    base_url: String,
    model: String,
    label: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

impl OllamaGenerator {
    /// Create a generator against `base_url` (e.g. http://127.0.0.1:11434)
    /// using the given model tag.
    pub fn new(base_url: &str, model: &str, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            label: format!("ollama:{model}"),
        }
    }

    fn map_request_error(err: reqwest::Error) -> GenerationError {
        if err.is_timeout() {
            GenerationError::Timeout
        } else {
            GenerationError::Http(err.to_string())
        }
    }
}

#[async_trait]
impl ReviewGenerator for OllamaGenerator {
    fn name(&self) -> &str {
        &self.label
    }

    async fn generate(&self, context: &PromptContext) -> Result<String, GenerationError> {
        let url = format!("{}/api/generate", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&json!({
                "model": self.model,
                "prompt": context.render_prompt(),
                "stream": false,
            }))
            .send()
            .await
            .map_err(Self::map_request_error)?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(GenerationError::RateLimited);
        }
        if !status.is_success() {
            return Err(GenerationError::Api(status.to_string()));
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::Http(e.to_string()))?;

        let text = parsed.response.trim().to_string();
        if text.is_empty() {
            return Err(GenerationError::EmptyResponse);
        }

        Ok(text)
    }
}
