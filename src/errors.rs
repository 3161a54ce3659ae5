//! Error types for the phonesage advisor
//!
//! Provides the crate-wide error enum with context propagation. Generation
//! backend failures have their own typed enum in `generation`, because the
//! strategy chain consumes them without surfacing them to callers.

use thiserror::Error;

/// Main error type for the advisor system
#[derive(Error, Debug)]
pub enum AdvisorError {
    /// Catalog seed file could not be read or parsed
    #[error("Catalog error: {0}")]
    CatalogError(String),

    /// HTTP client errors
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Generic errors with context
    #[error("Advisor error: {0}")]
    Generic(String),
}

/// Result type alias for advisor operations
pub type Result<T> = std::result::Result<T, AdvisorError>;

/// Convert anyhow errors to AdvisorError
impl From<anyhow::Error> for AdvisorError {
    fn from(err: anyhow::Error) -> Self {
        AdvisorError::Generic(err.to_string())
    }
}
