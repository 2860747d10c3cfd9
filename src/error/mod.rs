//! Error types for palaver.

use thiserror::Error;

/// Primary error type for all palaver operations.
#[derive(Error, Debug)]
pub enum PalaverError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("GEMINI_API_KEY is not set. Configure it before running the application.")]
    MissingApiKey,

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Rate limited: retry after {retry_after_ms:?}ms")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PalaverError {
    /// Create an API error from a status code and message body.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, PalaverError>;
