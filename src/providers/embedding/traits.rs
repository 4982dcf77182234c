//! Embedding provider trait and error types.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::embedding::Embedding;

/// Errors that can occur while requesting an embedding.
#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Provider not available: {0}")]
    Unavailable(String),
}

/// Result type for embedding operations.
pub type EmbeddingResult<T> = Result<T, EmbeddingError>;

/// Trait for remote embedding models.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Returns the provider's name (e.g., "huggingface").
    fn name(&self) -> &str;

    /// Returns the model identifier being used.
    fn model(&self) -> &str;

    /// Embeds a single text. Implementations issue exactly one request and
    /// never retry.
    async fn embed(&self, text: &str) -> EmbeddingResult<Embedding>;
}
