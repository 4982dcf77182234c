//! Remote embedding provider implementations.
//!
//! This module provides a unified interface for turning text into vectors
//! with a hosted model.
//!
//! # Supported Providers
//!
//! - **Hugging Face**: feature-extraction models behind the inference router
//!
//! # Example
//!
//! ```rust,no_run
//! use folkline::embedding::ModelType;
//! use folkline::providers::embedding::{EmbeddingProvider, HuggingFaceProvider};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = HuggingFaceProvider::new(Some("hf_...".to_string()), ModelType::AllMiniLmL6V2);
//!
//! let embedding = provider.embed("Hora Unirii").await?;
//! println!("dimension: {}", embedding.dimension());
//! # Ok(())
//! # }
//! ```

mod huggingface;
mod traits;

#[cfg(test)]
pub(crate) mod test_support;

pub use huggingface::HuggingFaceProvider;
pub use traits::{EmbeddingError, EmbeddingProvider, EmbeddingResult};
