//! Vector embeddings and semantic ranking.
//!
//! This module turns text into embeddings through a remote model and ranks
//! catalog events by cosine similarity to a query.
//!
//! # Architecture
//!
//! - [`EmbeddingEngine`] - Resolves text to embeddings with a per-process cache
//! - [`VectorStore`] - Holds the precomputed catalog embeddings and ranks them
//! - [`Embedding`] - A vector representation of text semantics
//!
//! # Example
//!
//! ```ignore
//! use folkline::embedding::{EmbeddingEngine, VectorStore};
//!
//! let engine = EmbeddingEngine::with_defaults(provider);
//! let mut store = VectorStore::new();
//!
//! if let Some(embedding) = engine.get_embedding("Hora Unirii").await {
//!     store.insert(event.id, embedding);
//! }
//!
//! let query = engine.get_embedding("dans popular").await;
//! let ranked = store.search_with_threshold(&query.unwrap(), 0.25);
//! ```

mod engine;
mod models;
mod vector_store;

pub use engine::{cosine_similarity, Embedding, EmbeddingConfig, EmbeddingEngine};
pub use models::ModelType;
pub(crate) use models::HF_INFERENCE_URL;
pub use vector_store::VectorStore;
