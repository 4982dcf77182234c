//! Embedding engine for semantic search.
//!
//! Resolves text to embeddings through a remote [`EmbeddingProvider`] and
//! memoizes every successful result for the lifetime of the process.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use tracing::{debug, warn};

use crate::providers::embedding::{EmbeddingError, EmbeddingProvider};

/// A vector embedding representing text semantics.
///
/// The embedding dimensionality depends on the model used
/// (384 for the MiniLM family).
#[derive(Debug, Clone, PartialEq)]
pub struct Embedding {
    /// The embedding vector.
    pub values: Vec<f32>,
}

impl Embedding {
    /// Creates a new embedding from a vector of values.
    pub fn new(values: Vec<f32>) -> Self {
        Self { values }
    }

    /// Returns the dimensionality of this embedding.
    pub fn dimension(&self) -> usize {
        self.values.len()
    }

    /// Returns whether the embedding has no components.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Computes cosine similarity with another embedding.
    ///
    /// Returns a value between -1.0 and 1.0, where 1.0 means identical
    /// direction. Mismatched dimensions, zero-norm vectors and any other
    /// non-finite outcome yield 0.0.
    pub fn cosine_similarity(&self, other: &Embedding) -> f32 {
        if self.values.len() != other.values.len() {
            return 0.0;
        }

        let dot: f32 = self
            .values
            .iter()
            .zip(other.values.iter())
            .map(|(a, b)| a * b)
            .sum();

        let norm_a: f32 = self.values.iter().map(|x| x * x).sum::<f32>().sqrt();
        let norm_b: f32 = other.values.iter().map(|x| x * x).sum::<f32>().sqrt();

        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }

        let similarity = dot / (norm_a * norm_b);
        if similarity.is_finite() {
            similarity
        } else {
            0.0
        }
    }
}

impl From<Vec<f32>> for Embedding {
    fn from(values: Vec<f32>) -> Self {
        Self::new(values)
    }
}

/// Cosine similarity over optional embeddings.
///
/// A missing side counts as "no similarity" and yields 0.0.
pub fn cosine_similarity(a: Option<&Embedding>, b: Option<&Embedding>) -> f32 {
    match (a, b) {
        (Some(a), Some(b)) => a.cosine_similarity(b),
        _ => 0.0,
    }
}

/// Configuration for the embedding engine.
#[derive(Debug, Clone)]
pub struct EmbeddingConfig {
    /// Upper bound on a single remote embedding call.
    pub request_timeout: Duration,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(5),
        }
    }
}

/// Engine resolving text to embeddings.
///
/// Text is trimmed before lookup; the trimmed string is the cache key, so
/// lookups are exact and case-sensitive. The cache is unbounded and never
/// evicted. Failures are logged and reported as `None`, never retried.
pub struct EmbeddingEngine {
    config: EmbeddingConfig,
    provider: Option<Box<dyn EmbeddingProvider>>,
    cache: RwLock<HashMap<String, Embedding>>,
}

impl EmbeddingEngine {
    /// Creates a new embedding engine with the given configuration.
    pub fn new(config: EmbeddingConfig, provider: impl EmbeddingProvider + 'static) -> Self {
        Self {
            config,
            provider: Some(Box::new(provider)),
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Creates an embedding engine with default configuration.
    pub fn with_defaults(provider: impl EmbeddingProvider + 'static) -> Self {
        Self::new(EmbeddingConfig::default(), provider)
    }

    /// Creates an engine with no remote model.
    ///
    /// Only cached embeddings are ever returned, so search always takes the
    /// text fallback.
    pub fn offline() -> Self {
        Self {
            config: EmbeddingConfig::default(),
            provider: None,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the engine configuration.
    pub fn config(&self) -> &EmbeddingConfig {
        &self.config
    }

    /// Returns whether a remote model is configured.
    pub fn is_online(&self) -> bool {
        self.provider.is_some()
    }

    /// Returns the embedding for `text`, or `None` if it cannot be produced.
    ///
    /// Blank text returns `None` without touching the cache or the network.
    /// A cache miss issues exactly one remote call bounded by
    /// [`EmbeddingConfig::request_timeout`].
    pub async fn get_embedding(&self, text: &str) -> Option<Embedding> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        if let Some(hit) = self.cached(text) {
            debug!(text, "Embedding cache hit");
            return Some(hit);
        }

        let provider = self.provider.as_ref()?;
        debug!(text, provider = provider.name(), "Requesting embedding");

        let result = match tokio::time::timeout(self.config.request_timeout, provider.embed(text))
            .await
        {
            Ok(result) => result,
            Err(_) => Err(EmbeddingError::Timeout(self.config.request_timeout)),
        };

        match result {
            Ok(embedding) if embedding.is_empty() => {
                warn!(text, "Embedding provider returned an empty vector");
                None
            }
            Ok(embedding) => {
                debug!(text, dimension = embedding.dimension(), "Embedding ok");
                self.cache_write()
                    .insert(text.to_string(), embedding.clone());
                Some(embedding)
            }
            Err(e) => {
                warn!(text, error = %e, "Embedding unavailable");
                None
            }
        }
    }

    /// Returns whether an embedding for the trimmed text is cached.
    pub fn is_cached(&self, text: &str) -> bool {
        self.cache_read().contains_key(text.trim())
    }

    /// Returns the number of cached embeddings.
    pub fn cache_len(&self) -> usize {
        self.cache_read().len()
    }

    /// Drops every cached embedding.
    pub fn clear_cache(&self) {
        self.cache_write().clear();
    }

    fn cached(&self, text: &str) -> Option<Embedding> {
        self.cache_read().get(text).cloned()
    }

    // Entries are content-addressed, so a poisoned lock still holds valid data.
    fn cache_read(&self) -> RwLockReadGuard<'_, HashMap<String, Embedding>> {
        self.cache.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn cache_write(&self) -> RwLockWriteGuard<'_, HashMap<String, Embedding>> {
        self.cache.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for EmbeddingEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbeddingEngine")
            .field("config", &self.config)
            .field("provider", &self.provider.as_ref().map(|p| p.name()))
            .field("cached", &self.cache_len())
            .finish()
    }
}
