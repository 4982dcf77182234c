//! Deterministic providers for unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use super::{EmbeddingError, EmbeddingProvider, EmbeddingResult};
use crate::embedding::Embedding;

/// Shared count of `embed` calls, readable after the provider moved.
#[derive(Debug, Clone, Default)]
pub struct CallCounter(Arc<AtomicUsize>);

impl CallCounter {
    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    fn bump(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

/// Returns fixed vectors for known texts and fails for anything else.
#[derive(Default)]
pub struct FakeProvider {
    fixtures: HashMap<String, Vec<f32>>,
    calls: CallCounter,
}

impl FakeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, text: &str, values: Vec<f32>) -> Self {
        self.fixtures.insert(text.to_string(), values);
        self
    }

    pub fn calls(&self) -> CallCounter {
        self.calls.clone()
    }
}

#[async_trait]
impl EmbeddingProvider for FakeProvider {
    fn name(&self) -> &str {
        "fake"
    }

    fn model(&self) -> &str {
        "fixtures"
    }

    async fn embed(&self, text: &str) -> EmbeddingResult<Embedding> {
        self.calls.bump();
        self.fixtures
            .get(text)
            .cloned()
            .map(Embedding::new)
            .ok_or_else(|| EmbeddingError::InvalidResponse(format!("no fixture for {text:?}")))
    }
}

/// Embeds text as a bag of keywords: one dimension per keyword, set to 1.0
/// when the lower-cased text contains it.
pub struct KeywordProvider {
    keywords: Vec<String>,
    calls: CallCounter,
}

impl KeywordProvider {
    pub fn new(keywords: &[&str]) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            calls: CallCounter::default(),
        }
    }

    pub fn calls(&self) -> CallCounter {
        self.calls.clone()
    }
}

#[async_trait]
impl EmbeddingProvider for KeywordProvider {
    fn name(&self) -> &str {
        "keyword"
    }

    fn model(&self) -> &str {
        "bag-of-keywords"
    }

    async fn embed(&self, text: &str) -> EmbeddingResult<Embedding> {
        self.calls.bump();
        let text = text.to_lowercase();
        Ok(Embedding::new(
            self.keywords
                .iter()
                .map(|k| if text.contains(k.as_str()) { 1.0 } else { 0.0 })
                .collect(),
        ))
    }
}

/// Fails every request.
#[derive(Default)]
pub struct FailingProvider {
    calls: CallCounter,
}

impl FailingProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> CallCounter {
        self.calls.clone()
    }
}

#[async_trait]
impl EmbeddingProvider for FailingProvider {
    fn name(&self) -> &str {
        "failing"
    }

    fn model(&self) -> &str {
        "none"
    }

    async fn embed(&self, _text: &str) -> EmbeddingResult<Embedding> {
        self.calls.bump();
        Err(EmbeddingError::Unavailable("offline".to_string()))
    }
}

/// Sleeps before answering with a unit vector.
pub struct SlowProvider {
    delay: Duration,
}

impl SlowProvider {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl EmbeddingProvider for SlowProvider {
    fn name(&self) -> &str {
        "slow"
    }

    fn model(&self) -> &str {
        "sleepy"
    }

    async fn embed(&self, _text: &str) -> EmbeddingResult<Embedding> {
        tokio::time::sleep(self.delay).await;
        Ok(Embedding::new(vec![1.0]))
    }
}
