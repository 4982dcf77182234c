//! Embedding model definitions.
//!
//! Models are served by the Hugging Face inference router; this module only
//! knows their identifiers and output sizes.

use serde::{Deserialize, Serialize};

/// Base URL of the Hugging Face inference router.
pub(crate) const HF_INFERENCE_URL: &str = "https://router.huggingface.co/hf-inference/models";

/// Available embedding model types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelType {
    /// All-MiniLM-L6-v2 - balanced speed and quality.
    #[default]
    AllMiniLmL6V2,
    /// Paraphrase MiniLM - fast, small, good for general text.
    MiniLm,
    /// Multilingual MiniLM - handles Romanian and other non-English text.
    MultilingualMiniLm,
    /// BGE-Small - optimized for retrieval tasks.
    BgeSmall,
}

impl ModelType {
    /// Returns the Hugging Face model ID.
    pub fn hf_model_id(&self) -> &'static str {
        match self {
            Self::AllMiniLmL6V2 => "sentence-transformers/all-MiniLM-L6-v2",
            Self::MiniLm => "sentence-transformers/paraphrase-MiniLM-L6-v2",
            Self::MultilingualMiniLm => {
                "sentence-transformers/paraphrase-multilingual-MiniLM-L12-v2"
            }
            Self::BgeSmall => "BAAI/bge-small-en-v1.5",
        }
    }

    /// Returns the expected embedding dimension.
    pub fn embedding_dim(&self) -> usize {
        384
    }

    /// Returns the feature-extraction URL for this model under `base_url`.
    pub fn inference_url(&self, base_url: &str) -> String {
        format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            self.hf_model_id()
        )
    }
}
