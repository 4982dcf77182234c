//! Hugging Face inference provider.
//!
//! Calls the feature-extraction pipeline of a sentence-transformers model
//! through the Hugging Face inference router.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};

use super::traits::{EmbeddingError, EmbeddingProvider, EmbeddingResult};
use crate::config::EmbeddingSettings;
use crate::embedding::{Embedding, ModelType, HF_INFERENCE_URL};

/// Feature-extraction request body.
#[derive(Debug, Serialize)]
struct FeatureExtractionRequest<'a> {
    inputs: &'a str,
}

/// Feature-extraction response body.
///
/// Sentence-transformers models answer with the pooled vector, but some
/// deployments wrap it in an outer batch array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FeatureExtractionResponse {
    Flat(Vec<f32>),
    Batched(Vec<Vec<f32>>),
}

impl FeatureExtractionResponse {
    fn into_embedding(self) -> EmbeddingResult<Embedding> {
        let values = match self {
            Self::Flat(values) => values,
            Self::Batched(batch) => batch.into_iter().next().unwrap_or_default(),
        };

        if values.is_empty() {
            return Err(EmbeddingError::InvalidResponse(
                "empty embedding in response".to_string(),
            ));
        }

        Ok(Embedding::new(values))
    }
}

/// Hugging Face API error body.
#[derive(Debug, Deserialize)]
struct HfError {
    error: String,
}

/// Provider for Hugging Face hosted embedding models.
pub struct HuggingFaceProvider {
    client: reqwest::Client,
    url: String,
    api_key: Option<String>,
    model: ModelType,
}

impl HuggingFaceProvider {
    /// Creates a provider for the public inference router.
    pub fn new(api_key: Option<String>, model: ModelType) -> Self {
        Self::with_base_url(HF_INFERENCE_URL, api_key, model)
    }

    /// Creates a provider for a custom inference endpoint.
    ///
    /// The model id is appended to `base_url` as a path.
    pub fn with_base_url(base_url: &str, api_key: Option<String>, model: ModelType) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: model.inference_url(base_url),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            model,
        }
    }

    /// Creates a provider from the embedding settings.
    pub fn from_settings(settings: &EmbeddingSettings) -> Self {
        let base_url = settings.base_url.as_deref().unwrap_or(HF_INFERENCE_URL);
        Self::with_base_url(base_url, settings.api_token.clone(), settings.model)
    }

    /// Overrides the HTTP client (useful for proxies).
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Returns the full model URL requests are sent to.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns whether requests carry a bearer token.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn build_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(ref api_key) = self.api_key {
            if let Ok(value) = HeaderValue::from_str(&format!("Bearer {}", api_key)) {
                headers.insert(AUTHORIZATION, value);
            }
        }

        headers
    }

    async fn handle_error_response(&self, response: reqwest::Response) -> EmbeddingError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();

        let message = match serde_json::from_str::<HfError>(&body) {
            Ok(error) => error.error,
            Err(_) if body.trim().is_empty() => format!("HTTP {}", status),
            Err(_) => body,
        };

        EmbeddingError::ApiError { status, message }
    }
}

#[async_trait]
impl EmbeddingProvider for HuggingFaceProvider {
    fn name(&self) -> &str {
        "huggingface"
    }

    fn model(&self) -> &str {
        self.model.hf_model_id()
    }

    async fn embed(&self, text: &str) -> EmbeddingResult<Embedding> {
        let response = self
            .client
            .post(&self.url)
            .headers(self.build_headers())
            .json(&FeatureExtractionRequest { inputs: text })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(self.handle_error_response(response).await);
        }

        let body: FeatureExtractionResponse = response.json().await.map_err(|e| {
            EmbeddingError::InvalidResponse(format!("Failed to parse response: {}", e))
        })?;

        body.into_embedding()
    }
}
