//! Search settings and configuration types.
//!
//! Settings are persisted to `settings.json` in the platform config directory
//! (e.g. `~/.config/folkline/` on Linux) and loaded at startup. The embedding
//! API token may instead come from the `FOLKLINE_HF_TOKEN` environment
//! variable, which takes precedence over the stored value.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::embedding::{EmbeddingConfig, ModelType};

/// Environment variable overriding [`EmbeddingSettings::api_token`].
pub const TOKEN_ENV_VAR: &str = "FOLKLINE_HF_TOKEN";

/// Errors that can occur while loading or saving settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no config directory available on this platform")]
    NoConfigDir,
}

/// Result type for settings operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Top-level settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Remote embedding model configuration.
    pub embedding: EmbeddingSettings,
    /// Ranking and lookup configuration.
    pub search: SearchSettings,
}

impl Settings {
    /// Returns the default settings file location.
    pub fn default_path() -> Result<PathBuf> {
        ProjectDirs::from("app", "Folkline", "folkline")
            .map(|dirs| dirs.config_dir().join("settings.json"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Loads settings from `path`, falling back to defaults when the file
    /// does not exist. Missing fields take their default values.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads settings from the default location.
    pub fn load_default() -> Result<Self> {
        Self::load(&Self::default_path()?)
    }

    /// Writes settings to `path` as pretty-printed JSON, creating parent
    /// directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let json = serde_json::to_string_pretty(self).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        fs::write(path, json).map_err(io_err)
    }

    /// Applies the `FOLKLINE_HF_TOKEN` environment override.
    pub fn apply_env_overrides(&mut self) {
        self.apply_token_override(std::env::var(TOKEN_ENV_VAR).ok());
    }

    /// Replaces the stored API token when `token` is set and non-blank.
    pub fn apply_token_override(&mut self, token: Option<String>) {
        if let Some(token) = token.filter(|t| !t.trim().is_empty()) {
            self.embedding.api_token = Some(token);
        }
    }
}

/// Remote embedding model configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingSettings {
    /// Whether semantic ranking is attempted at all.
    pub enabled: bool,
    /// Model used for both catalog and query embeddings.
    pub model: ModelType,
    /// Custom inference endpoint (defaults to the Hugging Face router).
    pub base_url: Option<String>,
    /// Bearer token for the inference endpoint.
    pub api_token: Option<String>,
    /// Upper bound on a single embedding request, in milliseconds.
    pub timeout_ms: u64,
}

impl Default for EmbeddingSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            model: ModelType::default(),
            base_url: None,
            api_token: None,
            timeout_ms: 5_000,
        }
    }
}

impl EmbeddingSettings {
    /// Returns the request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Builds the engine configuration.
    pub fn engine_config(&self) -> EmbeddingConfig {
        EmbeddingConfig {
            request_timeout: self.timeout(),
        }
    }
}

/// Ranking and lookup configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Semantic matches must score strictly above this cosine similarity.
    pub min_similarity: f32,
    /// Artificial delay before country lookups return, in milliseconds.
    pub country_delay_ms: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            min_similarity: 0.25,
            country_delay_ms: 600,
        }
    }
}

impl SearchSettings {
    /// Returns the country lookup delay.
    pub fn country_delay(&self) -> Duration {
        Duration::from_millis(self.country_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_settings_are_valid() {
        let settings = Settings::default();
        assert!(settings.embedding.enabled);
        assert_eq!(settings.embedding.model, ModelType::AllMiniLmL6V2);
        assert_eq!(settings.embedding.timeout(), Duration::from_secs(5));
        assert_eq!(settings.search.min_similarity, 0.25);
        assert_eq!(settings.search.country_delay(), Duration::from_millis(600));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::load(&dir.path().join("absent.json")).unwrap();
        assert!(settings.embedding.api_token.is_none());
        assert_eq!(settings.search.country_delay_ms, 600);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"search": {"min_similarity": 0.4}}"#).unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.search.min_similarity, 0.4);
        assert_eq!(settings.search.country_delay_ms, 600);
        assert!(settings.embedding.enabled);
    }

    #[test]
    fn invalid_file_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "not json").unwrap();

        let result = Settings::load(&path);
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn settings_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let mut settings = Settings::default();
        settings.embedding.model = ModelType::MultilingualMiniLm;
        settings.embedding.api_token = Some("hf_stored".to_string());
        settings.search.country_delay_ms = 0;
        settings.save(&path).unwrap();

        let loaded = Settings::load(&path).unwrap();
        assert_eq!(loaded.embedding.model, ModelType::MultilingualMiniLm);
        assert_eq!(loaded.embedding.api_token.as_deref(), Some("hf_stored"));
        assert_eq!(loaded.search.country_delay_ms, 0);
    }

    #[test]
    fn token_override() {
        let mut settings = Settings::default();
        settings.embedding.api_token = Some("hf_stored".to_string());

        settings.apply_token_override(None);
        assert_eq!(settings.embedding.api_token.as_deref(), Some("hf_stored"));

        settings.apply_token_override(Some("   ".to_string()));
        assert_eq!(settings.embedding.api_token.as_deref(), Some("hf_stored"));

        settings.apply_token_override(Some("hf_env".to_string()));
        assert_eq!(settings.embedding.api_token.as_deref(), Some("hf_env"));
    }

    #[test]
    fn engine_config_from_settings() {
        let settings = EmbeddingSettings {
            timeout_ms: 1_500,
            ..EmbeddingSettings::default()
        };
        assert_eq!(
            settings.engine_config().request_timeout,
            Duration::from_millis(1_500)
        );
    }
}
