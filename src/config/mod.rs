//! Configuration and settings management.
//!
//! This module provides search settings types and persistence.
//! Settings are stored in the user's config directory as JSON.

mod settings;

pub use settings::{ConfigError, EmbeddingSettings, SearchSettings, Settings, TOKEN_ENV_VAR};
