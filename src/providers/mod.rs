//! External service provider implementations.
//!
//! - [`embedding`] - Remote text embedding models (Hugging Face inference)

pub mod embedding;
