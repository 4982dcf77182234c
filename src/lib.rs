//! folkline - Event search for the Folkline app
//!
//! This crate provides the search core behind the explore screen: a fixed
//! event catalog, remote text embeddings with a process-wide cache, cosine
//! ranking, and a diacritic-insensitive text fallback.
//!
//! # Example
//!
//! ```rust,no_run
//! use folkline::config::Settings;
//! use folkline::embedding::EmbeddingEngine;
//! use folkline::providers::embedding::HuggingFaceProvider;
//! use folkline::services::SearchService;
//! use folkline::storage::MemoryCatalog;
//!
//! # async fn example() {
//! let settings = Settings::default();
//! let provider = HuggingFaceProvider::from_settings(&settings.embedding);
//! let engine = EmbeddingEngine::new(settings.embedding.engine_config(), provider);
//!
//! let mut service = SearchService::new(MemoryCatalog::seeded(), engine, settings.search);
//! service.preload().await;
//!
//! for event in service.search_events_by_keyword("dans popular").await {
//!     println!("{:?}", event.title);
//! }
//! # }
//! ```

pub mod config;
pub mod domain;
pub mod embedding;
pub mod providers;
pub mod services;
pub mod storage;

pub use services::SearchService;
