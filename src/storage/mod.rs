//! Event catalog storage.
//!
//! The search service reads events through the [`EventCatalog`] trait so the
//! built-in dataset can later be replaced by a database without touching
//! the ranking code.
//!
//! - [`MemoryCatalog`]: fixed in-memory list, loaded once
//! - [`seed_events`]: the events shipped with the app

mod catalog;
mod seed;

pub use catalog::{CatalogError, CatalogResult, EventCatalog, MemoryCatalog};
pub use seed::seed_events;
