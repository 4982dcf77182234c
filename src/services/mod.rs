//! Business services layer.
//!
//! Services sit between the callers (UI handlers, the CLI) and the
//! infrastructure layer:
//!
//! ```text
//! Callers (search box, map taps, CLI)
//!          |
//!          v
//!    Services Layer  <-- You are here
//!          |
//!          v
//! Infrastructure (Embedding providers, Event catalog)
//! ```
//!
//! # Services Overview
//!
//! - [`SearchService`]: Resolves keyword queries (author shortcut, semantic
//!   ranking, diacritic-insensitive fallback) and country lookups

mod search_service;
mod text_match;

pub use search_service::{SearchError, SearchMode, SearchResults, SearchService};
pub use text_match::{contains_folded, fold_diacritics};
