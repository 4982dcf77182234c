//! Event search service.
//!
//! Resolves a keyword query against the catalog with a layered policy:
//! - `@name` queries filter by author and stop there
//! - otherwise the query is embedded and ranked against the precomputed
//!   catalog embeddings
//! - when that is unavailable or finds nothing above the similarity
//!   threshold, a diacritic-insensitive substring match is used instead
//!
//! Country lookups share the same catalog.

use std::collections::HashMap;

use thiserror::Error;
use tracing::{debug, info, warn};

use super::text_match::fold_diacritics;
use crate::config::SearchSettings;
use crate::domain::{country_code_for_name, CountryCode, Event, EventId};
use crate::embedding::{EmbeddingEngine, VectorStore};
use crate::storage::EventCatalog;

/// Errors that can occur during search operations.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("country not supported: {0}")]
    UnsupportedCountry(String),
}

/// Result type for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Which rule of the resolution policy produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Blank query; nothing was searched.
    Empty,
    /// `@name` author filter.
    Author,
    /// Embedding similarity ranking.
    Semantic,
    /// Diacritic-insensitive substring fallback.
    Text,
}

/// Events returned by a search, most relevant first.
#[derive(Debug, Clone)]
pub struct SearchResults {
    pub events: Vec<Event>,
    pub mode: SearchMode,
}

impl SearchResults {
    fn new(events: Vec<Event>, mode: SearchMode) -> Self {
        Self { events, mode }
    }

    /// Returns the ids of the matched events, in result order.
    pub fn ids(&self) -> Vec<EventId> {
        self.events.iter().map(|e| e.id).collect()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Service resolving keyword and country queries over an event catalog.
///
/// Call [`preload`](Self::preload) once before serving queries; until then
/// the semantic corpus is empty and every keyword query takes the text
/// fallback.
pub struct SearchService<C: EventCatalog> {
    catalog: C,
    engine: EmbeddingEngine,
    corpus: VectorStore,
    settings: SearchSettings,
}

impl<C: EventCatalog> SearchService<C> {
    /// Creates a new search service.
    pub fn new(catalog: C, engine: EmbeddingEngine, settings: SearchSettings) -> Self {
        Self {
            catalog,
            engine,
            corpus: VectorStore::new(),
            settings,
        }
    }

    /// Embeds every catalog event, one request at a time in catalog order.
    ///
    /// Events whose embedding fails are left out of the semantic corpus.
    /// Returns the number of events indexed.
    pub async fn preload(&mut self) -> usize {
        let events = self.events().await;
        info!(events = events.len(), "Loading event embeddings");

        self.corpus.clear();
        for event in &events {
            let text = self.catalog.embeddable_text(event);
            if let Some(embedding) = self.engine.get_embedding(&text).await {
                self.corpus.insert(event.id, embedding);
            }
        }

        info!(indexed = self.corpus.len(), "Semantic search ready");
        self.corpus.len()
    }

    /// Returns the events matching `query`, most relevant first.
    ///
    /// Never fails: embedding problems degrade to the text fallback and a
    /// query with no matches yields an empty list.
    pub async fn search_events_by_keyword(&self, query: &str) -> Vec<Event> {
        self.search(query).await.events
    }

    /// Like [`search_events_by_keyword`](Self::search_events_by_keyword),
    /// also reporting which rule produced the result.
    pub async fn search(&self, query: &str) -> SearchResults {
        let keyword = query.trim().to_lowercase();
        if keyword.is_empty() {
            return SearchResults::new(Vec::new(), SearchMode::Empty);
        }

        let events = self.events().await;

        if let Some(author) = keyword.strip_prefix('@') {
            let matches = events
                .into_iter()
                .filter(|event| event.author_contains(author))
                .collect();
            return SearchResults::new(matches, SearchMode::Author);
        }

        let ranked = self.rank_semantic(&keyword, &events).await;
        if !ranked.is_empty() {
            debug!(results = ranked.len(), "Semantic search matched");
            return SearchResults::new(ranked, SearchMode::Semantic);
        }

        debug!(query = %keyword, "Falling back to text search");
        let needle = fold_diacritics(&keyword);
        let matches = events
            .into_iter()
            .filter(|event| fold_diacritics(&event.searchable_text()).contains(&needle))
            .collect();
        SearchResults::new(matches, SearchMode::Text)
    }

    /// Returns the events in the given country after the configured delay.
    pub async fn get_events_by_country(&self, code: &CountryCode) -> Vec<Event> {
        tokio::time::sleep(self.settings.country_delay()).await;

        match self.catalog.events_in_country(code).await {
            Ok(events) => events,
            Err(e) => {
                warn!(country = %code, error = %e, "Country lookup failed");
                Vec::new()
            }
        }
    }

    /// Resolves a country display name (e.g. "România") and returns its
    /// events.
    pub async fn get_events_by_country_name(&self, name: &str) -> Result<Vec<Event>> {
        let code = country_code_for_name(name)
            .ok_or_else(|| SearchError::UnsupportedCountry(name.trim().to_string()))?;
        Ok(self.get_events_by_country(&code).await)
    }

    /// Returns the embedding engine.
    pub fn engine(&self) -> &EmbeddingEngine {
        &self.engine
    }

    /// Returns the precomputed catalog embeddings.
    pub fn corpus(&self) -> &VectorStore {
        &self.corpus
    }

    /// Returns the underlying catalog.
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Returns the search settings.
    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }

    /// Scores the catalog against the query embedding. Empty when the query
    /// cannot be embedded, the corpus is empty, or nothing clears the
    /// threshold.
    async fn rank_semantic(&self, keyword: &str, events: &[Event]) -> Vec<Event> {
        let Some(query) = self.engine.get_embedding(keyword).await else {
            return Vec::new();
        };
        if self.corpus.is_empty() {
            return Vec::new();
        }

        let by_id: HashMap<EventId, &Event> = events.iter().map(|e| (e.id, e)).collect();

        self.corpus
            .search_with_threshold(&query, self.settings.min_similarity)
            .into_iter()
            .filter_map(|(id, _)| by_id.get(&id).map(|event| (*event).clone()))
            .collect()
    }

    async fn events(&self) -> Vec<Event> {
        match self.catalog.list_events().await {
            Ok(events) => events,
            Err(e) => {
                warn!(error = %e, "Event catalog unavailable");
                Vec::new()
            }
        }
    }
}
