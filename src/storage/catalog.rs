//! Catalog abstraction over the searchable event set.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{CountryCode, Event};

/// Errors that can occur while reading the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The backing store could not be read.
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Read-only source of searchable events.
#[async_trait]
pub trait EventCatalog: Send + Sync {
    /// Lists every event, in catalog order.
    async fn list_events(&self) -> CatalogResult<Vec<Event>>;

    /// Returns the text embedded for an event during preload.
    fn embeddable_text(&self, event: &Event) -> String {
        event.searchable_text().trim().to_string()
    }

    /// Lists events whose country matches `code` exactly.
    async fn events_in_country(&self, code: &CountryCode) -> CatalogResult<Vec<Event>> {
        Ok(self
            .list_events()
            .await?
            .into_iter()
            .filter(|event| event.is_in_country(code))
            .collect())
    }
}

/// In-memory catalog over a fixed list of events.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    events: Vec<Event>,
}

impl MemoryCatalog {
    /// Creates a catalog over the given events, preserving their order.
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    /// Creates a catalog over the built-in Folkline events.
    pub fn seeded() -> Self {
        Self::new(super::seed_events())
    }

    /// Returns the number of events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Returns the events as a slice.
    pub fn events(&self) -> &[Event] {
        &self.events
    }
}

#[async_trait]
impl EventCatalog for MemoryCatalog {
    async fn list_events(&self) -> CatalogResult<Vec<Event>> {
        Ok(self.events.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn list_preserves_order() {
        let catalog = MemoryCatalog::new(vec![Event::new(3), Event::new(1), Event::new(2)]);
        let ids: Vec<u64> = catalog
            .list_events()
            .await
            .unwrap()
            .iter()
            .map(|e| e.id.0)
            .collect();

        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[tokio::test]
    async fn events_in_country_filters_exactly() {
        let catalog = MemoryCatalog::new(vec![
            Event::new(1).country("RO"),
            Event::new(2).country("BR"),
            Event::new(3),
            Event::new(4).country("RO"),
        ]);

        let ro = catalog.events_in_country(&CountryCode::from("RO")).await.unwrap();
        assert_eq!(ro.len(), 2);
        assert!(ro.iter().all(|e| e.country == Some(CountryCode::from("RO"))));

        let lower = catalog.events_in_country(&CountryCode::from("ro")).await.unwrap();
        assert!(lower.is_empty());
    }

    #[test]
    fn embeddable_text_is_trimmed() {
        let catalog = MemoryCatalog::default();
        let event = Event::new(1).description("Samba în favela");
        assert_eq!(catalog.embeddable_text(&event), "Samba în favela");
    }

    #[test]
    fn seeded_catalog() {
        let catalog = MemoryCatalog::seeded();
        assert_eq!(catalog.len(), 10);
        assert!(!catalog.is_empty());
    }
}
