//! Vector storage for semantic search.
//!
//! Stores the precomputed catalog embeddings and ranks them against a query.
//! Entries keep their insertion order so equal scores rank in catalog order.

use std::cmp::Ordering;

use crate::domain::EventId;
use crate::embedding::Embedding;

/// In-memory vector store with similarity search.
#[derive(Debug, Default)]
pub struct VectorStore {
    /// Event embeddings in insertion order.
    entries: Vec<(EventId, Embedding)>,
}

impl VectorStore {
    /// Creates a new empty vector store.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Inserts or updates the embedding for an event.
    ///
    /// Updating keeps the event's original position.
    pub fn insert(&mut self, event_id: EventId, embedding: Embedding) {
        match self.entries.iter_mut().find(|(id, _)| *id == event_id) {
            Some(entry) => entry.1 = embedding,
            None => self.entries.push((event_id, embedding)),
        }
    }

    /// Retrieves the embedding for an event, if it exists.
    pub fn get(&self, event_id: EventId) -> Option<&Embedding> {
        self.entries
            .iter()
            .find(|(id, _)| *id == event_id)
            .map(|(_, embedding)| embedding)
    }

    /// Returns whether an embedding exists for the given event.
    pub fn contains(&self, event_id: EventId) -> bool {
        self.get(event_id).is_some()
    }

    /// Returns the number of stored embeddings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Scores every entry against the query, keeping scores strictly above
    /// `min_similarity`.
    ///
    /// Results are sorted by similarity in descending order; ties keep
    /// insertion order.
    pub fn search_with_threshold(
        &self,
        query: &Embedding,
        min_similarity: f32,
    ) -> Vec<(EventId, f32)> {
        let mut scores: Vec<(EventId, f32)> = self
            .entries
            .iter()
            .map(|(id, emb)| (*id, query.cosine_similarity(emb)))
            .filter(|(_, score)| *score > min_similarity)
            .collect();

        scores.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        scores
    }

    /// Clears all stored embeddings.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns an iterator over all event IDs in insertion order.
    pub fn event_ids(&self) -> impl Iterator<Item = EventId> + '_ {
        self.entries.iter().map(|(id, _)| *id)
    }
}
