//! Event domain types.
//!
//! Represents the cultural events and posts shown on the explore map.

use serde::{Deserialize, Serialize};

use super::{CountryCode, EventId};

/// A catalog event or user post.
///
/// Every descriptive field is optional: organized events usually carry a
/// title, while user posts carry an author and a location instead. Events
/// are loaded once and never mutated by search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Stable identifier.
    pub id: EventId,
    /// Event title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Name of the posting user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// City or venue.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Country the event belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<CountryCode>,
    /// Image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Video URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
}

impl Event {
    /// Creates an event with only an id set.
    pub fn new(id: u64) -> Self {
        Self {
            id: EventId(id),
            title: None,
            description: None,
            author: None,
            location: None,
            country: None,
            image: None,
            video: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn country(mut self, country: impl Into<CountryCode>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn image(mut self, url: impl Into<String>) -> Self {
        self.image = Some(url.into());
        self
    }

    pub fn video(mut self, url: impl Into<String>) -> Self {
        self.video = Some(url.into());
        self
    }

    /// Returns whether the event was posted by someone whose name contains
    /// `needle`. The needle is expected to be lower-cased already.
    pub fn author_contains(&self, needle: &str) -> bool {
        self.author
            .as_ref()
            .map(|a| a.to_lowercase().contains(needle))
            .unwrap_or(false)
    }

    /// Returns whether the event belongs to the given country.
    pub fn is_in_country(&self, code: &CountryCode) -> bool {
        self.country.as_ref() == Some(code)
    }

    /// Joins title, description, location, author and country with single
    /// spaces. Missing fields contribute an empty string, so the result may
    /// contain runs of spaces.
    pub fn searchable_text(&self) -> String {
        [
            self.title.as_deref(),
            self.description.as_deref(),
            self.location.as_deref(),
            self.author.as_deref(),
            self.country.as_ref().map(CountryCode::as_str),
        ]
        .iter()
        .map(|field| field.unwrap_or(""))
        .collect::<Vec<_>>()
        .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn searchable_text_keeps_field_order() {
        let event = Event::new(1)
            .title("Hora Unirii")
            .description("Eveniment cultural")
            .location("Iași")
            .author("Ana")
            .country("RO");

        assert_eq!(
            event.searchable_text(),
            "Hora Unirii Eveniment cultural Iași Ana RO"
        );
    }

    #[test]
    fn searchable_text_blanks_missing_fields() {
        let event = Event::new(2).description("Samba").country("BR");
        assert_eq!(event.searchable_text(), " Samba   BR");
    }

    #[test]
    fn author_contains_requires_author() {
        let with_author = Event::new(1).author("Ana Ionescu");
        let without = Event::new(2).title("Ana's festival");

        assert!(with_author.author_contains("ana"));
        assert!(with_author.author_contains("ionescu"));
        assert!(!without.author_contains("ana"));
    }

    #[test]
    fn is_in_country_exact_match() {
        let event = Event::new(1).country("RO");
        assert!(event.is_in_country(&CountryCode::from("RO")));
        assert!(!event.is_in_country(&CountryCode::from("ro")));
        assert!(!Event::new(2).is_in_country(&CountryCode::from("RO")));
    }

    #[test]
    fn deserializes_source_shape() {
        let json = r#"{"id": 4, "title": "Carnaval Rio", "country": "BR", "video": "https://example.com/v.mp4"}"#;
        let event: Event = serde_json::from_str(json).unwrap();

        assert_eq!(event.id, EventId(4));
        assert_eq!(event.country, Some(CountryCode::from("BR")));
        assert!(event.image.is_none());
        assert_eq!(event.video.as_deref(), Some("https://example.com/v.mp4"));
    }
}
