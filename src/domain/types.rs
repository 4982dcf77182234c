//! Core identifier types for domain entities.
//!
//! These newtype wrappers provide type safety for entity identifiers,
//! preventing accidental mixing of event ids and country codes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier for a catalog event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub u64);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for EventId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Two-letter country code attached to an event (e.g. `RO`).
///
/// Comparison is exact and case-sensitive; no normalization is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountryCode(pub String);

impl CountryCode {
    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CountryCode {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for CountryCode {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_id_display() {
        assert_eq!(EventId::from(7).to_string(), "7");
    }

    #[test]
    fn country_code_is_case_sensitive() {
        assert_eq!(CountryCode::from("RO"), CountryCode::from("RO".to_string()));
        assert_ne!(CountryCode::from("RO"), CountryCode::from("ro"));
    }

    #[test]
    fn ids_serialize_transparently() {
        assert_eq!(serde_json::to_string(&EventId(3)).unwrap(), "3");
        assert_eq!(
            serde_json::to_string(&CountryCode::from("JP")).unwrap(),
            "\"JP\""
        );
    }
}
