//! Country display-name lookup.
//!
//! The explore map reports the tapped country by its display name, in
//! either Romanian or English.

use super::CountryCode;

const COUNTRY_NAMES: &[(&str, &str)] = &[
    ("România", "RO"),
    ("Romania", "RO"),
    ("Brazilia", "BR"),
    ("Brazil", "BR"),
    ("Japonia", "JP"),
    ("Japan", "JP"),
    ("Germania", "DE"),
    ("Germany", "DE"),
    ("Mexic", "MX"),
    ("Mexico", "MX"),
    ("Polonia", "PL"),
    ("Poland", "PL"),
];

/// Resolves a country display name to its code.
///
/// Surrounding whitespace is ignored; the name itself must match exactly.
pub fn country_code_for_name(name: &str) -> Option<CountryCode> {
    let name = name.trim();
    COUNTRY_NAMES
        .iter()
        .find(|(display, _)| *display == name)
        .map(|(_, code)| CountryCode::from(*code))
}
