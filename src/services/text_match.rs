//! Diacritic-insensitive text matching.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Lower-cases `text`, decomposes it (NFD) and drops combining marks, so
/// `"București"` folds to `"bucuresti"`.
pub fn fold_diacritics(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Returns whether `haystack` contains `needle`, ignoring case and
/// diacritics on both sides.
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    fold_diacritics(haystack).contains(&fold_diacritics(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_romanian() {
        assert_eq!(fold_diacritics("București"), "bucuresti");
        assert_eq!(fold_diacritics("Mărțișor"), "martisor");
        assert_eq!(fold_diacritics("ÎNȚELEGERE"), "intelegere");
    }

    #[test]
    fn folds_beyond_romanian() {
        assert_eq!(fold_diacritics("Día de los Muertos"), "dia de los muertos");
        assert_eq!(fold_diacritics("Varșovia"), "varsovia");
        assert_eq!(fold_diacritics("Ñandú"), "nandu");
    }

    #[test]
    fn leaves_plain_text_alone() {
        assert_eq!(fold_diacritics("kimono traditional"), "kimono traditional");
    }

    #[test]
    fn contains_is_symmetric_in_accents() {
        assert!(contains_folded("Eveniment cultural în București", "bucuresti"));
        assert!(contains_folded("Eveniment cultural in Bucuresti", "BUCUREȘTI"));
        assert!(!contains_folded("Samba în favela", "tango"));
    }

    #[test]
    fn empty_needle_matches() {
        assert!(contains_folded("anything", ""));
    }
}
