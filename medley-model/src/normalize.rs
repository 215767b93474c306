//! Identity normalization for cross-backend matching.
//!
//! The catalog and the local index disagree on whitespace and casing for the
//! same titles, so match identity is computed over a normalized form. The
//! key is deliberately coarse, with no edit distance and no duration check:
//! two records match iff their normalized (title, subtitle) pairs are equal.

use serde::{Deserialize, Serialize};

use crate::item::CanonicalItem;

/// Trim leading/trailing whitespace (including newlines) and case-fold.
///
/// Never fails; empty input yields empty output.
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// The identity under which two records from different backends are
/// considered the same real-world entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchKey {
    title: String,
    subtitle: String,
}

impl MatchKey {
    /// Build a key from raw (un-normalized) title and subtitle.
    pub fn new(title: &str, subtitle: &str) -> Self {
        Self {
            title: normalize(title),
            subtitle: normalize(subtitle),
        }
    }

    /// The key of a canonical item.
    pub fn of(item: &CanonicalItem) -> Self {
        Self::new(&item.title, &item.subtitle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_trims_and_folds() {
        assert_eq!(normalize("  Blue \n"), "blue");
        assert_eq!(normalize("ARTIST a"), "artist a");
        assert_eq!(normalize("\tBlue\tTrain "), "blue\ttrain");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n "), "");
    }

    #[test]
    fn test_keys_equal_across_casing_and_whitespace() {
        assert_eq!(MatchKey::new("Blue", "Artist A"), MatchKey::new(" blue ", "artist a"));
    }

    #[test]
    fn test_keys_differ_on_subtitle() {
        assert_ne!(MatchKey::new("Blue", "Artist A"), MatchKey::new("Blue", "Artist B"));
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(s in ".*") {
            let once = normalize(&s);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn key_ignores_surrounding_whitespace(title in "[a-zA-Z ]{0,24}", subtitle in "[a-zA-Z ]{0,24}") {
            let padded_title = format!("  {}\n", title);
            let padded_subtitle = format!("\t{} ", subtitle);
            prop_assert_eq!(
                MatchKey::new(&padded_title, &padded_subtitle),
                MatchKey::new(&title, &subtitle)
            );
        }
    }
}
