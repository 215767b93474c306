//! Canonical and matched item shapes.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::kind::{ItemKind, ResolveKind};

/// Well-known keys for the `extra` attribute map.
///
/// Converters always populate the keys that apply to a record's kind, with
/// an empty string when the upstream value is missing, so callers see a
/// stable shape per kind.
pub mod attr {
    /// Number of tracks on an album (rendered as a plain integer string).
    pub const TRACK_COUNT: &str = "trackCount";
    /// Number of albums credited to an artist.
    pub const ALBUM_COUNT: &str = "albumCount";
    /// Free-form description text (playlists, artists).
    pub const DESCRIPTION: &str = "description";
    /// Date a playlist was added, rendered `YYYY-MM-DD`.
    pub const DATE_ADDED: &str = "dateAdded";
    /// Persistent id of the album a local song belongs to.
    pub const ALBUM_ID: &str = "albumId";
    /// Persistent id of the artist a local album belongs to.
    pub const ARTIST_ID: &str = "artistId";
    /// Container type of a recently-played entry (`album`, `playlist`,
    /// `station` or `unknown`).
    pub const RECENT_TYPE: &str = "type";
}

/// The common shape all backend records are converted to.
///
/// `id` is opaque and scoped to one backend+kind pair; it is never unique
/// across backends. String fields are always present; a missing upstream
/// value converts to an empty string, never to an omitted field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalItem {
    pub id: String,
    pub kind: ItemKind,
    pub title: String,
    /// Secondary line, e.g. the artist name. Empty when the kind has none.
    pub subtitle: String,
    /// Sized, publicly retrievable artwork URL, or empty when unavailable.
    pub artwork_url: String,
    /// Duration in seconds, for kinds that have one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_secs: Option<f64>,
    /// Kind-specific attributes, keyed by the constants in [`attr`].
    pub extra: HashMap<String, String>,
}

impl CanonicalItem {
    /// A reference to this item, as carried by ticks and notifications.
    pub fn item_ref(&self) -> ItemRef {
        ItemRef {
            kind: self.kind,
            id: self.id.clone(),
        }
    }
}

/// A canonical item annotated with same-entity references on the other
/// backend.
///
/// The three reference fields are always present; an empty string means "no
/// match found" or "not applicable to this kind", keeping the output shape
/// stable for callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedItem {
    #[serde(flatten)]
    pub item: CanonicalItem,
    pub local_id: String,
    pub album_id: String,
    pub artist_id: String,
}

impl MatchedItem {
    /// Wrap an item with all cross-references empty.
    pub fn unmatched(item: CanonicalItem) -> Self {
        Self {
            item,
            local_id: String::new(),
            album_id: String::new(),
            artist_id: String::new(),
        }
    }

    /// Whether a counterpart was found on the other backend.
    pub fn is_matched(&self) -> bool {
        !self.local_id.is_empty()
    }
}

/// A lightweight reference to an item on one backend.
///
/// Change notifications and player ticks carry references, not full records;
/// the observer re-resolves them against the owning backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRef {
    pub kind: ItemKind,
    pub id: String,
}

impl ItemRef {
    pub fn new(kind: ItemKind, id: impl Into<String>) -> Self {
        Self { kind, id: id.into() }
    }

    /// The catalog lookup kind for this reference, if it is a kind that can
    /// be a current queue entry. Albums, artists and the rest are containers
    /// and never play directly.
    pub fn resolve_kind(&self) -> Option<ResolveKind> {
        match self.kind {
            ItemKind::Song => Some(ResolveKind::Song),
            ItemKind::Video => Some(ResolveKind::Video),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(id: &str) -> CanonicalItem {
        CanonicalItem {
            id: id.to_string(),
            kind: ItemKind::Song,
            title: "Blue".to_string(),
            subtitle: "Artist A".to_string(),
            artwork_url: String::new(),
            duration_secs: Some(201.0),
            extra: HashMap::new(),
        }
    }

    #[test]
    fn test_unmatched_has_empty_references() {
        let matched = MatchedItem::unmatched(song("s-1"));
        assert!(!matched.is_matched());
        assert_eq!(matched.local_id, "");
        assert_eq!(matched.album_id, "");
        assert_eq!(matched.artist_id, "");
    }

    #[test]
    fn test_matched_item_serializes_flat() {
        let matched = MatchedItem::unmatched(song("s-1"));
        let json = serde_json::to_value(&matched).unwrap();
        // Cross-references sit next to the item fields, not nested under it.
        assert_eq!(json["id"], "s-1");
        assert_eq!(json["localId"], "");
        assert_eq!(json["artworkUrl"], "");
    }

    #[test]
    fn test_resolve_kind_only_for_playable_entries() {
        assert_eq!(
            ItemRef::new(ItemKind::Song, "s-1").resolve_kind(),
            Some(ResolveKind::Song)
        );
        assert_eq!(
            ItemRef::new(ItemKind::Video, "v-1").resolve_kind(),
            Some(ResolveKind::Video)
        );
        assert_eq!(ItemRef::new(ItemKind::Album, "a-1").resolve_kind(), None);
    }
}
