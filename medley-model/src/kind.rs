//! Backend and record-kind enumerations.

use serde::{Deserialize, Serialize};

/// The two playback backends the engine controls.
///
/// Identifiers are never comparable across backends: the catalog id and the
/// local persistent id for the "same" song are unrelated strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Backend {
    /// The network-hosted, centrally curated catalog.
    Catalog,
    /// The device-resident, user-owned media index.
    Local,
}

/// Kinds of canonical records that can appear in library and search views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemKind {
    Song,
    Album,
    Artist,
    Playlist,
    Genre,
    Video,
    /// An entry from the recently-played rail (an album, playlist or station
    /// container, carried as an opaque item).
    RecentItem,
}

/// Kinds a queue request may point at.
///
/// Stations are queueable but never browsable, so they appear here and in
/// [`ResolveKind`] but not in [`ItemKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QueueKind {
    Song,
    Album,
    Playlist,
    Station,
}

/// Record kinds addressable through the catalog's by-id lookup.
///
/// Covers the queueable kinds plus videos, which can show up as the current
/// queue entry and need re-resolution during observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResolveKind {
    Song,
    Album,
    Playlist,
    Station,
    Video,
}

impl From<QueueKind> for ResolveKind {
    fn from(kind: QueueKind) -> Self {
        match kind {
            QueueKind::Song => ResolveKind::Song,
            QueueKind::Album => ResolveKind::Album,
            QueueKind::Playlist => ResolveKind::Playlist,
            QueueKind::Station => ResolveKind::Station,
        }
    }
}
