//! Catalog-side raw records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Artwork as delivered by the catalog: a URL template that may contain
/// `{w}`/`{h}` sizing placeholders, e.g.
/// `https://img.example.com/abc/{w}x{h}.jpg`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    pub template: String,
}

impl Artwork {
    pub fn new(template: impl Into<String>) -> Self {
        Self { template: template.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSong {
    pub id: String,
    pub title: String,
    pub artist_name: String,
    pub artwork: Option<Artwork>,
    pub duration_secs: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogAlbum {
    pub id: String,
    pub title: String,
    pub artist_name: String,
    pub artwork: Option<Artwork>,
    pub track_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogArtist {
    pub id: String,
    pub name: String,
    pub artwork: Option<Artwork>,
    pub album_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPlaylist {
    pub id: String,
    pub name: String,
    pub description: String,
    pub artwork: Option<Artwork>,
    pub last_modified: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogVideo {
    pub id: String,
    pub title: String,
    pub artist_name: String,
    pub artwork: Option<Artwork>,
    pub duration_secs: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogGenre {
    pub id: String,
    pub name: String,
}

/// A radio station. Queueable by reference, never surfaced in library views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStation {
    pub id: String,
    pub name: String,
}

/// Container type of a recently-played entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RecentContainer {
    Album,
    Playlist,
    Station,
    Unknown,
}

impl RecentContainer {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            RecentContainer::Album => "album",
            RecentContainer::Playlist => "playlist",
            RecentContainer::Station => "station",
            RecentContainer::Unknown => "unknown",
        }
    }
}

/// An entry from the recently-played rail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentEntry {
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub container: RecentContainer,
}

/// Any record the catalog can return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CatalogRecord {
    Song(CatalogSong),
    Album(CatalogAlbum),
    Artist(CatalogArtist),
    Playlist(CatalogPlaylist),
    Video(CatalogVideo),
    Genre(CatalogGenre),
    Station(CatalogStation),
    Recent(RecentEntry),
}

impl CatalogRecord {
    /// The backend-scoped id of the underlying record.
    pub fn id(&self) -> &str {
        match self {
            CatalogRecord::Song(song) => &song.id,
            CatalogRecord::Album(album) => &album.id,
            CatalogRecord::Artist(artist) => &artist.id,
            CatalogRecord::Playlist(playlist) => &playlist.id,
            CatalogRecord::Video(video) => &video.id,
            CatalogRecord::Genre(genre) => &genre.id,
            CatalogRecord::Station(station) => &station.id,
            CatalogRecord::Recent(entry) => &entry.id,
        }
    }
}
