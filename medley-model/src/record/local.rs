//! Local-library raw records.
//!
//! The index assigns every entity an immutable numeric persistent id; zero
//! means no id was assigned. Text fields are optional; the index stores
//! whatever the file's tags provided.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalSong {
    pub persistent_id: u64,
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album_persistent_id: u64,
    pub duration_secs: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalAlbum {
    pub persistent_id: u64,
    pub title: Option<String>,
    pub album_artist: Option<String>,
    pub track_count: u32,
    pub artist_persistent_id: u64,
}

/// An artist row. Compilation-only artists sometimes carry their identity in
/// the album-artist columns, so both id/name pairs are kept and the
/// converter picks whichever is populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalArtist {
    pub persistent_id: u64,
    pub album_artist_persistent_id: u64,
    pub name: Option<String>,
    pub album_artist: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalPlaylist {
    pub persistent_id: u64,
    pub name: Option<String>,
    pub description: Option<String>,
    pub date_created: Option<DateTime<Utc>>,
}

/// Any record the local index can return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LocalRecord {
    Song(LocalSong),
    Album(LocalAlbum),
    Artist(LocalArtist),
    Playlist(LocalPlaylist),
}

impl LocalRecord {
    /// The persistent id used for stable ordering.
    ///
    /// For artists this is the artist id, falling back to the album-artist
    /// id when the artist id was never assigned.
    pub fn persistent_id(&self) -> u64 {
        match self {
            LocalRecord::Song(song) => song.persistent_id,
            LocalRecord::Album(album) => album.persistent_id,
            LocalRecord::Artist(artist) => {
                if artist.persistent_id != 0 {
                    artist.persistent_id
                } else {
                    artist.album_artist_persistent_id
                }
            }
            LocalRecord::Playlist(playlist) => playlist.persistent_id,
        }
    }
}
