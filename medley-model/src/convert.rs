//! Record conversion: raw backend records → [`CanonicalItem`].
//!
//! Each conversion is a pure, total function for its input variant. A record
//! that is malformed in a way that prevents building an id converts to
//! `None` rather than a partially-populated item; callers drop it and move
//! on, since partial catalogs are an expected, tolerable outcome.

use std::collections::HashMap;

use url::Url;

use crate::item::{attr, CanonicalItem};
use crate::kind::ItemKind;
use crate::record::{Artwork, CatalogRecord, LocalRecord};

/// Edge length, in pixels, requested when sizing artwork templates.
pub const ARTWORK_EDGE: u32 = 200;

/// Resolve a sized artwork URL from a template.
///
/// Substitutes the `{w}`/`{h}` placeholders, then validates the scheme:
/// anything other than `http`/`https` is an internal reference the caller
/// could never retrieve, and converts to an empty string instead.
fn resolve_artwork(artwork: Option<&Artwork>) -> String {
    let Some(artwork) = artwork else {
        return String::new();
    };
    let edge = ARTWORK_EDGE.to_string();
    let sized = artwork.template.replace("{w}", &edge).replace("{h}", &edge);
    match Url::parse(&sized) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => sized,
        Ok(url) => {
            tracing::debug!(scheme = url.scheme(), "artwork url is not publicly retrievable");
            String::new()
        }
        Err(_) => String::new(),
    }
}

fn non_empty(id: &str) -> Option<String> {
    if id.is_empty() {
        None
    } else {
        Some(id.to_string())
    }
}

/// Render a local persistent id, treating zero as "never assigned".
fn local_id(persistent_id: u64) -> String {
    if persistent_id == 0 {
        String::new()
    } else {
        persistent_id.to_string()
    }
}

impl CatalogRecord {
    /// Convert to the canonical shape.
    ///
    /// Returns `None` for malformed records (no id) and for stations, which
    /// are queueable but have no browsable representation.
    pub fn canonical(&self) -> Option<CanonicalItem> {
        match self {
            CatalogRecord::Song(song) => Some(CanonicalItem {
                id: non_empty(&song.id)?,
                kind: ItemKind::Song,
                title: song.title.clone(),
                subtitle: song.artist_name.clone(),
                artwork_url: resolve_artwork(song.artwork.as_ref()),
                duration_secs: song.duration_secs,
                extra: HashMap::new(),
            }),
            CatalogRecord::Album(album) => Some(CanonicalItem {
                id: non_empty(&album.id)?,
                kind: ItemKind::Album,
                title: album.title.clone(),
                subtitle: album.artist_name.clone(),
                artwork_url: resolve_artwork(album.artwork.as_ref()),
                duration_secs: None,
                extra: HashMap::from([(
                    attr::TRACK_COUNT.to_string(),
                    album.track_count.to_string(),
                )]),
            }),
            CatalogRecord::Artist(artist) => Some(CanonicalItem {
                id: non_empty(&artist.id)?,
                kind: ItemKind::Artist,
                title: artist.name.clone(),
                subtitle: String::new(),
                artwork_url: resolve_artwork(artist.artwork.as_ref()),
                duration_secs: None,
                extra: HashMap::from([(
                    attr::ALBUM_COUNT.to_string(),
                    artist.album_count.to_string(),
                )]),
            }),
            CatalogRecord::Playlist(playlist) => Some(CanonicalItem {
                id: non_empty(&playlist.id)?,
                kind: ItemKind::Playlist,
                title: playlist.name.clone(),
                subtitle: String::new(),
                artwork_url: resolve_artwork(playlist.artwork.as_ref()),
                duration_secs: None,
                extra: HashMap::from([
                    (attr::DESCRIPTION.to_string(), playlist.description.clone()),
                    (
                        attr::DATE_ADDED.to_string(),
                        playlist
                            .last_modified
                            .map(|date| date.format("%Y-%m-%d").to_string())
                            .unwrap_or_default(),
                    ),
                ]),
            }),
            CatalogRecord::Video(video) => Some(CanonicalItem {
                id: non_empty(&video.id)?,
                kind: ItemKind::Video,
                title: video.title.clone(),
                subtitle: video.artist_name.clone(),
                artwork_url: resolve_artwork(video.artwork.as_ref()),
                duration_secs: video.duration_secs,
                extra: HashMap::new(),
            }),
            CatalogRecord::Genre(genre) => Some(CanonicalItem {
                id: non_empty(&genre.id)?,
                kind: ItemKind::Genre,
                title: genre.name.clone(),
                subtitle: String::new(),
                artwork_url: String::new(),
                duration_secs: None,
                extra: HashMap::new(),
            }),
            CatalogRecord::Station(_) => None,
            CatalogRecord::Recent(entry) => Some(CanonicalItem {
                id: non_empty(&entry.id)?,
                kind: ItemKind::RecentItem,
                title: entry.title.clone(),
                subtitle: entry.subtitle.clone().unwrap_or_default(),
                artwork_url: String::new(),
                duration_secs: None,
                extra: HashMap::from([(
                    attr::RECENT_TYPE.to_string(),
                    entry.container.as_str().to_string(),
                )]),
            }),
        }
    }
}

impl LocalRecord {
    /// Convert to the canonical shape.
    ///
    /// Local records never carry artwork. A zero persistent id means the
    /// index could not assign one; the record converts to `None`.
    pub fn canonical(&self) -> Option<CanonicalItem> {
        match self {
            LocalRecord::Song(song) => {
                if song.persistent_id == 0 {
                    return None;
                }
                Some(CanonicalItem {
                    id: song.persistent_id.to_string(),
                    kind: ItemKind::Song,
                    title: song.title.clone().unwrap_or_default(),
                    subtitle: song.artist.clone().unwrap_or_default(),
                    artwork_url: String::new(),
                    duration_secs: Some(song.duration_secs),
                    extra: HashMap::from([(
                        attr::ALBUM_ID.to_string(),
                        local_id(song.album_persistent_id),
                    )]),
                })
            }
            LocalRecord::Album(album) => {
                if album.persistent_id == 0 {
                    return None;
                }
                Some(CanonicalItem {
                    id: album.persistent_id.to_string(),
                    kind: ItemKind::Album,
                    title: album.title.clone().unwrap_or_default(),
                    subtitle: album.album_artist.clone().unwrap_or_default(),
                    artwork_url: String::new(),
                    duration_secs: None,
                    extra: HashMap::from([
                        (attr::TRACK_COUNT.to_string(), album.track_count.to_string()),
                        (attr::ARTIST_ID.to_string(), local_id(album.artist_persistent_id)),
                    ]),
                })
            }
            LocalRecord::Artist(artist) => {
                let id = self.persistent_id();
                if id == 0 {
                    return None;
                }
                let name = match artist.name.as_deref() {
                    Some(name) if !name.is_empty() => name.to_string(),
                    _ => artist.album_artist.clone().unwrap_or_default(),
                };
                Some(CanonicalItem {
                    id: id.to_string(),
                    kind: ItemKind::Artist,
                    title: name,
                    subtitle: String::new(),
                    artwork_url: String::new(),
                    duration_secs: None,
                    // The index does not track album counts per artist.
                    extra: HashMap::from([(attr::ALBUM_COUNT.to_string(), String::new())]),
                })
            }
            LocalRecord::Playlist(playlist) => {
                if playlist.persistent_id == 0 {
                    return None;
                }
                Some(CanonicalItem {
                    id: playlist.persistent_id.to_string(),
                    kind: ItemKind::Playlist,
                    title: playlist.name.clone().unwrap_or_default(),
                    subtitle: String::new(),
                    artwork_url: String::new(),
                    duration_secs: None,
                    extra: HashMap::from([
                        (
                            attr::DESCRIPTION.to_string(),
                            playlist.description.clone().unwrap_or_default(),
                        ),
                        (
                            attr::DATE_ADDED.to_string(),
                            playlist
                                .date_created
                                .map(|date| date.format("%Y-%m-%d").to_string())
                                .unwrap_or_default(),
                        ),
                    ]),
                })
            }
        }
    }
}
