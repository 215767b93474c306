//! The network catalog collaborator.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use medley_model::record::CatalogRecord;
use medley_model::{ItemKind, ResolveKind};

use crate::control::PlayerControl;
use crate::error::Result;

/// Window into a paged listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub limit: usize,
    pub offset: usize,
}

impl Page {
    pub fn new(limit: usize, offset: usize) -> Self {
        Self { limit, offset }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self { limit: 25, offset: 0 }
    }
}

/// Where a queue install lands relative to the existing queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InsertPosition {
    /// Clear-and-replace the active queue.
    Replace,
    /// Insert directly after the current entry.
    AfterCurrent,
}

/// The network-hosted catalog: search, by-id resolution, the user's cloud
/// library listings, and the catalog player's queue.
#[async_trait]
pub trait CatalogBackend: PlayerControl {
    /// Full-text search over the catalog for the given kinds.
    async fn search(&self, term: &str, kinds: &[ItemKind], page: Page) -> Result<Vec<CatalogRecord>>;

    /// Look up exactly one record by kind and id. `Ok(None)` means the
    /// catalog has no such record, which is distinct from the catalog being
    /// unreachable.
    async fn resolve(&self, kind: ResolveKind, id: &str) -> Result<Option<CatalogRecord>>;

    /// Page through the user's cloud library for one kind.
    async fn library_items(&self, kind: ItemKind, page: Page) -> Result<Vec<CatalogRecord>>;

    /// The tracks of one cloud-library playlist, in playlist order.
    async fn playlist_items(&self, playlist_id: &str) -> Result<Vec<CatalogRecord>>;

    /// The recently-played rail (album/playlist/station containers).
    async fn recently_played(&self) -> Result<Vec<CatalogRecord>>;

    /// Install a resolved record into the catalog player's queue. A
    /// container record (album, playlist, station) expands to its
    /// constituent tracks on the backend's own terms; the engine treats the
    /// install as one opaque operation.
    async fn install_queue(&self, record: &CatalogRecord, position: InsertPosition) -> Result<()>;
}
