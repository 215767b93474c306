//! The on-device media library collaborator.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use medley_model::record::LocalRecord;
use medley_model::ItemKind;

use crate::control::PlayerControl;
use crate::error::Result;

/// Container kinds a local item can be queried under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParentKind {
    Album,
    Playlist,
}

/// The device-resident media index and its player.
///
/// All identifiers are the index's persistent ids, rendered as strings at
/// this boundary; the records themselves carry the numeric form.
#[async_trait]
pub trait LocalLibrary: PlayerControl {
    /// Every record of one kind in the index, in index order.
    async fn query_all(&self, kind: ItemKind) -> Result<Vec<LocalRecord>>;

    /// Every record under one parent container. An unknown parent id yields
    /// an empty list, not an error.
    async fn query_by_parent(&self, kind: ParentKind, parent_id: &str) -> Result<Vec<LocalRecord>>;

    /// Look up one record by its persistent id.
    async fn resolve(&self, persistent_id: &str) -> Result<Option<LocalRecord>>;

    /// Replace the local player's queue with the given records, in the
    /// given order.
    async fn install_queue(&self, records: &[LocalRecord]) -> Result<()>;
}
