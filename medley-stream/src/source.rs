//! The capability an observer needs from a backend.

use async_trait::async_trait;
use tokio::sync::broadcast;
use tracing::debug;

use medley_backend::{ChangeNotice, Result};
use medley_model::{Backend, CanonicalItem, ItemRef, PlaybackSnapshot, PlayerTick};

/// A backend as seen by the observation pipeline: a tickable player with a
/// change stream and a way to turn a current-entry reference back into a
/// full record.
///
/// The engine provides one implementation per backend; observers never know
/// which backend they are watching beyond the [`Backend`] tag.
#[async_trait]
pub trait SnapshotSource: Send + Sync + 'static {
    /// Which backend this source reads.
    fn backend(&self) -> Backend;

    /// Read the player's current raw state.
    async fn tick(&self) -> Result<PlayerTick>;

    /// A fresh receiver on the backend's change-notification stream.
    fn changes(&self) -> broadcast::Receiver<ChangeNotice>;

    /// Re-resolve a current-entry reference to a canonical record. `Ok(None)`
    /// means the backend no longer knows the item (removed, region change).
    async fn resolve_current(&self, item_ref: &ItemRef) -> Result<Option<CanonicalItem>>;
}

/// Resolve the tick's current entry, treating failure as absence.
///
/// Resolution failure is logged and swallowed: it only costs the
/// `current_item` field, never the snapshot around it.
pub(crate) async fn resolve_item<S>(source: &S, tick: &PlayerTick) -> Option<CanonicalItem>
where
    S: SnapshotSource + ?Sized,
{
    let item_ref = tick.current_ref.as_ref()?;
    match source.resolve_current(item_ref).await {
        Ok(item) => item,
        Err(error) => {
            debug!(
                backend = ?source.backend(),
                id = %item_ref.id,
                %error,
                "current item resolution failed"
            );
            None
        }
    }
}

/// One-shot state read: the current tick plus the re-resolved current item.
///
/// This is the pull-style counterpart of the observer's push pipeline and
/// uses the same resolution logic, minus debouncing and deduplication.
pub async fn read_snapshot<S>(source: &S) -> Result<PlaybackSnapshot>
where
    S: SnapshotSource + ?Sized,
{
    let tick = source.tick().await?;
    let current_item = resolve_item(source, &tick).await;
    Ok(PlaybackSnapshot {
        status: tick.status,
        rate: tick.rate,
        position_secs: tick.position_secs,
        current_item,
    })
}
