//! The player-control capability shared by both backends.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use medley_model::PlayerTick;

use crate::error::Result;

/// Which aspect of the player a change notification concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChangeKind {
    /// Playback state changed (status, rate, position).
    State,
    /// The queue changed (current entry moved, queue replaced).
    Queue,
}

/// A push notification from a backend.
///
/// Notices are cheap and bursty (backends fire several per logical change)
/// and carry no payload beyond the kind. Observers read the player's current
/// state when they actually evaluate, so a coalesced burst still reflects
/// whatever is true at evaluation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeNotice {
    pub kind: ChangeKind,
}

impl ChangeNotice {
    pub fn state() -> Self {
        Self { kind: ChangeKind::State }
    }

    pub fn queue() -> Self {
        Self { kind: ChangeKind::Queue }
    }
}

/// Capability every playback backend exposes: read state, be notified of
/// changes, stage and drive playback.
///
/// All methods that touch the backend are asynchronous and potentially slow;
/// timeout policy belongs to the implementation.
#[async_trait]
pub trait PlayerControl: Send + Sync {
    /// Read the player's current state. The returned tick carries only a
    /// reference to the current entry, not the full record.
    async fn current_tick(&self) -> Result<PlayerTick>;

    /// Subscribe to change notifications. Every call returns an independent
    /// receiver on the same broadcast stream.
    fn subscribe_changes(&self) -> broadcast::Receiver<ChangeNotice>;

    /// Stage the installed queue for playback. May be refused (device busy,
    /// permission revoked), in which case the previously installed queue
    /// state is unspecified.
    async fn prepare(&self) -> Result<()>;

    async fn play(&self) -> Result<()>;

    async fn pause(&self) -> Result<()>;

    async fn skip_next(&self) -> Result<()>;

    async fn skip_previous(&self) -> Result<()>;
}
