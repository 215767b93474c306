//! Playback status, raw player ticks, and normalized snapshots.

use serde::{Deserialize, Serialize};

use crate::item::{CanonicalItem, ItemRef};

/// Playback status as reported by either backend.
///
/// Mirrors the backend-reported values 1:1. `Unknown` covers any status a
/// backend reports that has no mapping here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlaybackStatus {
    Playing,
    Paused,
    Stopped,
    Interrupted,
    SeekingForward,
    SeekingBackward,
    Unknown,
}

/// A raw point-in-time reading from one backend's player.
///
/// `current_ref` is only a reference; the full record must be re-resolved
/// against the backend, which can fail independently of the reading itself.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerTick {
    pub status: PlaybackStatus,
    pub rate: f32,
    pub position_secs: f64,
    pub current_ref: Option<ItemRef>,
}

impl PlayerTick {
    /// A stopped player with nothing queued.
    pub fn idle() -> Self {
        Self {
            status: PlaybackStatus::Stopped,
            rate: 0.0,
            position_secs: 0.0,
            current_ref: None,
        }
    }
}

/// A normalized playback state reading delivered to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackSnapshot {
    pub status: PlaybackStatus,
    pub rate: f32,
    pub position_secs: f64,
    /// The resolved current item. Absent when nothing is queued or when
    /// re-resolution failed; resolution failure never suppresses the
    /// snapshot itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_item: Option<CanonicalItem>,
}
