//! Dual-source playback observation.
//!
//! Both backends tick independently and fire bursty, unordered change
//! notifications. This crate turns that into a single normalized event
//! stream per backend:
//!
//! ```text
//! backend notices ─→ debounce ─→ evaluate ─→ dedupe ─→ SnapshotRouter ─→ subscribers
//!                    (50 ms)     (tick +      (by last
//!                                re-resolve)  reported status)
//! ```
//!
//! One [`PlaybackObserver`] runs per backend. The two observers share
//! nothing; their event streams are causally unrelated and callers must
//! treat them as independent, keyed by [`Backend`](medley_model::Backend).

mod config;
mod observer;
mod router;
mod source;

pub use config::ObserverConfig;
pub use observer::PlaybackObserver;
pub use router::{PlayerEvent, SnapshotRouter, Subscription, SubscriptionId};
pub use source::{read_snapshot, SnapshotSource};
