//! Canonical record model for the medley engine.
//!
//! Every record the engine touches comes from one of two backends, the
//! network catalog or the on-device library, each with its own identifier
//! space and metadata shape. This crate defines the common shape both are
//! converted to ([`CanonicalItem`]), the identity used to decide two records
//! describe the same real-world entity ([`MatchKey`]), and the playback
//! status types shared by both players.
//!
//! # Architecture
//!
//! ```text
//! CatalogRecord ─┐
//!                ├─ canonical() ─→ CanonicalItem ─→ MatchKey
//! LocalRecord  ──┘
//! ```
//!
//! Everything here is synchronous, side-effect-free value types. The async
//! collaborator boundary lives in `medley-backend`.

mod convert;
mod item;
mod kind;
mod normalize;
mod status;

pub mod record;

pub use convert::ARTWORK_EDGE;
pub use item::{attr, CanonicalItem, ItemRef, MatchedItem};
pub use kind::{Backend, ItemKind, QueueKind, ResolveKind};
pub use normalize::{normalize, MatchKey};
pub use status::{PlaybackSnapshot, PlaybackStatus, PlayerTick};
