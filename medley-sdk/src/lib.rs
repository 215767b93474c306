//! Unified library view and playback control across two backends.
//!
//! A client application plays music from two places at once: a
//! network-backed catalog and the device's own media library. The two use
//! different identifiers, different metadata shapes and different
//! event-delivery mechanisms. This crate presents a single consistent view
//! of "what is playing" and "what is in my library" on top of both:
//!
//! - **Reconciliation**: catalog listings come back annotated with the ids
//!   of their on-device counterparts ([`MedleyEngine::library_view`]).
//! - **Playback synchronization**: both players' bursty change
//!   notifications are debounced, deduplicated and normalized into one
//!   typed event stream per backend ([`MedleyEngine::subscribe`]).
//! - **Queue resolution**: an abstract "play album X" request becomes
//!   concrete ordered items installed on the correct backend
//!   ([`MedleyEngine::resolve_queue`]).
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use medley_sdk::{Backend, MedleyEngine, Page, ItemKind, QueueKind, QueueRequest};
//!
//! # async fn run(catalog: Arc<dyn medley_sdk::CatalogBackend>,
//! #              library: Arc<dyn medley_sdk::LocalLibrary>) -> medley_sdk::Result<()> {
//! let engine = MedleyEngine::new(catalog, library);
//!
//! // Library view with cross-references onto the local index.
//! for item in engine.library_view(ItemKind::Song, Page::default()).await? {
//!     println!("{} ({})", item.item.title, item.local_id);
//! }
//!
//! // Start an album on the local player.
//! engine
//!     .resolve_queue(&QueueRequest::new(Backend::Local, QueueKind::Album, "1297"))
//!     .await?;
//!
//! // Follow normalized playback events.
//! let mut events = engine.subscribe(Backend::Local);
//! while let Some(event) = events.recv().await {
//!     println!("{:?}", event);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! The two backends are injected as trait objects
//! ([`CatalogBackend`], [`LocalLibrary`]); all transport, authentication and
//! retry concerns live in those implementations.

mod engine;
mod error;
mod queue;
mod reconcile;
mod source;

pub use engine::{MedleyEngine, SearchResults};
pub use error::{EngineError, Result};
pub use queue::QueueRequest;
pub use reconcile::reconcile;

// The collaborator boundary, re-exported so implementations only need this
// crate.
pub use medley_backend::{
    BackendError, CatalogBackend, ChangeKind, ChangeNotice, InsertPosition, LocalLibrary, Page,
    ParentKind, PlayerControl,
};

// The data model.
pub use medley_model::record;
pub use medley_model::{
    attr, Backend, CanonicalItem, ItemKind, ItemRef, MatchKey, MatchedItem, PlaybackSnapshot,
    PlaybackStatus, PlayerTick, QueueKind, ResolveKind,
};

// Event stream surface.
pub use medley_stream::{ObserverConfig, PlayerEvent, Subscription, SubscriptionId};
