//! The engine facade.
//!
//! `MedleyEngine` composes the matcher, the queue resolver and the two
//! observation pipelines behind one surface. It performs no logic of its own
//! beyond composition; every operation delegates to a component and maps
//! records into the canonical shape on the way out.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use medley_backend::{CatalogBackend, LocalLibrary, Page};
use medley_model::record::{CatalogRecord, LocalRecord};
use medley_model::{
    Backend, CanonicalItem, ItemKind, MatchedItem, PlaybackSnapshot, PlaybackStatus,
};
use medley_stream::{
    read_snapshot, ObserverConfig, PlaybackObserver, SnapshotRouter, Subscription, SubscriptionId,
};

use crate::error::Result;
use crate::queue::{QueueRequest, QueueResolver};
use crate::reconcile::reconcile;
use crate::source::{CatalogSource, LibrarySource};

/// Catalog search results, split by kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    pub songs: Vec<CanonicalItem>,
    pub albums: Vec<CanonicalItem>,
}

/// One engine instance per (catalog, library) pair.
///
/// Instances are explicit and injectable (there is no global "active
/// player"), so tests can run several engines against independent mock
/// backends. Construction spawns the observation pipelines and therefore
/// requires a tokio runtime; dropping the engine stops them.
pub struct MedleyEngine {
    catalog: Arc<dyn CatalogBackend>,
    library: Arc<dyn LocalLibrary>,
    catalog_source: Arc<CatalogSource>,
    library_source: Arc<LibrarySource>,
    resolver: QueueResolver,
    router: Arc<SnapshotRouter>,
    _observers: [PlaybackObserver; 2],
}

impl MedleyEngine {
    /// Build an engine with the default observer tuning.
    pub fn new(catalog: Arc<dyn CatalogBackend>, library: Arc<dyn LocalLibrary>) -> Self {
        Self::with_config(catalog, library, ObserverConfig::default())
    }

    /// Build an engine with custom observer tuning.
    pub fn with_config(
        catalog: Arc<dyn CatalogBackend>,
        library: Arc<dyn LocalLibrary>,
        config: ObserverConfig,
    ) -> Self {
        let router = Arc::new(SnapshotRouter::new());
        let catalog_source = Arc::new(CatalogSource::new(Arc::clone(&catalog)));
        let library_source = Arc::new(LibrarySource::new(Arc::clone(&library)));

        let observers = [
            PlaybackObserver::spawn(
                Arc::clone(&catalog_source),
                Arc::clone(&router),
                config.clone(),
            ),
            PlaybackObserver::spawn(
                Arc::clone(&library_source),
                Arc::clone(&router),
                config,
            ),
        ];

        Self {
            resolver: QueueResolver::new(Arc::clone(&catalog), Arc::clone(&library)),
            catalog,
            library,
            catalog_source,
            library_source,
            router,
            _observers: observers,
        }
    }

    // ========================================================================
    // Library views
    // ========================================================================

    /// One page of the user's cloud library, annotated with local
    /// counterparts.
    ///
    /// The view is seeded from the catalog side: an unreachable catalog is an
    /// error, while an unreachable local library degrades to a catalog-only,
    /// unmatched view.
    pub async fn library_view(&self, kind: ItemKind, page: Page) -> Result<Vec<MatchedItem>> {
        let records = self.catalog.library_items(kind, page).await?;
        let catalog_items = canonicalize_catalog(&records);
        let local_items = self.local_counterparts(kind).await;
        Ok(reconcile(catalog_items, &local_items))
    }

    /// The tracks of one cloud-library playlist, annotated against the local
    /// song index.
    pub async fn playlist_songs(&self, playlist_id: &str) -> Result<Vec<MatchedItem>> {
        let records = self.catalog.playlist_items(playlist_id).await?;
        let catalog_items = canonicalize_catalog(&records);
        let local_items = self.local_counterparts(ItemKind::Song).await;
        Ok(reconcile(catalog_items, &local_items))
    }

    /// Full-text catalog search, split into songs and albums.
    pub async fn search_catalog(
        &self,
        term: &str,
        kinds: &[ItemKind],
        page: Page,
    ) -> Result<SearchResults> {
        let records = self.catalog.search(term, kinds, page).await?;
        let mut results = SearchResults::default();
        for item in canonicalize_catalog(&records) {
            match item.kind {
                ItemKind::Song => results.songs.push(item),
                ItemKind::Album => results.albums.push(item),
                other => debug!(kind = ?other, "ignoring search result of unsplit kind"),
            }
        }
        Ok(results)
    }

    /// The recently-played rail.
    pub async fn recently_played(&self) -> Result<Vec<CanonicalItem>> {
        let records = self.catalog.recently_played().await?;
        Ok(canonicalize_catalog(&records))
    }

    /// Local records of one kind, canonicalized, or an empty list when the
    /// kind has no local counterpart or the library is unreachable.
    async fn local_counterparts(&self, kind: ItemKind) -> Vec<CanonicalItem> {
        if !matches!(kind, ItemKind::Song | ItemKind::Album | ItemKind::Artist) {
            return Vec::new();
        }
        match self.library.query_all(kind).await {
            Ok(records) => canonicalize_local(&records),
            Err(error) => {
                warn!(%error, ?kind, "local library unreachable; returning catalog-only view");
                Vec::new()
            }
        }
    }

    // ========================================================================
    // Queue resolution
    // ========================================================================

    /// Resolve an abstract playable reference into a concrete queue on the
    /// requested backend. Idempotent from the caller's perspective.
    pub async fn resolve_queue(&self, request: &QueueRequest) -> Result<()> {
        self.resolver.resolve(request).await
    }

    /// Install the entire local song index as the local player's queue.
    pub async fn queue_all_local_songs(&self) -> Result<()> {
        self.resolver.install_all_local_songs().await
    }

    /// Resolve one catalog song, queue it after the current entry and start
    /// playing it.
    pub async fn fetch_song_and_play(&self, song_id: &str) -> Result<()> {
        self.resolver.fetch_song_and_play(song_id).await
    }

    // ========================================================================
    // Playback state
    // ========================================================================

    /// One-shot read of a backend's playback state, with the current item
    /// re-resolved. Same resolution logic as the push pipeline, without
    /// debouncing or deduplication.
    pub async fn snapshot(&self, backend: Backend) -> Result<PlaybackSnapshot> {
        let snapshot = match backend {
            Backend::Catalog => read_snapshot(self.catalog_source.as_ref()).await?,
            Backend::Local => read_snapshot(self.library_source.as_ref()).await?,
        };
        Ok(snapshot)
    }

    /// Subscribe to one backend's normalized event stream.
    pub fn subscribe(&self, backend: Backend) -> Subscription {
        self.router.subscribe(backend)
    }

    /// Withdraw a subscription. The observers keep running; events simply
    /// stop being routed to this handle.
    pub fn unsubscribe(&self, id: &SubscriptionId) -> bool {
        self.router.unsubscribe(id)
    }

    // ========================================================================
    // Transport
    // ========================================================================

    pub async fn play(&self, backend: Backend) -> Result<()> {
        match backend {
            Backend::Catalog => self.catalog.play().await,
            Backend::Local => self.library.play().await,
        }
        .map_err(Into::into)
    }

    pub async fn pause(&self, backend: Backend) -> Result<()> {
        match backend {
            Backend::Catalog => self.catalog.pause().await,
            Backend::Local => self.library.pause().await,
        }
        .map_err(Into::into)
    }

    /// Pause when playing; otherwise start playback.
    pub async fn toggle(&self, backend: Backend) -> Result<()> {
        let tick = match backend {
            Backend::Catalog => self.catalog.current_tick().await?,
            Backend::Local => self.library.current_tick().await?,
        };
        match tick.status {
            PlaybackStatus::Playing => self.pause(backend).await,
            _ => self.play(backend).await,
        }
    }

    pub async fn skip_next(&self, backend: Backend) -> Result<()> {
        match backend {
            Backend::Catalog => self.catalog.skip_next().await,
            Backend::Local => self.library.skip_next().await,
        }
        .map_err(Into::into)
    }

    pub async fn skip_previous(&self, backend: Backend) -> Result<()> {
        match backend {
            Backend::Catalog => self.catalog.skip_previous().await,
            Backend::Local => self.library.skip_previous().await,
        }
        .map_err(Into::into)
    }
}

/// Convert catalog records, dropping the malformed (and the non-browsable).
fn canonicalize_catalog(records: &[CatalogRecord]) -> Vec<CanonicalItem> {
    let items: Vec<_> = records.iter().filter_map(CatalogRecord::canonical).collect();
    if items.len() < records.len() {
        debug!(dropped = records.len() - items.len(), "dropped unconvertible catalog records");
    }
    items
}

/// Convert local records, dropping the malformed.
fn canonicalize_local(records: &[LocalRecord]) -> Vec<CanonicalItem> {
    let items: Vec<_> = records.iter().filter_map(LocalRecord::canonical).collect();
    if items.len() < records.len() {
        debug!(dropped = records.len() - items.len(), "dropped unconvertible local records");
    }
    items
}
