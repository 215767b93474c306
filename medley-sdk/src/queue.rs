//! Queue resolution: turning an abstract playable reference into concrete
//! ordered items installed on the correct backend.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use medley_backend::{CatalogBackend, InsertPosition, LocalLibrary, ParentKind};
use medley_model::record::LocalRecord;
use medley_model::{Backend, ItemKind, QueueKind, ResolveKind};

use crate::error::{EngineError, Result};

/// A request to play something, by reference.
///
/// Constructed by the caller, consumed once by the resolver, discarded.
/// Resolving the same request twice produces the same resulting queue, so a
/// failed resolve can always be re-issued safely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueRequest {
    pub ref_id: String,
    pub kind: QueueKind,
    pub backend: Backend,
}

impl QueueRequest {
    pub fn new(backend: Backend, kind: QueueKind, ref_id: impl Into<String>) -> Self {
        Self {
            ref_id: ref_id.into(),
            kind,
            backend,
        }
    }
}

/// Resolves queue requests against the two backends.
///
/// Failure leaves the target backend's queue state unspecified; there is no
/// rollback. Callers should treat a failed resolve as "queue indeterminate,
/// re-query before resuming".
pub(crate) struct QueueResolver {
    catalog: Arc<dyn CatalogBackend>,
    library: Arc<dyn LocalLibrary>,
}

impl QueueResolver {
    pub(crate) fn new(catalog: Arc<dyn CatalogBackend>, library: Arc<dyn LocalLibrary>) -> Self {
        Self { catalog, library }
    }

    pub(crate) async fn resolve(&self, request: &QueueRequest) -> Result<()> {
        match request.backend {
            Backend::Catalog => self.resolve_catalog(request).await,
            Backend::Local => self.resolve_local(request).await,
        }
    }

    /// Catalog protocol: look up exactly one record, clear-and-replace the
    /// queue with it (containers expand on the backend's own terms), then
    /// stage playback.
    async fn resolve_catalog(&self, request: &QueueRequest) -> Result<()> {
        let record = self
            .catalog
            .resolve(ResolveKind::from(request.kind), &request.ref_id)
            .await?
            .ok_or_else(|| not_found(request))?;

        self.catalog.install_queue(&record, InsertPosition::Replace).await?;
        self.catalog
            .prepare()
            .await
            .map_err(|error| EngineError::PrepareFailed(error.to_string()))?;
        debug!(kind = ?request.kind, id = %request.ref_id, "catalog queue installed");
        Ok(())
    }

    /// Local protocol: query all items under the parent container, order
    /// them ascending by persistent id, install, stage.
    ///
    /// The persistent-id ordering is load-bearing: it is stable and
    /// deterministic even when no track-number metadata exists, so repeated
    /// resolutions of the same parent always yield the same queue.
    async fn resolve_local(&self, request: &QueueRequest) -> Result<()> {
        let parent = match request.kind {
            QueueKind::Album => ParentKind::Album,
            QueueKind::Playlist => ParentKind::Playlist,
            // Songs and stations have no by-parent protocol on the local
            // index.
            QueueKind::Song | QueueKind::Station => return Err(not_found(request)),
        };

        let mut records = self.library.query_by_parent(parent, &request.ref_id).await?;
        if records.is_empty() {
            return Err(not_found(request));
        }
        records.sort_by_key(LocalRecord::persistent_id);

        self.library.install_queue(&records).await?;
        self.library
            .prepare()
            .await
            .map_err(|error| EngineError::PrepareFailed(error.to_string()))?;
        debug!(kind = ?request.kind, id = %request.ref_id, tracks = records.len(), "local queue installed");
        Ok(())
    }

    /// Install the unfiltered local song index as the queue, in index order.
    pub(crate) async fn install_all_local_songs(&self) -> Result<()> {
        let records = self.library.query_all(ItemKind::Song).await?;
        self.library.install_queue(&records).await?;
        self.library
            .prepare()
            .await
            .map_err(|error| EngineError::PrepareFailed(error.to_string()))?;
        debug!(tracks = records.len(), "full local song index installed");
        Ok(())
    }

    /// Resolve a catalog song, slot it in right after the current entry,
    /// stage it and start playback.
    pub(crate) async fn fetch_song_and_play(&self, id: &str) -> Result<()> {
        let record = self
            .catalog
            .resolve(ResolveKind::Song, id)
            .await?
            .ok_or_else(|| EngineError::NotFound {
                backend: Backend::Catalog,
                kind: QueueKind::Song,
                id: id.to_string(),
            })?;

        self.catalog
            .install_queue(&record, InsertPosition::AfterCurrent)
            .await?;
        self.catalog
            .prepare()
            .await
            .map_err(|error| EngineError::PrepareFailed(error.to_string()))?;
        self.catalog.play().await?;
        Ok(())
    }
}

fn not_found(request: &QueueRequest) -> EngineError {
    EngineError::NotFound {
        backend: request.backend,
        kind: request.kind,
        id: request.ref_id.clone(),
    }
}
