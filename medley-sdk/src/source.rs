//! [`SnapshotSource`] adapters over the two backend traits.
//!
//! The observation pipeline only knows the capability surface: tick,
//! change stream, re-resolution. These adapters bind it to the concrete
//! backends and fold record conversion in, so everything downstream of here
//! speaks canonical items only.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::broadcast;

use medley_backend::{CatalogBackend, ChangeNotice, LocalLibrary, Result};
use medley_model::record::{CatalogRecord, LocalRecord};
use medley_model::{Backend, CanonicalItem, ItemRef, PlayerTick};
use medley_stream::SnapshotSource;

pub(crate) struct CatalogSource {
    inner: Arc<dyn CatalogBackend>,
}

impl CatalogSource {
    pub(crate) fn new(inner: Arc<dyn CatalogBackend>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl SnapshotSource for CatalogSource {
    fn backend(&self) -> Backend {
        Backend::Catalog
    }

    async fn tick(&self) -> Result<PlayerTick> {
        self.inner.current_tick().await
    }

    fn changes(&self) -> broadcast::Receiver<ChangeNotice> {
        self.inner.subscribe_changes()
    }

    async fn resolve_current(&self, item_ref: &ItemRef) -> Result<Option<CanonicalItem>> {
        // Containers (albums, playlists) never play directly; only song and
        // video entries are worth a catalog round trip.
        let Some(kind) = item_ref.resolve_kind() else {
            return Ok(None);
        };
        let record = self.inner.resolve(kind, &item_ref.id).await?;
        Ok(record.as_ref().and_then(CatalogRecord::canonical))
    }
}

pub(crate) struct LibrarySource {
    inner: Arc<dyn LocalLibrary>,
}

impl LibrarySource {
    pub(crate) fn new(inner: Arc<dyn LocalLibrary>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl SnapshotSource for LibrarySource {
    fn backend(&self) -> Backend {
        Backend::Local
    }

    async fn tick(&self) -> Result<PlayerTick> {
        self.inner.current_tick().await
    }

    fn changes(&self) -> broadcast::Receiver<ChangeNotice> {
        self.inner.subscribe_changes()
    }

    async fn resolve_current(&self, item_ref: &ItemRef) -> Result<Option<CanonicalItem>> {
        let record = self.inner.resolve(&item_ref.id).await?;
        Ok(record.as_ref().and_then(LocalRecord::canonical))
    }
}
