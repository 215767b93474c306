//! In-memory mock backends for integration tests.
//!
//! Both mocks record every queue install and transport call so tests can
//! assert on exactly what reached the backend, and both can be flipped into
//! an unreachable or prepare-refusing state mid-test.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::broadcast;

use medley_sdk::record::{
    CatalogAlbum, CatalogRecord, CatalogSong, CatalogStation, LocalAlbum, LocalRecord, LocalSong,
};
use medley_sdk::{
    BackendError, CatalogBackend, ChangeNotice, InsertPosition, ItemKind, LocalLibrary, Page,
    ParentKind, PlayerControl, PlayerTick, ResolveKind,
};

type Result<T> = std::result::Result<T, BackendError>;

/// Route engine logs through the test harness when `RUST_LOG` is set.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// ============================================================================
// Record builders
// ============================================================================

pub fn catalog_song(id: &str, title: &str, artist: &str) -> CatalogRecord {
    CatalogRecord::Song(CatalogSong {
        id: id.to_string(),
        title: title.to_string(),
        artist_name: artist.to_string(),
        artwork: None,
        duration_secs: Some(180.0),
    })
}

pub fn catalog_album(id: &str, title: &str, artist: &str, track_count: u32) -> CatalogRecord {
    CatalogRecord::Album(CatalogAlbum {
        id: id.to_string(),
        title: title.to_string(),
        artist_name: artist.to_string(),
        artwork: None,
        track_count,
    })
}

pub fn catalog_station(id: &str, name: &str) -> CatalogRecord {
    CatalogRecord::Station(CatalogStation {
        id: id.to_string(),
        name: name.to_string(),
    })
}

pub fn local_song(persistent_id: u64, title: &str, artist: &str, album_id: u64) -> LocalRecord {
    LocalRecord::Song(LocalSong {
        persistent_id,
        title: Some(title.to_string()),
        artist: Some(artist.to_string()),
        album_persistent_id: album_id,
        duration_secs: 180.0,
    })
}

pub fn local_album(persistent_id: u64, title: &str, artist: &str, artist_id: u64) -> LocalRecord {
    LocalRecord::Album(LocalAlbum {
        persistent_id,
        title: Some(title.to_string()),
        album_artist: Some(artist.to_string()),
        track_count: 2,
        artist_persistent_id: artist_id,
    })
}

// ============================================================================
// MockCatalog
// ============================================================================

pub struct MockCatalog {
    pub by_id: Mutex<HashMap<(ResolveKind, String), CatalogRecord>>,
    pub library: Mutex<HashMap<ItemKind, Vec<CatalogRecord>>>,
    pub playlists: Mutex<HashMap<String, Vec<CatalogRecord>>>,
    pub recent: Mutex<Vec<CatalogRecord>>,
    pub search_results: Mutex<Vec<CatalogRecord>>,
    pub installed: Mutex<Vec<(CatalogRecord, InsertPosition)>>,
    pub tick: Mutex<PlayerTick>,
    pub unavailable: AtomicBool,
    pub fail_prepare: AtomicBool,
    pub prepare_calls: AtomicUsize,
    pub play_calls: AtomicUsize,
    pub pause_calls: AtomicUsize,
    changes: broadcast::Sender<ChangeNotice>,
}

impl MockCatalog {
    pub fn new() -> Self {
        let (changes, _) = broadcast::channel(64);
        Self {
            by_id: Mutex::new(HashMap::new()),
            library: Mutex::new(HashMap::new()),
            playlists: Mutex::new(HashMap::new()),
            recent: Mutex::new(Vec::new()),
            search_results: Mutex::new(Vec::new()),
            installed: Mutex::new(Vec::new()),
            tick: Mutex::new(PlayerTick::idle()),
            unavailable: AtomicBool::new(false),
            fail_prepare: AtomicBool::new(false),
            prepare_calls: AtomicUsize::new(0),
            play_calls: AtomicUsize::new(0),
            pause_calls: AtomicUsize::new(0),
            changes,
        }
    }

    pub fn put(&self, kind: ResolveKind, record: CatalogRecord) {
        self.by_id
            .lock()
            .unwrap()
            .insert((kind, record.id().to_string()), record);
    }

    pub fn put_library(&self, kind: ItemKind, records: Vec<CatalogRecord>) {
        self.library.lock().unwrap().insert(kind, records);
    }

    pub fn put_playlist(&self, id: &str, tracks: Vec<CatalogRecord>) {
        self.playlists.lock().unwrap().insert(id.to_string(), tracks);
    }

    pub fn notify(&self, notice: ChangeNotice) {
        let _ = self.changes.send(notice);
    }

    pub fn installed_ids(&self) -> Vec<String> {
        self.installed
            .lock()
            .unwrap()
            .iter()
            .map(|(record, _)| record.id().to_string())
            .collect()
    }

    fn guard(&self) -> Result<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(BackendError::unavailable("catalog offline"));
        }
        Ok(())
    }
}

#[async_trait]
impl PlayerControl for MockCatalog {
    async fn current_tick(&self) -> Result<PlayerTick> {
        self.guard()?;
        Ok(self.tick.lock().unwrap().clone())
    }

    fn subscribe_changes(&self) -> broadcast::Receiver<ChangeNotice> {
        self.changes.subscribe()
    }

    async fn prepare(&self) -> Result<()> {
        if self.fail_prepare.load(Ordering::SeqCst) {
            return Err(BackendError::rejected("device busy"));
        }
        self.prepare_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn play(&self) -> Result<()> {
        self.play_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn pause(&self) -> Result<()> {
        self.pause_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn skip_next(&self) -> Result<()> {
        Ok(())
    }

    async fn skip_previous(&self) -> Result<()> {
        Ok(())
    }
}

#[async_trait]
impl CatalogBackend for MockCatalog {
    async fn search(
        &self,
        _term: &str,
        _kinds: &[ItemKind],
        _page: Page,
    ) -> Result<Vec<CatalogRecord>> {
        self.guard()?;
        Ok(self.search_results.lock().unwrap().clone())
    }

    async fn resolve(&self, kind: ResolveKind, id: &str) -> Result<Option<CatalogRecord>> {
        self.guard()?;
        Ok(self.by_id.lock().unwrap().get(&(kind, id.to_string())).cloned())
    }

    async fn library_items(&self, kind: ItemKind, page: Page) -> Result<Vec<CatalogRecord>> {
        self.guard()?;
        let library = self.library.lock().unwrap();
        let records = library.get(&kind).cloned().unwrap_or_default();
        Ok(records.into_iter().skip(page.offset).take(page.limit).collect())
    }

    async fn playlist_items(&self, playlist_id: &str) -> Result<Vec<CatalogRecord>> {
        self.guard()?;
        Ok(self
            .playlists
            .lock()
            .unwrap()
            .get(playlist_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn recently_played(&self) -> Result<Vec<CatalogRecord>> {
        self.guard()?;
        Ok(self.recent.lock().unwrap().clone())
    }

    async fn install_queue(&self, record: &CatalogRecord, position: InsertPosition) -> Result<()> {
        self.guard()?;
        self.installed.lock().unwrap().push((record.clone(), position));
        Ok(())
    }
}

// ============================================================================
// MockLibrary
// ============================================================================

pub struct MockLibrary {
    pub all: Mutex<HashMap<ItemKind, Vec<LocalRecord>>>,
    pub by_parent: Mutex<HashMap<(ParentKind, String), Vec<LocalRecord>>>,
    pub installs: Mutex<Vec<Vec<LocalRecord>>>,
    pub tick: Mutex<PlayerTick>,
    pub unavailable: AtomicBool,
    pub fail_prepare: AtomicBool,
    pub prepare_calls: AtomicUsize,
    pub play_calls: AtomicUsize,
    pub pause_calls: AtomicUsize,
    changes: broadcast::Sender<ChangeNotice>,
}

impl MockLibrary {
    pub fn new() -> Self {
        let (changes, _) = broadcast::channel(64);
        Self {
            all: Mutex::new(HashMap::new()),
            by_parent: Mutex::new(HashMap::new()),
            installs: Mutex::new(Vec::new()),
            tick: Mutex::new(PlayerTick::idle()),
            unavailable: AtomicBool::new(false),
            fail_prepare: AtomicBool::new(false),
            prepare_calls: AtomicUsize::new(0),
            play_calls: AtomicUsize::new(0),
            pause_calls: AtomicUsize::new(0),
            changes,
        }
    }

    pub fn put_all(&self, kind: ItemKind, records: Vec<LocalRecord>) {
        self.all.lock().unwrap().insert(kind, records);
    }

    pub fn put_parent(&self, kind: ParentKind, parent_id: &str, records: Vec<LocalRecord>) {
        self.by_parent
            .lock()
            .unwrap()
            .insert((kind, parent_id.to_string()), records);
    }

    pub fn notify(&self, notice: ChangeNotice) {
        let _ = self.changes.send(notice);
    }

    /// Persistent ids of the most recent install, in install order.
    pub fn last_install_ids(&self) -> Vec<u64> {
        self.installs
            .lock()
            .unwrap()
            .last()
            .map(|records| records.iter().map(LocalRecord::persistent_id).collect())
            .unwrap_or_default()
    }

    fn guard(&self) -> Result<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(BackendError::unavailable("media index unavailable"));
        }
        Ok(())
    }
}

#[async_trait]
impl PlayerControl for MockLibrary {
    async fn current_tick(&self) -> Result<PlayerTick> {
        self.guard()?;
        Ok(self.tick.lock().unwrap().clone())
    }

    fn subscribe_changes(&self) -> broadcast::Receiver<ChangeNotice> {
        self.changes.subscribe()
    }

    async fn prepare(&self) -> Result<()> {
        if self.fail_prepare.load(Ordering::SeqCst) {
            return Err(BackendError::rejected("playback session refused"));
        }
        self.prepare_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn play(&self) -> Result<()> {
        self.play_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn pause(&self) -> Result<()> {
        self.pause_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn skip_next(&self) -> Result<()> {
        Ok(())
    }

    async fn skip_previous(&self) -> Result<()> {
        Ok(())
    }
}

#[async_trait]
impl LocalLibrary for MockLibrary {
    async fn query_all(&self, kind: ItemKind) -> Result<Vec<LocalRecord>> {
        self.guard()?;
        Ok(self.all.lock().unwrap().get(&kind).cloned().unwrap_or_default())
    }

    async fn query_by_parent(
        &self,
        kind: ParentKind,
        parent_id: &str,
    ) -> Result<Vec<LocalRecord>> {
        self.guard()?;
        Ok(self
            .by_parent
            .lock()
            .unwrap()
            .get(&(kind, parent_id.to_string()))
            .cloned()
            .unwrap_or_default())
    }

    async fn resolve(&self, persistent_id: &str) -> Result<Option<LocalRecord>> {
        self.guard()?;
        let all = self.all.lock().unwrap();
        Ok(all
            .values()
            .flatten()
            .find(|record| record.persistent_id().to_string() == persistent_id)
            .cloned())
    }

    async fn install_queue(&self, records: &[LocalRecord]) -> Result<()> {
        self.guard()?;
        self.installs.lock().unwrap().push(records.to_vec());
        Ok(())
    }
}
