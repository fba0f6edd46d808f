//! Process-owned cache of the current snapshot with staleness tracking.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use crate::error::{SearchError, SearchResult};
use crate::index::SearchIndex;

/// A snapshot index together with the moment it was loaded.
#[derive(Debug)]
pub struct LoadedSnapshot {
    /// The searchable snapshot.
    pub index: SearchIndex,

    /// When this snapshot was loaded.
    pub loaded_at: Instant,
}

impl LoadedSnapshot {
    /// Wraps an index loaded right now.
    pub fn new(index: SearchIndex) -> Self {
        Self {
            index,
            loaded_at: Instant::now(),
        }
    }

    /// Checks if this snapshot is older than `window` at `now`.
    pub fn is_expired_at(&self, window: Duration, now: Instant) -> bool {
        now.saturating_duration_since(self.loaded_at) > window
    }

    /// Time since the snapshot was loaded.
    pub fn age(&self) -> Duration {
        self.loaded_at.elapsed()
    }
}

/// Holds the current snapshot, or nothing before the first successful load.
///
/// The snapshot is only ever replaced as a whole: readers clone the `Arc`
/// and keep scanning their copy while a reload swaps in the next one.
#[derive(Debug, Default)]
pub struct CacheState {
    current: RwLock<Option<Arc<LoadedSnapshot>>>,

    /// Statistics: successful reloads.
    reloads: AtomicU64,

    /// Statistics: reloads that left the cache unchanged.
    failed_reloads: AtomicU64,

    /// Statistics: queries answered without reloading.
    hits: AtomicU64,
}

impl CacheState {
    /// Creates an empty (unloaded) cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current snapshot, if any.
    pub fn current(&self) -> SearchResult<Option<Arc<LoadedSnapshot>>> {
        let guard = self.current.read().map_err(|_| SearchError::LockFailed)?;
        Ok(guard.clone())
    }

    /// Replaces the current snapshot with a freshly loaded one.
    pub fn replace(&self, index: SearchIndex) -> SearchResult<Arc<LoadedSnapshot>> {
        let loaded = Arc::new(LoadedSnapshot::new(index));
        let mut guard = self.current.write().map_err(|_| SearchError::LockFailed)?;
        *guard = Some(Arc::clone(&loaded));
        drop(guard);

        self.reloads.fetch_add(1, Ordering::Relaxed);
        Ok(loaded)
    }

    /// Whether the next query must reload before scanning.
    ///
    /// True when nothing is loaded, the loaded snapshot is empty, or it is
    /// older than `window` at `now`.
    pub fn needs_reload_at(&self, window: Duration, now: Instant) -> SearchResult<bool> {
        let needs = match self.current()? {
            None => true,
            Some(loaded) => loaded.index.is_empty() || loaded.is_expired_at(window, now),
        };
        Ok(needs)
    }

    /// Records a reload that did not change the cache.
    pub fn record_failed_reload(&self) {
        self.failed_reloads.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a query answered from the cached snapshot.
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Whether a snapshot has ever been loaded.
    pub fn is_loaded(&self) -> bool {
        matches!(self.current(), Ok(Some(_)))
    }

    /// Returns cache statistics.
    pub fn stats(&self) -> CacheStats {
        let files = match self.current() {
            Ok(Some(loaded)) => loaded.index.len(),
            _ => 0,
        };

        CacheStats {
            files,
            reloads: self.reloads.load(Ordering::Relaxed),
            failed_reloads: self.failed_reloads.load(Ordering::Relaxed),
            hits: self.hits.load(Ordering::Relaxed),
        }
    }
}

/// Cache statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct CacheStats {
    /// Files in the current snapshot.
    pub files: usize,

    /// Successful reloads.
    pub reloads: u64,

    /// Reloads that left the cache unchanged.
    pub failed_reloads: u64,

    /// Queries answered without reloading.
    pub hits: u64,
}
