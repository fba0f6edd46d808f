//! Search service composing the snapshot source, the cache and the matcher.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::cache::{CacheState, CacheStats, LoadedSnapshot};
use crate::config::SearchConfig;
use crate::error::SearchResult;
use crate::index::SearchIndex;
use crate::loader::{JsonSnapshotLoader, SnapshotSource};
use crate::matcher::{Query, rank};
use crate::result::MatchResult;

/// Outcome of a reload attempt. Only ever logged or reported; searching
/// behaves the same whatever the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReloadStatus {
    /// A new snapshot replaced the cached one.
    Loaded { files: usize },

    /// The snapshot file does not exist yet.
    Missing,

    /// The snapshot could not be read or parsed; the cache is unchanged.
    Failed,
}

impl ReloadStatus {
    /// Whether the cache now holds the freshly read snapshot.
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded { .. })
    }
}

/// Summary of the cached snapshot for status output.
#[derive(Debug, Clone, Serialize)]
pub struct SnapshotInfo {
    /// Where the snapshot is read from.
    pub snapshot_path: PathBuf,

    /// Whether any snapshot has been loaded.
    pub loaded: bool,

    /// Number of files in the cached snapshot.
    pub files: usize,

    /// Number of known folders.
    pub folders: usize,

    /// When the syncer wrote the cached snapshot.
    pub last_sync: Option<DateTime<Utc>>,

    /// Whether the snapshot carries an incremental sync token.
    pub has_sync_token: bool,

    /// Seconds since the cached snapshot was loaded.
    pub age_secs: Option<u64>,

    /// Cache counters.
    pub stats: CacheStats,
}

/// File search over the synced drive snapshot.
///
/// # Example
///
/// ```no_run
/// use drive_search::{DriveSearch, SearchConfig};
///
/// let search = DriveSearch::new(SearchConfig::default());
/// for item in search.search("budget 2024") {
///     println!("{} ({})", item.title, item.subtitle);
/// }
/// ```
pub struct DriveSearch {
    /// Configuration for the search.
    config: SearchConfig,

    /// Where snapshots come from.
    source: Box<dyn SnapshotSource>,

    /// Current snapshot and counters.
    cache: CacheState,
}

impl std::fmt::Debug for DriveSearch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DriveSearch")
            .field("config", &self.config)
            .field("source", &self.source.location())
            .field("cache", &self.cache)
            .finish()
    }
}

impl DriveSearch {
    /// Creates a search reading the JSON snapshot named in `config`.
    pub fn new(config: SearchConfig) -> Self {
        let loader = JsonSnapshotLoader::new(config.snapshot_path.clone());
        Self::with_source(config, loader)
    }

    /// Creates a search over an arbitrary snapshot source.
    pub fn with_source(config: SearchConfig, source: impl SnapshotSource + 'static) -> Self {
        Self {
            config,
            source: Box::new(source),
            cache: CacheState::new(),
        }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Returns the cache state.
    pub fn cache(&self) -> &CacheState {
        &self.cache
    }

    /// Reads the snapshot and swaps it into the cache.
    ///
    /// Never fails: a missing or unreadable snapshot is logged and leaves the
    /// previous snapshot, if any, in place.
    pub fn reload(&self) -> ReloadStatus {
        let location = self.source.location();

        let snapshot = match self.source.load() {
            Ok(snapshot) => snapshot,
            Err(e) if e.is_not_found() => {
                warn!(path = %location.display(), "Snapshot not found; has the drive been synced?");
                self.cache.record_failed_reload();
                return ReloadStatus::Missing;
            }
            Err(e) => {
                error!(error = %e, "Failed to load snapshot; keeping previous data");
                self.cache.record_failed_reload();
                return ReloadStatus::Failed;
            }
        };

        let index = SearchIndex::build(snapshot);
        let files = index.len();
        match self.cache.replace(index) {
            Ok(_) => {
                info!(path = %location.display(), files, "Loaded snapshot");
                ReloadStatus::Loaded { files }
            }
            Err(e) => {
                error!(error = %e, "Failed to store snapshot");
                self.cache.record_failed_reload();
                ReloadStatus::Failed
            }
        }
    }

    /// Reloads regardless of the staleness window.
    pub fn force_reload(&self) -> ReloadStatus {
        debug!(path = %self.source.location().display(), "Forced reload");
        self.reload()
    }

    /// Returns the cached snapshot, reloading first if it is missing, empty
    /// or older than the staleness window.
    fn ensure_fresh(&self) -> SearchResult<Option<Arc<LoadedSnapshot>>> {
        if self
            .cache
            .needs_reload_at(self.config.stale_after, Instant::now())?
        {
            let status = self.reload();
            debug!(?status, "Reloaded before search");
        } else {
            self.cache.record_hit();
        }
        self.cache.current()
    }

    /// Searches with the configured result limit.
    pub fn search(&self, query: &str) -> Vec<MatchResult> {
        self.search_with_limit(query, self.config.max_results)
    }

    /// Searches returning at most `limit` results (0 means the configured limit).
    ///
    /// Empty and whitespace-only queries return nothing without touching the
    /// snapshot. Any failure yields an empty list.
    pub fn search_with_limit(&self, query: &str, limit: usize) -> Vec<MatchResult> {
        let parsed = Query::parse(query);
        if parsed.is_empty() {
            return Vec::new();
        }

        let loaded = match self.ensure_fresh() {
            Ok(Some(loaded)) => loaded,
            Ok(None) => {
                debug!("No snapshot available");
                return Vec::new();
            }
            Err(e) => {
                error!(error = %e, "Search failed");
                return Vec::new();
            }
        };

        let limit = self.config.effective_limit(limit);
        let results: Vec<MatchResult> = rank(&parsed, &loaded.index, limit)
            .into_iter()
            .map(|m| MatchResult::from(m.file))
            .collect();

        debug!(
            query,
            terms = parsed.terms().len(),
            results = results.len(),
            "Search finished"
        );
        results
    }

    /// Describes the cached snapshot, loading it first if needed.
    pub fn snapshot_info(&self) -> SnapshotInfo {
        let loaded = self.ensure_fresh().unwrap_or_else(|e| {
            error!(error = %e, "Failed to read cache state");
            None
        });

        let mut info = SnapshotInfo {
            snapshot_path: self.source.location(),
            loaded: loaded.is_some(),
            files: 0,
            folders: 0,
            last_sync: None,
            has_sync_token: false,
            age_secs: None,
            stats: self.cache.stats(),
        };

        if let Some(loaded) = loaded {
            let snapshot = loaded.index.snapshot();
            info.files = snapshot.len();
            info.folders = snapshot.folders.len();
            info.last_sync = Some(snapshot.last_sync);
            info.has_sync_token = snapshot.sync_token.is_some();
            info.age_secs = Some(loaded.age().as_secs());
        }

        info
    }

    /// Known folders as `(id, name)`, sorted by name then id.
    pub fn folders(&self) -> Vec<(String, String)> {
        let loaded = match self.ensure_fresh() {
            Ok(Some(loaded)) => loaded,
            Ok(None) => return Vec::new(),
            Err(e) => {
                error!(error = %e, "Failed to read cache state");
                return Vec::new();
            }
        };

        let mut folders: Vec<(String, String)> = loaded
            .index
            .snapshot()
            .folders
            .iter()
            .map(|(id, name)| (id.clone(), name.clone()))
            .collect();
        folders.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        folders
    }
}
