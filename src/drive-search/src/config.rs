//! Configuration types for drive search.

use std::path::PathBuf;
use std::time::Duration;

use crate::paths::{SNAPSHOT_FILE, default_snapshot_path};

/// Default time after which a loaded snapshot is considered outdated.
pub const DEFAULT_STALE_AFTER: Duration = Duration::from_secs(5 * 60);

/// Default number of results returned per query.
pub const DEFAULT_MAX_RESULTS: usize = 20;

/// Configuration for the search service.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Snapshot file written by the sync binary.
    pub snapshot_path: PathBuf,

    /// How long a loaded snapshot is trusted before the next query reloads it.
    pub stale_after: Duration,

    /// Maximum number of results returned by a query.
    pub max_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        let snapshot_path = default_snapshot_path().unwrap_or_else(|err| {
            tracing::warn!("{err}; falling back to ./{SNAPSHOT_FILE}");
            PathBuf::from(SNAPSHOT_FILE)
        });

        Self {
            snapshot_path,
            stale_after: DEFAULT_STALE_AFTER,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

impl SearchConfig {
    /// Creates a new configuration reading the given snapshot file.
    pub fn new(snapshot_path: impl Into<PathBuf>) -> Self {
        Self {
            snapshot_path: snapshot_path.into(),
            stale_after: DEFAULT_STALE_AFTER,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    /// Creates a builder for constructing a configuration.
    pub fn builder(snapshot_path: impl Into<PathBuf>) -> SearchConfigBuilder {
        SearchConfigBuilder::new(snapshot_path)
    }

    /// Resolves a requested result limit; zero means the configured default.
    pub fn effective_limit(&self, requested: usize) -> usize {
        if requested == 0 {
            self.max_results
        } else {
            requested
        }
    }
}

/// Builder for creating `SearchConfig` instances.
#[derive(Debug)]
pub struct SearchConfigBuilder {
    config: SearchConfig,
}

impl SearchConfigBuilder {
    /// Creates a new builder reading the given snapshot file.
    pub fn new(snapshot_path: impl Into<PathBuf>) -> Self {
        Self {
            config: SearchConfig::new(snapshot_path),
        }
    }

    /// Sets the staleness window.
    pub fn stale_after(mut self, window: Duration) -> Self {
        self.config.stale_after = window;
        self
    }

    /// Sets the maximum number of results per query.
    pub fn max_results(mut self, max: usize) -> Self {
        self.config.max_results = max;
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> SearchConfig {
        self.config
    }
}
