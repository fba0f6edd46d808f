#![allow(clippy::missing_errors_doc)]
//! Drive Search - Keyword search over a synced Google Drive file snapshot.
//!
//! A separate sync process writes the drive's file list to a JSON snapshot.
//! This crate keeps that snapshot cached in memory and answers launcher
//! queries against it.
//!
//! # Features
//!
//! - Multi-term AND matching against file names, keywords and romanized keywords
//! - Ranking by the number of terms found in the file name
//! - Snapshot cache refreshed when older than five minutes
//! - Failed reloads keep serving the previous snapshot
//!
//! # Example
//!
//! ```no_run
//! use drive_search::{DriveSearch, ResultList, SearchConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let search = DriveSearch::new(SearchConfig::default());
//!     let items = ResultList::from(search.search("budget 2024"));
//!     println!("{}", serde_json::to_string(&items)?);
//!     Ok(())
//! }
//! ```

mod cache;
mod config;
mod error;
mod index;
mod loader;
mod matcher;
mod paths;
mod result;
mod search;
mod snapshot;

pub use cache::{CacheState, CacheStats, LoadedSnapshot};
pub use config::{DEFAULT_MAX_RESULTS, DEFAULT_STALE_AFTER, SearchConfig, SearchConfigBuilder};
pub use error::{SearchError, SearchResult, SnapshotError};
pub use index::{IndexedRecord, SearchIndex};
pub use loader::{JsonSnapshotLoader, SnapshotSource};
pub use matcher::{Query, RankedMatch, rank};
pub use paths::{APP_NAME, HOME_ENV, SNAPSHOT_FILE, app_dir, default_snapshot_path};
pub use result::{MatchResult, ResultList};
pub use search::{DriveSearch, ReloadStatus, SnapshotInfo};
pub use snapshot::{FileRecord, IndexSnapshot};
