//! Error types for snapshot loading and search.

use std::path::PathBuf;

/// Result type alias for search operations.
pub type SearchResult<T> = std::result::Result<T, SearchError>;

/// Errors that can occur while reading the synced snapshot file.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// The snapshot file has not been written yet.
    #[error("Snapshot file does not exist: {0}")]
    NotFound(PathBuf),

    /// The snapshot file exists but could not be read.
    #[error("Failed to read snapshot '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The snapshot file is not a valid snapshot document.
    #[error("Failed to parse snapshot '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// No per-user application directory could be determined.
    #[error("Could not determine the application data directory")]
    NoDataDir,
}

impl SnapshotError {
    /// Creates a new `NotFound` error.
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound(path.into())
    }

    /// Creates a new `Read` error.
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Creates a new `Parse` error.
    pub fn parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }

    /// Returns true for the "not yet synced" condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Errors that can occur inside the search service.
///
/// None of these reach callers of [`crate::DriveSearch::search`]; they are
/// logged and turned into an empty result.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Loading the snapshot failed.
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    /// Failed to acquire lock on internal state.
    #[error("Failed to acquire lock on internal state")]
    LockFailed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SnapshotError::not_found("/nonexistent/drive_files.json");
        assert!(err.to_string().contains("/nonexistent/drive_files.json"));
        assert!(err.is_not_found());

        let err = SearchError::LockFailed;
        assert!(err.to_string().contains("lock"));
    }

    #[test]
    fn test_parse_error_keeps_detail() {
        let source = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = SnapshotError::parse("/tmp/drive_files.json", source);
        let msg = err.to_string();
        assert!(msg.contains("Failed to parse snapshot"));
        assert!(msg.contains("/tmp/drive_files.json"));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_error_from_snapshot() {
        let search_err: SearchError = SnapshotError::NoDataDir.into();
        assert!(matches!(
            search_err,
            SearchError::Snapshot(SnapshotError::NoDataDir)
        ));
    }
}
