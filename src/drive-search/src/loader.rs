//! Reading the snapshot file from disk.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::SnapshotError;
use crate::snapshot::IndexSnapshot;

/// Source of index snapshots.
///
/// Implementations must not modify whatever they read from.
pub trait SnapshotSource: Send + Sync {
    /// Loads a complete snapshot.
    fn load(&self) -> Result<IndexSnapshot, SnapshotError>;

    /// Human-readable location of the snapshot, for logs and status output.
    fn location(&self) -> PathBuf;
}

/// Loads the JSON snapshot written by the sync binary.
#[derive(Debug, Clone)]
pub struct JsonSnapshotLoader {
    path: PathBuf,
}

impl JsonSnapshotLoader {
    /// Creates a loader reading the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the snapshot file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotSource for JsonSnapshotLoader {
    fn load(&self) -> Result<IndexSnapshot, SnapshotError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(SnapshotError::not_found(&self.path));
            }
            Err(e) => return Err(SnapshotError::read(&self.path, e)),
        };

        let snapshot: IndexSnapshot =
            serde_json::from_str(&content).map_err(|e| SnapshotError::parse(&self.path, e))?;

        debug!(
            path = %self.path.display(),
            files = snapshot.len(),
            bytes = content.len(),
            "Parsed snapshot"
        );
        Ok(snapshot)
    }

    fn location(&self) -> PathBuf {
        self.path.clone()
    }
}
