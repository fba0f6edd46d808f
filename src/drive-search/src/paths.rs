//! OS-aware location of the synced snapshot file.
//!
//! The sync binary writes its snapshot into the per-user configuration
//! directory:
//!
//! - **macOS**: `~/Library/Application Support/fuzzy-drive-search/`
//! - **Linux**: `~/.config/fuzzy-drive-search/`
//! - **Windows**: `%APPDATA%\fuzzy-drive-search\`
//!
//! `FUZZY_DRIVE_SEARCH_HOME` overrides the directory.

use std::path::PathBuf;

use tracing::debug;

use crate::error::SnapshotError;

/// Application name used for the storage directory.
pub const APP_NAME: &str = "fuzzy-drive-search";

/// File name of the snapshot written by the sync binary.
pub const SNAPSHOT_FILE: &str = "drive_files.json";

/// Environment variable overriding the application directory.
pub const HOME_ENV: &str = "FUZZY_DRIVE_SEARCH_HOME";

/// Get the application directory.
pub fn app_dir() -> Result<PathBuf, SnapshotError> {
    if let Ok(val) = std::env::var(HOME_ENV) {
        if !val.is_empty() {
            let path = PathBuf::from(val);
            debug!(path = %path.display(), "Using {HOME_ENV} override");
            return Ok(path);
        }
    }

    let base = dirs::config_dir().ok_or(SnapshotError::NoDataDir)?;
    Ok(base.join(APP_NAME))
}

/// Get the default snapshot path inside the application directory.
pub fn default_snapshot_path() -> Result<PathBuf, SnapshotError> {
    Ok(app_dir()?.join(SNAPSHOT_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_snapshot_path() {
        // Either the override or the platform directory, always ending in the file name.
        if let Ok(path) = default_snapshot_path() {
            assert!(path.ends_with(SNAPSHOT_FILE));
        }
    }

    #[test]
    fn test_app_dir_name() {
        if std::env::var(HOME_ENV).is_err() {
            if let Ok(dir) = app_dir() {
                assert!(dir.ends_with(APP_NAME));
            }
        }
    }
}
