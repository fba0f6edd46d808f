//! Snapshot document written by the sync binary.
//!
//! The reader never writes these types back; they derive `Serialize` only so
//! tests and tooling can produce fixture files.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Metadata for one synced file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Opaque identifier, unique within a snapshot.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Browsable link opened when the result is chosen.
    pub web_view_link: String,

    /// MIME type reported by the drive.
    pub mime_type: String,

    /// Parent folder identifiers, nearest first.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub parents: Vec<String>,

    /// Resolved display name of the first parent folder.
    pub parent_folder_name: String,

    /// Free-text keywords.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub keywords: Vec<String>,

    /// Romanized variants of the keywords.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub romaji_keywords: Vec<String>,

    /// Last modification time on the drive, when the syncer recorded it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_time: Option<DateTime<Utc>>,
}

impl FileRecord {
    /// Creates a record without keywords.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        web_view_link: impl Into<String>,
        mime_type: impl Into<String>,
        parent_folder_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            web_view_link: web_view_link.into(),
            mime_type: mime_type.into(),
            parents: Vec::new(),
            parent_folder_name: parent_folder_name.into(),
            keywords: Vec::new(),
            romaji_keywords: Vec::new(),
            modified_time: None,
        }
    }

    /// Sets the keywords.
    pub fn with_keywords(mut self, keywords: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the romanized keywords.
    pub fn with_romaji_keywords(
        mut self,
        keywords: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.romaji_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the parent folder identifiers.
    pub fn with_parents(mut self, parents: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.parents = parents.into_iter().map(Into::into).collect();
        self
    }
}

/// Full snapshot as produced by one sync run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexSnapshot {
    /// All synced files, in the order the syncer wrote them.
    pub files: Vec<FileRecord>,

    /// Folder identifier to display name.
    #[serde(default)]
    pub folders: HashMap<String, String>,

    /// When the syncer finished writing this snapshot.
    pub last_sync: DateTime<Utc>,

    /// Continuation token for the next incremental sync.
    #[serde(default)]
    pub sync_token: Option<String>,
}

impl IndexSnapshot {
    /// Creates a snapshot stamped with the current time.
    pub fn new(files: Vec<FileRecord>) -> Self {
        Self {
            files,
            folders: HashMap::new(),
            last_sync: Utc::now(),
            sync_token: None,
        }
    }

    /// Number of files in the snapshot.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the snapshot holds no files.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Reads a list field that the syncer may write as `null`.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_without_keywords() {
        let json = r#"{
            "id": "f1",
            "name": "notes.txt",
            "web_view_link": "https://drive.google.com/file/d/f1/view",
            "mime_type": "text/plain",
            "parent_folder_name": "Misc"
        }"#;

        let record: FileRecord = serde_json::from_str(json).unwrap();
        assert!(record.keywords.is_empty());
        assert!(record.romaji_keywords.is_empty());
        assert!(record.parents.is_empty());
        assert!(record.modified_time.is_none());
    }

    #[test]
    fn test_deserialize_full_snapshot() {
        let json = r#"{
            "files": [{
                "id": "f1",
                "name": "ログイン画面_設計書.docx",
                "web_view_link": "https://drive.google.com/file/d/f1/view",
                "modified_time": "2024-03-01T09:30:00Z",
                "mime_type": "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
                "parents": ["folder_123"],
                "parent_folder_name": "設計",
                "keywords": ["ログイン画面_設計書.docx"],
                "romaji_keywords": ["roguin"],
                "extra_field": 42
            }],
            "folders": {"folder_123": "設計"},
            "last_sync": "2024-03-02T00:00:00Z",
            "sync_token": "token_123"
        }"#;

        let snapshot: IndexSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.folders.get("folder_123").map(String::as_str), Some("設計"));
        assert_eq!(snapshot.sync_token.as_deref(), Some("token_123"));
        assert_eq!(snapshot.files[0].romaji_keywords, vec!["roguin".to_string()]);
        assert!(snapshot.files[0].modified_time.is_some());
    }

    #[test]
    fn test_missing_required_field_is_error() {
        let json = r#"{"files": [{"id": "f1"}], "folders": {}, "last_sync": "2024-03-02T00:00:00Z"}"#;
        assert!(serde_json::from_str::<IndexSnapshot>(json).is_err());
    }

    #[test]
    fn test_null_keyword_lists_are_empty() {
        let json = r#"{
            "id": "f1",
            "name": "x.txt",
            "web_view_link": "https://drive.google.com/file/d/f1/view",
            "mime_type": "text/plain",
            "parents": null,
            "parent_folder_name": "Misc",
            "keywords": null,
            "romaji_keywords": null
        }"#;

        let record: FileRecord = serde_json::from_str(json).unwrap();
        assert!(record.parents.is_empty());
        assert!(record.keywords.is_empty());
        assert!(record.romaji_keywords.is_empty());
    }

    #[test]
    fn test_keyword_list_of_wrong_type_is_error() {
        let json = r#"{
            "id": "f1",
            "name": "x.txt",
            "web_view_link": "https://drive.google.com/file/d/f1/view",
            "mime_type": "text/plain",
            "parent_folder_name": "Misc",
            "keywords": "not a list"
        }"#;

        assert!(serde_json::from_str::<FileRecord>(json).is_err());
    }
}
