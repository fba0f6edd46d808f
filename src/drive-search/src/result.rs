//! Launcher-facing result types.

use serde::{Deserialize, Serialize};

use crate::snapshot::FileRecord;

/// A single display-ready match.
///
/// Serializes to the launcher item shape:
/// `{"title", "subtitle", "arg", "uid", "valid", "mimeType"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// File name.
    pub title: String,

    /// Parent folder name.
    pub subtitle: String,

    /// Link opened when the item is chosen.
    #[serde(rename = "arg")]
    pub target: String,

    /// File identifier.
    #[serde(rename = "uid")]
    pub id: String,

    /// Always true for returned matches.
    pub valid: bool,

    /// Content type, for icon selection only.
    #[serde(
        rename = "mimeType",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub mime_type: Option<String>,
}

impl From<&FileRecord> for MatchResult {
    fn from(file: &FileRecord) -> Self {
        let mime_type = if file.mime_type.is_empty() {
            None
        } else {
            Some(file.mime_type.clone())
        };

        Self {
            title: file.name.clone(),
            subtitle: file.parent_folder_name.clone(),
            target: file.web_view_link.clone(),
            id: file.id.clone(),
            valid: true,
            mime_type,
        }
    }
}

/// Envelope printed on standard output: `{"items": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultList {
    pub items: Vec<MatchResult>,
}

impl From<Vec<MatchResult>> for ResultList {
    fn from(items: Vec<MatchResult>) -> Self {
        Self { items }
    }
}
