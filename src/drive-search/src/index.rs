//! Lower-cased view of a snapshot, built once per load.

use std::collections::HashSet;

use crate::snapshot::{FileRecord, IndexSnapshot};

/// Searchable fields of one record, lower-cased.
#[derive(Debug, Clone)]
pub struct IndexedRecord {
    /// File name.
    pub name: String,

    /// Keywords followed by romanized keywords.
    pub keywords: Vec<String>,
}

impl IndexedRecord {
    fn new(record: &FileRecord) -> Self {
        let keywords = record
            .keywords
            .iter()
            .chain(record.romaji_keywords.iter())
            .map(|k| k.to_lowercase())
            .collect();

        Self {
            name: record.name.to_lowercase(),
            keywords,
        }
    }

    /// Whether `term` occurs in the name or any keyword.
    pub fn contains(&self, term: &str) -> bool {
        self.name_contains(term) || self.keywords.iter().any(|k| k.contains(term))
    }

    /// Whether `term` occurs in the name.
    pub fn name_contains(&self, term: &str) -> bool {
        self.name.contains(term)
    }
}

/// Snapshot plus its searchable view.
///
/// `records[i]` always describes `snapshot.files[i]`.
#[derive(Debug)]
pub struct SearchIndex {
    snapshot: IndexSnapshot,
    records: Vec<IndexedRecord>,
}

impl SearchIndex {
    /// Builds the searchable view of a snapshot.
    pub fn build(snapshot: IndexSnapshot) -> Self {
        let mut seen = HashSet::with_capacity(snapshot.files.len());
        for file in &snapshot.files {
            if !seen.insert(file.id.as_str()) {
                tracing::warn!(id = %file.id, name = %file.name, "Duplicate file id in snapshot");
            }
        }

        let records = snapshot.files.iter().map(IndexedRecord::new).collect();
        Self { snapshot, records }
    }

    /// The snapshot this index was built from.
    pub fn snapshot(&self) -> &IndexSnapshot {
        &self.snapshot
    }

    /// Iterates over `(file, searchable fields)` in snapshot order.
    pub fn entries(&self) -> impl Iterator<Item = (&FileRecord, &IndexedRecord)> {
        self.snapshot.files.iter().zip(self.records.iter())
    }

    /// Number of indexed files.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the index holds no files.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
