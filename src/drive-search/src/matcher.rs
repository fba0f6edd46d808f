//! Keyword matching and ranking over a snapshot index.
//!
//! A query is lower-cased and split on whitespace into terms. A file matches
//! when every term is a substring of its name, one of its keywords, or one
//! of its romanized keywords. Matches are ranked by how many terms hit the
//! file name; ties keep snapshot order.
//!
//! A one-term query is the same rule with a single term: name hits (score 1)
//! come before keyword-only hits (score 0).

use std::cmp::Ordering;

use crate::index::{IndexedRecord, SearchIndex};
use crate::snapshot::FileRecord;

/// A normalized query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query {
    terms: Vec<String>,
}

impl Query {
    /// Lower-cases `raw` and splits it into whitespace-separated terms.
    pub fn parse(raw: &str) -> Self {
        let terms = raw
            .to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect();
        Self { terms }
    }

    /// The normalized terms, in query order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Whether the query has no terms (empty or whitespace-only input).
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Whether every term occurs somewhere in the record.
    pub fn matches(&self, record: &IndexedRecord) -> bool {
        !self.is_empty() && self.terms.iter().all(|term| record.contains(term))
    }

    /// Number of terms occurring in the record's name.
    pub fn name_score(&self, record: &IndexedRecord) -> usize {
        self.terms
            .iter()
            .filter(|term| record.name_contains(term))
            .count()
    }
}

/// A matched file with its ranking key.
#[derive(Debug, Clone, Copy)]
pub struct RankedMatch<'a> {
    /// The matched file.
    pub file: &'a FileRecord,

    /// Number of query terms found in the file name.
    pub score: usize,

    /// Position of the file in the snapshot.
    pub position: usize,
}

impl RankedMatch<'_> {
    /// Higher score first, then earlier snapshot position.
    fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .cmp(&self.score)
            .then_with(|| self.position.cmp(&other.position))
    }
}

/// Returns the best `limit` matches for `query`, best first.
pub fn rank<'a>(query: &Query, index: &'a SearchIndex, limit: usize) -> Vec<RankedMatch<'a>> {
    if query.is_empty() || limit == 0 {
        return Vec::new();
    }

    let mut matches: Vec<RankedMatch<'a>> = index
        .entries()
        .enumerate()
        .filter(|(_, (_, record))| query.matches(record))
        .map(|(position, (file, record))| RankedMatch {
            file,
            score: query.name_score(record),
            position,
        })
        .collect();

    matches.sort_by(|a, b| a.rank_cmp(b));
    matches.truncate(limit);
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::IndexSnapshot;
    use pretty_assertions::assert_eq;

    fn file(name: &str) -> FileRecord {
        FileRecord::new(name, name, "https://example.com", "text/plain", "Misc")
    }

    fn names(matches: &[RankedMatch<'_>]) -> Vec<String> {
        matches.iter().map(|m| m.file.name.clone()).collect()
    }

    #[test]
    fn test_query_parse() {
        let query = Query::parse("  Budget\t2024  Q1 ");
        assert_eq!(query.terms(), ["budget", "2024", "q1"]);

        assert!(Query::parse("").is_empty());
        assert!(Query::parse(" \t\n ").is_empty());
    }

    #[test]
    fn test_single_term_matches_name_or_keywords() {
        let index = SearchIndex::build(IndexSnapshot::new(vec![
            file("Budget 2024.xlsx").with_keywords(["予算"]),
            file("notes.txt"),
            file("plan.docx").with_romaji_keywords(["yosan"]),
        ]));

        assert_eq!(names(&rank(&Query::parse("BUDGET"), &index, 20)), ["Budget 2024.xlsx"]);
        assert_eq!(names(&rank(&Query::parse("予算"), &index, 20)), ["Budget 2024.xlsx"]);
        assert_eq!(names(&rank(&Query::parse("yos"), &index, 20)), ["plan.docx"]);
        assert!(rank(&Query::parse("missing"), &index, 20).is_empty());
    }

    #[test]
    fn test_single_term_name_hits_rank_first() {
        let index = SearchIndex::build(IndexSnapshot::new(vec![
            file("meeting.txt").with_keywords(["report"]),
            file("report-a.pdf"),
            file("summary.pdf").with_romaji_keywords(["report"]),
            file("report-b.pdf"),
        ]));

        let ranked = rank(&Query::parse("report"), &index, 20);
        assert_eq!(
            names(&ranked),
            ["report-a.pdf", "report-b.pdf", "meeting.txt", "summary.pdf"]
        );
    }

    #[test]
    fn test_multi_term_requires_every_term() {
        let index = SearchIndex::build(IndexSnapshot::new(vec![
            file("budget 2024.xlsx"),
            file("budget 2023.xlsx"),
            file("2024 plan.docx").with_keywords(["budget"]),
        ]));

        let ranked = rank(&Query::parse("budget 2024"), &index, 20);
        assert_eq!(names(&ranked), ["budget 2024.xlsx", "2024 plan.docx"]);
        assert_eq!(ranked[0].score, 2);
        assert_eq!(ranked[1].score, 1);
    }

    #[test]
    fn test_multi_term_ties_keep_snapshot_order() {
        let index = SearchIndex::build(IndexSnapshot::new(vec![
            file("z design review.md"),
            file("a design.md").with_keywords(["review"]),
            file("m design review.md"),
            file("b review.md").with_keywords(["design"]),
        ]));

        let ranked = rank(&Query::parse("design review"), &index, 20);
        assert_eq!(
            names(&ranked),
            ["z design review.md", "m design review.md", "a design.md", "b review.md"]
        );
    }

    #[test]
    fn test_rank_respects_limit() {
        let files = (0..25).map(|i| file(&format!("report {i:02}.pdf"))).collect();
        let index = SearchIndex::build(IndexSnapshot::new(files));

        let ranked = rank(&Query::parse("report"), &index, 20);
        assert_eq!(ranked.len(), 20);
        assert_eq!(ranked[0].file.name, "report 00.pdf");
        assert_eq!(ranked[19].file.name, "report 19.pdf");

        assert!(rank(&Query::parse("report"), &index, 0).is_empty());
    }

    #[test]
    fn test_empty_query_matches_nothing() {
        let index = SearchIndex::build(IndexSnapshot::new(vec![file("a.txt")]));
        assert!(rank(&Query::parse("   "), &index, 20).is_empty());
    }
}
