//! Title search over the manifest.
//!
//! The index is a flat projection of the manifest built once per session.
//! Queries are case-insensitive substring matches on the title, capped to
//! the first [`SEARCH_SUGGESTION_LIMIT`] hits in flattened order. There is
//! no ranking.

use serde::{Deserialize, Serialize};

use crate::config::schema::SEARCH_SUGGESTION_LIMIT;
use crate::manifest::Manifest;

/// One searchable record: a topic entry plus the section it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRecord {
    /// Section the entry belongs to.
    pub section: String,
    /// Entry title (the matched field).
    pub title: String,
    /// Document path relative to the base URL.
    pub path: String,
}

/// Flat, immutable search index over topic titles.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    records: Vec<SearchRecord>,
}

impl SearchIndex {
    /// Builds the index by flattening the manifest in section-then-insertion
    /// order. Sections without entries contribute nothing.
    #[must_use]
    pub fn build(manifest: &Manifest) -> Self {
        let records = manifest
            .flatten()
            .map(|(section, entry)| SearchRecord {
                section: section.to_string(),
                title: entry.title.clone(),
                path: entry.path.clone(),
            })
            .collect();
        Self { records }
    }

    /// All records, in index order.
    #[must_use]
    pub fn records(&self) -> &[SearchRecord] {
        &self.records
    }

    /// Number of records in the index.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the index is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Answers a query with at most [`SEARCH_SUGGESTION_LIMIT`] matches.
    ///
    /// Matching is a case-insensitive substring test on the title. An empty
    /// query is suppressed and yields no suggestions rather than matching
    /// everything.
    #[must_use]
    pub fn query(&self, text: &str) -> Vec<&SearchRecord> {
        if text.is_empty() {
            return Vec::new();
        }
        let needle = text.to_lowercase();
        self.records
            .iter()
            .filter(|record| record.title.to_lowercase().contains(&needle))
            .take(SEARCH_SUGGESTION_LIMIT)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest() -> Manifest {
        Manifest::parse(
            r#"{
                "python": [
                    {"title": "Guide", "path": "python/guide.md"},
                    {"title": "Basics", "path": "python/basics.md"},
                    {"title": "Advanced", "path": "python/advanced.md"}
                ],
                "sql": [
                    {"title": "Basics", "path": "sql/basics.md"}
                ]
            }"#,
        )
        .expect("valid manifest")
    }

    #[test]
    fn build_flattens_every_entry() {
        let index = SearchIndex::build(&manifest());
        assert_eq!(index.len(), 4);
        assert_eq!(index.records()[0].section, "python");
        assert_eq!(index.records()[3].path, "sql/basics.md");
    }

    #[test]
    fn empty_query_yields_nothing() {
        let index = SearchIndex::build(&manifest());
        assert!(index.query("").is_empty());
    }

    #[test]
    fn query_is_case_insensitive() {
        let index = SearchIndex::build(&manifest());
        let hits = index.query("bAsIcS");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].section, "python");
        assert_eq!(hits[1].section, "sql");
    }

    #[test]
    fn query_matches_substrings() {
        let index = SearchIndex::build(&manifest());
        let hits = index.query("van");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Advanced");
    }

    #[test]
    fn query_caps_at_suggestion_limit() {
        let raw: String = (0..20)
            .map(|i| format!(r#"{{"title": "Topic {i}", "path": "t/{i}.md"}}"#))
            .collect::<Vec<_>>()
            .join(",");
        let manifest = Manifest::parse(&format!(r#"{{"t": [{raw}]}}"#)).expect("valid");
        let index = SearchIndex::build(&manifest);

        let hits = index.query("topic");
        assert_eq!(hits.len(), SEARCH_SUGGESTION_LIMIT);
        // First-encountered order, no ranking
        assert_eq!(hits[0].title, "Topic 0");
        assert_eq!(hits[7].title, "Topic 7");
    }

    #[test]
    fn no_match_yields_nothing() {
        let index = SearchIndex::build(&manifest());
        assert!(index.query("zzz").is_empty());
    }
}
