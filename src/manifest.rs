//! Remote topic manifest.
//!
//! The manifest is a JSON object mapping section names to ordered arrays of
//! `{title, path}` entries, fetched once per session from `menu.json` at the
//! remote base URL. Section order and entry order follow the JSON document.
//!
//! Loading is deliberately tolerant: a section whose value is not an array
//! is kept in the section list (so the topic menu still shows it) but
//! carries no entries, matching how downstream consumers skip it instead of
//! rejecting the whole manifest.

use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::OnceCell;
use tracing::{debug, warn};

use crate::error::ManifestError;
use crate::fetch::Fetch;

/// Relative path of the manifest document.
pub const MANIFEST_PATH: &str = "menu.json";

/// One topic entry inside a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicEntry {
    /// Display title, unique within its section.
    pub title: String,
    /// Document path relative to the remote base URL.
    pub path: String,
}

/// A section of the manifest: a name plus its ordered entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    entries: Vec<TopicEntry>,
    well_formed: bool,
}

impl Section {
    /// The section's entries, empty when the raw value was not an array.
    #[must_use]
    pub fn entries(&self) -> &[TopicEntry] {
        &self.entries
    }

    /// Whether the raw JSON value for this section was an array.
    #[must_use]
    pub const fn is_well_formed(&self) -> bool {
        self.well_formed
    }
}

/// The parsed topic manifest.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Manifest {
    sections: IndexMap<String, Section>,
}

impl Manifest {
    /// Parses a manifest from raw JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Parse`] when the body is not a JSON object.
    /// Malformed section values and entries are skipped, not rejected.
    pub fn parse(raw: &str) -> Result<Self, ManifestError> {
        let raw_sections: IndexMap<String, Value> = serde_json::from_str(raw)?;

        let mut sections = IndexMap::with_capacity(raw_sections.len());
        for (name, value) in raw_sections {
            let section = match value {
                Value::Array(items) => {
                    let entries = items
                        .into_iter()
                        .filter_map(|item| match serde_json::from_value::<TopicEntry>(item) {
                            Ok(entry) => Some(entry),
                            Err(e) => {
                                warn!(section = %name, error = %e, "skipping malformed entry");
                                None
                            }
                        })
                        .collect();
                    Section {
                        entries,
                        well_formed: true,
                    }
                }
                _ => {
                    warn!(section = %name, "section value is not an array");
                    Section {
                        entries: Vec::new(),
                        well_formed: false,
                    }
                }
            };
            sections.insert(name, section);
        }

        Ok(Self { sections })
    }

    /// Section names in document order, including malformed ones.
    ///
    /// The topic menu renders every key; only the sidebar and search skip
    /// sections without entries.
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// The first section name, if any.
    #[must_use]
    pub fn first_section(&self) -> Option<&str> {
        self.sections.keys().next().map(String::as_str)
    }

    /// Entries of a section, empty for unknown or malformed sections.
    #[must_use]
    pub fn entries(&self, section: &str) -> &[TopicEntry] {
        self.sections
            .get(section)
            .map_or(&[], |section| section.entries())
    }

    /// The entry auto-selected when a section is opened: the one titled
    /// `guide` (case-insensitive) or else the first entry.
    #[must_use]
    pub fn default_entry(&self, section: &str) -> Option<&TopicEntry> {
        let entries = self.entries(section);
        entries
            .iter()
            .find(|entry| entry.title.eq_ignore_ascii_case("guide"))
            .or_else(|| entries.first())
    }

    /// All `(section, entry)` pairs in section-then-insertion order.
    pub fn flatten(&self) -> impl Iterator<Item = (&str, &TopicEntry)> {
        self.sections.iter().flat_map(|(name, section)| {
            section
                .entries()
                .iter()
                .map(move |entry| (name.as_str(), entry))
        })
    }

    /// Number of sections, malformed ones included.
    #[must_use]
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Whether the manifest has no sections at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Session-scoped manifest loader.
///
/// Fetches and parses the manifest once; later calls return the cached
/// `Arc`. A failed load is not cached, so the next call tries again.
pub struct ManifestLoader {
    fetcher: Arc<dyn Fetch>,
    cache: OnceCell<Arc<Manifest>>,
}

impl ManifestLoader {
    /// Creates a loader over the given source.
    #[must_use]
    pub fn new(fetcher: Arc<dyn Fetch>) -> Self {
        Self {
            fetcher,
            cache: OnceCell::new(),
        }
    }

    /// Loads the manifest, fetching at most once per session.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError`] on transport, status, or parse failure.
    pub async fn load(&self) -> Result<Arc<Manifest>, ManifestError> {
        self.cache
            .get_or_try_init(|| async {
                let raw = self.fetcher.fetch_text(MANIFEST_PATH).await?;
                let manifest = Manifest::parse(&raw)?;
                debug!(sections = manifest.section_count(), "manifest loaded");
                Ok(Arc::new(manifest))
            })
            .await
            .cloned()
    }
}
