//! Catalog search and the per-panel match predicate.
//!
//! The catalog feeds the suggestion list under the search box. Content panels
//! never read it; they run [`MatchRule::matches`] over their own fields.

pub mod matcher;
pub mod nav;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::SUGGESTION_LIMIT;

pub use matcher::{matches, normalize_query, MatchRule};
pub use nav::SuggestionNav;

/// One searchable record shown in the suggestion list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Grouping label (e.g. "Case Study", "Skill")
    pub category: String,
    /// Display title
    pub title: String,
    /// Space-separated keyword blob
    pub keywords: String,
}

impl CatalogEntry {
    /// Creates an entry.
    pub fn new(
        category: impl Into<String>,
        title: impl Into<String>,
        keywords: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            title: title.into(),
            keywords: keywords.into(),
        }
    }

    /// Case-insensitive substring test against title or keywords.
    ///
    /// `needle` must already be normalized.
    fn contains(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.keywords.to_lowercase().contains(needle)
    }
}

/// Database schema of the embedded catalog.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[allow(dead_code)]
    version: String,
    entries: Vec<CatalogEntry>,
}

/// Fixed catalog with suggestion lookup.
#[derive(Debug, Clone)]
pub struct SearchIndex {
    entries: Vec<CatalogEntry>,
}

impl SearchIndex {
    /// Loads the catalog embedded in the binary.
    pub fn load() -> Result<Self> {
        let json_data = include_str!("catalog.json");
        let file: CatalogFile =
            serde_json::from_str(json_data).context("Failed to parse embedded catalog.json")?;
        Ok(Self::new(file.entries))
    }

    /// Builds an index over `entries`, kept in the given order.
    #[must_use]
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// All entries in declaration order.
    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Suggestions for `query`.
    ///
    /// Case-insensitive substring match on title or keywords, catalog order,
    /// at most [`SUGGESTION_LIMIT`] entries. A blank query suggests nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use folio::search::SearchIndex;
    ///
    /// let index = SearchIndex::load().unwrap();
    /// let titles: Vec<_> = index.suggest("aws").iter().map(|e| e.title.as_str()).collect();
    /// assert!(titles.contains(&"Secure Analytics Integration"));
    /// assert!(index.suggest("").is_empty());
    /// ```
    #[must_use]
    pub fn suggest(&self, query: &str) -> Vec<&CatalogEntry> {
        let needle = normalize_query(query);
        if needle.is_empty() {
            return Vec::new();
        }

        self.entries
            .iter()
            .filter(|entry| entry.contains(&needle))
            .take(SUGGESTION_LIMIT)
            .collect()
    }
}
