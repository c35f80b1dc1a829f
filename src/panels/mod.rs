//! Content panels and the page that stacks them.
//!
//! Each panel owns a static dataset and a [`MatchRule`]. Given the shared
//! search query it decides on its own which entries to show, whether to show
//! itself at all, and which substrings to highlight. Panels never consult each
//! other, so two panels may disagree about the same query.

pub mod about;
pub mod case_studies;
pub mod education;
pub mod learning_wall;
pub mod page;

use serde::Serialize;
use std::fmt;

use crate::highlight::{highlight, Segment};
use crate::search::{normalize_query, MatchRule};

pub use about::AboutSection;
pub use case_studies::CaseStudy;
pub use education::EducationEntry;
pub use learning_wall::LearningPost;
pub use page::{Page, PageView, ScrollTarget, ScrollTracker};

/// Identifies a panel on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelId {
    /// About me
    About,
    /// Degrees and certificates
    Education,
    /// Client case studies
    CaseStudies,
    /// Short learning notes
    LearningWall,
}

impl PanelId {
    /// Section title.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::About => "About Me",
            Self::Education => "Education",
            Self::CaseStudies => "Case Studies",
            Self::LearningWall => "Learning Wall",
        }
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// A record a panel can show and search.
pub trait PanelEntry {
    /// Stable key, unique within its panel.
    fn key(&self) -> &str;

    /// Headline of the entry.
    fn heading(&self) -> &str;

    /// Body lines in display order.
    fn lines(&self) -> Vec<String>;

    /// Text the panel's match rule runs against.
    fn search_fields(&self) -> Vec<&str>;
}

/// One rendered entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemView {
    /// Entry key
    pub key: String,
    /// Highlighted headline
    pub heading: Vec<Segment>,
    /// Highlighted body lines
    pub lines: Vec<Vec<Segment>>,
}

impl ItemView {
    /// Whether any part of the entry carries a highlight.
    #[must_use]
    pub fn is_highlighted(&self) -> bool {
        self.heading
            .iter()
            .chain(self.lines.iter().flatten())
            .any(|s| s.matched)
    }
}

/// Result of filtering one panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelView {
    /// Which panel
    pub id: PanelId,
    /// False when a query is active and nothing matched
    pub visible: bool,
    /// Entries to show
    pub items: Vec<ItemView>,
}

/// A titled list of entries with its own match rule.
#[derive(Debug, Clone)]
pub struct Panel<T: PanelEntry> {
    id: PanelId,
    rule: MatchRule,
    entries: Vec<T>,
}

impl<T: PanelEntry> Panel<T> {
    /// Creates a panel.
    pub fn new(id: PanelId, rule: MatchRule, entries: Vec<T>) -> Self {
        Self { id, rule, entries }
    }

    /// Panel id.
    pub fn id(&self) -> PanelId {
        self.id
    }

    /// Match rule in use.
    pub fn rule(&self) -> MatchRule {
        self.rule
    }

    /// Static entries.
    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    /// Whether `entry` matches `query` under this panel's rule.
    pub fn entry_matches(&self, entry: &T, query: &str) -> bool {
        self.rule.matches(query, &entry.search_fields())
    }

    /// Filters and highlights the panel for `query`.
    ///
    /// A blank query shows every entry without highlights.
    pub fn filter(&self, query: &str) -> PanelView {
        let active = !normalize_query(query).is_empty();
        let items: Vec<ItemView> = self
            .entries
            .iter()
            .filter(|entry| self.entry_matches(entry, query))
            .map(|entry| ItemView {
                key: entry.key().to_string(),
                heading: highlight(entry.heading(), query),
                lines: entry
                    .lines()
                    .iter()
                    .map(|line| highlight(line, query))
                    .collect(),
            })
            .collect();

        PanelView {
            id: self.id,
            visible: !active || !items.is_empty(),
            items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Note(&'static str, &'static str);

    impl PanelEntry for Note {
        fn key(&self) -> &str {
            self.0
        }

        fn heading(&self) -> &str {
            self.0
        }

        fn lines(&self) -> Vec<String> {
            vec![self.1.to_string()]
        }

        fn search_fields(&self) -> Vec<&str> {
            vec![self.0, self.1]
        }
    }

    fn panel() -> Panel<Note> {
        Panel::new(
            PanelId::LearningWall,
            MatchRule::Substring,
            vec![Note("Rust", "ownership"), Note("Kafka", "streams")],
        )
    }

    #[test]
    fn test_blank_query_shows_all_without_highlight() {
        let view = panel().filter("  ");
        assert!(view.visible);
        assert_eq!(view.items.len(), 2);
        assert!(view.items.iter().all(|item| !item.is_highlighted()));
    }

    #[test]
    fn test_query_filters_and_highlights() {
        let view = panel().filter("STREAM");
        assert!(view.visible);
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].key, "Kafka");
        assert!(view.items[0].is_highlighted());
    }

    #[test]
    fn test_no_match_hides_panel() {
        let view = panel().filter("terraform");
        assert!(!view.visible);
        assert!(view.items.is_empty());
    }

    #[test]
    fn test_empty_panel_visible_without_query() {
        let empty: Panel<Note> = Panel::new(PanelId::About, MatchRule::Substring, Vec::new());
        assert!(empty.filter("").visible);
        assert!(!empty.filter("x").visible);
    }
}
