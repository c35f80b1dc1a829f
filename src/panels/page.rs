//! The stacked page and scroll-to-first-match tracking.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::about::ABOUT_KEYWORDS;
use super::{
    AboutSection, CaseStudy, EducationEntry, LearningPost, Panel, PanelId, PanelView,
};
use crate::search::{normalize_query, MatchRule};

#[derive(Debug, Deserialize)]
struct ContentFile {
    #[allow(dead_code)]
    version: String,
    about: Vec<AboutSection>,
    education: Vec<EducationEntry>,
    case_studies: Vec<CaseStudy>,
    learning_wall: Vec<LearningPost>,
}

/// All content panels in document order.
#[derive(Debug, Clone)]
pub struct Page {
    /// About me
    pub about: Panel<AboutSection>,
    /// Education
    pub education: Panel<EducationEntry>,
    /// Case studies
    pub case_studies: Panel<CaseStudy>,
    /// Learning wall
    pub learning_wall: Panel<LearningPost>,
}

impl Page {
    /// Loads the embedded content.
    pub fn load() -> Result<Self> {
        let json = include_str!("content.json");
        Self::from_json(json)
    }

    /// Parses content from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: ContentFile =
            serde_json::from_str(json).context("Failed to parse panel content")?;

        Ok(Self {
            about: Panel::new(
                PanelId::About,
                MatchRule::KeywordAffinity(ABOUT_KEYWORDS),
                file.about,
            ),
            education: Panel::new(PanelId::Education, MatchRule::Substring, file.education),
            case_studies: Panel::new(
                PanelId::CaseStudies,
                MatchRule::Substring,
                file.case_studies,
            ),
            learning_wall: Panel::new(
                PanelId::LearningWall,
                MatchRule::Substring,
                file.learning_wall,
            ),
        })
    }

    /// Filters every panel for `query`.
    #[must_use]
    pub fn render(&self, query: &str) -> PageView {
        PageView {
            query: query.trim().to_string(),
            panels: vec![
                self.about.filter(query),
                self.education.filter(query),
                self.case_studies.filter(query),
                self.learning_wall.filter(query),
            ],
        }
    }
}

/// Every panel's view for one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    /// Trimmed query
    pub query: String,
    /// Panel views in document order
    pub panels: Vec<PanelView>,
}

impl PageView {
    /// View for one panel.
    #[must_use]
    pub fn panel(&self, id: PanelId) -> Option<&PanelView> {
        self.panels.iter().find(|p| p.id == id)
    }

    /// Panels that are showing.
    pub fn visible(&self) -> impl Iterator<Item = &PanelView> {
        self.panels.iter().filter(|p| p.visible)
    }

    /// Total entries shown across panels.
    #[must_use]
    pub fn match_count(&self) -> usize {
        self.visible().map(|p| p.items.len()).sum()
    }

    /// First matched entry in document order, if a query is active.
    #[must_use]
    pub fn first_match(&self) -> Option<ScrollTarget> {
        if self.query.is_empty() {
            return None;
        }
        self.visible().find_map(|panel| {
            panel.items.first().map(|item| ScrollTarget {
                panel: panel.id,
                key: item.key.clone(),
            })
        })
    }
}

/// Where the view should scroll to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScrollTarget {
    /// Panel holding the entry
    pub panel: PanelId,
    /// Entry key
    pub key: String,
}

/// Emits one scroll request per change of the normalized query.
#[derive(Debug, Clone, Default)]
pub struct ScrollTracker {
    last_query: Option<String>,
}

impl ScrollTracker {
    /// Creates a tracker that has seen no query yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `view` and returns a target if the query changed and matched.
    pub fn observe(&mut self, view: &PageView) -> Option<ScrollTarget> {
        let normalized = normalize_query(&view.query);
        if self.last_query.as_deref() == Some(normalized.as_str()) {
            return None;
        }
        self.last_query = Some(normalized);
        view.first_match()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Page {
        Page::load().unwrap()
    }

    #[test]
    fn test_embedded_content_loads() {
        let page = page();
        assert_eq!(page.about.entries().len(), 1);
        assert!(!page.education.entries().is_empty());
        assert!(!page.case_studies.entries().is_empty());
        assert!(!page.learning_wall.entries().is_empty());
    }

    #[test]
    fn test_document_order() {
        let view = page().render("");
        let ids: Vec<_> = view.panels.iter().map(|p| p.id).collect();
        assert_eq!(
            ids,
            vec![
                PanelId::About,
                PanelId::Education,
                PanelId::CaseStudies,
                PanelId::LearningWall
            ]
        );
    }

    #[test]
    fn test_docker_then_cleared() {
        let page = page();

        let view = page.render("Docker");
        assert!(!view.panel(PanelId::About).unwrap().visible);
        assert!(!view.panel(PanelId::Education).unwrap().visible);

        let cases = view.panel(PanelId::CaseStudies).unwrap();
        assert!(cases.visible);
        assert!(cases.items.iter().all(|i| i.is_highlighted()));
        let keys: Vec<_> = cases.items.iter().map(|i| i.key.as_str()).collect();
        assert_eq!(keys, vec!["inventory-sync", "monolith-migration"]);

        let wall = view.panel(PanelId::LearningWall).unwrap();
        assert!(wall.visible);
        assert_eq!(wall.items.len(), 1);

        let cleared = page.render("");
        assert!(cleared.panels.iter().all(|p| p.visible));
        assert!(cleared
            .panels
            .iter()
            .flat_map(|p| p.items.iter())
            .all(|i| !i.is_highlighted()));
        assert_eq!(
            cleared.panel(PanelId::CaseStudies).unwrap().items.len(),
            page.case_studies.entries().len()
        );
    }

    #[test]
    fn test_about_keyword_affinity() {
        let page = page();

        // partial keyword
        assert!(page.render("photo").panel(PanelId::About).unwrap().visible);
        // query containing a keyword
        let view = page.render("who is the developer");
        assert!(view.panel(PanelId::About).unwrap().visible);
        assert!(!view.panel(PanelId::Education).unwrap().visible);
    }

    #[test]
    fn test_about_keyword_match_without_text_hit_has_no_highlight() {
        let view = page().render("hobbies");
        let about = view.panel(PanelId::About).unwrap();
        assert!(about.visible);
        assert!(!about.items[0].is_highlighted());
    }

    #[test]
    fn test_first_match_follows_document_order() {
        let view = page().render("aws");
        assert_eq!(
            view.first_match(),
            Some(ScrollTarget {
                panel: PanelId::Education,
                key: "aws-sa".to_string()
            })
        );
        assert_eq!(page().render("").first_match(), None);
        assert_eq!(page().render("zzzz").first_match(), None);
    }

    #[test]
    fn test_scroll_tracker_once_per_change() {
        let page = page();
        let mut tracker = ScrollTracker::new();

        assert!(tracker.observe(&page.render("kafka")).is_some());
        // same normalized query, no second scroll
        assert!(tracker.observe(&page.render(" KAFKA ")).is_none());
        assert!(tracker.observe(&page.render("")).is_none());
        assert!(tracker.observe(&page.render("kafka")).is_some());
        assert!(tracker.observe(&page.render("zzzz")).is_none());
    }

    #[test]
    fn test_malformed_content_is_an_error() {
        assert!(Page::from_json("{").is_err());
    }
}
