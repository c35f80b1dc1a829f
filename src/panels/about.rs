//! About panel.
//!
//! Unlike the other panels, About also matches against a curated keyword
//! list in both directions, so short or partial queries like "photo" or
//! longer ones like "who is the developer" still surface it.

use serde::Deserialize;

use super::PanelEntry;

/// Curated keywords the About panel answers to.
pub const ABOUT_KEYWORDS: &[&str] = &[
    "about",
    "bio",
    "background",
    "developer",
    "engineer",
    "experience",
    "mentoring",
    "photography",
    "running",
    "coffee",
    "hobbies",
];

/// The about-me block.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AboutSection {
    /// Key
    pub id: String,
    /// Section headline
    pub heading: String,
    /// Body paragraphs
    pub paragraphs: Vec<String>,
    /// Short interest tags
    #[serde(default)]
    pub interests: Vec<String>,
}

impl PanelEntry for AboutSection {
    fn key(&self) -> &str {
        &self.id
    }

    fn heading(&self) -> &str {
        &self.heading
    }

    fn lines(&self) -> Vec<String> {
        let mut lines = self.paragraphs.clone();
        if !self.interests.is_empty() {
            lines.push(format!("Interests: {}", self.interests.join(" · ")));
        }
        lines
    }

    fn search_fields(&self) -> Vec<&str> {
        std::iter::once(self.heading.as_str())
            .chain(self.paragraphs.iter().map(String::as_str))
            .chain(self.interests.iter().map(String::as_str))
            .collect()
    }
}
