//! Case study panel entries.

use serde::Deserialize;

use super::PanelEntry;

/// A client project write-up.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CaseStudy {
    /// Key
    pub id: String,
    /// Project title
    pub title: String,
    /// Client description
    pub client: String,
    /// One-line summary
    pub summary: String,
    /// The problem
    pub challenge: String,
    /// What was built
    pub solution: String,
    /// Technology tags
    #[serde(default)]
    pub tags: Vec<String>,
}

impl PanelEntry for CaseStudy {
    fn key(&self) -> &str {
        &self.id
    }

    fn heading(&self) -> &str {
        &self.title
    }

    fn lines(&self) -> Vec<String> {
        vec![
            format!("{} · {}", self.client, self.summary),
            format!("Challenge: {}", self.challenge),
            format!("Solution: {}", self.solution),
            format!("Tags: {}", self.tags.join(", ")),
        ]
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.title.as_str(),
            self.summary.as_str(),
            self.challenge.as_str(),
            self.solution.as_str(),
        ];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }
}
