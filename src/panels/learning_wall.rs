//! Learning wall posts.

use serde::Deserialize;

use super::PanelEntry;

/// A short dated note.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LearningPost {
    /// Key
    pub id: String,
    /// Post title
    pub title: String,
    /// ISO date
    pub date: String,
    /// Post text
    pub body: String,
    /// Topic tags
    #[serde(default)]
    pub tags: Vec<String>,
}

impl PanelEntry for LearningPost {
    fn key(&self) -> &str {
        &self.id
    }

    fn heading(&self) -> &str {
        &self.title
    }

    fn lines(&self) -> Vec<String> {
        vec![
            self.body.clone(),
            format!("{} · #{}", self.date, self.tags.join(" #")),
        ]
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.body.as_str()];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }
}
