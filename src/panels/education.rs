//! Education panel entries.

use serde::Deserialize;

use super::PanelEntry;

/// A degree or certificate.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EducationEntry {
    /// Key
    pub id: String,
    /// Degree or certificate name
    pub degree: String,
    /// Issuing institution
    pub institution: String,
    /// Years attended / year awarded
    pub period: String,
    /// Highlights
    #[serde(default)]
    pub details: Vec<String>,
}

impl PanelEntry for EducationEntry {
    fn key(&self) -> &str {
        &self.id
    }

    fn heading(&self) -> &str {
        &self.degree
    }

    fn lines(&self) -> Vec<String> {
        let mut lines = vec![format!("{} ({})", self.institution, self.period)];
        lines.extend(self.details.iter().map(|d| format!("• {d}")));
        lines
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.degree.as_str(), self.institution.as_str()];
        fields.extend(self.details.iter().map(String::as_str));
        fields
    }
}
