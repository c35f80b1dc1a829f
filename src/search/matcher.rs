//! Query normalization and the panel visibility predicate.

/// Trims and lower-cases a raw query.
#[must_use]
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Whether `query` matches any of `fields`.
///
/// A blank query matches everything (no filter active). Otherwise the
/// normalized query must be a substring of at least one lower-cased field.
///
/// # Examples
///
/// ```
/// use folio::search::matches;
///
/// assert!(matches("", &["anything"]));
/// assert!(matches("dock", &["Kafka", "Docker"]));
/// assert!(!matches("rust", &["Kafka", "Docker"]));
/// ```
#[must_use]
pub fn matches(query: &str, fields: &[&str]) -> bool {
    let needle = normalize_query(query);
    needle.is_empty() || contains_any(&needle, fields)
}

fn contains_any(needle: &str, fields: &[&str]) -> bool {
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Matching semantics chosen by a content panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchRule {
    /// Plain case-insensitive substring over the panel's fields.
    Substring,
    /// Substring over the fields, or bidirectional containment against a
    /// curated keyword list: a keyword containing the query, or the query
    /// containing a keyword, both count.
    KeywordAffinity(&'static [&'static str]),
}

impl MatchRule {
    /// Applies the rule.
    #[must_use]
    pub fn matches(&self, query: &str, fields: &[&str]) -> bool {
        let needle = normalize_query(query);
        if needle.is_empty() {
            return true;
        }

        match self {
            Self::Substring => contains_any(&needle, fields),
            Self::KeywordAffinity(keywords) => {
                contains_any(&needle, fields)
                    || keywords.iter().any(|keyword| {
                        let keyword = keyword.to_lowercase();
                        keyword.contains(&needle) || needle.contains(&keyword)
                    })
            }
        }
    }
}
