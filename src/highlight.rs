//! Marks case-insensitive query occurrences inside text.

use regex::RegexBuilder;
use serde::Serialize;

/// A run of text, flagged when it is a query occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    /// Text with its original casing
    pub text: String,
    /// Whether this run matched the query
    pub matched: bool,
}

impl Segment {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            matched: false,
        }
    }

    fn hit(text: &str) -> Self {
        Self {
            text: text.to_string(),
            matched: true,
        }
    }
}

/// Splits `text` around case-insensitive occurrences of `query`.
///
/// The query is trimmed and matched literally; regex metacharacters such as
/// `(`, `*` or `.` are escaped. A blank query, or a query that never occurs,
/// yields one unmatched segment holding the whole text. Concatenating the
/// segments always reproduces `text`.
///
/// # Examples
///
/// ```
/// use folio::highlight::highlight;
///
/// let segments = highlight("Docker and docker-compose", "DOCKER");
/// let marked: Vec<_> = segments.iter().filter(|s| s.matched).map(|s| s.text.as_str()).collect();
/// assert_eq!(marked, vec!["Docker", "docker"]);
/// ```
#[must_use]
pub fn highlight(text: &str, query: &str) -> Vec<Segment> {
    let query = query.trim();
    if query.is_empty() {
        return vec![Segment::plain(text)];
    }

    let Ok(pattern) = RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
    else {
        return vec![Segment::plain(text)];
    };

    let mut segments = Vec::new();
    let mut last = 0;
    for found in pattern.find_iter(text) {
        if found.start() > last {
            segments.push(Segment::plain(&text[last..found.start()]));
        }
        segments.push(Segment::hit(found.as_str()));
        last = found.end();
    }

    if last < text.len() || segments.is_empty() {
        segments.push(Segment::plain(&text[last..]));
    }

    segments
}

/// True when any segment is a match.
#[must_use]
pub fn has_match(segments: &[Segment]) -> bool {
    segments.iter().any(|s| s.matched)
}
