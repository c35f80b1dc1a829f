//! Viewport override from a URL-style query string.

use serde::Serialize;

use crate::constants::DESKTOP_PARAM;

/// Terminal width at which the responsive layout goes two-column.
pub const DESKTOP_MIN_WIDTH: u16 = 100;

/// How the page chooses its column layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewportMode {
    /// Follow the available width
    #[default]
    Responsive,
    /// Always use the wide layout
    ForceDesktop,
}

impl ViewportMode {
    /// Reads the `desktop` parameter from a query string like `?a=1&desktop`.
    ///
    /// A bare `desktop`, `desktop=1` or `desktop=true` forces desktop;
    /// anything else, including absence, is responsive.
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        let query = query.trim().trim_start_matches('?');
        let forced = query
            .split('&')
            .filter_map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (key.trim() == DESKTOP_PARAM).then(|| value.trim().to_ascii_lowercase())
            })
            .last()
            .is_some_and(|value| matches!(value.as_str(), "" | "1" | "true"));

        if forced {
            Self::ForceDesktop
        } else {
            Self::Responsive
        }
    }

    /// Whether the two-column layout applies at `width` columns.
    #[must_use]
    pub fn is_wide(&self, width: u16) -> bool {
        match self {
            Self::ForceDesktop => true,
            Self::Responsive => width >= DESKTOP_MIN_WIDTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forced_forms() {
        for query in ["desktop", "?desktop", "desktop=1", "desktop=true", "a=2&desktop=TRUE"] {
            assert_eq!(ViewportMode::from_query(query), ViewportMode::ForceDesktop, "{query}");
        }
    }

    #[test]
    fn test_responsive_forms() {
        for query in ["", "?", "desktop=0", "desktop=false", "desktops", "mobile=1"] {
            assert_eq!(ViewportMode::from_query(query), ViewportMode::Responsive, "{query}");
        }
    }

    #[test]
    fn test_last_occurrence_wins() {
        assert_eq!(
            ViewportMode::from_query("desktop&desktop=0"),
            ViewportMode::Responsive
        );
    }

    #[test]
    fn test_is_wide() {
        assert!(!ViewportMode::Responsive.is_wide(80));
        assert!(ViewportMode::Responsive.is_wide(DESKTOP_MIN_WIDTH));
        assert!(ViewportMode::ForceDesktop.is_wide(40));
    }
}
