//! Keyboard selection inside the suggestion list.

/// Selection cursor over the current suggestions.
///
/// `Down`/`Up` wrap around; nothing is selected until the first move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SuggestionNav {
    selected: Option<usize>,
    len: usize,
}

impl SuggestionNav {
    /// Cursor for an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets the cursor for a new suggestion list of `len` items.
    pub fn reset(&mut self, len: usize) {
        self.selected = None;
        self.len = len;
    }

    /// Selected index, if any.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Moves down, wrapping to the top.
    pub fn next(&mut self) {
        if self.len == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) if i + 1 < self.len => i + 1,
            Some(_) => 0,
            None => 0,
        });
    }

    /// Moves up, wrapping to the bottom.
    pub fn previous(&mut self) {
        if self.len == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            Some(0) | None => self.len - 1,
            Some(i) => i - 1,
        });
    }

    /// Confirms the selection; the first item when nothing was highlighted.
    #[must_use]
    pub fn confirm(&self) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        Some(self.selected.unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_both_ways() {
        let mut nav = SuggestionNav::new();
        nav.reset(3);
        assert_eq!(nav.selected(), None);

        nav.next();
        nav.next();
        nav.next();
        assert_eq!(nav.selected(), Some(2));
        nav.next();
        assert_eq!(nav.selected(), Some(0));
        nav.previous();
        assert_eq!(nav.selected(), Some(2));
    }

    #[test]
    fn test_previous_from_nothing_selects_last() {
        let mut nav = SuggestionNav::new();
        nav.reset(4);
        nav.previous();
        assert_eq!(nav.selected(), Some(3));
    }

    #[test]
    fn test_empty_list() {
        let mut nav = SuggestionNav::new();
        nav.next();
        nav.previous();
        assert_eq!(nav.selected(), None);
        assert_eq!(nav.confirm(), None);
    }

    #[test]
    fn test_confirm_defaults_to_first() {
        let mut nav = SuggestionNav::new();
        nav.reset(2);
        assert_eq!(nav.confirm(), Some(0));
        nav.previous();
        assert_eq!(nav.confirm(), Some(1));
        nav.reset(2);
        assert_eq!(nav.selected(), None);
    }
}
