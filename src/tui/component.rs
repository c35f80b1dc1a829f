//! Component trait pattern for TUI dialogs.
//!
//! Dialogs own their state, handle keys, and report changes to the parent
//! through [`ComponentEvent`] so every preference change still goes through
//! the preference context.

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use crate::models::{AccessibilitySettings, CustomizationPatch, Rating};
use crate::tui::Theme;

/// A component that can be rendered and handle input.
pub trait Component {
    /// Handle keyboard input.
    ///
    /// Returns `Some(event)` if the parent has to act.
    fn handle_input(&mut self, key: KeyEvent) -> Option<ComponentEvent>;

    /// Render the component within `area`.
    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme);

    /// Title shown on the dialog border.
    fn title(&self) -> &'static str;
}

/// Events emitted by dialogs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentEvent {
    /// New accessibility settings, applied immediately
    AccessibilityChanged(AccessibilitySettings),
    /// Customization patch, applied immediately
    CustomizationChanged(CustomizationPatch),
    /// Restore default customization
    CustomizationReset,
    /// A rating was submitted
    Rated(Rating),
    /// The dialog is done
    Close,
}
