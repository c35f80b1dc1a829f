//! Accessibility options dialog (Alt+A).

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::component::{Component, ComponentEvent};
use super::Theme;
use crate::models::AccessibilitySettings;

const ROWS: usize = 4;

/// Dialog state.
#[derive(Debug, Clone)]
pub struct AccessibilityDialog {
    settings: AccessibilitySettings,
    selected: usize,
}

impl AccessibilityDialog {
    /// Opens the dialog on the current settings.
    pub fn new(settings: AccessibilitySettings) -> Self {
        Self {
            settings,
            selected: 0,
        }
    }

    /// Settings as edited so far.
    pub fn settings(&self) -> AccessibilitySettings {
        self.settings
    }

    fn changed(&self) -> Option<ComponentEvent> {
        Some(ComponentEvent::AccessibilityChanged(self.settings))
    }

    fn adjust(&mut self, forward: bool) -> Option<ComponentEvent> {
        match self.selected {
            0 if forward => self.settings.increase_font(),
            0 => self.settings.decrease_font(),
            1 => self.settings.high_contrast = !self.settings.high_contrast,
            2 => self.settings.reduced_motion = !self.settings.reduced_motion,
            _ => self.settings.enhanced_focus = !self.settings.enhanced_focus,
        }
        self.changed()
    }
}

impl Component for AccessibilityDialog {
    fn handle_input(&mut self, key: KeyEvent) -> Option<ComponentEvent> {
        match key.code {
            KeyCode::Up => {
                self.selected = (self.selected + ROWS - 1) % ROWS;
                None
            }
            KeyCode::Down | KeyCode::Tab => {
                self.selected = (self.selected + 1) % ROWS;
                None
            }
            KeyCode::Left | KeyCode::Char('-') => self.adjust(false),
            KeyCode::Right | KeyCode::Char('+' | '=') | KeyCode::Char(' ') | KeyCode::Enter => {
                self.adjust(true)
            }
            KeyCode::Char('q') => Some(ComponentEvent::Close),
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let check = |on: bool| if on { "[x]" } else { "[ ]" };
        let rows = [
            format!("Font size       ◀ {:>3}% ▶", self.settings.font_size),
            format!("High contrast   {}", check(self.settings.high_contrast)),
            format!("Reduced motion  {}", check(self.settings.reduced_motion)),
            format!("Enhanced focus  {}", check(self.settings.enhanced_focus)),
        ];

        let mut lines: Vec<Line> = rows
            .into_iter()
            .enumerate()
            .map(|(i, text)| {
                let style = if i == self.selected {
                    Style::default()
                        .fg(theme.link_hover)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.text)
                };
                let marker = if i == self.selected { "› " } else { "  " };
                Line::from(Span::styled(format!("{marker}{text}"), style))
            })
            .collect();

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "↑↓ select  ←→/Space change  Esc close",
            Style::default().fg(theme.text_muted),
        )));

        f.render_widget(Paragraph::new(lines), area);
    }

    fn title(&self) -> &'static str {
        " Accessibility "
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(dialog: &mut AccessibilityDialog, code: KeyCode) -> Option<ComponentEvent> {
        dialog.handle_input(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_font_size_steps() {
        let mut dialog = AccessibilityDialog::new(AccessibilitySettings::default());
        let event = press(&mut dialog, KeyCode::Right);
        assert_eq!(dialog.settings().font_size, 110);
        assert_eq!(event, Some(ComponentEvent::AccessibilityChanged(dialog.settings())));

        press(&mut dialog, KeyCode::Left);
        press(&mut dialog, KeyCode::Left);
        assert_eq!(dialog.settings().font_size, 90);
    }

    #[test]
    fn test_toggle_rows() {
        let mut dialog = AccessibilityDialog::new(AccessibilitySettings::default());
        press(&mut dialog, KeyCode::Down);
        press(&mut dialog, KeyCode::Char(' '));
        assert!(dialog.settings().high_contrast);

        press(&mut dialog, KeyCode::Up);
        press(&mut dialog, KeyCode::Up);
        // wrapped to the last row
        press(&mut dialog, KeyCode::Enter);
        assert!(dialog.settings().enhanced_focus);
    }

    #[test]
    fn test_navigation_emits_nothing() {
        let mut dialog = AccessibilityDialog::new(AccessibilitySettings::default());
        assert_eq!(press(&mut dialog, KeyCode::Down), None);
        assert_eq!(press(&mut dialog, KeyCode::Char('q')), Some(ComponentEvent::Close));
    }
}
