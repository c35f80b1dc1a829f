//! Help overlay (F1) listing every shortcut from the registry.

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
use crate::shortcuts::{Action, KeyBinding, ShortcutRegistry, CONTEXT_MAIN, CONTEXT_MODAL};

/// State for the help overlay.
#[derive(Debug, Clone)]
pub struct HelpOverlay {
    main: Vec<(KeyBinding, Action)>,
    modal: Vec<(KeyBinding, Action)>,
    scroll_offset: u16,
}

impl HelpOverlay {
    /// Builds the overlay from the live bindings.
    #[must_use]
    pub fn new(registry: &ShortcutRegistry) -> Self {
        Self {
            main: registry.bindings_for(CONTEXT_MAIN),
            modal: registry.bindings_for(CONTEXT_MODAL),
            scroll_offset: 0,
        }
    }

    fn section<'a>(
        title: &'a str,
        bindings: &'a [(KeyBinding, Action)],
        theme: &Theme,
    ) -> Vec<Line<'a>> {
        let mut lines = vec![Line::from(Span::styled(
            format!("═══ {title} ═══"),
            Style::default()
                .fg(theme.link)
                .add_modifier(Modifier::BOLD),
        ))];
        lines.extend(bindings.iter().map(|(binding, action)| {
            Line::from(vec![
                Span::styled(
                    format!("  {:<12}", binding.label()),
                    Style::default().fg(theme.success),
                ),
                Span::styled(action.description(), Style::default().fg(theme.text)),
            ])
        }));
        lines.push(Line::from(""));
        lines
    }
}

impl Component for HelpOverlay {
    fn handle_input(&mut self, key: KeyEvent) -> Option<ComponentEvent> {
        match key.code {
            KeyCode::Up => self.scroll_offset = self.scroll_offset.saturating_sub(1),
            KeyCode::Down => self.scroll_offset = self.scroll_offset.saturating_add(1),
            KeyCode::Char('q') | KeyCode::F(1) => return Some(ComponentEvent::Close),
            _ => {}
        }
        None
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let mut lines = Self::section("PAGE", &self.main, theme);
        lines.extend(Self::section("DIALOGS", &self.modal, theme));
        lines.push(Line::from(Span::styled(
            "Type anywhere on the page to search.",
            Style::default().fg(theme.text_muted),
        )));

        f.render_widget(Paragraph::new(lines).scroll((self.scroll_offset, 0)), area);
    }

    fn title(&self) -> &'static str {
        " Help "
    }
}
