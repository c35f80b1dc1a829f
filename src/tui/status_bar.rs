//! Status bar widget for notices, counters and shortcut hints

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Theme, ToastKind};
use crate::shortcuts::{Action, ShortcutRegistry, CONTEXT_MAIN, CONTEXT_MODAL};
use crate::storage::Storage;

/// Actions advertised in the hint line, in display order.
const MAIN_HINTS: [Action; 5] = [
    Action::ToggleHelp,
    Action::ClearSearch,
    Action::ToggleDarkMode,
    Action::ToggleLayout,
    Action::OpenCustomizer,
];

const MODAL_HINTS: [Action; 2] = [Action::CloseModal, Action::Quit];

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render<S: Storage>(f: &mut Frame, area: Rect, state: &AppState<S>, theme: &Theme) {
        let first = match &state.toast {
            Some(toast) => {
                let color = match toast.kind {
                    ToastKind::Info => theme.success,
                    ToastKind::Error => theme.error,
                };
                Line::from(Span::styled(
                    toast.message.clone(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ))
            }
            None => Self::info_line(state, theme),
        };

        let context = if state.modal.is_some() {
            CONTEXT_MODAL
        } else {
            CONTEXT_MAIN
        };
        let hints = Self::hints_line(&state.registry, context, theme);

        let status = Paragraph::new(vec![first, hints])
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.border))
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(status, area);
    }

    fn info_line<S: Storage>(state: &AppState<S>, theme: &Theme) -> Line<'static> {
        let prefs = state.prefs.state();
        let label = Style::default().fg(theme.text_muted);
        let value = Style::default().fg(theme.text);

        let mut spans = vec![
            Span::styled("Visitors: ", label),
            Span::styled(state.visitors.display(), value),
            Span::styled("  Hits: ", label),
            Span::styled(state.hits.display(), value),
            Span::styled("  Layout: ", label),
            Span::styled(prefs.layout_mode.to_string(), value),
            Span::styled("  Theme: ", label),
            Span::styled(prefs.customization.theme.as_str(), value),
        ];

        let scale = state.prefs.accessibility().font_size;
        if scale != 100 {
            spans.push(Span::styled("  Text: ", label));
            spans.push(Span::styled(format!("{scale}%"), value));
        }
        if !state.query.is_empty() {
            spans.push(Span::styled("  Matches: ", label));
            spans.push(Span::styled(state.view.match_count().to_string(), value));
        }

        Line::from(spans)
    }

    /// Key hints for `context`, labels taken from the live registry.
    fn hints_line(registry: &ShortcutRegistry, context: &str, theme: &Theme) -> Line<'static> {
        let wanted: &[Action] = if context == CONTEXT_MODAL {
            &MODAL_HINTS
        } else {
            &MAIN_HINTS
        };
        let bindings = registry.bindings_for(context);

        let mut spans: Vec<Span<'static>> = Vec::new();
        for action in wanted {
            let Some((binding, _)) = bindings.iter().find(|(_, a)| a == action) else {
                continue;
            };
            if !spans.is_empty() {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(
                binding.label(),
                Style::default()
                    .fg(theme.link)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                action.description(),
                Style::default().fg(theme.text_muted),
            ));
        }

        Line::from(spans)
    }
}
