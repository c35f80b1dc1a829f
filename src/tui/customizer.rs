//! Customizer dialog (Ctrl+K): theme, accent, font, animations.
//!
//! Each change is sent to the parent immediately, so the page restyles while
//! the dialog is open.

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
use crate::constants::{ACCENT_PRESETS, FONT_CHOICES};
use crate::models::{Customization, CustomizationPatch, ThemeName};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Row {
    Theme,
    Accent,
    Font,
    Animations,
    Reset,
}

const ROWS: [Row; 5] = [Row::Theme, Row::Accent, Row::Font, Row::Animations, Row::Reset];

/// Steps `current` through `len` choices, wrapping both ways.
fn cycle(current: usize, len: usize, forward: bool) -> usize {
    if forward {
        (current + 1) % len
    } else {
        (current + len - 1) % len
    }
}

/// Dialog state.
#[derive(Debug, Clone)]
pub struct Customizer {
    current: Customization,
    selected: usize,
}

impl Customizer {
    /// Opens the dialog on the active customization.
    pub fn new(current: Customization) -> Self {
        Self {
            current,
            selected: 0,
        }
    }

    /// Refreshes the shown values after the parent applied a change.
    pub fn sync(&mut self, current: &Customization) {
        self.current = current.clone();
    }

    fn row(&self) -> Row {
        ROWS[self.selected]
    }

    fn change(&mut self, forward: bool) -> Option<ComponentEvent> {
        let patch = match self.row() {
            Row::Theme => {
                let theme = match self.current.theme {
                    ThemeName::Light => ThemeName::Dark,
                    ThemeName::Dark => ThemeName::Light,
                };
                CustomizationPatch::new().theme(theme)
            }
            Row::Accent => {
                let index = ACCENT_PRESETS
                    .iter()
                    .position(|c| *c == self.current.accent_color)
                    // custom colors start the cycle from the first preset
                    .map_or(0, |i| cycle(i, ACCENT_PRESETS.len(), forward));
                CustomizationPatch::new().accent_color(ACCENT_PRESETS[index])
            }
            Row::Font => {
                let index = FONT_CHOICES
                    .iter()
                    .position(|f| *f == self.current.font_family)
                    .map_or(0, |i| cycle(i, FONT_CHOICES.len(), forward));
                CustomizationPatch::new().font_family(FONT_CHOICES[index])
            }
            Row::Animations => {
                CustomizationPatch::new().animations_enabled(!self.current.animations_enabled)
            }
            Row::Reset => return Some(ComponentEvent::CustomizationReset),
        };

        patch.apply_to(&mut self.current);
        Some(ComponentEvent::CustomizationChanged(patch))
    }
}

impl Component for Customizer {
    fn handle_input(&mut self, key: KeyEvent) -> Option<ComponentEvent> {
        match key.code {
            KeyCode::Up => {
                self.selected = cycle(self.selected, ROWS.len(), false);
                None
            }
            KeyCode::Down | KeyCode::Tab => {
                self.selected = cycle(self.selected, ROWS.len(), true);
                None
            }
            KeyCode::Left => self.change(false),
            KeyCode::Right | KeyCode::Char(' ') | KeyCode::Enter => self.change(true),
            KeyCode::Char('q') => Some(ComponentEvent::Close),
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let values = [
            ("Theme", self.current.theme.as_str().to_string()),
            ("Accent", self.current.accent_color.to_hex()),
            ("Font", self.current.font_family.clone()),
            (
                "Animations",
                if self.current.animations_enabled {
                    "on".to_string()
                } else {
                    "off".to_string()
                },
            ),
            ("Reset to defaults", String::new()),
        ];

        let mut lines: Vec<Line> = values
            .into_iter()
            .enumerate()
            .map(|(i, (label, value))| {
                let focused = i == self.selected;
                let style = if focused {
                    Style::default()
                        .fg(theme.link_hover)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.text)
                };
                let mut spans = vec![Span::styled(
                    format!("{}{label:<12}", if focused { "› " } else { "  " }),
                    style,
                )];
                if ROWS[i] == Row::Accent {
                    spans.push(Span::styled(
                        "  ",
                        Style::default().bg(self.current.accent_color.to_ratatui_color()),
                    ));
                    spans.push(Span::raw(" "));
                }
                spans.push(Span::styled(value, style));
                Line::from(spans)
            })
            .collect();

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "↑↓ select  ←→ change  Enter apply  Esc close",
            Style::default().fg(theme.text_muted),
        )));

        f.render_widget(Paragraph::new(lines), area);
    }

    fn title(&self) -> &'static str {
        " Customize "
    }
}
