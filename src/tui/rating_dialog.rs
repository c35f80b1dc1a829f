//! Rating dialog (Ctrl+R).

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
use crate::models::Rating;

const MAX_COMMENT_LEN: usize = 280;

/// Dialog state.
#[derive(Debug, Clone)]
pub struct RatingDialog {
    stars: u8,
    comment: String,
}

impl RatingDialog {
    /// Opens with five stars selected.
    pub fn new() -> Self {
        Self {
            stars: 5,
            comment: String::new(),
        }
    }

    fn submit(&self) -> Option<ComponentEvent> {
        let comment = Some(self.comment.clone());
        match Rating::new(self.stars, comment) {
            Ok(rating) => Some(ComponentEvent::Rated(rating)),
            Err(e) => {
                tracing::warn!("Rejected rating: {e}");
                None
            }
        }
    }
}

impl Default for RatingDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for RatingDialog {
    fn handle_input(&mut self, key: KeyEvent) -> Option<ComponentEvent> {
        match key.code {
            KeyCode::Left => {
                self.stars = self.stars.saturating_sub(1).max(1);
                None
            }
            KeyCode::Right => {
                self.stars = (self.stars + 1).min(5);
                None
            }
            KeyCode::Char(c @ '1'..='5') if self.comment.is_empty() => {
                self.stars = c as u8 - b'0';
                None
            }
            KeyCode::Char(c) => {
                if self.comment.chars().count() < MAX_COMMENT_LEN {
                    self.comment.push(c);
                }
                None
            }
            KeyCode::Backspace => {
                self.comment.pop();
                None
            }
            KeyCode::Enter => self.submit(),
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let filled = usize::from(self.stars);
        let lines = vec![
            Line::from(vec![
                Span::styled(
                    "★".repeat(filled),
                    Style::default()
                        .fg(theme.link)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("☆".repeat(5 - filled), Style::default().fg(theme.text_muted)),
            ]),
            Line::from(""),
            Line::from(Span::styled("Comment (optional):", Style::default().fg(theme.text))),
            Line::from(Span::styled(
                format!("{}▏", self.comment),
                Style::default().fg(theme.text).bg(theme.surface),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "←→ or 1-5 stars  type to comment  Enter submit  Esc cancel",
                Style::default().fg(theme.text_muted),
            )),
        ];
        f.render_widget(Paragraph::new(lines), area);
    }

    fn title(&self) -> &'static str {
        " Rate this portfolio "
    }
}
