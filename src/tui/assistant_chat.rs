//! Assistant chat dialog (Ctrl+T).

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::component::{Component, ComponentEvent};
use super::Theme;
use crate::assistant::{Assistant, PROMPT_REPLY};

/// One exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    /// What the user typed
    pub question: String,
    /// What the assistant replied
    pub reply: &'static str,
}

/// Dialog state.
#[derive(Debug, Clone)]
pub struct AssistantChat {
    assistant: Assistant,
    input: String,
    transcript: Vec<Exchange>,
}

impl AssistantChat {
    /// Opens an empty chat.
    pub fn new() -> Self {
        Self {
            assistant: Assistant::new(),
            input: String::new(),
            transcript: Vec::new(),
        }
    }

    /// Exchanges so far, oldest first.
    pub fn transcript(&self) -> &[Exchange] {
        &self.transcript
    }

    fn send(&mut self) {
        let question = std::mem::take(&mut self.input);
        let reply = self.assistant.respond(&question);
        self.transcript.push(Exchange {
            question: question.trim().to_string(),
            reply,
        });
    }
}

impl Default for AssistantChat {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for AssistantChat {
    fn handle_input(&mut self, key: KeyEvent) -> Option<ComponentEvent> {
        match key.code {
            KeyCode::Char(c) => self.input.push(c),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Enter => self.send(),
            _ => {}
        }
        None
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(3)])
            .split(area);

        let mut lines = Vec::new();
        if self.transcript.is_empty() {
            lines.push(Line::from(Span::styled(
                PROMPT_REPLY,
                Style::default().fg(theme.text_muted),
            )));
        }
        for exchange in &self.transcript {
            lines.push(Line::from(vec![
                Span::styled("You: ", Style::default().fg(theme.link).add_modifier(Modifier::BOLD)),
                Span::styled(exchange.question.clone(), Style::default().fg(theme.text)),
            ]));
            lines.push(Line::from(vec![
                Span::styled(
                    "Assistant: ",
                    Style::default()
                        .fg(theme.link_hover)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(exchange.reply, Style::default().fg(theme.text)),
            ]));
            lines.push(Line::from(""));
        }

        // keep the newest exchange in view
        let height = chunks[0].height as usize;
        let skip = lines.len().saturating_sub(height);
        let scroll = u16::try_from(skip).unwrap_or(u16::MAX);
        f.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .scroll((scroll, 0)),
            chunks[0],
        );

        let input = Paragraph::new(format!("{}▏", self.input))
            .style(Style::default().fg(theme.text))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.border))
                    .title(" Ask (Enter to send) "),
            );
        f.render_widget(input, chunks[1]);
    }

    fn title(&self) -> &'static str {
        " Assistant "
    }
}
