//! Lays the filtered page out as terminal lines.
//!
//! Wrapping happens here rather than in ratatui so the row of every entry is
//! known, which is what scroll-to-first-match needs.

use std::collections::HashMap;

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::Theme;
use crate::constants::PROFILE_SHORT_NAME;
use crate::highlight::Segment;
use crate::models::LayoutMode;
use crate::panels::{PageView, PanelId, ScrollTarget};

/// A wrapped row: text pieces with their match flag.
pub type Row = Vec<(String, bool)>;

struct Wrapper {
    width: usize,
    rows: Vec<Row>,
    col: usize,
}

impl Wrapper {
    fn new(width: usize) -> Self {
        Self {
            width: width.max(1),
            rows: vec![Vec::new()],
            col: 0,
        }
    }

    fn append(&mut self, text: &str, matched: bool) {
        let row = self.rows.last_mut();
        if let Some(row) = row {
            match row.last_mut() {
                Some((last, flag)) if *flag == matched => last.push_str(text),
                _ => row.push((text.to_string(), matched)),
            }
        }
    }

    fn newline(&mut self) {
        self.rows.push(Vec::new());
        self.col = 0;
    }

    fn push_space(&mut self, text: &str, matched: bool) {
        let len = text.chars().count();
        if self.col == 0 {
            return;
        }
        if self.col + len > self.width {
            self.newline();
            return;
        }
        self.append(text, matched);
        self.col += len;
    }

    fn push_word(&mut self, parts: &[(String, bool)]) {
        let len: usize = parts.iter().map(|(t, _)| t.chars().count()).sum();
        if self.col > 0 && self.col + len > self.width {
            self.newline();
        }
        if len <= self.width {
            for (text, matched) in parts {
                self.append(text, *matched);
            }
            self.col += len;
            return;
        }

        // longer than a row: hard split
        for (text, matched) in parts {
            for c in text.chars() {
                if self.col == self.width {
                    self.newline();
                }
                self.append(c.encode_utf8(&mut [0; 4]), *matched);
                self.col += 1;
            }
        }
    }

    fn finish(self) -> Vec<Row> {
        self.rows
    }
}

/// Word-wraps highlighted segments to `width` columns.
///
/// Matched runs keep their flag across breaks; whitespace at a break is
/// dropped.
pub fn wrap_segments(segments: &[Segment], width: usize) -> Vec<Row> {
    let mut wrapper = Wrapper::new(width);
    let mut word: Vec<(String, bool)> = Vec::new();

    for segment in segments {
        let mut rest = segment.text.as_str();
        while let Some(c) = rest.chars().next() {
            let is_space = c.is_whitespace();
            let end = rest
                .find(|ch: char| ch.is_whitespace() != is_space)
                .unwrap_or(rest.len());
            let (run, tail) = rest.split_at(end);
            if is_space {
                if !word.is_empty() {
                    wrapper.push_word(&word);
                    word.clear();
                }
                wrapper.push_space(run, segment.matched);
            } else {
                word.push((run.to_string(), segment.matched));
            }
            rest = tail;
        }
    }
    if !word.is_empty() {
        wrapper.push_word(&word);
    }

    wrapper.finish()
}

/// Page lines plus the row each entry starts on.
#[derive(Debug, Default)]
pub struct PageLines {
    /// Lines in display order
    pub lines: Vec<Line<'static>>,
    /// Row of each entry, keyed by panel and entry key
    pub anchors: HashMap<(PanelId, String), usize>,
}

impl PageLines {
    /// Row to scroll to for `target`.
    #[must_use]
    pub fn row_of(&self, target: &ScrollTarget) -> Option<usize> {
        self.anchors
            .get(&(target.panel, target.key.clone()))
            .copied()
    }
}

fn styled_row(row: Row, base: Style, theme: &Theme, indent: &str) -> Line<'static> {
    let hit = Style::default()
        .fg(theme.highlight_fg)
        .bg(theme.highlight_bg)
        .add_modifier(Modifier::BOLD);
    let mut spans = vec![Span::styled(indent.to_string(), base)];
    spans.extend(row.into_iter().map(|(text, matched)| {
        Span::styled(text, if matched { hit } else { base })
    }));
    Line::from(spans)
}

/// Builds the page for a content area `width` columns wide.
#[must_use]
pub fn build_page_lines(view: &PageView, layout: LayoutMode, theme: &Theme, width: u16) -> PageLines {
    let width = usize::from(width.max(8));
    let mut out = PageLines::default();

    let visible: Vec<_> = view.visible().collect();
    if visible.is_empty() {
        out.lines.push(Line::from(Span::styled(
            format!("No results for \"{}\"", view.query),
            Style::default().fg(theme.text_muted),
        )));
        return out;
    }

    let header = Style::default()
        .fg(theme.header_fg)
        .bg(theme.header_bg)
        .add_modifier(Modifier::BOLD);
    let heading = Style::default().fg(theme.link).add_modifier(Modifier::BOLD);
    let body = Style::default().fg(theme.text);
    let comment = Style::default().fg(theme.text).bg(theme.surface);

    for panel in visible {
        let title = match layout {
            LayoutMode::Default => format!(" {} ", panel.id.title()),
            LayoutMode::Custom => format!(" ★ {PROFILE_SHORT_NAME}'s {} ", panel.id.title()),
        };
        let count = if view.query.is_empty() {
            String::new()
        } else {
            format!("({} match{}) ", panel.items.len(), if panel.items.len() == 1 { "" } else { "es" })
        };
        let pad = width.saturating_sub(title.chars().count() + count.chars().count());
        out.lines.push(Line::from(Span::styled(
            format!("{title}{}{count}", " ".repeat(pad)),
            header,
        )));
        out.lines.push(Line::from(""));

        // guestbook-style boxes for the learning wall in the custom layout
        let item_body = if layout == LayoutMode::Custom && panel.id == PanelId::LearningWall {
            comment
        } else {
            body
        };

        for item in &panel.items {
            out.anchors
                .insert((panel.id, item.key.clone()), out.lines.len());
            for row in wrap_segments(&item.heading, width.saturating_sub(1)) {
                out.lines.push(styled_row(row, heading, theme, " "));
            }
            for line in &item.lines {
                for row in wrap_segments(line, width.saturating_sub(3)) {
                    out.lines.push(styled_row(row, item_body, theme, "   "));
                }
            }
            out.lines.push(Line::from(""));
        }

        out.lines.push(Line::from(Span::styled(
            "─".repeat(width),
            Style::default().fg(theme.divider),
        )));
    }

    out
}
