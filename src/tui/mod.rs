//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and the page rendering using Ratatui.

// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]
// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]

pub mod accessibility_dialog;
pub mod assistant_chat;
pub mod component;
pub mod customizer;
pub mod help_overlay;
pub mod page_view;
pub mod rating_dialog;
pub mod status_bar;
pub mod theme;
pub mod toast;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph},
    Frame, Terminal,
};
use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::constants::{PROFILE_NAME, PROFILE_TAGLINE};
use crate::counter::{disabled_counter, spawn_counter, CounterHandle, HttpCounter};
use crate::models::{AccessibilitySettings, LayoutMode, PreferenceBundle};
use crate::panels::{Page, PageView, ScrollTarget, ScrollTracker};
use crate::prefs::PreferenceContext;
use crate::search::{CatalogEntry, SearchIndex, SuggestionNav};
use crate::shortcuts::{Action, ShortcutRegistry, CONTEXT_MAIN, CONTEXT_MODAL};
use crate::storage::Storage;
use crate::theme::ResolvedTheme;
use crate::viewport::ViewportMode;

// Re-export TUI components
pub use accessibility_dialog::AccessibilityDialog;
pub use assistant_chat::AssistantChat;
pub use component::{Component, ComponentEvent};
pub use customizer::Customizer;
pub use help_overlay::HelpOverlay;
pub use rating_dialog::RatingDialog;
pub use status_bar::StatusBar;
pub use theme::Theme;
pub use toast::{Toast, ToastKind};

/// Rows moved by one PageUp/PageDown.
const SCROLL_STEP: u16 = 5;

/// Resolved theme plus its terminal colors.
#[derive(Debug, Clone)]
pub struct Appearance {
    /// Page-level values (font, animations, scale)
    pub resolved: ResolvedTheme,
    /// Terminal colors
    pub colors: Theme,
}

impl Appearance {
    /// Computes the appearance for the given preferences.
    #[must_use]
    pub fn compute(bundle: &PreferenceBundle, accessibility: &AccessibilitySettings) -> Self {
        let resolved = ResolvedTheme::resolve(bundle).with_accessibility(accessibility);
        let colors = Theme::from_resolved(&resolved);
        Self { resolved, colors }
    }
}

/// The open dialog.
#[derive(Debug, Clone)]
pub enum Modal {
    /// Shortcut list
    Help(HelpOverlay),
    /// Accessibility options
    Accessibility(AccessibilityDialog),
    /// Theme customizer
    Customizer(Customizer),
    /// Rating form
    Rating(RatingDialog),
    /// Assistant chat
    Assistant(AssistantChat),
}

impl Modal {
    fn component(&self) -> &dyn Component {
        match self {
            Self::Help(c) => c,
            Self::Accessibility(c) => c,
            Self::Customizer(c) => c,
            Self::Rating(c) => c,
            Self::Assistant(c) => c,
        }
    }

    fn component_mut(&mut self) -> &mut dyn Component {
        match self {
            Self::Help(c) => c,
            Self::Accessibility(c) => c,
            Self::Customizer(c) => c,
            Self::Rating(c) => c,
            Self::Assistant(c) => c,
        }
    }

    /// Width and height in percent of the screen.
    const fn size(&self) -> (u16, u16) {
        match self {
            Self::Help(_) => (60, 70),
            Self::Accessibility(_) | Self::Customizer(_) => (50, 40),
            Self::Rating(_) => (50, 35),
            Self::Assistant(_) => (60, 60),
        }
    }
}

/// Starts the footer counters, or parks them when disabled.
pub fn start_counters(config: &Config) -> (CounterHandle, CounterHandle) {
    if config.counter.enabled {
        (
            spawn_counter(HttpCounter::visitors(&config.counter)),
            spawn_counter(HttpCounter::hits(&config.counter)),
        )
    } else {
        (disabled_counter(), disabled_counter())
    }
}

/// Application state.
pub struct AppState<S: Storage> {
    /// Preference state, the only writer of stored preferences
    pub prefs: PreferenceContext<S>,
    appearance: Rc<RefCell<Appearance>>,
    /// Key bindings
    pub registry: ShortcutRegistry,
    index: SearchIndex,
    page: Page,
    /// Search box contents
    pub query: String,
    /// Page filtered by `query`
    pub view: PageView,
    /// Catalog suggestions for `query`
    pub suggestions: Vec<CatalogEntry>,
    /// Suggestion cursor
    pub nav: SuggestionNav,
    tracker: ScrollTracker,
    pending_scroll: Option<ScrollTarget>,
    /// First visible page row
    pub scroll: u16,
    /// Open dialog
    pub modal: Option<Modal>,
    /// Transient notice
    pub toast: Option<Toast>,
    /// Unique visitor count
    pub visitors: CounterHandle,
    /// Page hit count
    pub hits: CounterHandle,
    /// Column layout override
    pub viewport: ViewportMode,
    /// Frames drawn, drives the custom-layout animation
    pub tick: u64,
    /// Exit at the end of this loop iteration
    pub should_quit: bool,
}

impl<S: Storage> AppState<S> {
    /// Builds the state and hooks the theme to preference changes.
    pub fn new(
        mut prefs: PreferenceContext<S>,
        viewport: ViewportMode,
        visitors: CounterHandle,
        hits: CounterHandle,
    ) -> Result<Self> {
        let index = SearchIndex::load().context("Failed to load search catalog")?;
        let page = Page::load().context("Failed to load page content")?;

        let appearance = Rc::new(RefCell::new(Appearance::compute(
            prefs.state(),
            prefs.accessibility(),
        )));
        let sink = Rc::clone(&appearance);
        prefs.subscribe(move |_, bundle, accessibility| {
            *sink.borrow_mut() = Appearance::compute(bundle, accessibility);
        });

        let view = page.render("");
        Ok(Self {
            prefs,
            appearance,
            registry: ShortcutRegistry::new(),
            index,
            page,
            query: String::new(),
            view,
            suggestions: Vec::new(),
            nav: SuggestionNav::new(),
            tracker: ScrollTracker::new(),
            pending_scroll: None,
            scroll: 0,
            modal: None,
            toast: None,
            visitors,
            hits,
            viewport,
            tick: 0,
            should_quit: false,
        })
    }

    /// Current terminal colors.
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.appearance.borrow().colors.clone()
    }

    /// Current resolved page theme.
    #[must_use]
    pub fn resolved(&self) -> ResolvedTheme {
        self.appearance.borrow().resolved.clone()
    }

    /// Row the next frame should scroll to, if a new match arrived.
    #[must_use]
    pub fn pending_scroll(&self) -> Option<&ScrollTarget> {
        self.pending_scroll.as_ref()
    }

    /// Replaces the query and refilters everything that depends on it.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.suggestions = self
            .index
            .suggest(&self.query)
            .into_iter()
            .cloned()
            .collect();
        self.nav.reset(self.suggestions.len());
        self.view = self.page.render(&self.query);
        if let Some(target) = self.tracker.observe(&self.view) {
            self.pending_scroll = Some(target);
        }
    }

    /// Shows an info toast.
    pub fn notify(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::info(message, Instant::now()));
    }

    fn open(&mut self, modal: Modal) {
        tracing::debug!("Opening dialog: {}", modal.component().title().trim());
        self.modal = Some(modal);
    }

    /// Runs a main-context action.
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::SuggestionUp => self.nav.previous(),
            Action::SuggestionDown => self.nav.next(),
            Action::SelectSuggestion => {
                if let Some(i) = self.nav.confirm() {
                    let title = self.suggestions[i].title.clone();
                    self.set_query(title);
                }
            }
            Action::ClearSearch => self.set_query(""),
            Action::ScrollUp => self.scroll = self.scroll.saturating_sub(SCROLL_STEP),
            Action::ScrollDown => self.scroll = self.scroll.saturating_add(SCROLL_STEP),
            Action::ToggleDarkMode => {
                self.prefs.toggle_dark_mode();
                let label = if self.prefs.state().is_dark_mode { "on" } else { "off" };
                self.notify(format!("Dark mode {label}"));
            }
            Action::ToggleLayout => {
                self.prefs.toggle_layout_mode();
                let layout = self.prefs.state().layout_mode;
                self.notify(format!("Layout: {layout}"));
            }
            Action::OpenAccessibility => {
                let settings = *self.prefs.accessibility();
                self.open(Modal::Accessibility(AccessibilityDialog::new(settings)));
            }
            Action::OpenCustomizer => {
                let current = self.prefs.state().customization.clone();
                self.open(Modal::Customizer(Customizer::new(current)));
            }
            Action::OpenRating => self.open(Modal::Rating(RatingDialog::new())),
            Action::OpenAssistant => self.open(Modal::Assistant(AssistantChat::new())),
            Action::ToggleHelp => self.open(Modal::Help(HelpOverlay::new(&self.registry))),
            Action::CloseModal => self.modal = None,
            Action::Quit => self.should_quit = true,
        }
    }

    /// Applies what a dialog reported.
    pub fn apply_component_event(&mut self, event: ComponentEvent) {
        match event {
            ComponentEvent::AccessibilityChanged(settings) => {
                self.prefs.set_accessibility(settings);
            }
            ComponentEvent::CustomizationChanged(patch) => self.prefs.set_customization(patch),
            ComponentEvent::CustomizationReset => {
                self.prefs.reset_customization();
                if let Some(Modal::Customizer(customizer)) = &mut self.modal {
                    customizer.sync(&self.prefs.state().customization);
                }
                self.notify("Customization reset");
            }
            ComponentEvent::Rated(rating) => {
                self.prefs.store_mut().append_rating(&rating);
                self.modal = None;
                self.notify(format!("Thanks for the {}-star rating!", rating.stars));
            }
            ComponentEvent::Close => self.modal = None,
        }
    }

    /// Drains the counter channels. Returns true if either changed.
    pub fn poll_counters(&mut self) -> bool {
        let visitors = self.visitors.poll();
        let hits = self.hits.poll();
        visitors || hits
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui<S: Storage>(
    state: &mut AppState<S>,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        toast::expire(&mut state.toast, Instant::now());

        // Render current state
        terminal.draw(|f| render(f, state))?;
        state.tick = state.tick.wrapping_add(1);

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if handle_key_event(state, key)? {
                    break; // User quit
                }
            }
            // Resize and other events just trigger the next draw
        }

        if state.poll_counters() {
            tracing::debug!(
                "Counters: visitors={} hits={}",
                state.visitors.display(),
                state.hits.display()
            );
        }

        // Check if should quit
        if state.should_quit {
            break;
        }
    }

    Ok(())
}

fn focus_block(title: &str, theme: &Theme, focused: bool) -> Block<'static> {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .border_style(Style::default().fg(if focused { theme.link } else { theme.border }))
        .style(Style::default().bg(theme.background));
    if focused && theme.heavy_focus {
        block.border_type(BorderType::Thick)
    } else {
        block
    }
}

/// Render the UI from current state
fn render<S: Storage>(f: &mut Frame, state: &mut AppState<S>) {
    let theme = state.theme();
    let resolved = state.resolved();
    let layout = state.prefs.state().layout_mode;

    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(full_bg, f.area());

    let suggestion_height = if state.suggestions.is_empty() {
        0
    } else {
        state.suggestions.len() as u16 + 2
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                 // search box
            Constraint::Length(suggestion_height), // suggestions
            Constraint::Min(5),                    // page
            Constraint::Length(4),                 // status bar
        ])
        .split(f.area());

    render_search_box(f, chunks[0], state, &theme);
    if suggestion_height > 0 {
        render_suggestions(f, chunks[1], state, &theme);
    }

    let wide = state.viewport.is_wide(chunks[2].width);
    let columns = if wide {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(32), Constraint::Min(20)])
            .split(chunks[2])
    } else {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(6), Constraint::Min(3)])
            .split(chunks[2])
    };

    render_profile(f, columns[0], layout, &resolved, &theme, state.tick);
    render_page(f, columns[1], state, layout, &theme);
    StatusBar::render(f, chunks[3], state, &theme);

    if let Some(modal) = &state.modal {
        let (w, h) = modal.size();
        let area = centered_rect(w, h, f.area());
        f.render_widget(Clear, area);
        let block = focus_block(modal.component().title(), &theme, true);
        let inner = block.inner(area);
        f.render_widget(block, area);
        modal.component().render(f, inner, &theme);
    }
}

fn render_search_box<S: Storage>(f: &mut Frame, area: Rect, state: &AppState<S>, theme: &Theme) {
    let focused = state.modal.is_none();
    let text = if state.query.is_empty() {
        Line::from(Span::styled(
            "Search skills, projects, education…",
            Style::default().fg(theme.text_muted),
        ))
    } else {
        Line::from(Span::styled(
            format!("{}▏", state.query),
            Style::default().fg(theme.text),
        ))
    };
    f.render_widget(
        Paragraph::new(text).block(focus_block(" Search ", theme, focused)),
        area,
    );
}

fn render_suggestions<S: Storage>(f: &mut Frame, area: Rect, state: &AppState<S>, theme: &Theme) {
    let selected = state.nav.selected();
    let items: Vec<ListItem> = state
        .suggestions
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let style = if Some(i) == selected {
                Style::default()
                    .fg(theme.header_fg)
                    .bg(theme.link_hover)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text)
            };
            ListItem::new(Line::from(vec![
                Span::styled(entry.title.clone(), style),
                Span::styled(
                    format!("  {}", entry.category),
                    Style::default().fg(theme.text_muted),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .style(Style::default().bg(theme.background)),
    );
    f.render_widget(list, area);
}

fn render_profile(
    f: &mut Frame,
    area: Rect,
    layout: LayoutMode,
    resolved: &ResolvedTheme,
    theme: &Theme,
    tick: u64,
) {
    let header = Style::default()
        .fg(theme.header_fg)
        .bg(theme.header_bg)
        .add_modifier(Modifier::BOLD);

    let mut lines = Vec::new();
    match layout {
        LayoutMode::Default => {
            lines.push(Line::from(Span::styled(format!(" {PROFILE_NAME} "), header)));
            lines.push(Line::from(Span::styled(
                PROFILE_TAGLINE,
                Style::default().fg(theme.text),
            )));
        }
        LayoutMode::Custom => {
            // blinks every half second unless motion is off
            let star = if resolved.animations && (tick / 5) % 2 == 1 { "☆" } else { "★" };
            lines.push(Line::from(Span::styled(
                format!(" {star} {PROFILE_NAME} {star} "),
                header,
            )));
            lines.push(Line::from(Span::styled(
                format!("\"{PROFILE_TAGLINE}\""),
                Style::default().fg(theme.link),
            )));
            lines.push(Line::from(vec![
                Span::styled("Mood: ", Style::default().fg(theme.text_muted)),
                Span::styled("caffeinated ☕", Style::default().fg(theme.text)),
            ]));
        }
    }
    lines.push(Line::from(Span::styled(
        format!("Font: {}", resolved.font_family),
        Style::default().fg(theme.text_muted),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.background));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_page<S: Storage>(
    f: &mut Frame,
    area: Rect,
    state: &mut AppState<S>,
    layout: LayoutMode,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.background));
    let inner = block.inner(area);

    let page = page_view::build_page_lines(&state.view, layout, theme, inner.width);
    if let Some(target) = state.pending_scroll.take() {
        if let Some(row) = page.row_of(&target) {
            state.scroll = u16::try_from(row).unwrap_or(u16::MAX);
        }
    }
    let max_scroll = u16::try_from(page.lines.len().saturating_sub(1)).unwrap_or(u16::MAX);
    state.scroll = state.scroll.min(max_scroll);

    f.render_widget(
        Paragraph::new(page.lines)
            .block(block)
            .scroll((state.scroll, 0)),
        area,
    );
}

/// Helper to create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Handle keyboard input events. Returns true when the user quit.
pub fn handle_key_event<S: Storage>(state: &mut AppState<S>, key: event::KeyEvent) -> Result<bool> {
    if key.kind != KeyEventKind::Press {
        return Ok(false);
    }

    // Route to the open dialog
    if let Some(modal) = &mut state.modal {
        match state.registry.lookup(CONTEXT_MODAL, key) {
            Some(Action::CloseModal) => state.modal = None,
            Some(Action::Quit) => state.should_quit = true,
            _ => {
                let event = modal.component_mut().handle_input(key);
                if let Some(event) = event {
                    state.apply_component_event(event);
                }
            }
        }
        return Ok(state.should_quit);
    }

    if let Some(action) = state.registry.lookup(CONTEXT_MAIN, key) {
        state.dispatch(action);
        return Ok(state.should_quit);
    }

    // Everything else types into the search box
    let typing = !key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
    match key.code {
        KeyCode::Char(c) if typing => {
            let mut query = std::mem::take(&mut state.query);
            query.push(c);
            state.set_query(query);
        }
        KeyCode::Backspace => {
            let mut query = std::mem::take(&mut state.query);
            query.pop();
            state.set_query(query);
        }
        _ => {}
    }

    Ok(state.should_quit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panels::PanelId;
    use crate::prefs::PreferenceStore;
    use crate::storage::MemoryStorage;
    use crossterm::event::KeyEvent;

    fn state() -> AppState<MemoryStorage> {
        let prefs = PreferenceContext::new(PreferenceStore::new(MemoryStorage::new(), false));
        AppState::new(
            prefs,
            ViewportMode::Responsive,
            disabled_counter(),
            disabled_counter(),
        )
        .unwrap()
    }

    fn press(state: &mut AppState<MemoryStorage>, code: KeyCode, modifiers: KeyModifiers) -> bool {
        handle_key_event(state, KeyEvent::new(code, modifiers)).unwrap()
    }

    fn type_text(state: &mut AppState<MemoryStorage>, text: &str) {
        for c in text.chars() {
            press(state, KeyCode::Char(c), KeyModifiers::NONE);
        }
    }

    #[test]
    fn test_typing_filters_page() {
        let mut state = state();
        type_text(&mut state, "docker");

        assert_eq!(state.query, "docker");
        assert!(state.view.panel(PanelId::About).unwrap().items.is_empty());
        assert!(!state.view.panel(PanelId::CaseStudies).unwrap().items.is_empty());
        assert_eq!(state.pending_scroll().map(|t| t.panel), Some(PanelId::CaseStudies));
    }

    #[test]
    fn test_escape_clears_query() {
        let mut state = state();
        type_text(&mut state, "aws");
        assert!(!state.suggestions.is_empty());

        press(&mut state, KeyCode::Esc, KeyModifiers::NONE);
        assert!(state.query.is_empty());
        assert!(state.suggestions.is_empty());
        assert!(state.view.panels.iter().all(|p| p.visible));
    }

    #[test]
    fn test_enter_selects_first_suggestion() {
        let mut state = state();
        type_text(&mut state, "aws");
        let first = state.suggestions[0].title.clone();

        press(&mut state, KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(state.query, first);
    }

    #[test]
    fn test_dark_mode_toggle_restyles_through_subscription() {
        let mut state = state();
        let before = state.theme();
        press(&mut state, KeyCode::Char('d'), KeyModifiers::CONTROL);

        assert!(state.prefs.state().is_dark_mode);
        assert_ne!(state.theme(), before);
        assert!(state.toast.is_some());
    }

    #[test]
    fn test_modal_swallows_typing() {
        let mut state = state();
        press(&mut state, KeyCode::Char('t'), KeyModifiers::CONTROL);
        assert!(matches!(state.modal, Some(Modal::Assistant(_))));

        type_text(&mut state, "hi");
        assert!(state.query.is_empty());

        press(&mut state, KeyCode::Esc, KeyModifiers::NONE);
        assert!(state.modal.is_none());
    }

    #[test]
    fn test_rating_is_persisted() {
        let mut state = state();
        press(&mut state, KeyCode::Char('r'), KeyModifiers::CONTROL);
        press(&mut state, KeyCode::Char('4'), KeyModifiers::NONE);
        press(&mut state, KeyCode::Enter, KeyModifiers::NONE);

        assert!(state.modal.is_none());
        let ratings = state.prefs.store().load_ratings();
        assert_eq!(ratings.len(), 1);
        assert_eq!(ratings[0].stars, 4);
    }

    #[test]
    fn test_ctrl_c_quits_from_modal() {
        let mut state = state();
        press(&mut state, KeyCode::F(1), KeyModifiers::NONE);
        assert!(press(&mut state, KeyCode::Char('c'), KeyModifiers::CONTROL));
    }

    #[test]
    fn test_centered_rect_is_inside() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(50, 40, outer);
        assert_eq!(inner.width, 50);
        assert_eq!(inner.height, 20);
        assert_eq!(inner.x, 25);
    }
}
