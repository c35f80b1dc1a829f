//! Centralized shortcut and action system.
//!
//! Maps key events to actions per input context, so the help overlay and the
//! event loop read from the same table.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Input context for shortcut lookup.
pub const CONTEXT_MAIN: &str = "main";
/// Context used while any modal is open.
pub const CONTEXT_MODAL: &str = "modal";

/// All possible actions in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Move the suggestion highlight up
    SuggestionUp,
    /// Move the suggestion highlight down
    SuggestionDown,
    /// Accept the highlighted suggestion
    SelectSuggestion,
    /// Clear the search box
    ClearSearch,
    /// Scroll the page up
    ScrollUp,
    /// Scroll the page down
    ScrollDown,
    /// Flip dark mode
    ToggleDarkMode,
    /// Flip default/custom layout
    ToggleLayout,
    /// Open the accessibility options
    OpenAccessibility,
    /// Open the customizer
    OpenCustomizer,
    /// Open the rating dialog
    OpenRating,
    /// Open the assistant chat
    OpenAssistant,
    /// Open the help overlay
    ToggleHelp,
    /// Close the open modal
    CloseModal,
    /// Exit the application
    Quit,
}

impl Action {
    /// Stable action id.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::SuggestionUp => "suggestion_up",
            Self::SuggestionDown => "suggestion_down",
            Self::SelectSuggestion => "select_suggestion",
            Self::ClearSearch => "clear_search",
            Self::ScrollUp => "scroll_up",
            Self::ScrollDown => "scroll_down",
            Self::ToggleDarkMode => "toggle_dark_mode",
            Self::ToggleLayout => "toggle_layout",
            Self::OpenAccessibility => "open_accessibility",
            Self::OpenCustomizer => "open_customizer",
            Self::OpenRating => "open_rating",
            Self::OpenAssistant => "open_assistant",
            Self::ToggleHelp => "toggle_help",
            Self::CloseModal => "close_modal",
            Self::Quit => "quit",
        }
    }

    /// One-line description for the help overlay.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::SuggestionUp => "Previous suggestion",
            Self::SuggestionDown => "Next suggestion",
            Self::SelectSuggestion => "Search for the selected suggestion",
            Self::ClearSearch => "Clear the search box",
            Self::ScrollUp => "Scroll up",
            Self::ScrollDown => "Scroll down",
            Self::ToggleDarkMode => "Toggle dark mode",
            Self::ToggleLayout => "Switch between default and custom layout",
            Self::OpenAccessibility => "Accessibility options",
            Self::OpenCustomizer => "Customize accent, font and animations",
            Self::OpenRating => "Rate this portfolio",
            Self::OpenAssistant => "Ask the assistant",
            Self::ToggleHelp => "Show this help",
            Self::CloseModal => "Close dialog",
            Self::Quit => "Quit",
        }
    }
}

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    /// Key
    pub code: KeyCode,
    /// Modifiers held
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key binding from a KeyEvent.
    ///
    /// Shift is dropped for character keys and the character folded to
    /// lower case, so Alt+Shift+A resolves to the Alt+A binding.
    #[must_use]
    pub fn from_event(event: KeyEvent) -> Self {
        match event.code {
            KeyCode::Char(c) => Self {
                code: KeyCode::Char(c.to_ascii_lowercase()),
                modifiers: event.modifiers.difference(KeyModifiers::SHIFT),
            },
            code => Self {
                code,
                modifiers: event.modifiers,
            },
        }
    }

    /// Human-readable label such as `Ctrl+D`.
    #[must_use]
    pub fn label(&self) -> String {
        let mut label = String::new();
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            label.push_str("Ctrl+");
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            label.push_str("Alt+");
        }
        match self.code {
            KeyCode::Char(c) => label.push(c.to_ascii_uppercase()),
            KeyCode::F(n) => label.push_str(&format!("F{n}")),
            KeyCode::Up => label.push('↑'),
            KeyCode::Down => label.push('↓'),
            KeyCode::Enter => label.push_str("Enter"),
            KeyCode::Esc => label.push_str("Esc"),
            KeyCode::PageUp => label.push_str("PgUp"),
            KeyCode::PageDown => label.push_str("PgDn"),
            other => label.push_str(&format!("{other:?}")),
        }
        label
    }
}

/// Shortcut registry that maps key events to actions for a given context.
#[derive(Debug, Clone)]
pub struct ShortcutRegistry {
    bindings: HashMap<(String, KeyBinding), Action>,
}

impl ShortcutRegistry {
    /// Create a new shortcut registry with default bindings.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            bindings: HashMap::new(),
        };

        registry.register_main_shortcuts();
        registry.register_modal_shortcuts();
        registry
    }

    fn register_main_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = CONTEXT_MAIN;

        // === SEARCH ===
        self.register(ctx, K::Up, M::NONE, Action::SuggestionUp);
        self.register(ctx, K::Down, M::NONE, Action::SuggestionDown);
        self.register(ctx, K::Enter, M::NONE, Action::SelectSuggestion);
        self.register(ctx, K::Esc, M::NONE, Action::ClearSearch);
        self.register(ctx, K::PageUp, M::NONE, Action::ScrollUp);
        self.register(ctx, K::PageDown, M::NONE, Action::ScrollDown);

        // === PREFERENCES ===
        self.register(ctx, K::Char('d'), M::CONTROL, Action::ToggleDarkMode);
        self.register(ctx, K::Char('l'), M::CONTROL, Action::ToggleLayout);

        // === DIALOGS ===
        self.register(ctx, K::Char('a'), M::ALT, Action::OpenAccessibility);
        self.register(ctx, K::Char('k'), M::CONTROL, Action::OpenCustomizer);
        self.register(ctx, K::Char('r'), M::CONTROL, Action::OpenRating);
        self.register(ctx, K::Char('t'), M::CONTROL, Action::OpenAssistant);
        self.register(ctx, K::F(1), M::NONE, Action::ToggleHelp);

        // === GENERAL ===
        self.register(ctx, K::Char('c'), M::CONTROL, Action::Quit);
        self.register(ctx, K::Char('q'), M::CONTROL, Action::Quit);
    }

    fn register_modal_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = CONTEXT_MODAL;

        self.register(ctx, K::Esc, M::NONE, Action::CloseModal);
        self.register(ctx, K::Char('c'), M::CONTROL, Action::Quit);
    }

    fn register(&mut self, context: &str, code: KeyCode, modifiers: KeyModifiers, action: Action) {
        let binding = KeyBinding::new(code, modifiers);
        self.bindings.insert((context.to_string(), binding), action);
    }

    /// Look up an action for a given context and key event.
    #[must_use]
    pub fn lookup(&self, context: &str, event: KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_event(event);
        self.bindings.get(&(context.to_string(), binding)).copied()
    }

    /// Check if a key event matches a specific action in the given context.
    #[must_use]
    pub fn matches(&self, context: &str, event: KeyEvent, action: Action) -> bool {
        self.lookup(context, event) == Some(action)
    }

    /// Bindings of a context, sorted by label, for the help overlay.
    #[must_use]
    pub fn bindings_for(&self, context: &str) -> Vec<(KeyBinding, Action)> {
        let mut found: Vec<_> = self
            .bindings
            .iter()
            .filter(|((ctx, _), _)| ctx == context)
            .map(|((_, binding), action)| (*binding, *action))
            .collect();
        found.sort_by_key(|(binding, _)| binding.label());
        found
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}
