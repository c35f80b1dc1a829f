//! Root-owned preference state with synchronous change notification.
//!
//! [`PreferenceContext`] is the single writer for preferences. Every mutator
//! updates the in-memory bundle, persists it through the [`PreferenceStore`],
//! then calls every subscriber before returning, so the next event the UI
//! handles always sees the new state.

use tracing::debug;

use super::PreferenceStore;
use crate::models::{
    AccessibilitySettings, Customization, CustomizationPatch, LayoutMode, PreferenceBundle,
    ThemeName,
};
use crate::storage::Storage;

/// Handle returned by [`PreferenceContext::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// What changed in a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceEvent {
    /// Dark mode, layout or customization changed
    Preferences,
    /// Accessibility settings changed
    Accessibility,
}

type Listener = Box<dyn FnMut(PreferenceEvent, &PreferenceBundle, &AccessibilitySettings)>;

/// Application preference state.
pub struct PreferenceContext<S: Storage> {
    store: PreferenceStore<S>,
    state: PreferenceBundle,
    accessibility: AccessibilitySettings,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl<S: Storage> PreferenceContext<S> {
    /// Hydrates state from `store`.
    pub fn new(store: PreferenceStore<S>) -> Self {
        let state = store.load();
        let accessibility = store.load_accessibility();
        debug!(
            "Loaded preferences: dark={} layout={} accent={}",
            state.is_dark_mode, state.layout_mode, state.customization.accent_color
        );

        Self {
            store,
            state,
            accessibility,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Current preferences.
    pub fn state(&self) -> &PreferenceBundle {
        &self.state
    }

    /// Current accessibility settings.
    pub fn accessibility(&self) -> &AccessibilitySettings {
        &self.accessibility
    }

    /// The persistence layer.
    pub fn store(&self) -> &PreferenceStore<S> {
        &self.store
    }

    /// Mutable access to the persistence layer (ratings log).
    pub fn store_mut(&mut self) -> &mut PreferenceStore<S> {
        &mut self.store
    }

    /// Registers a listener called after every change.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(PreferenceEvent, &PreferenceBundle, &AccessibilitySettings) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    /// Sets the dark-mode flag and the matching customization theme.
    pub fn set_dark_mode(&mut self, is_dark: bool) {
        self.state.is_dark_mode = is_dark;
        self.state.customization.theme = ThemeName::from_dark_mode(is_dark);
        self.commit();
    }

    /// Flips dark mode.
    pub fn toggle_dark_mode(&mut self) {
        self.set_dark_mode(!self.state.is_dark_mode);
    }

    /// Merges `patch` into the customization.
    ///
    /// A theme in the patch also moves the dark-mode flag.
    pub fn set_customization(&mut self, patch: CustomizationPatch) {
        patch.apply_to(&mut self.state.customization);
        if let Some(theme) = patch.theme {
            self.state.is_dark_mode = theme.is_dark();
        }
        self.commit();
    }

    /// Selects a layout mode.
    pub fn set_layout_mode(&mut self, mode: LayoutMode) {
        self.state.layout_mode = mode;
        self.commit();
    }

    /// Switches between the default and custom layout.
    pub fn toggle_layout_mode(&mut self) {
        self.set_layout_mode(self.state.layout_mode.toggled());
    }

    /// Restores accent, font and animations. The active theme is kept.
    pub fn reset_customization(&mut self) {
        let theme = ThemeName::from_dark_mode(self.state.is_dark_mode);
        self.state.customization = Customization::with_theme(theme);
        self.commit();
    }

    /// Replaces the accessibility settings.
    pub fn set_accessibility(&mut self, settings: AccessibilitySettings) {
        self.accessibility = settings.clamped();
        self.store.save_accessibility(&self.accessibility);
        self.notify(PreferenceEvent::Accessibility);
    }

    /// Applies `update` to a copy of the accessibility settings and stores it.
    pub fn update_accessibility(&mut self, update: impl FnOnce(&mut AccessibilitySettings)) {
        let mut settings = self.accessibility;
        update(&mut settings);
        self.set_accessibility(settings);
    }

    fn commit(&mut self) {
        debug_assert!(self.state.is_consistent());
        self.store.save(&self.state);
        self.notify(PreferenceEvent::Preferences);
    }

    fn notify(&mut self, event: PreferenceEvent) {
        for (_, listener) in &mut self.listeners {
            listener(event, &self.state, &self.accessibility);
        }
    }
}

impl<S: Storage + std::fmt::Debug> std::fmt::Debug for PreferenceContext<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreferenceContext")
            .field("store", &self.store)
            .field("state", &self.state)
            .field("accessibility", &self.accessibility)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_ACCENT;
    use crate::models::RgbColor;
    use crate::storage::MemoryStorage;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn context() -> PreferenceContext<MemoryStorage> {
        PreferenceContext::new(PreferenceStore::new(MemoryStorage::new(), false))
    }

    #[test]
    fn test_dark_theme_patch_forces_dark_mode() {
        let mut ctx = context();
        assert!(!ctx.state().is_dark_mode);

        ctx.set_customization(CustomizationPatch::new().theme(ThemeName::Dark));
        assert!(ctx.state().is_dark_mode);
        assert!(ctx.state().is_consistent());
    }

    #[test]
    fn test_set_dark_mode_updates_theme() {
        let mut ctx = context();
        ctx.set_dark_mode(true);
        assert_eq!(ctx.state().customization.theme, ThemeName::Dark);
        ctx.toggle_dark_mode();
        assert_eq!(ctx.state().customization.theme, ThemeName::Light);
    }

    #[test]
    fn test_double_dark_toggle_restores_resolved_theme() {
        use crate::theme::ResolvedTheme;

        for layout in [LayoutMode::Default, LayoutMode::Custom] {
            for start_dark in [false, true] {
                let mut ctx = context();
                ctx.set_layout_mode(layout);
                ctx.set_dark_mode(start_dark);
                ctx.set_customization(
                    CustomizationPatch::new().accent_color(RgbColor::new(0x33, 0x66, 0xCC)),
                );
                let before = ResolvedTheme::resolve(ctx.state());

                ctx.toggle_dark_mode();
                assert_ne!(ResolvedTheme::resolve(ctx.state()), before);
                ctx.toggle_dark_mode();

                assert_eq!(ResolvedTheme::resolve(ctx.state()), before);
            }
        }
    }

    #[test]
    fn test_patch_without_theme_keeps_dark_mode() {
        let mut ctx = context();
        ctx.set_dark_mode(true);
        ctx.set_customization(CustomizationPatch::new().font_family("Georgia"));
        assert!(ctx.state().is_dark_mode);
        assert_eq!(ctx.state().customization.font_family, "Georgia");
    }

    #[test]
    fn test_reset_keeps_active_theme() {
        let mut ctx = context();
        ctx.set_dark_mode(true);
        ctx.set_customization(
            CustomizationPatch::new()
                .accent_color(RgbColor::new(0x33, 0x66, 0xCC))
                .font_family("Courier New")
                .animations_enabled(false),
        );

        ctx.reset_customization();
        let custom = &ctx.state().customization;
        assert_eq!(custom.accent_color, DEFAULT_ACCENT);
        assert_eq!(custom.font_family, "Verdana");
        assert!(custom.animations_enabled);
        assert_eq!(custom.theme, ThemeName::Dark);
        assert!(ctx.state().is_dark_mode);
    }

    #[test]
    fn test_every_mutation_is_written_through() {
        let mut ctx = context();
        ctx.toggle_layout_mode();

        let reloaded = ctx.store().load();
        assert_eq!(reloaded.layout_mode, LayoutMode::Custom);

        ctx.set_customization(CustomizationPatch::new().animations_enabled(false));
        assert!(!ctx.store().load().customization.animations_enabled);
    }

    #[test]
    fn test_subscribers_notified_synchronously() {
        let mut ctx = context();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        let id = ctx.subscribe(move |event, state, _| {
            sink.borrow_mut().push((event, state.is_dark_mode));
        });

        ctx.set_dark_mode(true);
        assert_eq!(*seen.borrow(), vec![(PreferenceEvent::Preferences, true)]);

        ctx.update_accessibility(|a| a.high_contrast = true);
        assert_eq!(seen.borrow().len(), 2);
        assert_eq!(seen.borrow()[1].0, PreferenceEvent::Accessibility);

        assert!(ctx.unsubscribe(id));
        assert!(!ctx.unsubscribe(id));
        ctx.set_dark_mode(false);
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn test_multiple_subscribers_all_see_update() {
        let mut ctx = context();
        let count = Rc::new(RefCell::new(0));
        for _ in 0..3 {
            let count = Rc::clone(&count);
            ctx.subscribe(move |_, _, _| *count.borrow_mut() += 1);
        }

        ctx.toggle_layout_mode();
        assert_eq!(*count.borrow(), 3);
        assert_eq!(ctx.subscriber_count(), 3);
    }

    #[test]
    fn test_accessibility_persisted() {
        let mut ctx = context();
        ctx.update_accessibility(|a| {
            a.reduced_motion = true;
            a.increase_font();
        });

        let loaded = ctx.store().load_accessibility();
        assert!(loaded.reduced_motion);
        assert_eq!(loaded.font_size, 110);
    }
}
