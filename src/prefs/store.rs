//! Preference persistence on top of a [`Storage`].
//!
//! Reads never fail: every field that is missing or unparseable falls back to
//! its documented default on its own. Writes are best effort; a failed write
//! is logged and the caller's in-memory state stays authoritative.

use serde_json::Value;
use tracing::{debug, warn};

use crate::constants::{
    DEFAULT_ACCENT, DEFAULT_FONT_FAMILY, KEY_ACCESSIBILITY, KEY_CUSTOMIZATION, KEY_DARK_MODE,
    KEY_LAYOUT_MODE, KEY_RATINGS,
};
use crate::models::{
    AccessibilitySettings, Customization, LayoutMode, PreferenceBundle, Rating, RgbColor,
    ThemeName,
};
use crate::storage::Storage;

/// Reads and writes preferences under their storage keys.
#[derive(Debug)]
pub struct PreferenceStore<S: Storage> {
    storage: S,
    system_prefers_dark: bool,
}

impl<S: Storage> PreferenceStore<S> {
    /// Wraps `storage`. `system_prefers_dark` is the fallback dark-mode flag.
    pub fn new(storage: S, system_prefers_dark: bool) -> Self {
        Self {
            storage,
            system_prefers_dark,
        }
    }

    /// The system dark-mode preference used for defaults.
    #[must_use]
    pub fn system_prefers_dark(&self) -> bool {
        self.system_prefers_dark
    }

    /// Borrow the underlying storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Consumes the store, returning the storage.
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.storage.get(key) {
            Ok(value) => value,
            Err(e) => {
                debug!("Storage read of '{key}' failed, using default: {e:#}");
                None
            }
        }
    }

    fn read_json(&self, key: &str) -> Option<Value> {
        let raw = self.read(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                debug!("Stored '{key}' is not valid JSON, using default: {e}");
                None
            }
        }
    }

    fn write(&mut self, key: &str, value: &str) {
        if let Err(e) = self.storage.set(key, value) {
            warn!("Failed to persist '{key}': {e:#}");
        }
    }

    /// Loads the full preference bundle.
    ///
    /// The standalone `darkMode` key decides the dark-mode flag; the stored
    /// customization theme only counts when that key is missing. The loaded
    /// customization theme is always re-derived from the flag.
    pub fn load(&self) -> PreferenceBundle {
        let customization = self
            .read_json(KEY_CUSTOMIZATION)
            .filter(Value::is_object)
            .unwrap_or(Value::Null);

        let stored_dark = self.read_json(KEY_DARK_MODE).and_then(|v| v.as_bool());
        let stored_theme = customization
            .get("theme")
            .and_then(Value::as_str)
            .and_then(ThemeName::parse);

        let is_dark_mode = stored_dark
            .or_else(|| stored_theme.map(|theme| theme.is_dark()))
            .unwrap_or(self.system_prefers_dark);

        let layout_mode = self
            .read(KEY_LAYOUT_MODE)
            .and_then(|raw| LayoutMode::parse(raw.trim().trim_matches('"')))
            .unwrap_or_default();

        let accent_color = customization
            .get("accentColor")
            .and_then(Value::as_str)
            .and_then(|hex| RgbColor::from_hex(hex).ok())
            .unwrap_or(DEFAULT_ACCENT);

        let font_family = customization
            .get("fontFamily")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|font| !font.is_empty())
            .unwrap_or(DEFAULT_FONT_FAMILY)
            .to_string();

        let animations_enabled = customization
            .get("animationsEnabled")
            .and_then(Value::as_bool)
            .unwrap_or(true);

        PreferenceBundle {
            is_dark_mode,
            layout_mode,
            customization: Customization {
                theme: ThemeName::from_dark_mode(is_dark_mode),
                accent_color,
                font_family,
                animations_enabled,
            },
        }
    }

    /// Writes the bundle: customization object, dark-mode flag, layout mode.
    pub fn save(&mut self, bundle: &PreferenceBundle) {
        match serde_json::to_string(&bundle.customization) {
            Ok(json) => self.write(KEY_CUSTOMIZATION, &json),
            Err(e) => warn!("Failed to serialize customization: {e}"),
        }
        let dark = if bundle.is_dark_mode { "true" } else { "false" };
        self.write(KEY_DARK_MODE, dark);
        self.write(KEY_LAYOUT_MODE, bundle.layout_mode.as_str());
    }

    /// Loads accessibility settings, defaulting each missing field.
    pub fn load_accessibility(&self) -> AccessibilitySettings {
        let defaults = AccessibilitySettings::default();
        let Some(value) = self.read_json(KEY_ACCESSIBILITY).filter(Value::is_object) else {
            return defaults;
        };

        let font_size = value
            .get("fontSize")
            .and_then(Value::as_u64)
            .and_then(|size| u16::try_from(size).ok())
            .unwrap_or(defaults.font_size);
        let flag = |name: &str, default: bool| value.get(name).and_then(Value::as_bool).unwrap_or(default);

        AccessibilitySettings {
            font_size,
            high_contrast: flag("highContrast", defaults.high_contrast),
            reduced_motion: flag("reducedMotion", defaults.reduced_motion),
            enhanced_focus: flag("enhancedFocus", defaults.enhanced_focus),
        }
        .clamped()
    }

    /// Writes accessibility settings.
    pub fn save_accessibility(&mut self, settings: &AccessibilitySettings) {
        match serde_json::to_string(settings) {
            Ok(json) => self.write(KEY_ACCESSIBILITY, &json),
            Err(e) => warn!("Failed to serialize accessibility settings: {e}"),
        }
    }

    /// Ratings currently in the log. Entries that fail to parse are skipped.
    pub fn load_ratings(&self) -> Vec<Rating> {
        match self.read_json(KEY_RATINGS) {
            Some(Value::Array(items)) => items
                .into_iter()
                .filter_map(|item| serde_json::from_value::<Rating>(item).ok())
                .filter(|rating| (1..=5).contains(&rating.stars))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Appends a rating to the log.
    ///
    /// Existing entries are kept as-is, even ones this version cannot parse.
    /// A log that is not a JSON array is replaced by a fresh one.
    pub fn append_rating(&mut self, rating: &Rating) {
        let mut items = match self.read_json(KEY_RATINGS) {
            Some(Value::Array(items)) => items,
            Some(_) => {
                warn!("Stored ratings log is not an array, starting a new one");
                Vec::new()
            }
            None => Vec::new(),
        };

        match serde_json::to_value(rating) {
            Ok(value) => items.push(value),
            Err(e) => {
                warn!("Failed to serialize rating: {e}");
                return;
            }
        }

        match serde_json::to_string(&Value::Array(items)) {
            Ok(json) => self.write(KEY_RATINGS, &json),
            Err(e) => warn!("Failed to serialize ratings log: {e}"),
        }
    }
}
