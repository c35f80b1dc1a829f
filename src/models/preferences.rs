//! User preference types: layout mode, theme, customization bundle.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::RgbColor;
use crate::constants::{DEFAULT_ACCENT, DEFAULT_FONT_FAMILY};

/// Page presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Professional layout
    #[default]
    Default,
    /// Nostalgic social-profile layout
    Custom,
}

impl LayoutMode {
    /// Storage representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Custom => "custom",
        }
    }

    /// Parses the storage representation. Anything unknown is `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "default" => Some(Self::Default),
            "custom" => Some(Self::Custom),
            _ => None,
        }
    }

    /// The other layout.
    #[must_use]
    pub const fn toggled(&self) -> Self {
        match self {
            Self::Default => Self::Custom,
            Self::Custom => Self::Default,
        }
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Customization theme name (`light` / `dark`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Light backgrounds
    #[default]
    Light,
    /// Dark backgrounds
    Dark,
}

impl ThemeName {
    /// Theme matching a dark-mode flag.
    #[must_use]
    pub const fn from_dark_mode(is_dark: bool) -> Self {
        if is_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// Storage representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Whether this theme is the dark one.
    #[must_use]
    pub const fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Parses `light` / `dark`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

/// Cosmetic customization persisted as one JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customization {
    /// Light or dark, kept consistent with `PreferenceBundle::is_dark_mode`
    pub theme: ThemeName,
    /// Accent color driving links and accent headers
    pub accent_color: RgbColor,
    /// Font family name
    pub font_family: String,
    /// Whether decorative animations run
    pub animations_enabled: bool,
}

impl Customization {
    /// Default customization for the given theme.
    #[must_use]
    pub fn with_theme(theme: ThemeName) -> Self {
        Self {
            theme,
            accent_color: DEFAULT_ACCENT,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            animations_enabled: true,
        }
    }
}

impl Default for Customization {
    fn default() -> Self {
        Self::with_theme(ThemeName::default())
    }
}

/// Partial customization update, merged field by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomizationPatch {
    /// New theme
    pub theme: Option<ThemeName>,
    /// New accent color
    pub accent_color: Option<RgbColor>,
    /// New font family
    pub font_family: Option<String>,
    /// New animation flag
    pub animations_enabled: Option<bool>,
}

impl CustomizationPatch {
    /// Empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the theme.
    pub fn theme(mut self, theme: ThemeName) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Sets the accent color.
    pub fn accent_color(mut self, color: RgbColor) -> Self {
        self.accent_color = Some(color);
        self
    }

    /// Sets the font family.
    pub fn font_family(mut self, font: impl Into<String>) -> Self {
        self.font_family = Some(font.into());
        self
    }

    /// Sets the animation flag.
    pub fn animations_enabled(mut self, enabled: bool) -> Self {
        self.animations_enabled = Some(enabled);
        self
    }

    /// True when no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.theme.is_none()
            && self.accent_color.is_none()
            && self.font_family.is_none()
            && self.animations_enabled.is_none()
    }

    /// Merges the patch into `target`.
    pub fn apply_to(&self, target: &mut Customization) {
        if let Some(theme) = self.theme {
            target.theme = theme;
        }
        if let Some(color) = self.accent_color {
            target.accent_color = color;
        }
        if let Some(font) = &self.font_family {
            target.font_family.clone_from(font);
        }
        if let Some(enabled) = self.animations_enabled {
            target.animations_enabled = enabled;
        }
    }
}

/// Every user-chosen preference the page reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceBundle {
    /// Standalone dark-mode flag
    pub is_dark_mode: bool,
    /// Page layout
    pub layout_mode: LayoutMode,
    /// Cosmetic customization
    pub customization: Customization,
}

impl PreferenceBundle {
    /// Default bundle for the given system dark-mode preference.
    #[must_use]
    pub fn defaults(system_prefers_dark: bool) -> Self {
        Self {
            is_dark_mode: system_prefers_dark,
            layout_mode: LayoutMode::Default,
            customization: Customization::with_theme(ThemeName::from_dark_mode(
                system_prefers_dark,
            )),
        }
    }

    /// Whether the dark-mode flag and the customization theme agree.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.customization.theme.is_dark() == self.is_dark_mode
    }
}
