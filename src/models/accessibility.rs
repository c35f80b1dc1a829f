//! Accessibility settings.

use serde::{Deserialize, Serialize};

/// Smallest font scale accepted, in percent.
pub const MIN_FONT_SIZE: u16 = 75;
/// Largest font scale accepted, in percent.
pub const MAX_FONT_SIZE: u16 = 200;
/// Font scale step used by the options dialog.
pub const FONT_SIZE_STEP: u16 = 10;

/// Accessibility options persisted under `accessibilitySettings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilitySettings {
    /// Font scale in percent (100 = normal)
    pub font_size: u16,
    /// Forces maximum text contrast
    pub high_contrast: bool,
    /// Disables motion regardless of the animation preference
    pub reduced_motion: bool,
    /// Draws heavier focus outlines
    pub enhanced_focus: bool,
}

impl AccessibilitySettings {
    /// Returns a copy with the font size clamped to the accepted range.
    #[must_use]
    pub fn clamped(mut self) -> Self {
        self.font_size = self.font_size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
        self
    }

    /// Grows the font scale by one step.
    pub fn increase_font(&mut self) {
        self.font_size = (self.font_size + FONT_SIZE_STEP).min(MAX_FONT_SIZE);
    }

    /// Shrinks the font scale by one step.
    pub fn decrease_font(&mut self) {
        self.font_size = self
            .font_size
            .saturating_sub(FONT_SIZE_STEP)
            .max(MIN_FONT_SIZE);
    }
}

impl Default for AccessibilitySettings {
    fn default() -> Self {
        Self {
            font_size: 100,
            high_contrast: false,
            reduced_motion: false,
            enhanced_focus: false,
        }
    }
}
