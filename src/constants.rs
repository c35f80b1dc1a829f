//! Application-wide constants.
//!
//! This module defines the application name, the durable storage keys and
//! the documented preference defaults.

use crate::models::RgbColor;

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Folio";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "folio";

/// Directory name under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "Folio";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "FOLIO_CONFIG_DIR";

// Durable storage keys. Dark mode and layout mode live under their own keys
// next to the customization object for backward compatibility.

/// Standalone dark-mode flag (JSON boolean).
pub const KEY_DARK_MODE: &str = "darkMode";
/// Layout mode (`default` or `custom`).
pub const KEY_LAYOUT_MODE: &str = "layoutMode";
/// Customization bundle (JSON object).
pub const KEY_CUSTOMIZATION: &str = "portfolioCustomization";
/// Accessibility settings (JSON object).
pub const KEY_ACCESSIBILITY: &str = "accessibilitySettings";
/// Ratings append log (JSON array).
pub const KEY_RATINGS: &str = "portfolioRatings";

/// Default accent color (#FF9900).
pub const DEFAULT_ACCENT: RgbColor = RgbColor::new(0xFF, 0x99, 0x00);

/// Default font family.
pub const DEFAULT_FONT_FAMILY: &str = "Verdana";

/// Font families offered by the customizer.
pub const FONT_CHOICES: &[&str] = &[
    "Verdana",
    "Arial",
    "Georgia",
    "Trebuchet MS",
    "Courier New",
    "Comic Sans MS",
];

/// Accent presets offered by the customizer.
pub const ACCENT_PRESETS: &[RgbColor] = &[
    DEFAULT_ACCENT,
    RgbColor::new(0x33, 0x66, 0xCC),
    RgbColor::new(0xCC, 0x33, 0x66),
    RgbColor::new(0x33, 0xAA, 0x66),
    RgbColor::new(0x99, 0x33, 0xCC),
];

/// Maximum number of catalog suggestions shown under the search box.
pub const SUGGESTION_LIMIT: usize = 5;

/// Placeholder shown when a counter service cannot be reached.
pub const COUNTER_FALLBACK: &str = "0";

/// URL query parameter that forces the desktop layout.
pub const DESKTOP_PARAM: &str = "desktop";

/// Name shown on the profile card.
pub const PROFILE_NAME: &str = "Alex Morgan";

/// Short name used in custom-layout panel titles.
pub const PROFILE_SHORT_NAME: &str = "Alex";

/// One-line role under the profile name.
pub const PROFILE_TAGLINE: &str = "Software Engineer · Seattle, WA";
