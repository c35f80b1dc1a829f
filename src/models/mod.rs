//! Data models for preferences, colors, and visitor feedback.
//!
//! Models are independent of UI and storage; the `prefs` module decides how
//! they are persisted and the `theme` module how they are rendered.

pub mod accessibility;
pub mod palette;
pub mod preferences;
pub mod rating;
pub mod rgb;

// Re-export all model types
pub use accessibility::AccessibilitySettings;
pub use palette::Swatch;
pub use preferences::{Customization, CustomizationPatch, LayoutMode, PreferenceBundle, ThemeName};
pub use rating::Rating;
pub use rgb::RgbColor;
