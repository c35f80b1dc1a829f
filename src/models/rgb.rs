//! RGB color handling with hex parsing and the tint transforms used by the theme.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// RGB color value with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
/// Serializes as a "#RRGGBB" string so persisted customization stays
/// readable by anything that stores CSS colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Supports formats: "#RRGGBB", "RRGGBB", "#rrggbb", "rrggbb"
    ///
    /// # Examples
    ///
    /// ```
    /// use folio::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#FF9900").unwrap();
    /// assert_eq!(color, RgbColor::new(255, 153, 0));
    ///
    /// let color = RgbColor::from_hex("00ff00").unwrap();
    /// assert_eq!(color, RgbColor::new(0, 255, 0));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color format.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            anyhow::bail!("Invalid hex color format '{hex}'. Expected 6 hex digits (RRGGBB)");
        }

        let r = u8::from_str_radix(&hex[0..2], 16)
            .context(format!("Invalid red channel in hex color '{hex}'"))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .context(format!("Invalid green channel in hex color '{hex}'"))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .context(format!("Invalid blue channel in hex color '{hex}'"))?;

        Ok(Self::new(r, g, b))
    }

    /// Converts the color to a hex string in the format "#RRGGBB" (uppercase).
    ///
    /// # Examples
    ///
    /// ```
    /// use folio::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::new(255, 153, 0).to_hex(), "#FF9900");
    /// assert_eq!(RgbColor::new(0, 128, 255).to_hex(), "#0080FF");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Converts the color to a Ratatui Color for terminal rendering.
    #[cfg(feature = "ratatui")]
    #[must_use]
    pub const fn to_ratatui_color(&self) -> ratatui::style::Color {
        ratatui::style::Color::Rgb(self.r, self.g, self.b)
    }

    /// Mixes each channel toward white by `percent` (0-100).
    ///
    /// `c + (255 - c) * percent / 100`, rounded to the nearest integer.
    ///
    /// # Examples
    ///
    /// ```
    /// use folio::models::RgbColor;
    ///
    /// let light = RgbColor::new(51, 102, 204).lighten(90);
    /// assert_eq!(light.to_hex(), "#EBF0FA");
    /// ```
    #[must_use]
    pub fn lighten(&self, percent: u8) -> Self {
        let factor = f64::from(percent.min(100)) / 100.0;
        let channel = |c: u8| {
            let c = f64::from(c);
            (c + (255.0 - c) * factor).round().clamp(0.0, 255.0) as u8
        };
        Self::new(channel(self.r), channel(self.g), channel(self.b))
    }

    /// Subtracts `percent` of 255 from each channel, floored at 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use folio::models::RgbColor;
    ///
    /// // 20% of 255 is 51
    /// let dark = RgbColor::new(51, 102, 204).darken(20);
    /// assert_eq!(dark, RgbColor::new(0, 51, 153));
    /// ```
    #[must_use]
    pub fn darken(&self, percent: u8) -> Self {
        let amount = (255.0 * f64::from(percent.min(100)) / 100.0).round() as u8;
        Self::new(
            self.r.saturating_sub(amount),
            self.g.saturating_sub(amount),
            self.b.saturating_sub(amount),
        )
    }

    /// Linear blend: `weight` of `self` plus `1 - weight` of `other`.
    #[must_use]
    pub fn blend(&self, other: &Self, weight: f64) -> Self {
        let weight = weight.clamp(0.0, 1.0);
        let channel = |a: u8, b: u8| {
            (f64::from(a) * weight + f64::from(b) * (1.0 - weight))
                .round()
                .clamp(0.0, 255.0) as u8
        };
        Self::new(
            channel(self.r, other.r),
            channel(self.g, other.g),
            channel(self.b, other.b),
        )
    }

    /// Mutes a color for dark backgrounds by folding it into `base`.
    ///
    /// Each channel becomes `0.7 * base + 0.3 * (0.3 * c)`, rounded.
    #[must_use]
    pub fn muted_over(&self, base: &Self) -> Self {
        let channel = |c: u8, b: u8| {
            (0.7 * f64::from(b) + 0.3 * (0.3 * f64::from(c)))
                .round()
                .clamp(0.0, 255.0) as u8
        };
        Self::new(
            channel(self.r, base.r),
            channel(self.g, base.g),
            channel(self.b, base.b),
        )
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl TryFrom<String> for RgbColor {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        Self::from_hex(&value)
    }
}

impl From<RgbColor> for String {
    fn from(color: RgbColor) -> Self {
        color.to_hex()
    }
}

impl Default for RgbColor {
    /// Default color is white (#FFFFFF).
    fn default() -> Self {
        Self::new(255, 255, 255)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_valid() {
        let color = RgbColor::from_hex("#FF0000").unwrap();
        assert_eq!(color, RgbColor::new(255, 0, 0));

        let color = RgbColor::from_hex("00FF00").unwrap();
        assert_eq!(color, RgbColor::new(0, 255, 0));

        let color = RgbColor::from_hex("#0000ff").unwrap();
        assert_eq!(color, RgbColor::new(0, 0, 255));

        let color = RgbColor::from_hex("  #FFFFFF  ").unwrap();
        assert_eq!(color, RgbColor::new(255, 255, 255));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(RgbColor::from_hex("#FFF").is_err());
        assert!(RgbColor::from_hex("#FFFFFFF").is_err());
        assert!(RgbColor::from_hex("GGGGGG").is_err());
        assert!(RgbColor::from_hex("").is_err());
        assert!(RgbColor::from_hex("#").is_err());
        assert!(RgbColor::from_hex("#ÄÄÄ").is_err());
        assert!(RgbColor::from_hex("#+F+F+F").is_err());
        assert!(RgbColor::from_hex("+0+0+0").is_err());
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(RgbColor::new(255, 0, 0).to_hex(), "#FF0000");
        assert_eq!(RgbColor::new(0, 128, 255).to_hex(), "#0080FF");
        assert_eq!(RgbColor::new(0, 0, 0).to_hex(), "#000000");
    }

    #[test]
    fn test_lighten_exact() {
        let accent = RgbColor::new(51, 102, 204);
        // 51 + 204*0.9 = 234.6, 102 + 153*0.9 = 239.7, 204 + 51*0.9 = 249.9
        assert_eq!(accent.lighten(90), RgbColor::new(235, 240, 250));
        assert_eq!(accent.lighten(0), accent);
        assert_eq!(accent.lighten(100), RgbColor::new(255, 255, 255));
    }

    #[test]
    fn test_darken_floors_at_zero() {
        let accent = RgbColor::new(51, 102, 204);
        assert_eq!(accent.darken(20), RgbColor::new(0, 51, 153));

        let dim = RgbColor::new(10, 20, 30);
        assert_eq!(dim.darken(20), RgbColor::new(0, 0, 0));
        assert_eq!(dim.darken(0), dim);
    }

    #[test]
    fn test_muted_over_dark_base() {
        let base = RgbColor::new(43, 33, 24);
        let accent = RgbColor::new(51, 102, 204);
        // r: 30.1 + 4.59 = 34.69, g: 23.1 + 9.18 = 32.28, b: 16.8 + 18.36 = 35.16
        assert_eq!(accent.muted_over(&base), RgbColor::new(35, 32, 35));

        // A black input leaves 70% of the base
        let black = RgbColor::new(0, 0, 0);
        assert_eq!(black.muted_over(&base), RgbColor::new(30, 23, 17));
    }

    #[test]
    fn test_blend_weights() {
        let white = RgbColor::new(255, 255, 255);
        let black = RgbColor::new(0, 0, 0);
        assert_eq!(white.blend(&black, 1.0), white);
        assert_eq!(white.blend(&black, 0.0), black);
        assert_eq!(white.blend(&black, 0.2), RgbColor::new(51, 51, 51));
    }

    #[test]
    fn test_serde_as_hex_string() {
        let color = RgbColor::new(255, 153, 0);
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "\"#FF9900\"");

        let parsed: RgbColor = serde_json::from_str("\"#3366cc\"").unwrap();
        assert_eq!(parsed, RgbColor::new(51, 102, 204));

        assert!(serde_json::from_str::<RgbColor>("\"orange\"").is_err());
    }

    #[test]
    fn test_default() {
        assert_eq!(RgbColor::default(), RgbColor::new(255, 255, 255));
    }
}
