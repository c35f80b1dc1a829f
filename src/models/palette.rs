//! Fixed palette swatches based on Tailwind CSS colors.
//!
//! Only the shades the page actually uses are listed. Each swatch knows its
//! Tailwind class stem (e.g. `blue-500`) and its RGB value.

use serde::Serialize;
use std::fmt;

use super::RgbColor;

/// A named palette shade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
#[allow(missing_docs)]
pub enum Swatch {
    Blue200,
    Blue400,
    Blue500,
    Blue600,
    Slate700,
    Slate800,
    Slate900,
    Gray100,
    Gray200,
    Gray700,
    Gray800,
    Pink200,
    Pink500,
    Purple500,
    Purple600,
    Purple800,
}

impl Swatch {
    /// Tailwind class stem, e.g. `blue-500`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Blue200 => "blue-200",
            Self::Blue400 => "blue-400",
            Self::Blue500 => "blue-500",
            Self::Blue600 => "blue-600",
            Self::Slate700 => "slate-700",
            Self::Slate800 => "slate-800",
            Self::Slate900 => "slate-900",
            Self::Gray100 => "gray-100",
            Self::Gray200 => "gray-200",
            Self::Gray700 => "gray-700",
            Self::Gray800 => "gray-800",
            Self::Pink200 => "pink-200",
            Self::Pink500 => "pink-500",
            Self::Purple500 => "purple-500",
            Self::Purple600 => "purple-600",
            Self::Purple800 => "purple-800",
        }
    }

    /// RGB value of the shade.
    #[must_use]
    pub const fn rgb(&self) -> RgbColor {
        match self {
            Self::Blue200 => RgbColor::new(0xBF, 0xDB, 0xFE),
            Self::Blue400 => RgbColor::new(0x60, 0xA5, 0xFA),
            Self::Blue500 => RgbColor::new(0x3B, 0x82, 0xF6),
            Self::Blue600 => RgbColor::new(0x25, 0x63, 0xEB),
            Self::Slate700 => RgbColor::new(0x33, 0x41, 0x55),
            Self::Slate800 => RgbColor::new(0x1E, 0x29, 0x3B),
            Self::Slate900 => RgbColor::new(0x0F, 0x17, 0x2A),
            Self::Gray100 => RgbColor::new(0xF3, 0xF4, 0xF6),
            Self::Gray200 => RgbColor::new(0xE5, 0xE7, 0xEB),
            Self::Gray700 => RgbColor::new(0x37, 0x41, 0x51),
            Self::Gray800 => RgbColor::new(0x1F, 0x29, 0x37),
            Self::Pink200 => RgbColor::new(0xFB, 0xCF, 0xE8),
            Self::Pink500 => RgbColor::new(0xEC, 0x48, 0x99),
            Self::Purple500 => RgbColor::new(0xA8, 0x55, 0xF7),
            Self::Purple600 => RgbColor::new(0x93, 0x33, 0xEA),
            Self::Purple800 => RgbColor::new(0x6B, 0x21, 0xA8),
        }
    }
}

impl fmt::Display for Swatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Swatch> for String {
    fn from(swatch: Swatch) -> Self {
        swatch.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_shades() {
        assert_eq!(Swatch::Blue500.rgb().to_hex(), "#3B82F6");
        assert_eq!(Swatch::Pink500.rgb().to_hex(), "#EC4899");
        assert_eq!(Swatch::Purple600.to_string(), "purple-600");
    }
}
