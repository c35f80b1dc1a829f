//! Terminal colors derived from the resolved page theme.
//!
//! The page theme speaks in palette swatches and literal colors; this module
//! maps each role onto a ratatui `Color` and adds the chrome colors (page
//! background, muted text, highlight) the page theme does not cover.

use ratatui::style::Color;

use crate::models::Swatch;
use crate::theme::ResolvedTheme;

/// Semantic color theme for the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Profile header background
    pub header_bg: Color,
    /// Profile header gradient end
    pub header_bg_end: Color,
    /// Text drawn on the header
    pub header_fg: Color,
    /// Panel borders
    pub border: Color,
    /// Headings and links
    pub link: Color,
    /// Focused link / selected suggestion
    pub link_hover: Color,
    /// Body text
    pub text: Color,
    /// Secondary text
    pub text_muted: Color,
    /// Divider lines
    pub divider: Color,
    /// Comment box and modal surface
    pub surface: Color,
    /// Page background
    pub background: Color,
    /// Background of highlighted query matches
    pub highlight_bg: Color,
    /// Foreground of highlighted query matches
    pub highlight_fg: Color,
    /// Error and warning text
    pub error: Color,
    /// Confirmation text
    pub success: Color,
    /// Draw heavy borders on focused blocks
    pub heavy_focus: bool,
}

impl Theme {
    /// Maps a resolved page theme onto terminal colors.
    #[must_use]
    pub fn from_resolved(resolved: &ResolvedTheme) -> Self {
        let dark = resolved.context.is_dark_mode;
        let (header_bg, header_bg_end) = match resolved.header_background {
            crate::theme::StyleValue::Gradient { from, to } => {
                (from.rgb().to_ratatui_color(), to.rgb().to_ratatui_color())
            }
            other => {
                let c = other.primary().to_ratatui_color();
                (c, c)
            }
        };

        Self {
            header_bg,
            header_bg_end,
            header_fg: Color::White,
            border: resolved.border.primary().to_ratatui_color(),
            link: resolved.link.primary().to_ratatui_color(),
            link_hover: resolved.link_hover.primary().to_ratatui_color(),
            text: resolved.body_text.primary().to_ratatui_color(),
            text_muted: if dark {
                Swatch::Gray200.rgb().to_ratatui_color()
            } else {
                Swatch::Gray700.rgb().to_ratatui_color()
            },
            divider: resolved.divider.primary().to_ratatui_color(),
            surface: resolved.comment_box.primary().to_ratatui_color(),
            background: if dark {
                Swatch::Slate900.rgb().to_ratatui_color()
            } else {
                Color::White
            },
            highlight_bg: resolved.context.accent.to_ratatui_color(),
            highlight_fg: Color::Black,
            error: Color::Red,
            success: if dark {
                Color::Green
            } else {
                Color::Rgb(0, 128, 0)
            },
            heavy_focus: resolved.enhanced_focus,
        }
    }
}
