//! Style resolution for every visual role on the page.
//!
//! [`resolve_style`] is a pure function of layout mode, dark mode and accent
//! color. Fixed roles come from the layout/dark decision table; accent roles
//! derive from the accent color, with hand-tuned legacy tints for the default
//! `#FF9900` accent.

use serde::Serialize;

use crate::constants::DEFAULT_ACCENT;
use crate::models::{AccessibilitySettings, LayoutMode, PreferenceBundle, RgbColor, Swatch};

/// Percentage of 255 removed from each channel for link hover.
pub const HOVER_DARKEN_PERCENT: u8 = 20;

/// How far custom accents are pushed toward white for light comment boxes.
pub const COMMENT_LIGHTEN_PERCENT: u8 = 90;

/// Dark brown base that custom accents are folded into on dark backgrounds.
pub const MUTED_DARK_BASE: RgbColor = RgbColor::new(0x2B, 0x21, 0x18);

/// Legacy hover tint for the default accent on light backgrounds.
pub const LEGACY_HOVER_LIGHT: RgbColor = RgbColor::new(0xCC, 0x7A, 0x00);
/// Legacy hover tint for the default accent on dark backgrounds.
pub const LEGACY_HOVER_DARK: RgbColor = RgbColor::new(0xFF, 0xB8, 0x4D);
/// Legacy comment-box background for the default accent, light mode.
pub const LEGACY_COMMENT_LIGHT: RgbColor = RgbColor::new(0xFF, 0xF5, 0xE6);
/// Legacy comment-box background for the default accent, dark mode.
pub const LEGACY_COMMENT_DARK: RgbColor = RgbColor::new(0x3A, 0x2A, 0x17);

/// Body text under high contrast on light backgrounds.
pub const HIGH_CONTRAST_LIGHT_TEXT: RgbColor = RgbColor::new(0x00, 0x00, 0x00);
/// Body text under high contrast on dark backgrounds.
pub const HIGH_CONTRAST_DARK_TEXT: RgbColor = RgbColor::new(0xFF, 0xFF, 0xFF);

/// Inputs of the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleContext {
    /// Page layout
    pub layout_mode: LayoutMode,
    /// Dark backgrounds
    pub is_dark_mode: bool,
    /// Customization accent
    pub accent: RgbColor,
}

impl From<&PreferenceBundle> for StyleContext {
    fn from(bundle: &PreferenceBundle) -> Self {
        Self {
            layout_mode: bundle.layout_mode,
            is_dark_mode: bundle.is_dark_mode,
            accent: bundle.customization.accent_color,
        }
    }
}

/// Visual slots that need a computed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleRole {
    /// Profile/section header background
    HeaderBackground,
    /// Panel borders
    BorderColor,
    /// Link text
    LinkColor,
    /// Link text under the pointer / focus
    LinkHoverColor,
    /// Body text
    BodyText,
    /// Horizontal dividers
    Divider,
    /// Comment / guestbook box background
    CommentBoxBackground,
}

impl StyleRole {
    /// Every role, in display order.
    pub const ALL: [Self; 7] = [
        Self::HeaderBackground,
        Self::BorderColor,
        Self::LinkColor,
        Self::LinkHoverColor,
        Self::BodyText,
        Self::Divider,
        Self::CommentBoxBackground,
    ];

    /// Display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::HeaderBackground => "Header background",
            Self::BorderColor => "Border",
            Self::LinkColor => "Link",
            Self::LinkHoverColor => "Link hover",
            Self::BodyText => "Body text",
            Self::Divider => "Divider",
            Self::CommentBoxBackground => "Comment box",
        }
    }

    /// Whether the role follows the accent instead of the decision table.
    #[must_use]
    pub const fn is_accent_driven(&self) -> bool {
        matches!(
            self,
            Self::LinkColor | Self::LinkHoverColor | Self::CommentBoxBackground
        )
    }
}

/// A computed style value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StyleValue {
    /// One palette shade
    Swatch {
        /// The shade
        swatch: Swatch,
    },
    /// Two-stop gradient
    Gradient {
        /// Start shade
        from: Swatch,
        /// End shade
        to: Swatch,
    },
    /// Literal color (accent-derived)
    Color {
        /// The color
        color: RgbColor,
    },
}

impl StyleValue {
    const fn swatch(swatch: Swatch) -> Self {
        Self::Swatch { swatch }
    }

    const fn gradient(from: Swatch, to: Swatch) -> Self {
        Self::Gradient { from, to }
    }

    const fn color(color: RgbColor) -> Self {
        Self::Color { color }
    }

    /// Representative solid color (gradient start for gradients).
    #[must_use]
    pub const fn primary(&self) -> RgbColor {
        match self {
            Self::Swatch { swatch } => swatch.rgb(),
            Self::Gradient { from, .. } => from.rgb(),
            Self::Color { color } => *color,
        }
    }

    /// CSS-ish description, e.g. `blue-500`, `blue-500/blue-600`, `#FF9900`.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Swatch { swatch } => swatch.name().to_string(),
            Self::Gradient { from, to } => format!("{from}/{to}"),
            Self::Color { color } => color.to_hex(),
        }
    }
}

/// Resolves one role.
#[must_use]
pub fn resolve_style(ctx: &StyleContext, role: StyleRole) -> StyleValue {
    use LayoutMode as L;

    let dark = ctx.is_dark_mode;
    match role {
        StyleRole::HeaderBackground => match (ctx.layout_mode, dark) {
            (L::Default, false) => StyleValue::gradient(Swatch::Blue500, Swatch::Blue600),
            (L::Default, true) => StyleValue::gradient(Swatch::Slate800, Swatch::Slate900),
            (L::Custom, false) => StyleValue::swatch(Swatch::Pink500),
            (L::Custom, true) => StyleValue::swatch(Swatch::Purple600),
        },
        StyleRole::BorderColor => StyleValue::swatch(match (ctx.layout_mode, dark) {
            (L::Default, false) => Swatch::Blue500,
            (L::Default, true) => Swatch::Blue400,
            (L::Custom, false) => Swatch::Pink500,
            (L::Custom, true) => Swatch::Purple500,
        }),
        StyleRole::Divider => StyleValue::swatch(match (ctx.layout_mode, dark) {
            (L::Default, false) => Swatch::Gray200,
            (L::Default, true) => Swatch::Gray700,
            (L::Custom, false) => Swatch::Pink200,
            (L::Custom, true) => Swatch::Purple800,
        }),
        StyleRole::BodyText => StyleValue::swatch(if dark {
            Swatch::Gray100
        } else {
            Swatch::Gray800
        }),
        StyleRole::LinkColor => StyleValue::color(ctx.accent),
        StyleRole::LinkHoverColor => StyleValue::color(link_hover(ctx.accent, dark)),
        StyleRole::CommentBoxBackground => StyleValue::color(comment_background(ctx.accent, dark)),
    }
}

/// Hover tint for links.
#[must_use]
pub fn link_hover(accent: RgbColor, is_dark: bool) -> RgbColor {
    match (accent == DEFAULT_ACCENT, is_dark) {
        (true, false) => LEGACY_HOVER_LIGHT,
        (true, true) => LEGACY_HOVER_DARK,
        (false, _) => accent.darken(HOVER_DARKEN_PERCENT),
    }
}

/// Comment-box background tint.
#[must_use]
pub fn comment_background(accent: RgbColor, is_dark: bool) -> RgbColor {
    match (accent == DEFAULT_ACCENT, is_dark) {
        (true, false) => LEGACY_COMMENT_LIGHT,
        (true, true) => LEGACY_COMMENT_DARK,
        (false, false) => accent.lighten(COMMENT_LIGHTEN_PERCENT),
        (false, true) => accent.muted_over(&MUTED_DARK_BASE),
    }
}

/// Every role resolved at once, plus the non-color customization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedTheme {
    /// Inputs the values were computed from
    #[serde(skip)]
    pub context: StyleContext,
    /// Header background
    pub header_background: StyleValue,
    /// Borders
    pub border: StyleValue,
    /// Links
    pub link: StyleValue,
    /// Link hover
    pub link_hover: StyleValue,
    /// Body text
    pub body_text: StyleValue,
    /// Dividers
    pub divider: StyleValue,
    /// Comment boxes
    pub comment_box: StyleValue,
    /// Font family
    pub font_family: String,
    /// Whether animations run
    pub animations: bool,
    /// Font scale in percent
    pub font_scale: u16,
    /// Heavier focus outline
    pub enhanced_focus: bool,
}

impl ResolvedTheme {
    /// Resolves every role for `bundle`.
    #[must_use]
    pub fn resolve(bundle: &PreferenceBundle) -> Self {
        let context = StyleContext::from(bundle);
        let get = |role| resolve_style(&context, role);

        Self {
            context,
            header_background: get(StyleRole::HeaderBackground),
            border: get(StyleRole::BorderColor),
            link: get(StyleRole::LinkColor),
            link_hover: get(StyleRole::LinkHoverColor),
            body_text: get(StyleRole::BodyText),
            divider: get(StyleRole::Divider),
            comment_box: get(StyleRole::CommentBoxBackground),
            font_family: bundle.customization.font_family.clone(),
            animations: bundle.customization.animations_enabled,
            font_scale: 100,
            enhanced_focus: false,
        }
    }

    /// Applies accessibility overrides.
    ///
    /// High contrast forces pure body text, reduced motion stops animations.
    #[must_use]
    pub fn with_accessibility(mut self, settings: &AccessibilitySettings) -> Self {
        if settings.high_contrast {
            self.body_text = StyleValue::color(if self.context.is_dark_mode {
                HIGH_CONTRAST_DARK_TEXT
            } else {
                HIGH_CONTRAST_LIGHT_TEXT
            });
        }
        if settings.reduced_motion {
            self.animations = false;
        }
        self.font_scale = settings.font_size;
        self.enhanced_focus = settings.enhanced_focus;
        self
    }

    /// Value for `role`.
    #[must_use]
    pub const fn get(&self, role: StyleRole) -> StyleValue {
        match role {
            StyleRole::HeaderBackground => self.header_background,
            StyleRole::BorderColor => self.border,
            StyleRole::LinkColor => self.link,
            StyleRole::LinkHoverColor => self.link_hover,
            StyleRole::BodyText => self.body_text,
            StyleRole::Divider => self.divider,
            StyleRole::CommentBoxBackground => self.comment_box,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(layout_mode: LayoutMode, is_dark_mode: bool) -> StyleContext {
        StyleContext {
            layout_mode,
            is_dark_mode,
            accent: DEFAULT_ACCENT,
        }
    }

    #[test]
    fn test_decision_table() {
        let cases = [
            (
                LayoutMode::Default,
                false,
                Swatch::Blue500,
                StyleValue::gradient(Swatch::Blue500, Swatch::Blue600),
            ),
            (
                LayoutMode::Default,
                true,
                Swatch::Blue400,
                StyleValue::gradient(Swatch::Slate800, Swatch::Slate900),
            ),
            (
                LayoutMode::Custom,
                false,
                Swatch::Pink500,
                StyleValue::swatch(Swatch::Pink500),
            ),
            (
                LayoutMode::Custom,
                true,
                Swatch::Purple500,
                StyleValue::swatch(Swatch::Purple600),
            ),
        ];

        for (layout, dark, border, header) in cases {
            let c = ctx(layout, dark);
            assert_eq!(
                resolve_style(&c, StyleRole::BorderColor),
                StyleValue::swatch(border),
                "border for {layout} dark={dark}"
            );
            assert_eq!(
                resolve_style(&c, StyleRole::HeaderBackground),
                header,
                "header for {layout} dark={dark}"
            );
        }
    }

    #[test]
    fn test_accent_roles_ignore_table() {
        let accent = RgbColor::new(0x33, 0x66, 0xCC);
        for layout in [LayoutMode::Default, LayoutMode::Custom] {
            for dark in [false, true] {
                let c = StyleContext {
                    layout_mode: layout,
                    is_dark_mode: dark,
                    accent,
                };
                assert_eq!(resolve_style(&c, StyleRole::LinkColor), StyleValue::color(accent));
            }
        }
    }

    #[test]
    fn test_default_accent_uses_legacy_tints() {
        let light = ctx(LayoutMode::Custom, false);
        assert_eq!(
            resolve_style(&light, StyleRole::LinkHoverColor).primary().to_hex(),
            "#CC7A00"
        );
        assert_eq!(
            resolve_style(&light, StyleRole::CommentBoxBackground).primary().to_hex(),
            "#FFF5E6"
        );

        let dark = ctx(LayoutMode::Custom, true);
        assert_eq!(
            resolve_style(&dark, StyleRole::LinkHoverColor).primary().to_hex(),
            "#FFB84D"
        );
        assert_eq!(
            resolve_style(&dark, StyleRole::CommentBoxBackground).primary().to_hex(),
            "#3A2A17"
        );
    }

    #[test]
    fn test_custom_accent_transforms() {
        let accent = RgbColor::new(0x33, 0x66, 0xCC);
        assert_eq!(link_hover(accent, false), RgbColor::new(0x00, 0x33, 0x99));
        assert_eq!(link_hover(accent, true), RgbColor::new(0x00, 0x33, 0x99));
        assert_eq!(comment_background(accent, false).to_hex(), "#EBF0FA");
        assert_eq!(comment_background(accent, true), RgbColor::new(35, 32, 35));
    }

    #[test]
    fn test_body_text_by_mode() {
        assert_eq!(
            resolve_style(&ctx(LayoutMode::Default, false), StyleRole::BodyText),
            StyleValue::swatch(Swatch::Gray800)
        );
        assert_eq!(
            resolve_style(&ctx(LayoutMode::Custom, true), StyleRole::BodyText),
            StyleValue::swatch(Swatch::Gray100)
        );
    }

    #[test]
    fn test_resolved_theme_matches_roles() {
        let bundle = PreferenceBundle::defaults(true);
        let theme = ResolvedTheme::resolve(&bundle);
        let context = StyleContext::from(&bundle);
        for role in StyleRole::ALL {
            assert_eq!(theme.get(role), resolve_style(&context, role));
        }
        assert_eq!(theme.font_family, "Verdana");
        assert!(theme.animations);
    }

    #[test]
    fn test_accessibility_overrides() {
        let bundle = PreferenceBundle::defaults(false);
        let settings = AccessibilitySettings {
            font_size: 120,
            high_contrast: true,
            reduced_motion: true,
            enhanced_focus: true,
        };
        let theme = ResolvedTheme::resolve(&bundle).with_accessibility(&settings);
        assert_eq!(theme.body_text.primary(), HIGH_CONTRAST_LIGHT_TEXT);
        assert!(!theme.animations);
        assert_eq!(theme.font_scale, 120);
        assert!(theme.enhanced_focus);
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            StyleValue::gradient(Swatch::Blue500, Swatch::Blue600).describe(),
            "blue-500/blue-600"
        );
        assert_eq!(StyleValue::color(DEFAULT_ACCENT).describe(), "#FF9900");
    }
}
