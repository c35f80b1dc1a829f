//! Preference commands.
//!
//! Every change goes through the same preference context the terminal front
//! end uses, so the dark-mode flag and the customization theme stay in step.

use crate::cli::common::{
    load_config, open_preferences, parse_flag, print_json, CliError, CliResult,
};
use crate::models::{
    AccessibilitySettings, CustomizationPatch, LayoutMode, PreferenceBundle, RgbColor, ThemeName,
};
use crate::prefs::PreferenceContext;
use crate::storage::FileStorage;
use clap::{Args, Subcommand};
use serde::Serialize;

/// Inspect and change persisted preferences
#[derive(Args, Debug)]
pub struct PrefsArgs {
    #[command(subcommand)]
    command: PrefsCommand,
}

#[derive(Subcommand, Debug)]
enum PrefsCommand {
    /// Display current preferences
    Show(PrefsShowArgs),
    /// Change one or more preferences
    Set(PrefsSetArgs),
    /// Restore accent, font and animations (keeps the active theme)
    Reset,
    /// Flip dark mode
    ToggleDark,
    /// Flip between default and custom layout
    ToggleLayout,
}

/// Display current preferences
#[derive(Args, Debug)]
pub struct PrefsShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Change one or more preferences
#[derive(Args, Debug)]
pub struct PrefsSetArgs {
    /// Dark mode (on/off)
    #[arg(long, value_name = "ON|OFF", value_parser = parse_flag)]
    dark: Option<bool>,

    /// Layout mode (default or custom)
    #[arg(long, value_name = "MODE")]
    layout: Option<String>,

    /// Customization theme (light or dark); also sets dark mode
    #[arg(long, value_name = "THEME")]
    theme: Option<String>,

    /// Accent color as #RRGGBB
    #[arg(long, value_name = "HEX")]
    accent: Option<String>,

    /// Font family
    #[arg(long, value_name = "NAME")]
    font: Option<String>,

    /// Decorative animations (on/off)
    #[arg(long, value_name = "ON|OFF", value_parser = parse_flag)]
    animations: Option<bool>,

    /// Font scale in percent (75-200)
    #[arg(long, value_name = "PERCENT")]
    font_size: Option<u16>,

    /// High-contrast text (on/off)
    #[arg(long, value_name = "ON|OFF", value_parser = parse_flag)]
    high_contrast: Option<bool>,

    /// Reduced motion (on/off)
    #[arg(long, value_name = "ON|OFF", value_parser = parse_flag)]
    reduced_motion: Option<bool>,

    /// Heavier focus outlines (on/off)
    #[arg(long, value_name = "ON|OFF", value_parser = parse_flag)]
    enhanced_focus: Option<bool>,
}

#[derive(Serialize, Debug)]
struct PrefsOutput<'a> {
    preferences: &'a PreferenceBundle,
    accessibility: &'a AccessibilitySettings,
}

impl PrefsArgs {
    /// Execute prefs subcommand
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let mut context = open_preferences(&config)?;

        match &self.command {
            PrefsCommand::Show(args) => return args.execute(&context),
            PrefsCommand::Set(args) => args.execute(&mut context)?,
            PrefsCommand::Reset => context.reset_customization(),
            PrefsCommand::ToggleDark => context.toggle_dark_mode(),
            PrefsCommand::ToggleLayout => context.toggle_layout_mode(),
        }

        output_human_readable(&context);
        Ok(())
    }
}

impl PrefsShowArgs {
    fn execute(&self, context: &PreferenceContext<FileStorage>) -> CliResult<()> {
        if self.json {
            print_json(&PrefsOutput {
                preferences: context.state(),
                accessibility: context.accessibility(),
            })
        } else {
            output_human_readable(context);
            Ok(())
        }
    }
}

impl PrefsSetArgs {
    fn is_empty(&self) -> bool {
        self.dark.is_none()
            && self.layout.is_none()
            && self.theme.is_none()
            && self.accent.is_none()
            && self.font.is_none()
            && self.animations.is_none()
            && self.font_size.is_none()
            && self.high_contrast.is_none()
            && self.reduced_motion.is_none()
            && self.enhanced_focus.is_none()
    }

    fn execute(&self, context: &mut PreferenceContext<FileStorage>) -> CliResult<()> {
        if self.is_empty() {
            return Err(CliError::validation(
                "At least one preference must be specified (see --help)",
            ));
        }

        // Validate everything before touching storage
        let layout = self
            .layout
            .as_deref()
            .map(|value| {
                LayoutMode::parse(value).ok_or_else(|| {
                    CliError::validation(format!(
                        "Invalid layout '{value}'. Must be 'default' or 'custom'"
                    ))
                })
            })
            .transpose()?;

        let mut patch = CustomizationPatch::new();
        if let Some(value) = &self.theme {
            let theme = ThemeName::parse(value).ok_or_else(|| {
                CliError::validation(format!("Invalid theme '{value}'. Must be 'light' or 'dark'"))
            })?;
            patch = patch.theme(theme);
        }
        if let Some(value) = &self.accent {
            let color = RgbColor::from_hex(value)
                .map_err(|e| CliError::validation(format!("Invalid accent color: {e}")))?;
            patch = patch.accent_color(color);
        }
        if let Some(font) = &self.font {
            if font.trim().is_empty() {
                return Err(CliError::validation("Font family cannot be empty"));
            }
            patch = patch.font_family(font.trim());
        }
        if let Some(enabled) = self.animations {
            patch = patch.animations_enabled(enabled);
        }

        if let Some(dark) = self.dark {
            if self.theme.is_some() {
                return Err(CliError::validation(
                    "--dark and --theme both set dark mode; pass only one",
                ));
            }
            context.set_dark_mode(dark);
        }
        if let Some(mode) = layout {
            context.set_layout_mode(mode);
        }
        if !patch.is_empty() {
            context.set_customization(patch);
        }

        let a11y_touched = self.font_size.is_some()
            || self.high_contrast.is_some()
            || self.reduced_motion.is_some()
            || self.enhanced_focus.is_some();
        if a11y_touched {
            context.update_accessibility(|settings| {
                if let Some(size) = self.font_size {
                    settings.font_size = size;
                }
                if let Some(on) = self.high_contrast {
                    settings.high_contrast = on;
                }
                if let Some(on) = self.reduced_motion {
                    settings.reduced_motion = on;
                }
                if let Some(on) = self.enhanced_focus {
                    settings.enhanced_focus = on;
                }
            });
        }

        Ok(())
    }
}

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}

fn output_human_readable(context: &PreferenceContext<FileStorage>) {
    let state = context.state();
    let a11y = context.accessibility();

    println!("Preferences");
    println!("  Dark mode:      {}", on_off(state.is_dark_mode));
    println!("  Layout:         {}", state.layout_mode);
    println!("  Theme:          {}", state.customization.theme.as_str());
    println!("  Accent:         {}", state.customization.accent_color);
    println!("  Font:           {}", state.customization.font_family);
    println!("  Animations:     {}", on_off(state.customization.animations_enabled));
    println!();
    println!("Accessibility");
    println!("  Font size:      {}%", a11y.font_size);
    println!("  High contrast:  {}", on_off(a11y.high_contrast));
    println!("  Reduced motion: {}", on_off(a11y.reduced_motion));
    println!("  Enhanced focus: {}", on_off(a11y.enhanced_focus));
}
