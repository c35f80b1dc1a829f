//! Theme command: prints every resolved style role.

use crate::cli::common::{load_config, open_preferences, print_json, CliResult};
use crate::theme::{ResolvedTheme, StyleRole};
use clap::Args;

/// Show the styles the current preferences resolve to
#[derive(Debug, Clone, Args)]
pub struct ThemeArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ThemeArgs {
    /// Execute the theme command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let context = open_preferences(&config)?;
        let theme =
            ResolvedTheme::resolve(context.state()).with_accessibility(context.accessibility());

        if self.json {
            return print_json(&theme);
        }

        println!(
            "Layout: {}  Dark mode: {}",
            theme.context.layout_mode,
            if theme.context.is_dark_mode { "on" } else { "off" }
        );
        println!();
        for role in StyleRole::ALL {
            println!("  {:<18} {}", role.label(), theme.get(role).describe());
        }
        println!();
        println!("  {:<18} {}", "Font", theme.font_family);
        println!("  {:<18} {}%", "Font scale", theme.font_scale);
        println!(
            "  {:<18} {}",
            "Animations",
            if theme.animations { "on" } else { "off" }
        );

        Ok(())
    }
}
