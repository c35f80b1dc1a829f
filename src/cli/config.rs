//! Configuration management CLI commands.

use crate::cli::common::{load_config, parse_flag, print_json, CliError, CliResult};
use crate::config::{Config, ThemeMode};
use clap::{Args, Subcommand};
use serde::Serialize;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// System theme source (auto, light, or dark)
    #[arg(long, value_name = "MODE")]
    theme: Option<String>,

    /// Fetch visitor counters (on/off)
    #[arg(long, value_name = "ON|OFF", value_parser = parse_flag)]
    counter: Option<bool>,

    /// Endpoint that records one visit
    #[arg(long, value_name = "URL")]
    visitor_increment_url: Option<String>,

    /// Endpoint that returns the visit total
    #[arg(long, value_name = "URL")]
    visitor_fetch_url: Option<String>,

    /// Endpoint that returns the hit total
    #[arg(long, value_name = "URL")]
    hit_url: Option<String>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput<'a> {
    ui: UiOutput,
    counter: &'a crate::config::CounterConfig,
}

#[derive(Serialize, Debug)]
struct UiOutput {
    theme: String,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;

        if self.json {
            print_json(&ConfigOutput {
                ui: UiOutput {
                    theme: theme_label(config.ui.theme_mode),
                },
                counter: &config.counter,
            })
        } else {
            output_human_readable(&config);
            Ok(())
        }
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.theme.is_none()
            && self.counter.is_none()
            && self.visitor_increment_url.is_none()
            && self.visitor_fetch_url.is_none()
            && self.hit_url.is_none()
        {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --theme, --counter, \
                 --visitor-increment-url, --visitor-fetch-url, or --hit-url",
            ));
        }

        let mut config = Config::load().unwrap_or_default();

        if let Some(theme) = &self.theme {
            config.ui.theme_mode =
                ThemeMode::parse(theme).map_err(|e| CliError::validation(e.to_string()))?;
        }
        if let Some(enabled) = self.counter {
            config.counter.enabled = enabled;
        }
        if let Some(url) = &self.visitor_increment_url {
            config.counter.visitor_increment_url.clone_from(url);
        }
        if let Some(url) = &self.visitor_fetch_url {
            config.counter.visitor_fetch_url.clone_from(url);
        }
        if let Some(url) = &self.hit_url {
            config.counter.hit_url.clone_from(url);
        }

        config
            .validate()
            .map_err(|e| CliError::validation(e.to_string()))?;
        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

fn theme_label(mode: ThemeMode) -> String {
    format!("{mode:?}").to_lowercase()
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("Folio Configuration");
    println!("===================");
    println!();

    println!("UI:");
    println!("  Theme Mode: {}", theme_label(config.ui.theme_mode));
    println!();

    println!("Counter:");
    println!(
        "  Enabled:               {}",
        if config.counter.enabled { "yes" } else { "no" }
    );
    println!("  Visitor increment URL: {}", config.counter.visitor_increment_url);
    println!("  Visitor fetch URL:     {}", config.counter.visitor_fetch_url);
    println!("  Hit URL:               {}", config.counter.hit_url);
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_label() {
        assert_eq!(theme_label(ThemeMode::Auto), "auto");
        assert_eq!(theme_label(ThemeMode::Dark), "dark");
        assert_eq!(theme_label(ThemeMode::Light), "light");
    }
}
