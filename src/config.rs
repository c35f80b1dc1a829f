//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::constants::{CONFIG_DIR_ENV, CONFIG_DIR_NAME};

/// Where the system dark-mode preference comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always report a dark system preference
    Dark,
    /// Always report a light system preference
    Light,
}

impl ThemeMode {
    /// Resolves the system dark-mode preference.
    ///
    /// `Auto` asks the OS through `dark-light`; detection errors and
    /// unspecified modes count as light.
    #[must_use]
    pub fn prefers_dark(&self) -> bool {
        match self {
            Self::Dark => true,
            Self::Light => false,
            Self::Auto => match dark_light::detect() {
                Ok(dark_light::Mode::Dark) => true,
                Ok(dark_light::Mode::Light | dark_light::Mode::Unspecified) | Err(_) => false,
            },
        }
    }

    /// Parses `auto`, `dark` or `light` (case-insensitive).
    pub fn parse(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            _ => anyhow::bail!("Invalid theme mode '{value}'. Must be 'auto', 'light', or 'dark'"),
        }
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// System theme source used when no dark-mode preference is stored
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Counter service endpoints.
///
/// Responses are JSON objects carrying a `count` or `value` number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterConfig {
    /// Whether the footer counters are fetched at all
    #[serde(default = "default_counter_enabled")]
    pub enabled: bool,
    /// Endpoint that records one visit
    #[serde(default = "default_visitor_increment_url")]
    pub visitor_increment_url: String,
    /// Endpoint that returns the visit total
    #[serde(default = "default_visitor_fetch_url")]
    pub visitor_fetch_url: String,
    /// Endpoint that returns the page hit total
    #[serde(default = "default_hit_url")]
    pub hit_url: String,
}

fn default_counter_enabled() -> bool {
    true
}

fn default_visitor_increment_url() -> String {
    "https://api.counterapi.dev/v1/folio/visitors/up".to_string()
}

fn default_visitor_fetch_url() -> String {
    "https://api.counterapi.dev/v1/folio/visitors".to_string()
}

fn default_hit_url() -> String {
    "https://api.counterapi.dev/v1/folio/hits/up".to_string()
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            enabled: default_counter_enabled(),
            visitor_increment_url: default_visitor_increment_url(),
            visitor_fetch_url: default_visitor_fetch_url(),
            hit_url: default_hit_url(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/Folio/config.toml`
/// - macOS: `~/Library/Application Support/Folio/config.toml`
/// - Windows: `%APPDATA%\Folio\config.toml`
///
/// `FOLIO_CONFIG_DIR` replaces the directory on every platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
    /// Counter services
    #[serde(default)]
    pub counter: CounterConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the config directory path.
    ///
    /// `FOLIO_CONFIG_DIR` wins when set; otherwise:
    /// - Linux: `~/.config/Folio/`
    /// - macOS: `~/Library/Application Support/Folio/`
    /// - Windows: `%APPDATA%\Folio\`
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            if !dir.is_empty() {
                return Ok(PathBuf::from(dir));
            }
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Gets the path of the preference storage file.
    pub fn storage_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("storage.json"))
    }

    /// Gets the path of the log file used by the terminal front end.
    pub fn log_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("folio.log"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        Self::from_toml(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Counter URLs must be http(s) when counters are enabled.
    pub fn validate(&self) -> Result<()> {
        if self.counter.enabled {
            for (name, url) in [
                ("visitor_increment_url", &self.counter.visitor_increment_url),
                ("visitor_fetch_url", &self.counter.visitor_fetch_url),
                ("hit_url", &self.counter.hit_url),
            ] {
                if !(url.starts_with("http://") || url.starts_with("https://")) {
                    anyhow::bail!("counter.{name} must be an http(s) URL, got '{url}'");
                }
            }
        }

        Ok(())
    }
}
