//! Shared pieces for CLI commands: error type, exit codes, and opening the
//! preference context the same way the terminal front end does.

use serde::Serialize;
use std::fmt;

use crate::config::Config;
use crate::prefs::{PreferenceContext, PreferenceStore};
use crate::storage::FileStorage;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Command succeeded
    Success = 0,
    /// Invalid arguments or values
    Validation = 1,
    /// File, network or serialization failure
    Io = 2,
}

/// Error raised by a CLI command.
#[derive(Debug)]
pub struct CliError {
    code: ExitCode,
    message: String,
}

impl CliError {
    /// Bad user input.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::Validation,
            message: message.into(),
        }
    }

    /// I/O or serialization failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::Io,
            message: message.into(),
        }
    }

    /// Exit code for the process.
    pub fn exit_code(&self) -> i32 {
        self.code as i32
    }

    /// Error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result alias for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Pretty-prints `value` as JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}

/// Loads configuration, rejecting a broken config file.
pub fn load_config() -> CliResult<Config> {
    Config::load().map_err(|e| CliError::io(format!("Failed to load configuration: {e:#}")))
}

/// Opens the persisted preferences.
pub fn open_preferences(config: &Config) -> CliResult<PreferenceContext<FileStorage>> {
    let path = Config::storage_file_path()
        .map_err(|e| CliError::io(format!("Failed to locate preference storage: {e:#}")))?;
    let storage = FileStorage::open(path);
    let store = PreferenceStore::new(storage, config.ui.theme_mode.prefers_dark());
    Ok(PreferenceContext::new(store))
}

/// Renders highlight segments with matches wrapped in brackets.
pub fn bracket_matches(segments: &[crate::highlight::Segment]) -> String {
    segments
        .iter()
        .map(|s| {
            if s.matched {
                format!("[{}]", s.text)
            } else {
                s.text.clone()
            }
        })
        .collect()
}

/// Parses `true`/`false`/`on`/`off`/`yes`/`no`/`1`/`0`.
pub fn parse_flag(value: &str) -> Result<bool, String> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        other => Err(format!("expected on/off, got '{other}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::highlight;

    #[test]
    fn test_bracket_matches() {
        assert_eq!(
            bracket_matches(&highlight("Docker and docker", "DOCKER")),
            "[Docker] and [docker]"
        );
        assert_eq!(bracket_matches(&highlight("plain", "")), "plain");
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("ON"), Ok(true));
        assert_eq!(parse_flag("0"), Ok(false));
        assert!(parse_flag("maybe").is_err());
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::validation("x").exit_code(), 1);
        assert_eq!(CliError::io("x").exit_code(), 2);
        assert_eq!(ExitCode::Success as i32, 0);
    }
}
