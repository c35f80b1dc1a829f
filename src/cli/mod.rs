//! CLI command handlers for Folio.
//!
//! Headless, scriptable access to search, preferences and theming for
//! automation and testing.

pub mod ask;
pub mod common;
pub mod config;
pub mod counter;
pub mod highlight;
pub mod prefs;
pub mod rate;
pub mod search;
pub mod theme;

// Re-export types used by main.rs and tests
pub use ask::AskArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use counter::CounterArgs;
pub use highlight::HighlightArgs;
pub use prefs::PrefsArgs;
pub use rate::RateArgs;
pub use search::SearchArgs;
pub use theme::ThemeArgs;
