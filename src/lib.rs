//! Folio Library
//!
//! This library provides the core of the Folio portfolio page: content
//! panels with live search filtering, a suggestion catalog, persisted
//! preferences with change notification, the theme resolver, and the
//! terminal front end built on top of them.

// Module declarations
pub mod assistant;
pub mod cli;
pub mod config;
pub mod constants;
pub mod counter;
pub mod highlight;
pub mod logging;
pub mod models;
pub mod panels;
pub mod prefs;
pub mod search;
pub mod shortcuts;
pub mod storage;
pub mod theme;
#[cfg(feature = "ratatui")]
pub mod tui;
pub mod viewport;
