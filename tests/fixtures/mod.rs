//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the folio binary
pub fn folio_bin() -> String {
    std::env::var("CARGO_BIN_EXE_folio").unwrap_or_else(|_| "target/release/folio".to_string())
}

/// Creates a config directory with a deterministic light system theme and
/// counters switched off, so no test touches the network or the OS theme.
pub fn temp_config_dir() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    write_config(
        dir.path(),
        "[ui]\ntheme_mode = \"Light\"\n\n[counter]\nenabled = false\n",
    );
    dir
}

/// Writes `config.toml` into `dir`.
pub fn write_config(dir: &Path, toml: &str) {
    fs::write(dir.join("config.toml"), toml).expect("Failed to write config.toml");
}

/// Writes `storage.json` with the given raw key/value entries.
pub fn write_storage(dir: &Path, entries: &[(&str, &str)]) {
    let map: serde_json::Map<String, serde_json::Value> = entries
        .iter()
        .map(|(k, v)| ((*k).to_string(), serde_json::Value::String((*v).to_string())))
        .collect();
    fs::write(
        dir.join("storage.json"),
        serde_json::to_string_pretty(&map).expect("Failed to serialize storage"),
    )
    .expect("Failed to write storage.json");
}

/// Reads `storage.json` back as a JSON object.
pub fn read_storage(dir: &Path) -> serde_json::Map<String, serde_json::Value> {
    let content = fs::read_to_string(dir.join("storage.json")).expect("Failed to read storage");
    serde_json::from_str(&content).expect("storage.json should be a JSON object")
}

/// Creates a Command with an isolated config directory.
pub fn isolated_command(args: &[&str], config_dir: &TempDir) -> Command {
    let mut cmd = Command::new(folio_bin());
    cmd.env("FOLIO_CONFIG_DIR", config_dir.path());
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Runs a command in `config_dir` and returns its output.
pub fn run(args: &[&str], config_dir: &TempDir) -> Output {
    isolated_command(args, config_dir)
        .output()
        .expect("Failed to execute command")
}

/// Runs a command expected to succeed and parses its stdout as JSON.
pub fn run_json(args: &[&str], config_dir: &TempDir) -> serde_json::Value {
    let output = run(args, config_dir);
    assert_eq!(
        output.status.code(),
        Some(0),
        "{args:?} should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("Should parse JSON output")
}

/// Stdout as text.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}
