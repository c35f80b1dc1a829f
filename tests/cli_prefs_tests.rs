//! End-to-end tests for `folio prefs` commands.

mod fixtures;
use fixtures::*;

fn show(dir: &tempfile::TempDir) -> serde_json::Value {
    run_json(&["prefs", "show", "--json"], dir)
}

// ============================================================================
// Show Command Tests
// ============================================================================

#[test]
fn test_prefs_defaults_follow_system_theme() {
    let dir = temp_config_dir();
    let result = show(&dir);

    let prefs = &result["preferences"];
    assert_eq!(prefs["isDarkMode"], false);
    assert_eq!(prefs["layoutMode"], "default");
    assert_eq!(prefs["customization"]["theme"], "light");
    assert_eq!(prefs["customization"]["accentColor"], "#FF9900");
    assert_eq!(prefs["customization"]["fontFamily"], "Verdana");
    assert_eq!(prefs["customization"]["animationsEnabled"], true);
    assert_eq!(result["accessibility"]["fontSize"], 100);

    // Dark system theme changes only the default
    write_config(dir.path(), "[ui]\ntheme_mode = \"Dark\"\n\n[counter]\nenabled = false\n");
    assert_eq!(show(&dir)["preferences"]["isDarkMode"], true);
}

#[test]
fn test_prefs_unknown_layout_falls_back() {
    let dir = temp_config_dir();
    write_storage(dir.path(), &[("layoutMode", "sideways")]);

    assert_eq!(show(&dir)["preferences"]["layoutMode"], "default");
}

#[test]
fn test_prefs_dark_flag_wins_over_stored_theme() {
    let dir = temp_config_dir();
    write_storage(
        dir.path(),
        &[
            ("darkMode", "true"),
            ("portfolioCustomization", r##"{"theme":"light","accentColor":"#3366CC"}"##),
        ],
    );

    let prefs = &show(&dir)["preferences"];
    assert_eq!(prefs["isDarkMode"], true);
    assert_eq!(prefs["customization"]["theme"], "dark");
    assert_eq!(prefs["customization"]["accentColor"], "#3366CC");
    assert_eq!(prefs["customization"]["fontFamily"], "Verdana");
}

#[test]
fn test_prefs_corrupt_storage_uses_defaults() {
    let dir = temp_config_dir();
    std::fs::write(dir.path().join("storage.json"), "{ not json").unwrap();

    let prefs = &show(&dir)["preferences"];
    assert_eq!(prefs["isDarkMode"], false);
    assert_eq!(prefs["layoutMode"], "default");
}

// ============================================================================
// Change Command Tests
// ============================================================================

#[test]
fn test_prefs_toggle_dark_keeps_theme_in_step() {
    let dir = temp_config_dir();

    let output = run(&["prefs", "toggle-dark"], &dir);
    assert_eq!(output.status.code(), Some(0));

    let prefs = &show(&dir)["preferences"];
    assert_eq!(prefs["isDarkMode"], true);
    assert_eq!(prefs["customization"]["theme"], "dark");

    let storage = read_storage(dir.path());
    assert_eq!(storage["darkMode"], "true");
    let customization: serde_json::Value =
        serde_json::from_str(storage["portfolioCustomization"].as_str().unwrap()).unwrap();
    assert_eq!(customization["theme"], "dark");
}

#[test]
fn test_prefs_set_theme_moves_dark_flag() {
    let dir = temp_config_dir();
    let output = run(&["prefs", "set", "--theme", "dark", "--accent", "#CC3366"], &dir);
    assert_eq!(output.status.code(), Some(0));

    let prefs = &show(&dir)["preferences"];
    assert_eq!(prefs["isDarkMode"], true);
    assert_eq!(prefs["customization"]["accentColor"], "#CC3366");
}

#[test]
fn test_prefs_toggle_layout_persists() {
    let dir = temp_config_dir();
    run(&["prefs", "toggle-layout"], &dir);
    assert_eq!(show(&dir)["preferences"]["layoutMode"], "custom");

    run(&["prefs", "toggle-layout"], &dir);
    assert_eq!(show(&dir)["preferences"]["layoutMode"], "default");
}

#[test]
fn test_prefs_reset_keeps_theme() {
    let dir = temp_config_dir();
    run(
        &["prefs", "set", "--dark", "on"],
        &dir,
    );
    run(
        &["prefs", "set", "--accent", "#3366CC", "--font", "Georgia", "--animations", "off"],
        &dir,
    );

    let output = run(&["prefs", "reset"], &dir);
    assert_eq!(output.status.code(), Some(0));

    let prefs = &show(&dir)["preferences"];
    assert_eq!(prefs["isDarkMode"], true);
    assert_eq!(prefs["customization"]["theme"], "dark");
    assert_eq!(prefs["customization"]["accentColor"], "#FF9900");
    assert_eq!(prefs["customization"]["fontFamily"], "Verdana");
    assert_eq!(prefs["customization"]["animationsEnabled"], true);
}

#[test]
fn test_prefs_accessibility_is_clamped() {
    let dir = temp_config_dir();
    run(
        &["prefs", "set", "--font-size", "500", "--high-contrast", "on"],
        &dir,
    );

    let a11y = &show(&dir)["accessibility"];
    assert_eq!(a11y["fontSize"], 200);
    assert_eq!(a11y["highContrast"], true);
    assert_eq!(a11y["reducedMotion"], false);
}

#[test]
fn test_prefs_set_validation_errors() {
    let dir = temp_config_dir();

    for args in [
        vec!["prefs", "set"],
        vec!["prefs", "set", "--layout", "sideways"],
        vec!["prefs", "set", "--theme", "sepia"],
        vec!["prefs", "set", "--accent", "orange"],
        vec!["prefs", "set", "--dark", "on", "--theme", "light"],
    ] {
        let output = run(&args, &dir);
        assert_eq!(
            output.status.code(),
            Some(1),
            "{args:?} should fail validation. stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }

    // Nothing was written by the failed attempts
    assert!(!dir.path().join("storage.json").exists());
}
