//! End-to-end tests for `folio ask`, `folio rate`, `folio counter` and
//! `folio config`.

mod fixtures;
use fixtures::*;

// ============================================================================
// Ask Command Tests
// ============================================================================

#[test]
fn test_ask_matches_keywords() {
    let dir = temp_config_dir();
    let output = run(&["ask", "What", "SKILLS", "do", "you", "have?"], &dir);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Rust"));
}

#[test]
fn test_ask_greeting_at_end_of_input() {
    let dir = temp_config_dir();
    let output = run(&["ask", "oh hi"], &dir);
    assert!(stdout(&output).starts_with("Hello!"));
}

#[test]
fn test_ask_fallback_and_prompt() {
    let dir = temp_config_dir();

    let fallback = stdout(&run(&["ask", "quantum", "origami"], &dir));
    assert!(fallback.contains("not sure"));

    let prompt = stdout(&run(&["ask"], &dir));
    assert!(!prompt.trim().is_empty());
    assert_ne!(prompt, fallback);
}

// ============================================================================
// Rate Command Tests
// ============================================================================

#[test]
fn test_rate_appends_to_log() {
    let dir = temp_config_dir();

    let first = run_json(&["rate", "5", "--comment", "  Lovely page  ", "--json"], &dir);
    assert_eq!(first["stars"], 5);
    assert_eq!(first["comment"], "Lovely page");

    let output = run(&["rate", "3"], &dir);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("(2 total)"));

    let storage = read_storage(dir.path());
    let log: serde_json::Value =
        serde_json::from_str(storage["portfolioRatings"].as_str().unwrap()).unwrap();
    let log = log.as_array().unwrap();
    assert_eq!(log.len(), 2);
    assert_eq!(log[1]["stars"], 3);
    assert!(log[1].get("comment").is_none());
    assert_ne!(log[0]["id"], log[1]["id"]);
}

#[test]
fn test_rate_keeps_unknown_entries() {
    let dir = temp_config_dir();
    write_storage(dir.path(), &[("portfolioRatings", r#"[{"legacy":true}]"#)]);

    run(&["rate", "4"], &dir);

    let storage = read_storage(dir.path());
    let log: serde_json::Value =
        serde_json::from_str(storage["portfolioRatings"].as_str().unwrap()).unwrap();
    assert_eq!(log.as_array().unwrap().len(), 2);
    assert_eq!(log[0]["legacy"], true);
}

#[test]
fn test_rate_rejects_out_of_range() {
    let dir = temp_config_dir();
    for stars in ["0", "6"] {
        let output = run(&["rate", stars], &dir);
        assert_eq!(output.status.code(), Some(1), "{stars} stars should be rejected");
    }
    assert!(!dir.path().join("storage.json").exists());
}

// ============================================================================
// Counter Command Tests
// ============================================================================

#[test]
fn test_counter_disabled_shows_fallback() {
    let dir = temp_config_dir();
    let result = run_json(&["counter", "--json"], &dir);

    assert_eq!(result["visitors"], "0");
    assert_eq!(result["hits"], "0");
}

#[test]
fn test_counter_unreachable_service_shows_fallback() {
    let dir = temp_config_dir();
    write_config(
        dir.path(),
        "[ui]\ntheme_mode = \"Light\"\n\n[counter]\nenabled = true\n\
         visitor_increment_url = \"http://127.0.0.1:9/up\"\n\
         visitor_fetch_url = \"http://127.0.0.1:9/get\"\n\
         hit_url = \"http://127.0.0.1:9/hits\"\n",
    );

    let result = run_json(&["counter", "--json"], &dir);
    assert_eq!(result["visitors"], "0");
    assert_eq!(result["hits"], "0");
}

// ============================================================================
// Config Command Tests
// ============================================================================

#[test]
fn test_config_show_json() {
    let dir = temp_config_dir();
    let result = run_json(&["config", "show", "--json"], &dir);

    assert_eq!(result["ui"]["theme"], "light");
    assert_eq!(result["counter"]["enabled"], false);
    assert!(result["counter"]["hit_url"].as_str().unwrap().starts_with("https://"));
}

#[test]
fn test_config_set_round_trip() {
    let dir = temp_config_dir();

    let output = run(&["config", "set", "--theme", "dark"], &dir);
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let result = run_json(&["config", "show", "--json"], &dir);
    assert_eq!(result["ui"]["theme"], "dark");

    // The system theme now defaults dark mode
    let prefs = run_json(&["prefs", "show", "--json"], &dir);
    assert_eq!(prefs["preferences"]["isDarkMode"], true);
}

#[test]
fn test_config_set_validation() {
    let dir = temp_config_dir();

    assert_eq!(run(&["config", "set"], &dir).status.code(), Some(1));
    assert_eq!(
        run(&["config", "set", "--theme", "sepia"], &dir).status.code(),
        Some(1)
    );
    assert_eq!(
        run(
            &["config", "set", "--counter", "on", "--hit-url", "ftp://example.com"],
            &dir
        )
        .status
        .code(),
        Some(1)
    );
}

#[test]
fn test_broken_config_is_io_error() {
    let dir = temp_config_dir();
    write_config(dir.path(), "[ui\nnot toml");

    let output = run(&["prefs", "show"], &dir);
    assert_eq!(output.status.code(), Some(2));
}
