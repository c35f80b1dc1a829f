//! End-to-end tests for `folio theme`.

mod fixtures;
use fixtures::*;

fn theme(dir: &tempfile::TempDir) -> serde_json::Value {
    run_json(&["theme", "--json"], dir)
}

#[test]
fn test_theme_default_light() {
    let dir = temp_config_dir();
    let result = theme(&dir);

    assert_eq!(result["header_background"]["kind"], "gradient");
    assert_eq!(result["header_background"]["from"], "blue-500");
    assert_eq!(result["header_background"]["to"], "blue-600");
    assert_eq!(result["border"]["swatch"], "blue-500");
    assert_eq!(result["divider"]["swatch"], "gray-200");
    assert_eq!(result["body_text"]["swatch"], "gray-800");
    assert_eq!(result["link"]["color"], "#FF9900");
    assert_eq!(result["link_hover"]["color"], "#CC7A00");
    assert_eq!(result["comment_box"]["color"], "#FFF5E6");
}

#[test]
fn test_theme_default_dark() {
    let dir = temp_config_dir();
    run(&["prefs", "set", "--dark", "on"], &dir);
    let result = theme(&dir);

    assert_eq!(result["header_background"]["from"], "slate-800");
    assert_eq!(result["header_background"]["to"], "slate-900");
    assert_eq!(result["border"]["swatch"], "blue-400");
    assert_eq!(result["divider"]["swatch"], "gray-700");
    assert_eq!(result["body_text"]["swatch"], "gray-100");
    assert_eq!(result["link_hover"]["color"], "#FFB84D");
    assert_eq!(result["comment_box"]["color"], "#3A2A17");
}

#[test]
fn test_theme_custom_layout() {
    let dir = temp_config_dir();
    run(&["prefs", "set", "--layout", "custom"], &dir);

    let light = theme(&dir);
    assert_eq!(light["header_background"]["kind"], "swatch");
    assert_eq!(light["header_background"]["swatch"], "pink-500");
    assert_eq!(light["border"]["swatch"], "pink-500");
    assert_eq!(light["divider"]["swatch"], "pink-200");

    run(&["prefs", "toggle-dark"], &dir);
    let dark = theme(&dir);
    assert_eq!(dark["header_background"]["swatch"], "purple-600");
    assert_eq!(dark["border"]["swatch"], "purple-500");
    assert_eq!(dark["divider"]["swatch"], "purple-800");
}

#[test]
fn test_theme_custom_accent_tints() {
    let dir = temp_config_dir();
    run(&["prefs", "set", "--accent", "#3366CC"], &dir);
    let result = theme(&dir);

    assert_eq!(result["link"]["color"], "#3366CC");
    // 20% of 255 off each channel
    assert_eq!(result["link_hover"]["color"], "#003399");
    // 90% toward white
    assert_eq!(result["comment_box"]["color"], "#EBF0FA");
}

#[test]
fn test_theme_accessibility_overrides() {
    let dir = temp_config_dir();
    run(
        &["prefs", "set", "--high-contrast", "on", "--reduced-motion", "on", "--font-size", "120"],
        &dir,
    );
    let result = theme(&dir);

    assert_eq!(result["body_text"]["kind"], "color");
    assert_eq!(result["body_text"]["color"], "#000000");
    assert_eq!(result["animations"], false);
    assert_eq!(result["font_scale"], 120);
}

#[test]
fn test_theme_human_readable() {
    let dir = temp_config_dir();
    let output = run(&["theme"], &dir);

    assert_eq!(output.status.code(), Some(0));
    let text = stdout(&output);
    assert!(text.contains("Layout: default  Dark mode: off"));
    assert!(text.contains("blue-500/blue-600"));
    assert!(text.contains("Verdana"));
}
