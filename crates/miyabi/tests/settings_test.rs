//! Tests for layered settings loading.

use miyabi::Settings;
use std::io::Write;
use std::path::Path;

#[test]
fn test_defaults_without_file() {
    let settings = Settings::load(None).expect("defaults load");

    assert_eq!(settings.prompt_path(), Path::new("prompt.txt"));
    assert_eq!(settings.model(), "gemini-2.0-flash");
    assert_eq!(*settings.timeout_secs(), 60);
}

#[test]
fn test_file_overrides_defaults() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp file");
    writeln!(
        file,
        r#"
        prompt_path = "/etc/miyabi/prompt.txt"
        model = "gemini-2.5-flash"
        timeout_secs = 15
        "#
    )
    .expect("write settings");

    let settings = Settings::load(Some(file.path())).expect("settings load");

    assert_eq!(settings.prompt_path(), Path::new("/etc/miyabi/prompt.txt"));
    assert_eq!(settings.model(), "gemini-2.5-flash");
    assert_eq!(*settings.timeout_secs(), 15);
    assert_eq!(
        settings.base_url(),
        "https://generativelanguage.googleapis.com/v1beta"
    );
}

#[test]
fn test_explicit_missing_file_is_error() {
    let err = Settings::load(Some(Path::new("/nonexistent/miyabi.toml"))).unwrap_err();
    assert!(err.message.contains("Failed to load settings"));
}

#[test]
fn test_gemini_config_carries_settings() {
    let settings = Settings::load(None).expect("defaults load");
    let config = settings
        .gemini_config_with_key("test-key")
        .expect("gemini config");

    assert_eq!(config.api_key(), "test-key");
    assert_eq!(config.model(), settings.model());
    assert_eq!(
        config.endpoint(),
        "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent"
    );
}

