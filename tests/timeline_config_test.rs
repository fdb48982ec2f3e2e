//! Tests for settings loading.

use std::io::Write;
use std::path::PathBuf;
use timeline_games::{HighlightColor, ListOrder, Settings};

#[test]
fn test_defaults() {
    let settings = Settings::default();
    assert_eq!(settings.log_file(), &PathBuf::from("timeline_games.log"));
    assert_eq!(settings.log_filter(), "info");
    assert_eq!(settings.highlight(), &HighlightColor::Green);
    assert_eq!(*settings.tick_ms(), 100);
    assert_eq!(settings.initial_list_order(), ListOrder::Ascending);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "highlight = \"magenta\"\nstart_descending = true").expect("write config");

    let settings = Settings::from_file(file.path()).expect("valid config");
    assert_eq!(settings.highlight(), &HighlightColor::Magenta);
    assert_eq!(settings.initial_list_order(), ListOrder::Descending);
    assert_eq!(*settings.tick_ms(), 100);
}

#[test]
fn test_explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("absent.toml");
    let err = Settings::load(Some(missing.as_path())).expect_err("missing file");
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_bad_values_are_rejected() {
    assert!(Settings::from_toml("highlight = \"plaid\"").is_err());
    assert!(Settings::from_toml("tick_ms = 0").is_err());
    assert!(Settings::from_toml("tick_ms = \"fast\"").is_err());
}
