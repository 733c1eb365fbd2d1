//! Tests for loading `rewind.toml`.

use rewind::Config;
use std::io::Write;
use std::path::Path;

#[test]
fn test_load_explicit_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "log_file = \"game.log\"\nshow_cell_numbers = false").expect("write config");

    let config = Config::load(Some(file.path())).expect("valid config");
    assert_eq!(config.log_file(), Path::new("game.log"));
    assert!(!*config.show_cell_numbers());
    assert_eq!(config.log_filter(), "info");
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = Config::load(Some(dir.path().join("absent.toml").as_path())).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_log_file_override() {
    let config = Config::default().with_log_file("other.log".into());
    assert_eq!(config.log_file(), Path::new("other.log"));
}
