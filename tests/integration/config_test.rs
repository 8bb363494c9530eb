//! Integration tests for the config command.

use std::fs;

use crate::helpers::run_folio_with_env;

#[test]
fn config_path_honors_directory_override() {
    let dir = tempfile::tempdir().unwrap();
    let dir_str = dir.path().to_str().unwrap();

    let (stdout, _stderr, exit_code) =
        run_folio_with_env(&["config", "path"], &[("FOLIO_CONFIG_DIR", dir_str)]);
    assert_eq!(exit_code, 0);
    assert!(stdout.trim().starts_with(dir_str));
    assert!(stdout.trim().ends_with("config.toml"));
}

#[test]
fn config_show_prints_defaults_when_no_file_exists() {
    let dir = tempfile::tempdir().unwrap();
    let dir_str = dir.path().to_str().unwrap();

    let (stdout, _stderr, exit_code) =
        run_folio_with_env(&["config", "show"], &[("FOLIO_CONFIG_DIR", dir_str)]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("[ui]"));
    assert!(stdout.contains("parchment"));
    assert!(stdout.contains("[typewriter]"));
    assert!(stdout.contains("hold_ms"));
}

#[test]
fn config_show_reads_an_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let dir_str = dir.path().to_str().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "[ui]\ntheme = \"ocean\"\n",
    )
    .unwrap();

    let (stdout, _stderr, exit_code) =
        run_folio_with_env(&["config", "show"], &[("FOLIO_CONFIG_DIR", dir_str)]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("ocean"));
}

#[test]
fn invalid_config_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let dir_str = dir.path().to_str().unwrap();
    fs::write(dir.path().join("config.toml"), "not = [valid").unwrap();

    let (_stdout, stderr, exit_code) =
        run_folio_with_env(&["config", "show"], &[("FOLIO_CONFIG_DIR", dir_str)]);
    assert_ne!(exit_code, 0);
    assert!(stderr.contains("config"));
}
