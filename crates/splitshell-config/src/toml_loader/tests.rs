//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use crate::schema::{KeyboardPolicy, SplitShellConfig};
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_splitshell_config.toml"));
    assert!(matches!(
        result.unwrap_err(),
        splitshell_common::ConfigError::FileNotFound(_)
    ));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[layout]
small_step = 0.05
keyboard_policy = "asymmetric"

[theme]
default_theme = "dark"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert!((config.layout.small_step - 0.05).abs() < f64::EPSILON);
    assert_eq!(config.layout.keyboard_policy, KeyboardPolicy::Asymmetric);
    assert_eq!(config.theme.default_theme, "dark");
    // Defaults preserved
    assert_eq!(config.layout.separator_width, 4);
    assert_eq!(config.theme.storage_key, "theme");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(
        result.unwrap_err(),
        splitshell_common::ConfigError::ParseError(_)
    ));
}

#[test]
fn load_config_with_invalid_values_still_returns_it() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[layout]\nseparator_width = 100\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.layout.separator_width, 100);
}

#[test]
fn create_default_config_writes_loadable_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    let defaults = SplitShellConfig::default();
    assert_eq!(config.layout.storage_key_prefix, defaults.layout.storage_key_prefix);
    assert_eq!(config.editor.keywords, defaults.editor.keywords);
}

#[test]
fn default_config_path_ends_with_splitshell() {
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with("splitshell/config.toml"));
    }
}

#[test]
fn parse_config_fills_missing_sections() {
    let config = parse_config("[editor]\nhighlight_color = \"teal\"\n").unwrap();
    assert_eq!(config.editor.highlight_color, "teal");
    assert_eq!(config.layout.storage_key_prefix, "split-layout:");
}

#[test]
fn parse_error_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "[layout\n").unwrap();

    let err = load_from_path(&path).unwrap_err().to_string();
    assert!(err.contains("broken.toml"), "{err}");
}

#[test]
fn starter_config_into_a_file_path_fails_with_write_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "").unwrap();

    let err = create_default_config(&blocker.join("config.toml")).unwrap_err();
    assert!(matches!(err, splitshell_common::ConfigError::Write { .. }));
}
