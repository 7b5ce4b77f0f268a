//! Tests for settings loader module

use super::*;
use crate::config::PageSettings;
use crate::error::Error;
use pretty_assertions::assert_eq;
use std::io::Write;
use std::path::Path;
use tempfile::tempdir;

// ============================================================================
// String Parsing Tests
// ============================================================================

#[test]
fn test_load_full_yaml() {
    let yaml = r"
default_per_page: 3
default_page: 1
max_per_page: 5
";

    let settings = load_settings_from_str(yaml).unwrap();
    assert_eq!(
        settings,
        PageSettings {
            default_per_page: Some(3),
            default_page: Some(1),
            max_per_page: Some(5),
        }
    );
}

#[test]
fn test_load_partial_yaml() {
    let settings = load_settings_from_str("max_per_page: 100\n").unwrap();
    assert_eq!(settings.max_per_page, Some(100));
    assert_eq!(settings.default_per_page, None);
    assert_eq!(settings.default_page, None);
}

#[test]
fn test_load_empty_yaml_is_default() {
    assert_eq!(load_settings_from_str("").unwrap(), PageSettings::default());
    assert_eq!(load_settings_from_str("  \n").unwrap(), PageSettings::default());
}

#[test]
fn test_yaml_accepts_json_text() {
    let settings = load_settings_from_str(r#"{"default_page": 4}"#).unwrap();
    assert_eq!(settings.default_page, Some(4));
}

#[test]
fn test_negative_values_are_kept_for_resolution() {
    let settings = load_settings_from_str("default_per_page: -2\nmax_per_page: 0\n").unwrap();
    assert_eq!(settings.default_per_page, Some(-2));

    let resolved = settings.resolve();
    assert_eq!(resolved.default_per_page, 1);
    assert_eq!(resolved.max_per_page, Some(1));
}

#[test]
fn test_unknown_field_rejected() {
    let err = load_settings_from_str("per_page_max: 5\n").unwrap_err();
    assert!(matches!(err, Error::YamlParse(_)));
    assert!(err.is_parse_error());
}

#[test]
fn test_wrong_type_rejected() {
    let err = load_settings_from_str("default_page: first\n").unwrap_err();
    assert!(matches!(err, Error::YamlParse(_)));
}

#[test]
fn test_load_json() {
    let settings = load_settings_from_json(r#"{"default_per_page": 10, "max_per_page": 20}"#)
        .unwrap();
    assert_eq!(settings.default_per_page, Some(10));
    assert_eq!(settings.max_per_page, Some(20));

    let err = load_settings_from_json("{").unwrap_err();
    assert!(matches!(err, Error::JsonParse(_)));
}

// ============================================================================
// Format Detection Tests
// ============================================================================

#[test]
fn test_format_from_path() {
    assert_eq!(
        SettingsFormat::from_path(Path::new("pages.yaml")),
        SettingsFormat::Yaml
    );
    assert_eq!(
        SettingsFormat::from_path(Path::new("pages.YML")),
        SettingsFormat::Yaml
    );
    assert_eq!(
        SettingsFormat::from_path(Path::new("pages.json")),
        SettingsFormat::Json
    );
    assert_eq!(
        SettingsFormat::from_path(Path::new("pages.JSON")),
        SettingsFormat::Json
    );
    assert_eq!(SettingsFormat::from_path(Path::new("pages")), SettingsFormat::Yaml);
    assert_eq!(
        SettingsFormat::from_path(Path::new("pages.toml")),
        SettingsFormat::Yaml
    );
    assert_eq!(
        SettingsFormat::from_path(Path::new("pages.conf")),
        SettingsFormat::Yaml
    );
}

// ============================================================================
// File Loading Tests
// ============================================================================

#[test]
fn test_load_yaml_file() {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .unwrap();
    writeln!(file, "default_per_page: 7").unwrap();

    let settings = load_settings(file.path()).unwrap();
    assert_eq!(settings.default_per_page, Some(7));
}

#[test]
fn test_load_json_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("pages.json");
    std::fs::write(&path, r#"{"max_per_page": 5}"#).unwrap();

    let settings = load_settings(&path).unwrap();
    assert_eq!(settings.max_per_page, Some(5));
}

#[test]
fn test_json_file_is_parsed_as_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("pages.json");
    // Valid YAML, invalid JSON
    std::fs::write(&path, "max_per_page: 5\n").unwrap();

    let err = load_settings(&path).unwrap_err();
    assert!(matches!(err, Error::JsonParse(_)));
}

#[test]
fn test_unknown_extension_is_parsed_as_yaml() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("pages.conf");
    std::fs::write(&path, "max_per_page: 5\n").unwrap();

    let settings = load_settings(&path).unwrap();
    assert_eq!(settings.max_per_page, Some(5));
}

#[test]
fn test_unknown_extension_with_invalid_yaml() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("pages.toml");
    std::fs::write(&path, "max_per_page = 5\n").unwrap();

    let err = load_settings(&path).unwrap_err();
    assert!(matches!(err, Error::YamlParse(_)));
}

#[test]
fn test_missing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.yaml");

    let err = load_settings(&path).unwrap_err();
    assert!(matches!(err, Error::FileNotFound { .. }));
    assert!(err.to_string().contains("missing.yaml"));
}
