//! Tests for parse options.

use super::{ParseOptions, MAX_STRIP_COMPONENTS};
use crate::error::ConfigError;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_default_options() {
    let options = ParseOptions::default();
    assert_eq!(options.strip_components, 1);
    assert!(options.detect_epoch_timestamps);
}

#[test]
fn test_parse_empty_yaml() {
    let options = ParseOptions::from_yaml("").unwrap();
    assert_eq!(options, ParseOptions::default());
}

#[test]
fn test_parse_partial_yaml() {
    let options = ParseOptions::from_yaml("strip_components: 0\n").unwrap();
    assert_eq!(options.strip_components, 0);
    assert!(options.detect_epoch_timestamps);
}

#[test]
fn test_unknown_fields_are_ignored() {
    let yaml = r#"
strip_components: 2
detect_epoch_timestamps: false
future_option: yes
"#;
    let options = ParseOptions::from_yaml(yaml).unwrap();
    assert_eq!(options.strip_components, 2);
    assert!(!options.detect_epoch_timestamps);
}

#[test]
fn test_invalid_yaml() {
    let err = ParseOptions::from_yaml("strip_components: [1, 2]").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_strip_components_limit() {
    let yaml = format!("strip_components: {}", MAX_STRIP_COMPONENTS + 1);
    let err = ParseOptions::from_yaml(&yaml).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
    assert!(err.to_string().contains("strip_components"));
}

#[test]
fn test_yaml_roundtrip() {
    let options = ParseOptions::default().with_strip_components(3);
    let yaml = options.to_yaml().unwrap();
    assert_eq!(ParseOptions::from_yaml(&yaml).unwrap(), options);
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "strip_components: 0").unwrap();

    let options = ParseOptions::load(file.path()).unwrap();
    assert_eq!(options.strip_components, 0);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = ParseOptions::load(dir.path().join("missing.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}
