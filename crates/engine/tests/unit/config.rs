//! Configuration Tests.
//!
//! Verifies the built-in defaults, partial JSON documents, and file loading errors.

use std::io::Write;

use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

use ossim_core::common::ConfigError;
use ossim_core::config::{CacheConfig, Config, SchedulerConfig};

fn write_config(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

#[test]
fn defaults() {
    let config = Config::default();
    assert_eq!(config.scheduler, SchedulerConfig { quantum: 2 });
    assert_eq!(
        config.cache,
        CacheConfig {
            capacity: 3,
            allow_zero_capacity: false
        }
    );
}

#[test]
fn empty_document_is_default() {
    assert_eq!(Config::from_json_str("{}").unwrap(), Config::default());
}

#[test]
fn partial_sections_keep_other_defaults() {
    let config = Config::from_json_str(r#"{ "cache": { "allow_zero_capacity": true } }"#).unwrap();
    assert_eq!(config.cache.capacity, 3);
    assert!(config.cache.allow_zero_capacity);
    assert_eq!(config.scheduler.quantum, 2);
}

#[test]
fn unknown_fields_are_rejected() {
    let err = Config::from_json_str(r#"{ "scheduler": { "quantm": 3 } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));

    let err = Config::from_json_str(r#"{ "fifo": {} }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn wrong_type_is_rejected() {
    let err = Config::from_json_str(r#"{ "scheduler": { "quantum": -1 } }"#).unwrap_err();
    assert!(err.to_string().starts_with("invalid config"));
}

#[test]
fn load_from_file() {
    let file = write_config(r#"{ "scheduler": { "quantum": 5 }, "cache": { "capacity": 4 } }"#);
    let config = Config::load(file.path()).unwrap();

    assert_eq!(config.scheduler.quantum, 5);
    assert_eq!(config.cache.capacity, 4);
}

#[test]
fn load_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");

    let err = Config::load(&path).unwrap_err();
    match &err {
        ConfigError::Io { path: p, .. } => assert_eq!(p, &path),
        other => panic!("expected Io error, got {other:?}"),
    }
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn load_malformed_file() {
    let file = write_config("{ not json");
    assert!(matches!(Config::load(file.path()), Err(ConfigError::Parse(_))));
}

#[test]
fn serializes_back_to_json() {
    let json = serde_json::to_string(&Config::default()).unwrap();
    assert_eq!(Config::from_json_str(&json).unwrap(), Config::default());
}
