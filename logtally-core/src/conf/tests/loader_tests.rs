use crate::conf::{AnalyzerConfig, ConfigError, OutputFormat, load_config, load_optional_config};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

#[test]
fn loads_workers_and_output() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("logtally.hcl");
    fs::write(&path, "workers = 8\noutput = \"json\"\n").unwrap();

    // Act
    let cfg = load_config(&path).unwrap();

    // Assert
    assert_eq!(
        cfg,
        AnalyzerConfig {
            workers: Some(8),
            output: OutputFormat::Json,
        }
    );
}

#[test]
fn empty_file_uses_defaults() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("logtally.hcl");
    fs::write(&path, "").unwrap();

    // Act
    let cfg = load_config(&path).unwrap();

    // Assert
    assert_eq!(cfg, AnalyzerConfig::default());
    assert_eq!(cfg.output, OutputFormat::Text);
}

#[test]
fn zero_workers_is_rejected() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("logtally.hcl");
    fs::write(&path, "workers = 0\n").unwrap();

    // Act
    let result = load_config(&path);

    // Assert
    assert!(matches!(result, Err(ConfigError::InvalidWorkers { .. })));
}

#[test]
fn unknown_keys_fail_to_parse() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("logtally.hcl");
    fs::write(&path, "delimiter = \",\"\n").unwrap();

    // Act
    let result = load_config(&path);

    // Assert
    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[test]
fn explicit_missing_file_is_an_error() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.hcl");

    // Act
    let result = load_optional_config(Some(&path));

    // Assert
    let Err(err) = result else {
        panic!("expected read error");
    };
    assert!(matches!(err, ConfigError::ReadFile { .. }));
    assert!(err.to_string().contains("missing.hcl"));
}
