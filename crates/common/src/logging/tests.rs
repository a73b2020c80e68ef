//! Unit tests for the logging subsystem.

use std::path::PathBuf;

use tracing_subscriber::fmt::format::FmtSpan;

use super::{types::*, Rotation};

#[test]
fn test_logger_config_defaults() {
    let config = LoggerConfig::default();
    assert_eq!(config.service_name, "(rollup-service)");
    assert!(!config.stdout_config.json_format);
    assert!(!config.stdout_config.use_stderr);
    assert!(config.file_logging_config.is_none());
}

#[test]
fn test_logger_config_builder_pattern() {
    let config = LoggerConfig::new("rollup-cli".to_string())
        .with_json_logging(true)
        .with_fmt_span(FmtSpan::CLOSE)
        .with_stderr(true)
        .with_file_logging(
            FileLoggingConfig::new(PathBuf::from("/tmp/logs"), "rollup".to_string())
                .with_rotation(Rotation::HOURLY)
                .with_json_format(true),
        );

    assert_eq!(config.service_name, "rollup-cli");
    assert!(config.stdout_config.json_format);
    assert_eq!(config.stdout_config.fmt_span, FmtSpan::CLOSE);
    assert!(config.stdout_config.use_stderr);
    let file = config.file_logging_config.unwrap();
    assert_eq!(file.directory, PathBuf::from("/tmp/logs"));
    assert_eq!(file.file_name_prefix, "rollup");
    assert_eq!(file.rotation, Rotation::HOURLY);
    assert!(file.json_format);
}

#[test]
fn test_file_logging_defaults_to_daily_compact() {
    let file = FileLoggingConfig::new(PathBuf::from("logs"), "x".to_string());
    assert_eq!(file.rotation, Rotation::DAILY);
    assert!(!file.json_format);
}

#[test]
fn test_try_init_twice_fails() {
    let dir = std::env::temp_dir().join("rollup-common-logging-test");
    let config = LoggerConfig::new("test".to_string())
        .with_file_logging(FileLoggingConfig::new(dir, "test".to_string()));
    // Other tests in this binary never install a subscriber, so the first
    // call succeeds and the second must fail.
    assert!(super::try_init(config.clone()).is_ok());
    assert!(super::try_init(config).is_err());
}
