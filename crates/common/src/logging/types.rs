//! Configuration types for the logging subsystem.

use std::path::PathBuf;

use tracing_appender::rolling::Rotation;
use tracing_subscriber::fmt::format::FmtSpan;

/// Configuration for the stdout logging layer
#[derive(Debug, Clone)]
pub struct StdoutConfig {
    /// Use JSON format instead of compact format
    pub json_format: bool,
    /// Span events to log
    pub fmt_span: FmtSpan,
    /// Write to stderr, keeping stdout free for command output
    pub use_stderr: bool,
}

impl Default for StdoutConfig {
    fn default() -> Self {
        Self {
            json_format: false,
            fmt_span: FmtSpan::NONE,
            use_stderr: false,
        }
    }
}

/// Configuration for file-based logging with rotation
#[derive(Debug, Clone)]
pub struct FileLoggingConfig {
    pub directory: PathBuf,
    /// Base filename prefix, e.g. "rollup" for "rollup.2024-01-01"
    pub file_name_prefix: String,
    pub rotation: Rotation,
    pub json_format: bool,
}

impl FileLoggingConfig {
    pub fn new(directory: PathBuf, file_name_prefix: String) -> Self {
        Self {
            directory,
            file_name_prefix,
            rotation: Rotation::DAILY,
            json_format: false,
        }
    }

    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_json_format(mut self, json_format: bool) -> Self {
        self.json_format = json_format;
        self
    }
}

/// Main logger configuration
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub service_name: String,
    pub stdout_config: StdoutConfig,
    pub file_logging_config: Option<FileLoggingConfig>,
}

impl LoggerConfig {
    pub fn new(service_name: String) -> Self {
        Self {
            service_name,
            stdout_config: StdoutConfig::default(),
            file_logging_config: None,
        }
    }

    pub fn with_json_logging(mut self, enabled: bool) -> Self {
        self.stdout_config.json_format = enabled;
        self
    }

    pub fn with_stderr(mut self, enabled: bool) -> Self {
        self.stdout_config.use_stderr = enabled;
        self
    }

    pub fn with_file_logging(mut self, config: FileLoggingConfig) -> Self {
        self.file_logging_config = Some(config);
        self
    }

    pub fn with_fmt_span(mut self, fmt_span: FmtSpan) -> Self {
        self.stdout_config.fmt_span = fmt_span;
        self
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::new("(rollup-service)".to_string())
    }
}
