//! Logging subsystem.

pub mod manager;
pub mod types;

#[cfg(test)]
mod tests;

pub use manager::{init, try_init};
pub use types::{FileLoggingConfig, LoggerConfig, StdoutConfig};

// Re-export tracing-appender types for convenience
pub use tracing_appender::rolling::Rotation;
