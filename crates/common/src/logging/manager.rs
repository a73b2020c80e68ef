//! Logging initialization.

use std::io;

use tracing::*;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::{
    fmt::{layer, writer::BoxMakeWriter},
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
    EnvFilter, Layer,
};

use super::types::LoggerConfig;

/// Initializes the logging subsystem with the provided config.
///
/// # Panics
///
/// If a global subscriber was already installed.
pub fn init(config: LoggerConfig) {
    if let Err(err) = try_init(config) {
        panic!("init: failed to install logging subscriber: {err}");
    }
}

/// Like [`init`], but reports an already-installed subscriber as an error.
pub fn try_init(config: LoggerConfig) -> Result<(), TryInitError> {
    // INFO unless overridden via RUST_LOG.
    let filt = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();

    let writer = if config.stdout_config.use_stderr {
        BoxMakeWriter::new(io::stderr)
    } else {
        BoxMakeWriter::new(io::stdout)
    };

    let stdout_sub = if config.stdout_config.json_format {
        layer()
            .json()
            .with_writer(writer)
            .with_span_events(config.stdout_config.fmt_span.clone())
            .with_filter(filt.clone())
            .boxed()
    } else {
        layer()
            .compact()
            .with_writer(writer)
            .with_span_events(config.stdout_config.fmt_span.clone())
            .with_filter(filt.clone())
            .boxed()
    };

    let file_layer = config.file_logging_config.as_ref().map(|file_config| {
        let file_appender = RollingFileAppender::new(
            file_config.rotation.clone(),
            &file_config.directory,
            &file_config.file_name_prefix,
        );

        if file_config.json_format {
            layer()
                .json()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_filter(filt.clone())
                .boxed()
        } else {
            layer()
                .compact()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_filter(filt.clone())
                .boxed()
        }
    });

    tracing_subscriber::registry()
        .with(stdout_sub)
        .with(file_layer)
        .try_init()?;

    info!(
        service_name = %config.service_name,
        file_logging = config.file_logging_config.is_some(),
        "logging initialized"
    );
    Ok(())
}
