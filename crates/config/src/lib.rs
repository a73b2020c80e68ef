//! Configuration for running a rollup checkpoint chain over a local datadir.

mod config;

pub use config::{
    load_config, AuthConfig, Config, ConfigError, DbConfig, DisputeConfig, LoggingConfig,
    TrustedRootEntry,
};
