use std::{
    fs, io,
    path::{Path, PathBuf},
};

use rollup_checkpoint_chain::ChainParams;
use rollup_checkpoint_types::ValidatorId;
use rollup_fraud_dispute::{DisputeParams, StaticRootSource, DEFAULT_MAX_PROOF_LEN};
use rollup_primitives::Buf32;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default value for `datadir` in [`Config`].
const DEFAULT_DATADIR: &str = "rollup-data";

/// Default sled page cache size.
const DEFAULT_CACHE_CAPACITY_BYTES: u64 = 256 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading config file: {0}")]
    Io(#[from] io::Error),

    #[error("parsing config file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DbConfig {
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity_bytes: u64,

    /// Flush to disk after every write.
    #[serde(default = "default_flush_on_commit")]
    pub flush_on_commit: bool,
}

fn default_cache_capacity() -> u64 {
    DEFAULT_CACHE_CAPACITY_BYTES
}

fn default_flush_on_commit() -> bool {
    true
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            cache_capacity_bytes: DEFAULT_CACHE_CAPACITY_BYTES,
            flush_on_commit: true,
        }
    }
}

/// A root fraud proofs for `batch_number` are checked against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustedRootEntry {
    pub batch_number: u64,
    pub root: Buf32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisputeConfig {
    /// Seconds after commitment during which a batch may be disputed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_secs: Option<u64>,

    #[serde(default = "default_max_proof_len")]
    pub max_proof_len: usize,

    #[serde(default)]
    pub trusted_roots: Vec<TrustedRootEntry>,
}

fn default_max_proof_len() -> usize {
    DEFAULT_MAX_PROOF_LEN
}

impl Default for DisputeConfig {
    fn default() -> Self {
        Self {
            window_secs: None,
            max_proof_len: DEFAULT_MAX_PROOF_LEN,
            trusted_roots: Vec::new(),
        }
    }
}

impl DisputeConfig {
    pub fn params(&self) -> DisputeParams {
        DisputeParams {
            window_secs: self.window_secs,
            max_proof_len: self.max_proof_len,
        }
    }

    pub fn root_source(&self) -> StaticRootSource {
        self.trusted_roots
            .iter()
            .map(|e| (e.batch_number, e.root))
            .collect()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    /// If set, only these validators may submit commitments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validators: Option<Vec<ValidatorId>>,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Directory path for file-based logging.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,

    /// Prefix for log file names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file_prefix: Option<String>,

    /// Use JSON format for logs instead of compact format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_format: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// The data directory where database contents reside.
    #[serde(default = "default_datadir")]
    pub datadir: PathBuf,

    pub chain: ChainParams,

    #[serde(default)]
    pub dispute: DisputeConfig,

    #[serde(default)]
    pub db: DbConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    /// Logging configuration (optional section in TOML).
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_datadir() -> PathBuf {
    DEFAULT_DATADIR.into()
}

/// Reads and parses a TOML config file.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let raw = fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}
