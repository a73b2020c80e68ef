use rollup_db_types::{DbError, DbResult};
use sled::{
    transaction::{ConflictableTransactionResult, TransactionError},
    Transactional,
};
use tracing::debug;

use crate::instrumentation::components;

// Configuration constants
pub(crate) const DEFAULT_CACHE_CAPACITY_BYTES: u64 = 256 * 1024 * 1024;
pub(crate) const TEST_CACHE_CAPACITY_BYTES: u64 = 8 * 1024 * 1024; // Smaller for tests

/// database operations configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SledDbConfig {
    pub cache_capacity_bytes: u64,

    /// Flush to disk after every committed write instead of relying on sled's
    /// periodic background flush.
    pub flush_on_commit: bool,
}

impl SledDbConfig {
    pub fn new(cache_capacity_bytes: u64, flush_on_commit: bool) -> Self {
        Self {
            cache_capacity_bytes,
            flush_on_commit,
        }
    }

    /// Create production configuration with default values
    pub fn production() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY_BYTES, true)
    }

    /// Create test configuration
    pub fn test() -> Self {
        Self::new(TEST_CACHE_CAPACITY_BYTES, false)
    }

    /// Execute a transaction over several trees using this config's settings.
    ///
    /// Sled reruns the closure on conflicts, so it must be free of side effects
    /// outside the transaction.
    pub(crate) fn with_tx<Trees, F, R>(&self, op: &'static str, trees: Trees, f: F) -> DbResult<R>
    where
        Trees: Transactional<DbError>,
        F: Fn(&Trees::View) -> ConflictableTransactionResult<R, DbError>,
    {
        debug!(component = components::DB_SLED_TRANSACTION, %op, "starting transaction");
        trees.transaction(f).map_err(|e| match e {
            TransactionError::Abort(err) => err,
            TransactionError::Storage(err) => DbError::TransactionError(err.to_string()),
        })
    }
}

impl Default for SledDbConfig {
    fn default() -> Self {
        Self::production()
    }
}
