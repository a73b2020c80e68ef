//! Sled store for the rollup checkpoint chain.

#[macro_use]
mod macros;

pub mod batch;
mod config;
mod init;
pub mod instrumentation;
mod schema;

use std::{path::Path, sync::Arc};

use rollup_db_types::DbResult;

pub use crate::{batch::db::RollupDBSled, config::SledDbConfig, init::open_sled_database};

pub const SLED_NAME: &str = "rollup";

/// Opens a complete Sled backend from datadir.
pub fn open_sled_backend(
    datadir: &Path,
    dbname: &'static str,
    config: SledDbConfig,
) -> anyhow::Result<Arc<SledBackend>> {
    let sled_db = open_sled_database(datadir, dbname, &config)?;
    SledBackend::new(sled_db, config)
        .map_err(|e| anyhow::anyhow!("Failed to initialize sled backend: {}", e))
        .map(Arc::new)
}

/// Complete Sled backend with all database types.
#[derive(Debug)]
pub struct SledBackend {
    rollup_db: Arc<RollupDBSled>,
}

impl SledBackend {
    pub fn new(sled_db: sled::Db, config: SledDbConfig) -> DbResult<Self> {
        let rollup_db = Arc::new(RollupDBSled::new(sled_db, config)?);
        Ok(Self { rollup_db })
    }

    /// Gets the concrete database, which implements every storage interface.
    pub fn rollup_db(&self) -> Arc<RollupDBSled> {
        self.rollup_db.clone()
    }
}
