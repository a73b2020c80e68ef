use std::{fs, path::Path};

use anyhow::Context;

use crate::SledDbConfig;

// Opens sled database instance from datadir
pub fn open_sled_database(
    datadir: &Path,
    dbname: &'static str,
    config: &SledDbConfig,
) -> anyhow::Result<sled::Db> {
    let mut database_dir = datadir.to_path_buf();
    database_dir.push("sled");
    database_dir.push(dbname);

    if !database_dir.exists() {
        fs::create_dir_all(&database_dir)?;
    }

    sled::Config::new()
        .path(&database_dir)
        .cache_capacity(config.cache_capacity_bytes)
        .open()
        .context("opening sled database")
}
