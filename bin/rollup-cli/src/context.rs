use std::sync::Arc;

use anyhow::Context;
use rollup_checkpoint_chain::CheckpointChain;
use rollup_config::Config;
use rollup_db_store_sled::{open_sled_backend, RollupDBSled, SledBackend, SledDbConfig, SLED_NAME};
use rollup_fraud_dispute::{MerkleProofVerifier, StaticRootSource};
use rollup_program::{RollupProgram, SignerAuthenticator};
use tracing::*;

pub(crate) type CliProgram = RollupProgram<RollupDBSled, MerkleProofVerifier<StaticRootSource>>;

/// Opened datadir plus the config it was opened with.
#[derive(Debug)]
pub(crate) struct CliContext {
    config: Config,
    backend: Arc<SledBackend>,
}

impl CliContext {
    pub(crate) fn open(config: Config) -> anyhow::Result<Self> {
        let db_config = SledDbConfig::new(config.db.cache_capacity_bytes, config.db.flush_on_commit);
        let backend = open_sled_backend(&config.datadir, SLED_NAME, db_config)
            .with_context(|| format!("failed to open database in {}", config.datadir.display()))?;
        debug!(datadir = %config.datadir.display(), "opened database");
        Ok(Self { config, backend })
    }

    pub(crate) fn config(&self) -> &Config {
        &self.config
    }

    pub(crate) fn chain(&self) -> CheckpointChain<RollupDBSled> {
        CheckpointChain::new(self.backend.rollup_db(), self.config.chain.clone())
    }

    pub(crate) fn event_db(&self) -> Arc<RollupDBSled> {
        self.backend.rollup_db()
    }

    /// Builds the program. Fraud proofs are checked against the configured
    /// trusted roots only.
    pub(crate) fn program(&self) -> CliProgram {
        let roots = self.config.dispute.root_source();

        let auth = match &self.config.auth.validators {
            Some(validators) => SignerAuthenticator::with_allowlist(validators.iter().copied()),
            None => SignerAuthenticator::permissionless(),
        };

        let verifier = MerkleProofVerifier::new(roots);

        RollupProgram::new(
            self.backend.rollup_db(),
            self.config.chain.clone(),
            self.config.dispute.params(),
            verifier,
            auth,
        )
    }
}
