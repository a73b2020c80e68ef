use std::sync::Arc;

use rollup_checkpoint_chain::{CallContext, ChainParams, CheckpointChain};
use rollup_checkpoint_types::{BatchRecord, DisputeOutcome, FraudProof};
use rollup_db_types::traits::BatchRecordDatabase;
use rollup_fraud_dispute::{DisputeParams, FraudDisputeVerifier, ProofVerifier};
use serde::Serialize;
use tracing::*;

use crate::{Instruction, ProgramResult, SignedInstruction, SignerAuthenticator};

/// What a successfully executed instruction produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum ExecOutcome {
    Committed { record: BatchRecord },
    Dispute { outcome: DisputeOutcome },
}

/// The rollup program: authenticates signed instructions and dispatches them
/// to the chain manager or the dispute verifier.
#[derive(Debug)]
pub struct RollupProgram<D, V> {
    chain: CheckpointChain<D>,
    disputes: FraudDisputeVerifier<D, V>,
    auth: SignerAuthenticator,
}

impl<D, V> RollupProgram<D, V>
where
    D: BatchRecordDatabase,
    V: ProofVerifier,
{
    pub fn new(
        db: Arc<D>,
        chain_params: ChainParams,
        dispute_params: DisputeParams,
        verifier: V,
        auth: SignerAuthenticator,
    ) -> Self {
        let disputes =
            FraudDisputeVerifier::new(db.clone(), chain_params.namespace, dispute_params, verifier);
        let chain = CheckpointChain::new(db, chain_params);
        Self {
            chain,
            disputes,
            auth,
        }
    }

    pub fn chain(&self) -> &CheckpointChain<D> {
        &self.chain
    }

    pub fn disputes(&self) -> &FraudDisputeVerifier<D, V> {
        &self.disputes
    }

    /// Executes `signed` at host time `now`.
    pub fn execute(&self, signed: &SignedInstruction, now: u64) -> ProgramResult<ExecOutcome> {
        let signer = self.auth.authenticate(signed).inspect_err(|err| {
            warn!(%err, "rejected instruction");
        })?;
        let ctx = CallContext::new(signer, now);

        match signed.instruction() {
            Instruction::SubmitStateCommitment {
                batch_number,
                leaf,
                previous_reference,
            } => {
                let record =
                    self.chain
                        .submit_commitment(&ctx, *batch_number, *leaf, *previous_reference)?;
                Ok(ExecOutcome::Committed { record })
            }

            Instruction::ProcessFraudProof {
                batch_number,
                leaf,
                proof_elements,
            } => {
                let proof = FraudProof::new(*batch_number, *leaf, proof_elements.clone());
                let outcome = self.disputes.process_fraud_proof(&ctx, &proof)?;
                Ok(ExecOutcome::Dispute { outcome })
            }
        }
    }
}
