use std::sync::Arc;

use rollup_checkpoint_chain::CallContext;
use rollup_checkpoint_types::{
    BatchAddress, BatchStatus, ChainNamespace, DisputeOutcome, FraudProof, RollupEvent,
};
use rollup_db_types::{traits::BatchRecordDatabase, DbError};
use tracing::*;

use crate::{DisputeError, DisputeParams, DisputeResult, ProofError, ProofVerifier};

/// Evaluates fraud proofs against committed batches and marks the ones shown
/// to be wrong as disputed.
#[derive(Debug)]
pub struct FraudDisputeVerifier<D, V> {
    db: Arc<D>,
    namespace: ChainNamespace,
    params: DisputeParams,
    verifier: V,
}

impl<D, V> FraudDisputeVerifier<D, V>
where
    D: BatchRecordDatabase,
    V: ProofVerifier,
{
    pub fn new(db: Arc<D>, namespace: ChainNamespace, params: DisputeParams, verifier: V) -> Self {
        Self {
            db,
            namespace,
            params,
            verifier,
        }
    }

    pub fn params(&self) -> &DisputeParams {
        &self.params
    }

    pub fn verifier(&self) -> &V {
        &self.verifier
    }

    /// Processes a challenger's fraud proof.
    ///
    /// Returns [`DisputeOutcome::Rejected`] without touching storage if the
    /// asserted leaf equals the committed one. Otherwise the proof elements
    /// must verify, after which the batch is marked disputed and a
    /// `FraudConfirmed` event is logged in the same write.
    pub fn process_fraud_proof(
        &self,
        ctx: &CallContext,
        proof: &FraudProof,
    ) -> DisputeResult<DisputeOutcome> {
        let batch_number = proof.batch_number();
        let addr = BatchAddress::derive(&self.namespace, batch_number);

        let record = self
            .db
            .get_batch_record(addr)?
            .ok_or(DisputeError::RecordNotFound(batch_number))?;

        if record.status().is_disputed() {
            return Err(DisputeError::AlreadyDisputed(batch_number));
        }

        if let Some(deadline) = self.params.deadline(record.committed_at()) {
            if ctx.timestamp() > deadline {
                return Err(DisputeError::DisputePeriodEnded {
                    batch_number,
                    deadline,
                    now: ctx.timestamp(),
                });
            }
        }

        if proof.asserted_leaf() == record.leaf() {
            debug!(%batch_number, challenger = %ctx.signer(), "fraud proof rejected, leaves match");
            return Ok(DisputeOutcome::Rejected);
        }

        let verified = self.check_proof_len(proof).and_then(|()| {
            self.verifier
                .verify(batch_number, proof.asserted_leaf(), proof.proof_elements())
        });
        if let Err(reason) = verified {
            warn!(%batch_number, challenger = %ctx.signer(), %reason, "invalid fraud proof");
            return Err(DisputeError::InvalidFraudProof {
                batch_number,
                reason,
            });
        }

        let event = RollupEvent::FraudConfirmed {
            batch_number,
            validator: *record.validator(),
            committed_leaf: *record.leaf(),
            asserted_leaf: *proof.asserted_leaf(),
            challenger: *ctx.signer(),
            committed_at: record.committed_at(),
            disputed_at: ctx.timestamp(),
        };
        let (_, event_idx) = self
            .db
            .update_batch_status(addr, BatchStatus::Committed, BatchStatus::Disputed, event)
            .map_err(|e| match e {
                // Lost a race with another dispute for the same batch.
                DbError::UnexpectedStatus { .. } => DisputeError::AlreadyDisputed(batch_number),
                DbError::NonExistentEntry => DisputeError::RecordNotFound(batch_number),
                other => DisputeError::Db(other),
            })?;

        info!(
            %batch_number,
            validator = %record.validator(),
            challenger = %ctx.signer(),
            %event_idx,
            "fraud confirmed, batch disputed"
        );
        Ok(DisputeOutcome::Confirmed)
    }

    fn check_proof_len(&self, proof: &FraudProof) -> Result<(), ProofError> {
        let len = proof.proof_elements().len();
        if len > self.params.max_proof_len {
            return Err(ProofError::TooLong {
                len,
                max: self.params.max_proof_len,
            });
        }
        Ok(())
    }
}
