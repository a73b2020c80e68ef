use std::sync::Arc;

use rollup_checkpoint_types::{BatchAddress, BatchRecord, RollupEvent};
use rollup_db_types::{traits::BatchRecordDatabase, DbError};
use rollup_primitives::Buf32;
use tracing::*;

use crate::{validate_linkage, CallContext, ChainError, ChainParams, ChainResult, LinkageFault};

/// Manages the chain of batch commitments stored in `D`.
///
/// Validation is stateless over the stored records: whether a commitment
/// extends the chain is decided from its batch number, the reference it
/// carries and the record at the predecessor's derived address.
#[derive(Debug)]
pub struct CheckpointChain<D> {
    db: Arc<D>,
    params: ChainParams,
}

impl<D: BatchRecordDatabase> CheckpointChain<D> {
    pub fn new(db: Arc<D>, params: ChainParams) -> Self {
        Self { db, params }
    }

    pub fn params(&self) -> &ChainParams {
        &self.params
    }

    pub fn db(&self) -> &Arc<D> {
        &self.db
    }

    pub fn derive_address(&self, batch_number: u64) -> BatchAddress {
        BatchAddress::derive(&self.params.namespace, batch_number)
    }

    /// Validates and stores a new commitment from the context's signer.
    ///
    /// The record is created once at the derived address of `batch_number`,
    /// together with its `BatchCommitted` event. Nothing is written on error.
    pub fn submit_commitment(
        &self,
        ctx: &CallContext,
        batch_number: u64,
        leaf: Buf32,
        previous_reference: Option<BatchAddress>,
    ) -> ChainResult<BatchRecord> {
        let expected_prev = validate_linkage(
            &self.params.namespace,
            batch_number,
            previous_reference.as_ref(),
        )?;

        let recent_roots = match expected_prev {
            Some(prev_addr) => {
                let prev = self.load_predecessor(batch_number, prev_addr)?;
                prev.successor_recent_roots(self.params.max_recent_roots)
            }
            None => Vec::new(),
        };

        let addr = self.derive_address(batch_number);
        let record = BatchRecord::new_committed(
            batch_number,
            leaf,
            previous_reference,
            *ctx.signer(),
            ctx.timestamp(),
            recent_roots,
        );
        let event = RollupEvent::BatchCommitted {
            batch_number,
            leaf,
            validator: *ctx.signer(),
            committed_at: ctx.timestamp(),
        };

        let event_idx = self
            .db
            .put_new_batch_record(
                self.params.namespace,
                addr,
                record.clone(),
                event,
            )
            .map_err(|e| match e {
                DbError::EntryAlreadyExists => ChainError::DuplicateBatch(batch_number),
                other => ChainError::Db(other),
            })?;

        info!(%batch_number, %leaf, validator = %ctx.signer(), %event_idx, "committed batch");
        Ok(record)
    }

    fn load_predecessor(
        &self,
        batch_number: u64,
        prev_addr: BatchAddress,
    ) -> ChainResult<BatchRecord> {
        let expected = batch_number - 1;
        let prev = self
            .db
            .get_batch_record(prev_addr)?
            .ok_or_else(|| {
                ChainError::broken(batch_number, LinkageFault::MissingPredecessor(prev_addr))
            })?;

        if prev.batch_number() != expected {
            return Err(ChainError::broken(
                batch_number,
                LinkageFault::PredecessorMismatch {
                    expected,
                    found: prev.batch_number(),
                },
            ));
        }

        Ok(prev)
    }

    pub fn get_batch(&self, batch_number: u64) -> ChainResult<Option<BatchRecord>> {
        self.get_batch_at(self.derive_address(batch_number))
    }

    pub fn get_batch_at(&self, addr: BatchAddress) -> ChainResult<Option<BatchRecord>> {
        Ok(self.db.get_batch_record(addr)?)
    }

    /// Highest batch number stored. Read-only convenience, never used when
    /// validating submissions.
    pub fn last_batch_number(&self) -> ChainResult<Option<u64>> {
        Ok(self.db.get_last_batch_number(self.params.namespace)?)
    }

    /// Walks the chain from `batch_number` back to the root by following
    /// predecessor references, re-checking every link on the way.
    ///
    /// Returns the records in ascending batch order.
    pub fn audit_chain(&self, batch_number: u64) -> ChainResult<Vec<BatchRecord>> {
        let mut records = Vec::new();
        let mut current = self
            .get_batch(batch_number)?
            .ok_or(ChainError::RecordNotFound(batch_number))?;
        let mut expected_number = batch_number;

        loop {
            if current.batch_number() != expected_number {
                // Blame the successor whose link led here, or the audited batch itself.
                let broken_at = records
                    .last()
                    .map_or(expected_number, BatchRecord::batch_number);
                return Err(ChainError::broken(
                    broken_at,
                    LinkageFault::PredecessorMismatch {
                        expected: expected_number,
                        found: current.batch_number(),
                    },
                ));
            }

            let prev_addr = validate_linkage(
                &self.params.namespace,
                expected_number,
                current.previous_reference(),
            )?;
            let next = match prev_addr {
                Some(addr) => Some(self.get_batch_at(addr)?.ok_or_else(|| {
                    ChainError::broken(expected_number, LinkageFault::MissingPredecessor(addr))
                })?),
                None => None,
            };

            records.push(current);
            match next {
                Some(prev) => {
                    current = prev;
                    expected_number -= 1;
                }
                None => break,
            }
        }

        records.reverse();
        debug!(%batch_number, len = records.len(), "audited chain");
        Ok(records)
    }
}
