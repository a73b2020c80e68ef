use arbitrary::Arbitrary;
use borsh::{BorshDeserialize, BorshSerialize};
use rollup_primitives::Buf32;
use serde::{Deserialize, Serialize};

use crate::{BatchAddress, ValidatorId};

/// Default number of predecessor roots carried forward in each record.
pub const DEFAULT_MAX_RECENT_ROOTS: usize = 5;

#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Arbitrary,
    BorshDeserialize,
    BorshSerialize,
    Deserialize,
    Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum BatchStatus {
    /// Accepted and not successfully disputed.
    Committed,

    /// A fraud proof against this batch was confirmed. Terminal.
    Disputed,
}

impl BatchStatus {
    pub fn is_disputed(&self) -> bool {
        matches!(self, Self::Disputed)
    }
}

/// A committed batch.
#[derive(
    Clone, Debug, PartialEq, Eq, Arbitrary, BorshDeserialize, BorshSerialize, Deserialize, Serialize,
)]
pub struct BatchRecord {
    batch_number: u64,

    /// Digest of the batch state root.
    leaf: Buf32,

    /// Address of the record for `batch_number - 1`, absent for the chain root.
    previous_reference: Option<BatchAddress>,

    validator: ValidatorId,

    status: BatchStatus,

    /// Host clock at submission, in unix seconds.
    committed_at: u64,

    /// Leaves of the immediately preceding batches, oldest first.
    recent_roots: Vec<Buf32>,
}

impl BatchRecord {
    /// Creates a fresh record in [`BatchStatus::Committed`].
    pub fn new_committed(
        batch_number: u64,
        leaf: Buf32,
        previous_reference: Option<BatchAddress>,
        validator: ValidatorId,
        committed_at: u64,
        recent_roots: Vec<Buf32>,
    ) -> Self {
        Self {
            batch_number,
            leaf,
            previous_reference,
            validator,
            status: BatchStatus::Committed,
            committed_at,
            recent_roots,
        }
    }

    pub fn batch_number(&self) -> u64 {
        self.batch_number
    }

    pub fn leaf(&self) -> &Buf32 {
        &self.leaf
    }

    pub fn previous_reference(&self) -> Option<&BatchAddress> {
        self.previous_reference.as_ref()
    }

    pub fn validator(&self) -> &ValidatorId {
        &self.validator
    }

    pub fn status(&self) -> BatchStatus {
        self.status
    }

    pub fn committed_at(&self) -> u64 {
        self.committed_at
    }

    pub fn recent_roots(&self) -> &[Buf32] {
        &self.recent_roots
    }

    /// Returns this record with its status replaced.
    pub fn with_status(self, status: BatchStatus) -> Self {
        Self { status, ..self }
    }

    /// Computes the root history for the record that follows this one, keeping
    /// at most `max` entries and dropping the oldest first.
    pub fn successor_recent_roots(&self, max: usize) -> Vec<Buf32> {
        let mut roots = Vec::with_capacity(max);
        roots.extend_from_slice(&self.recent_roots);
        roots.push(self.leaf);
        let excess = roots.len().saturating_sub(max);
        roots.drain(..excess);
        roots
    }
}
