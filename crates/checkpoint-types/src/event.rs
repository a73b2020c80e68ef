use arbitrary::Arbitrary;
use borsh::{BorshDeserialize, BorshSerialize};
use rollup_primitives::Buf32;
use serde::{Deserialize, Serialize};

use crate::ValidatorId;

/// Entries of the append-only audit log.
#[derive(
    Clone, Debug, PartialEq, Eq, Arbitrary, BorshDeserialize, BorshSerialize, Deserialize, Serialize,
)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RollupEvent {
    BatchCommitted {
        batch_number: u64,
        leaf: Buf32,
        validator: ValidatorId,
        committed_at: u64,
    },

    FraudConfirmed {
        batch_number: u64,
        /// Validator that committed the fraudulent leaf.
        validator: ValidatorId,
        committed_leaf: Buf32,
        asserted_leaf: Buf32,
        challenger: ValidatorId,
        committed_at: u64,
        disputed_at: u64,
    },
}

impl RollupEvent {
    pub fn batch_number(&self) -> u64 {
        match self {
            Self::BatchCommitted { batch_number, .. } => *batch_number,
            Self::FraudConfirmed { batch_number, .. } => *batch_number,
        }
    }
}
