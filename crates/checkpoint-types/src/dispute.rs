use arbitrary::Arbitrary;
use borsh::{BorshDeserialize, BorshSerialize};
use rollup_primitives::Buf32;
use serde::{Deserialize, Serialize};

/// Result of evaluating a fraud proof against a committed batch.
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
pub enum DisputeOutcome {
    /// The asserted leaf matches the committed one, so there was no fraud.
    Rejected,

    /// The committed leaf was shown to be wrong and the batch is now disputed.
    Confirmed,
}

/// A challenger's claim that the leaf committed for a batch is wrong.
#[derive(
    Clone, Debug, PartialEq, Eq, Arbitrary, BorshDeserialize, BorshSerialize, Deserialize, Serialize,
)]
pub struct FraudProof {
    batch_number: u64,

    /// The leaf the challenger claims is correct.
    asserted_leaf: Buf32,

    /// Sibling nodes connecting `asserted_leaf` to the trusted root.
    proof_elements: Vec<Buf32>,
}

impl FraudProof {
    pub fn new(batch_number: u64, asserted_leaf: Buf32, proof_elements: Vec<Buf32>) -> Self {
        Self {
            batch_number,
            asserted_leaf,
            proof_elements,
        }
    }

    pub fn batch_number(&self) -> u64 {
        self.batch_number
    }

    pub fn asserted_leaf(&self) -> &Buf32 {
        &self.asserted_leaf
    }

    pub fn proof_elements(&self) -> &[Buf32] {
        &self.proof_elements
    }
}
