use arbitrary::Arbitrary;
use borsh::{BorshDeserialize, BorshSerialize};
use rollup_checkpoint_types::{BatchAddress, FraudProof, ValidatorId};
use rollup_crypto::{pubkey_from_secret, sign_schnorr_sig, SchnorrError};
use rollup_primitives::{hash, Buf32, Buf64};
use serde::{Deserialize, Serialize};

/// Domain separation tag for instruction signatures.
pub const INSTRUCTION_SIGHASH_TAG: &[u8] = b"rollup-instruction";

#[derive(
    Clone, Debug, PartialEq, Eq, Arbitrary, BorshDeserialize, BorshSerialize, Deserialize, Serialize,
)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Instruction {
    /// Commit the leaf for the next batch.
    SubmitStateCommitment {
        batch_number: u64,
        leaf: Buf32,
        previous_reference: Option<BatchAddress>,
    },

    /// Dispute the leaf committed for a batch.
    ProcessFraudProof {
        batch_number: u64,
        leaf: Buf32,
        proof_elements: Vec<Buf32>,
    },
}

impl Instruction {
    pub fn fraud_proof(proof: FraudProof) -> Self {
        Self::ProcessFraudProof {
            batch_number: proof.batch_number(),
            leaf: *proof.asserted_leaf(),
            proof_elements: proof.proof_elements().to_vec(),
        }
    }

    /// Message the signer commits to.
    pub fn sighash(&self) -> Buf32 {
        hash::tagged(
            INSTRUCTION_SIGHASH_TAG,
            &[hash::compute_borsh_hash(self).as_slice()],
        )
    }
}

#[derive(
    Clone, Debug, PartialEq, Eq, Arbitrary, BorshDeserialize, BorshSerialize, Deserialize, Serialize,
)]
pub struct SignedInstruction {
    instruction: Instruction,
    signer: ValidatorId,
    signature: Buf64,
}

impl SignedInstruction {
    pub fn new(instruction: Instruction, signer: ValidatorId, signature: Buf64) -> Self {
        Self {
            instruction,
            signer,
            signature,
        }
    }

    /// Signs `instruction` with the given secret key.
    pub fn sign(instruction: Instruction, sk: &Buf32) -> Result<Self, SchnorrError> {
        let signer = ValidatorId::new(pubkey_from_secret(sk)?);
        let signature = sign_schnorr_sig(&instruction.sighash(), sk)?;
        Ok(Self::new(instruction, signer, signature))
    }

    pub fn instruction(&self) -> &Instruction {
        &self.instruction
    }

    pub fn signer(&self) -> &ValidatorId {
        &self.signer
    }

    pub fn signature(&self) -> &Buf64 {
        &self.signature
    }
}
