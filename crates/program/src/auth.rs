use std::collections::BTreeSet;

use rollup_checkpoint_types::ValidatorId;
use rollup_crypto::verify_schnorr_sig;
use thiserror::Error;

use crate::{Instruction, SignedInstruction};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("bad signature from {0}")]
    BadSignature(ValidatorId),

    #[error("{0} is not an allowed validator")]
    NotAllowed(ValidatorId),
}

/// Authenticates the signer of an instruction.
///
/// Every instruction must carry a valid signature from its signer. If an
/// allowlist is set, commitments are further restricted to listed validators.
/// Anyone may submit fraud proofs.
#[derive(Clone, Debug, Default)]
pub struct SignerAuthenticator {
    allowed_validators: Option<BTreeSet<ValidatorId>>,
}

impl SignerAuthenticator {
    /// Accepts any correctly signed instruction.
    pub fn permissionless() -> Self {
        Self::default()
    }

    pub fn with_allowlist(validators: impl IntoIterator<Item = ValidatorId>) -> Self {
        Self {
            allowed_validators: Some(validators.into_iter().collect()),
        }
    }

    pub fn authenticate(&self, signed: &SignedInstruction) -> Result<ValidatorId, AuthError> {
        let signer = *signed.signer();
        let msg = signed.instruction().sighash();
        if !verify_schnorr_sig(signed.signature(), &msg, signer.pubkey()) {
            return Err(AuthError::BadSignature(signer));
        }

        if let (Instruction::SubmitStateCommitment { .. }, Some(allowed)) =
            (signed.instruction(), &self.allowed_validators)
        {
            if !allowed.contains(&signer) {
                return Err(AuthError::NotAllowed(signer));
            }
        }

        Ok(signer)
    }
}
