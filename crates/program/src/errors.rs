use rollup_checkpoint_chain::ChainError;
use rollup_fraud_dispute::DisputeError;
use thiserror::Error;

use crate::AuthError;

pub type ProgramResult<T> = Result<T, ProgramError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProgramError {
    #[error("unauthenticated validator: {0}")]
    UnauthenticatedValidator(#[from] AuthError),

    #[error(transparent)]
    Chain(#[from] ChainError),

    #[error(transparent)]
    Dispute(#[from] DisputeError),
}
