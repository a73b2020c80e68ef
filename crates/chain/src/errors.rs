use std::fmt;

use rollup_checkpoint_types::BatchAddress;
use rollup_db_types::DbError;
use thiserror::Error;

pub type ChainResult<T> = Result<T, ChainError>;

/// Why a commitment failed to extend the chain.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LinkageFault {
    /// A non-root batch gave no predecessor reference.
    MissingReference,

    /// The reference is not the derived address of the previous batch.
    MismatchedReference {
        expected: BatchAddress,
        provided: BatchAddress,
    },

    /// No record exists at the predecessor's address.
    MissingPredecessor(BatchAddress),

    /// The record at the predecessor's address has the wrong batch number.
    PredecessorMismatch { expected: u64, found: u64 },
}

impl fmt::Display for LinkageFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingReference => f.write_str("missing previous reference"),
            Self::MismatchedReference { expected, provided } => {
                write!(f, "previous reference {provided} != expected {expected}")
            }
            Self::MissingPredecessor(addr) => write!(f, "no predecessor record at {addr}"),
            Self::PredecessorMismatch { expected, found } => {
                write!(f, "predecessor holds batch {found}, expected {expected}")
            }
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChainError {
    #[error("batch 0 must not reference a predecessor")]
    ChainRootViolation,

    #[error("batch {batch_number} does not extend the chain: {reason}")]
    BrokenChain {
        batch_number: u64,
        reason: LinkageFault,
    },

    #[error("batch {0} already committed")]
    DuplicateBatch(u64),

    #[error("no record for batch {0}")]
    RecordNotFound(u64),

    #[error("db: {0}")]
    Db(#[from] DbError),
}

impl ChainError {
    pub(crate) fn broken(batch_number: u64, reason: LinkageFault) -> Self {
        Self::BrokenChain {
            batch_number,
            reason,
        }
    }
}
