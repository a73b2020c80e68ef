use rollup_db_types::DbError;
use rollup_primitives::Buf32;
use thiserror::Error;

pub type DisputeResult<T> = Result<T, DisputeError>;

/// Why proof elements failed to verify.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProofError {
    #[error("no trusted root known for batch {0}")]
    NoTrustedRoot(u64),

    #[error("proof has {len} elements, max is {max}")]
    TooLong { len: usize, max: usize },

    #[error("computed root {computed} does not match trusted root {expected}")]
    RootMismatch { expected: Buf32, computed: Buf32 },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DisputeError {
    #[error("no record for batch {0}")]
    RecordNotFound(u64),

    #[error("batch {0} is already disputed")]
    AlreadyDisputed(u64),

    #[error("dispute period for batch {batch_number} ended at {deadline} (now {now})")]
    DisputePeriodEnded {
        batch_number: u64,
        deadline: u64,
        now: u64,
    },

    #[error("invalid fraud proof for batch {batch_number}: {reason}")]
    InvalidFraudProof {
        batch_number: u64,
        #[source]
        reason: ProofError,
    },

    #[error("db: {0}")]
    Db(#[from] DbError),
}
