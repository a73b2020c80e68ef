use std::io;

use rollup_checkpoint_types::BatchStatus;
use thiserror::Error;

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DbError {
    #[error("entry with idx does not exist")]
    NonExistentEntry,

    #[error("entry with idx already exists")]
    EntryAlreadyExists,

    /// A status compare-and-set found a different status than expected.
    #[error("expected batch status {expected:?}, found {found:?}")]
    UnexpectedStatus {
        expected: BatchStatus,
        found: BatchStatus,
    },

    #[error("IO Error: {0}")]
    IoError(String),

    #[error("codec error {0}")]
    CodecError(String),

    #[error("transaction error {0}")]
    TransactionError(String),

    #[error("{0}")]
    Other(String),
}

impl From<sled::Error> for DbError {
    fn from(value: sled::Error) -> Self {
        match value {
            sled::Error::Io(err) => Self::IoError(err.to_string()),
            other => Self::Other(format!("sled error: {other:?}")),
        }
    }
}

impl From<io::Error> for DbError {
    fn from(value: io::Error) -> Self {
        Self::IoError(value.to_string())
    }
}
