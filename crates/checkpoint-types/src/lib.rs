//! Types describing committed batches, their addresses and disputes against them.

mod address;
mod batch;
mod dispute;
mod event;

pub use address::{BatchAddress, ChainNamespace, ValidatorId, BATCH_ADDRESS_TAG};
pub use batch::{BatchRecord, BatchStatus, DEFAULT_MAX_RECENT_ROOTS};
pub use dispute::{DisputeOutcome, FraudProof};
pub use event::RollupEvent;
