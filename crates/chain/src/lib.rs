//! Checkpoint chain manager.
//!
//! Owns the sequence of committed batches: validates that a new commitment
//! extends the chain and persists it at its derived address.

mod chain;
mod context;
mod errors;
mod linkage;
mod params;

pub use chain::CheckpointChain;
pub use context::CallContext;
pub use errors::{ChainError, ChainResult, LinkageFault};
pub use linkage::validate_linkage;
pub use params::ChainParams;
