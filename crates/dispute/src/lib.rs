//! Fraud dispute verification against committed batches.

mod dispute;
mod errors;
pub mod merkle;
mod params;
mod verifier;

pub use dispute::FraudDisputeVerifier;
pub use errors::{DisputeError, DisputeResult, ProofError};
pub use params::{DisputeParams, DEFAULT_MAX_PROOF_LEN};
pub use verifier::{MerkleProofVerifier, ProofVerifier, StaticRootSource, TrustedRootSource};
