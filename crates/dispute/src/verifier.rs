use std::collections::BTreeMap;

use rollup_primitives::Buf32;

use crate::{merkle, ProofError};

/// Decides whether proof elements establish an asserted leaf for a batch.
///
/// Implementations must fail closed: a proof they cannot check is invalid.
pub trait ProofVerifier: Send + Sync {
    fn verify(
        &self,
        batch_number: u64,
        asserted_leaf: &Buf32,
        proof_elements: &[Buf32],
    ) -> Result<(), ProofError>;
}

/// Source of independently trusted roots to check proofs against, such as a
/// data-availability layer or a finalized state commitment.
pub trait TrustedRootSource: Send + Sync {
    fn trusted_root(&self, batch_number: u64) -> Option<Buf32>;
}

/// A fixed set of trusted roots.
#[derive(Clone, Debug, Default)]
pub struct StaticRootSource {
    roots: BTreeMap<u64, Buf32>,
}

impl StaticRootSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, batch_number: u64, root: Buf32) {
        self.roots.insert(batch_number, root);
    }

    pub fn with_root(mut self, batch_number: u64, root: Buf32) -> Self {
        self.insert(batch_number, root);
        self
    }
}

impl FromIterator<(u64, Buf32)> for StaticRootSource {
    fn from_iter<T: IntoIterator<Item = (u64, Buf32)>>(iter: T) -> Self {
        Self {
            roots: iter.into_iter().collect(),
        }
    }
}

impl TrustedRootSource for StaticRootSource {
    fn trusted_root(&self, batch_number: u64) -> Option<Buf32> {
        self.roots.get(&batch_number).copied()
    }
}

/// Verifies proof elements as a sorted-pair Merkle path from the asserted
/// leaf to the batch's trusted root.
#[derive(Clone, Debug)]
pub struct MerkleProofVerifier<S> {
    roots: S,
}

impl<S: TrustedRootSource> MerkleProofVerifier<S> {
    pub fn new(roots: S) -> Self {
        Self { roots }
    }

    pub fn roots(&self) -> &S {
        &self.roots
    }
}

impl<S: TrustedRootSource> ProofVerifier for MerkleProofVerifier<S> {
    fn verify(
        &self,
        batch_number: u64,
        asserted_leaf: &Buf32,
        proof_elements: &[Buf32],
    ) -> Result<(), ProofError> {
        let expected = self
            .roots
            .trusted_root(batch_number)
            .ok_or(ProofError::NoTrustedRoot(batch_number))?;
        let computed = merkle::compute_root(asserted_leaf, proof_elements);
        if computed != expected {
            return Err(ProofError::RootMismatch { expected, computed });
        }

        Ok(())
    }
}
