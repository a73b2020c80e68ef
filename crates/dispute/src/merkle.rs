//! Merkle paths with order-independent node hashing.
//!
//! Each parent is `sha256(min(a, b) || max(a, b))` under lexicographic byte
//! order, so a proof is just the list of siblings from leaf to root and needs
//! no left/right flags. A node without a sibling at some level is carried up
//! unchanged and contributes no proof element.

use rollup_primitives::{hash, Buf32};

/// Hashes two nodes in sorted order.
pub fn hash_sorted_pair(a: &Buf32, b: &Buf32) -> Buf32 {
    if a <= b {
        hash::hash_pair(a, b)
    } else {
        hash::hash_pair(b, a)
    }
}

/// Folds `leaf` with each sibling in `proof`, returning the implied root.
pub fn compute_root(leaf: &Buf32, proof: &[Buf32]) -> Buf32 {
    proof
        .iter()
        .fold(*leaf, |node, sibling| hash_sorted_pair(&node, sibling))
}

/// Checks that `proof` connects `leaf` to `root`.
pub fn verify(root: &Buf32, leaf: &Buf32, proof: &[Buf32]) -> bool {
    compute_root(leaf, proof) == *root
}

/// Computes the root over `leaves`, or `None` if there are none.
pub fn root_of(leaves: &[Buf32]) -> Option<Buf32> {
    let mut level = leaves.to_vec();
    if level.is_empty() {
        return None;
    }
    while level.len() > 1 {
        level = next_level(&level);
    }
    level.first().copied()
}

/// Builds the sibling path for `leaves[index]`, or `None` if out of range.
pub fn proof_for(leaves: &[Buf32], index: usize) -> Option<Vec<Buf32>> {
    if index >= leaves.len() {
        return None;
    }

    let mut proof = Vec::new();
    let mut level = leaves.to_vec();
    let mut idx = index;
    while level.len() > 1 {
        let sibling = idx ^ 1;
        if let Some(node) = level.get(sibling) {
            proof.push(*node);
        }
        level = next_level(&level);
        idx /= 2;
    }
    Some(proof)
}

fn next_level(level: &[Buf32]) -> Vec<Buf32> {
    let pairs = level.chunks_exact(2);
    let carried = pairs.remainder().first().copied();
    pairs
        .map(|pair| hash_sorted_pair(&pair[0], &pair[1]))
        .chain(carried)
        .collect()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn leaves(n: u8) -> Vec<Buf32> {
        (0..n).map(|i| Buf32::from([i; 32])).collect()
    }

    #[test]
    fn test_empty_proof_means_leaf_is_root() {
        let leaf = Buf32::from([3; 32]);
        assert_eq!(compute_root(&leaf, &[]), leaf);
        assert!(verify(&leaf, &leaf, &[]));
        assert!(!verify(&Buf32::from([4; 32]), &leaf, &[]));
    }

    #[test]
    fn test_pair_order_does_not_matter() {
        let a = Buf32::from([1; 32]);
        let b = Buf32::from([2; 32]);
        assert_eq!(hash_sorted_pair(&a, &b), hash_sorted_pair(&b, &a));
        assert_eq!(hash_sorted_pair(&a, &b), hash::hash_pair(&a, &b));
    }

    #[test]
    fn test_two_leaf_tree() {
        let l = leaves(2);
        let root = root_of(&l).unwrap();
        assert_eq!(root, hash_sorted_pair(&l[0], &l[1]));
        assert_eq!(proof_for(&l, 0).unwrap(), vec![l[1]]);
        assert_eq!(proof_for(&l, 1).unwrap(), vec![l[0]]);
    }

    #[test]
    fn test_odd_leaf_carried_up() {
        let l = leaves(3);
        let root = root_of(&l).unwrap();
        assert_eq!(
            root,
            hash_sorted_pair(&hash_sorted_pair(&l[0], &l[1]), &l[2])
        );
        // The last leaf has no sibling on the first level.
        assert_eq!(proof_for(&l, 2).unwrap().len(), 1);
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(proof_for(&leaves(2), 2), None);
        assert_eq!(root_of(&[]), None);
    }

    #[test]
    fn test_tampered_proof_fails() {
        let l = leaves(8);
        let root = root_of(&l).unwrap();
        let mut proof = proof_for(&l, 5).unwrap();
        assert!(verify(&root, &l[5], &proof));
        proof[1].0[0] ^= 0xff;
        assert!(!verify(&root, &l[5], &proof));
    }

    proptest! {
        #[test]
        fn proptest_every_leaf_verifies(n in 1u8..40, pick in any::<prop::sample::Index>()) {
            let l = leaves(n);
            let idx = pick.index(l.len());
            let root = root_of(&l).unwrap();
            let proof = proof_for(&l, idx).unwrap();
            prop_assert!(verify(&root, &l[idx], &proof));
        }
    }
}
