//! Common wrapper around whatever we choose our native hash function to be.

use borsh::BorshSerialize;
use digest::Digest;
use sha2::Sha256;

use crate::buf::Buf32;

/// Hash of a domain tag followed by each of the given parts, in order.
pub fn tagged(tag: &[u8], parts: &[&[u8]]) -> Buf32 {
    let mut hasher = Sha256::new();
    hasher.update(tag);
    for part in parts {
        hasher.update(part);
    }
    Buf32::from(<[u8; 32]>::from(hasher.finalize()))
}

/// Hash of two 32-byte nodes, concatenated in the given order.
pub fn hash_pair(left: &Buf32, right: &Buf32) -> Buf32 {
    let mut hasher = Sha256::new();
    hasher.update(left.as_slice());
    hasher.update(right.as_slice());
    Buf32::from(<[u8; 32]>::from(hasher.finalize()))
}

pub fn compute_borsh_hash<T: BorshSerialize>(v: &T) -> Buf32 {
    let mut hasher = Sha256::new();
    v.serialize(&mut hasher).expect("Serialization failed");
    let result = hasher.finalize();
    let arr: [u8; 32] = result.into();
    Buf32::from(arr)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sha256(buf: &[u8]) -> Buf32 {
        Buf32::from(<[u8; 32]>::from(Sha256::digest(buf)))
    }

    #[test]
    fn test_empty_tag_matches_known_vector() {
        // sha256("")
        let expected: Buf32 = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
            .parse()
            .unwrap();
        assert_eq!(tagged(&[], &[]), expected);
    }

    #[test]
    fn test_tagged_equals_hash_of_concat() {
        let tag = b"tag";
        let a = [1u8; 4];
        let b = [2u8; 8];
        let mut concat = tag.to_vec();
        concat.extend_from_slice(&a);
        concat.extend_from_slice(&b);
        assert_eq!(tagged(tag, &[&a, &b]), sha256(&concat));
    }

    #[test]
    fn test_borsh_hash_matches_hash_of_encoding() {
        let v = (7u64, Buf32::from([3; 32]));
        let enc = borsh::to_vec(&v).unwrap();
        assert_eq!(compute_borsh_hash(&v), sha256(&enc));
    }
}
