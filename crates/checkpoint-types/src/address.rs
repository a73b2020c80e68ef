use std::{fmt, str::FromStr};

use arbitrary::Arbitrary;
use borsh::{BorshDeserialize, BorshSerialize};
use rollup_primitives::{hash, Buf32, ParseError};
use serde::{Deserialize, Serialize};

/// Domain separation tag mixed into every batch address.
pub const BATCH_ADDRESS_TAG: &[u8] = b"rollup-batch-address";

/// Identifies the chain a batch belongs to, so that separate chains sharing a
/// store can never derive the same address.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Arbitrary,
    BorshDeserialize,
    BorshSerialize,
    Deserialize,
    Serialize,
)]
pub struct ChainNamespace(Buf32);

impl ChainNamespace {
    pub const fn new(id: Buf32) -> Self {
        Self(id)
    }

    pub fn inner(&self) -> &Buf32 {
        &self.0
    }
}

impl From<Buf32> for ChainNamespace {
    fn from(value: Buf32) -> Self {
        Self(value)
    }
}

impl FromStr for ChainNamespace {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Buf32::from_str(s).map(Self)
    }
}

impl fmt::Display for ChainNamespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Storage address of a batch record.
///
/// Addresses are never chosen by callers. They are computed from the batch
/// number with [`BatchAddress::derive`], which makes "the record for batch N"
/// well defined and checkable from the number alone.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Arbitrary,
    BorshDeserialize,
    BorshSerialize,
    Deserialize,
    Serialize,
)]
pub struct BatchAddress(Buf32);

impl BatchAddress {
    /// Derives the address of `batch_number` within `namespace`.
    ///
    /// `sha256(BATCH_ADDRESS_TAG || namespace || batch_number.to_le_bytes())`
    pub fn derive(namespace: &ChainNamespace, batch_number: u64) -> Self {
        Self(hash::tagged(
            BATCH_ADDRESS_TAG,
            &[namespace.inner().as_slice(), &batch_number.to_le_bytes()],
        ))
    }

    pub fn inner(&self) -> &Buf32 {
        &self.0
    }
}

impl From<Buf32> for BatchAddress {
    fn from(value: Buf32) -> Self {
        Self(value)
    }
}

impl FromStr for BatchAddress {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Buf32::from_str(s).map(Self)
    }
}

impl fmt::Display for BatchAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Identity of a validator, its x-only schnorr public key.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Arbitrary,
    BorshDeserialize,
    BorshSerialize,
    Deserialize,
    Serialize,
)]
pub struct ValidatorId(Buf32);

impl ValidatorId {
    pub const fn new(pubkey: Buf32) -> Self {
        Self(pubkey)
    }

    pub fn pubkey(&self) -> &Buf32 {
        &self.0
    }
}

impl From<Buf32> for ValidatorId {
    fn from(value: Buf32) -> Self {
        Self(value)
    }
}

impl FromStr for ValidatorId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Buf32::from_str(s).map(Self)
    }
}

impl fmt::Display for ValidatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
