use std::{fmt, str::FromStr};

use arbitrary::Arbitrary;
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::ParseError;

/// 32-byte buf, useful for hashes and schnorr pubkeys.
#[derive(
    Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Arbitrary, BorshSerialize, BorshDeserialize,
)]
pub struct Buf32(pub [u8; 32]);
impl_buf!(Buf32, 32);

/// 64-byte buf, useful for schnorr signatures.
#[derive(
    Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Arbitrary, BorshSerialize, BorshDeserialize,
)]
pub struct Buf64(pub [u8; 64]);
impl_buf!(Buf64, 64);
