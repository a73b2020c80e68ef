//! Typed views over raw sled trees.

use std::{fmt, marker::PhantomData};

use borsh::{BorshDeserialize, BorshSerialize};
use rollup_checkpoint_types::{BatchAddress, ChainNamespace};
use rollup_db_types::{DbError, DbResult};
use rollup_primitives::Buf32;
use sled::transaction::{
    ConflictableTransactionError, ConflictableTransactionResult, TransactionalTree,
};

pub(crate) trait Schema: fmt::Debug + Send + Sync + 'static {
    const TREE_NAME: &'static str;

    type Key: KeyCodec;
    type Value: BorshSerialize + BorshDeserialize;
}

/// Key encoding. Integer keys are big-endian so that sled's byte ordering
/// matches numeric ordering.
pub(crate) trait KeyCodec: Sized {
    fn encode_key(&self) -> Vec<u8>;
    fn decode_key(buf: &[u8]) -> DbResult<Self>;
}

fn fixed<const N: usize>(buf: &[u8]) -> DbResult<[u8; N]> {
    buf.try_into().map_err(|_| {
        DbError::CodecError(format!("expected {N} byte key, got {}", buf.len()))
    })
}

impl KeyCodec for u8 {
    fn encode_key(&self) -> Vec<u8> {
        vec![*self]
    }

    fn decode_key(buf: &[u8]) -> DbResult<Self> {
        Ok(fixed::<1>(buf)?[0])
    }
}

impl KeyCodec for u64 {
    fn encode_key(&self) -> Vec<u8> {
        self.to_be_bytes().to_vec()
    }

    fn decode_key(buf: &[u8]) -> DbResult<Self> {
        Ok(u64::from_be_bytes(fixed(buf)?))
    }
}

impl KeyCodec for BatchAddress {
    fn encode_key(&self) -> Vec<u8> {
        self.inner().as_slice().to_vec()
    }

    fn decode_key(buf: &[u8]) -> DbResult<Self> {
        Ok(BatchAddress::from(Buf32::from(fixed::<32>(buf)?)))
    }
}

/// Namespace first, so one chain's entries form a contiguous, numerically
/// ordered run.
impl KeyCodec for (ChainNamespace, u64) {
    fn encode_key(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(40);
        buf.extend_from_slice(self.0.inner().as_slice());
        buf.extend_from_slice(&self.1.to_be_bytes());
        buf
    }

    fn decode_key(buf: &[u8]) -> DbResult<Self> {
        let raw = fixed::<40>(buf)?;
        let (ns, num) = raw.split_at(32);
        let ns = ChainNamespace::new(Buf32::from(fixed::<32>(ns)?));
        Ok((ns, u64::from_be_bytes(fixed(num)?)))
    }
}

pub(crate) fn encode_value<V: BorshSerialize>(value: &V) -> DbResult<Vec<u8>> {
    borsh::to_vec(value).map_err(|e| DbError::CodecError(e.to_string()))
}

pub(crate) fn decode_value<V: BorshDeserialize>(buf: &[u8]) -> DbResult<V> {
    borsh::from_slice(buf).map_err(|e| DbError::CodecError(e.to_string()))
}

/// A sled tree bound to a schema.
pub(crate) struct SledTree<S> {
    inner: sled::Tree,
    _schema: PhantomData<S>,
}

impl<S> fmt::Debug for SledTree<S>
where
    S: Schema,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SledTree")
            .field("name", &S::TREE_NAME)
            .field("len", &self.inner.len())
            .finish()
    }
}

impl<S: Schema> SledTree<S> {
    pub(crate) fn open(db: &sled::Db) -> DbResult<Self> {
        Ok(Self {
            inner: db.open_tree(S::TREE_NAME)?,
            _schema: PhantomData,
        })
    }

    /// The underlying tree, for use in multi-tree transactions.
    pub(crate) fn raw(&self) -> &sled::Tree {
        &self.inner
    }

    pub(crate) fn get(&self, key: &S::Key) -> DbResult<Option<S::Value>> {
        self.inner
            .get(key.encode_key())?
            .map(|raw| decode_value(&raw))
            .transpose()
    }

    pub(crate) fn last(&self) -> DbResult<Option<(S::Key, S::Value)>> {
        self.inner
            .last()?
            .map(|(k, v)| Ok((S::Key::decode_key(&k)?, decode_value(&v)?)))
            .transpose()
    }

    /// Last entry whose encoded key starts with `prefix`.
    pub(crate) fn last_with_prefix(&self, prefix: &[u8]) -> DbResult<Option<(S::Key, S::Value)>> {
        self.inner
            .scan_prefix(prefix)
            .next_back()
            .transpose()?
            .map(|(k, v)| Ok((S::Key::decode_key(&k)?, decode_value(&v)?)))
            .transpose()
    }

    /// Entries with keys in `start..end`, in key order.
    pub(crate) fn range(&self, start: &S::Key, end: &S::Key) -> DbResult<Vec<(S::Key, S::Value)>> {
        let (start, end) = (start.encode_key(), end.encode_key());
        if start >= end {
            return Ok(Vec::new());
        }
        self.inner
            .range(start..end)
            .map(|entry| {
                let (k, v) = entry?;
                Ok((S::Key::decode_key(&k)?, decode_value(&v)?))
            })
            .collect()
    }
}

/// A schema-typed view of a tree inside a sled transaction.
pub(crate) struct TxTree<'a, S> {
    inner: &'a TransactionalTree,
    _schema: PhantomData<S>,
}

impl<'a, S: Schema> TxTree<'a, S> {
    pub(crate) fn new(inner: &'a TransactionalTree) -> Self {
        Self {
            inner,
            _schema: PhantomData,
        }
    }

    pub(crate) fn get(
        &self,
        key: &S::Key,
    ) -> ConflictableTransactionResult<Option<S::Value>, DbError> {
        let Some(raw) = self.inner.get(key.encode_key())? else {
            return Ok(None);
        };
        decode_value(&raw)
            .map(Some)
            .map_err(ConflictableTransactionError::Abort)
    }

    pub(crate) fn insert(
        &self,
        key: &S::Key,
        value: &S::Value,
    ) -> ConflictableTransactionResult<(), DbError> {
        let value = encode_value(value).map_err(ConflictableTransactionError::Abort)?;
        self.inner.insert(key.encode_key(), value)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u64_key_order_matches_numeric_order() {
        let mut keys: Vec<u64> = vec![300, 2, 1 << 40, 0, 255, 256];
        let mut encoded: Vec<Vec<u8>> = keys.iter().map(KeyCodec::encode_key).collect();
        keys.sort();
        encoded.sort();
        let decoded: Vec<u64> = encoded
            .iter()
            .map(|k| u64::decode_key(k).unwrap())
            .collect();
        assert_eq!(decoded, keys);
    }

    #[test]
    fn test_namespaced_key_groups_by_namespace() {
        let a = ChainNamespace::new(Buf32::from([1; 32]));
        let b = ChainNamespace::new(Buf32::from([2; 32]));
        let mut encoded: Vec<Vec<u8>> = [(b, 0), (a, 256), (a, 1), (b, u64::MAX), (a, 255)]
            .iter()
            .map(KeyCodec::encode_key)
            .collect();
        encoded.sort();
        let decoded: Vec<(ChainNamespace, u64)> = encoded
            .iter()
            .map(|k| <(ChainNamespace, u64)>::decode_key(k).unwrap())
            .collect();
        assert_eq!(
            decoded,
            vec![(a, 1), (a, 255), (a, 256), (b, 0), (b, u64::MAX)]
        );
    }

    #[test]
    fn test_key_wrong_length() {
        assert!(matches!(
            u64::decode_key(&[1, 2, 3]),
            Err(DbError::CodecError(_))
        ));
    }
}
