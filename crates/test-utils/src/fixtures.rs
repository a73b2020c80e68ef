//! Deterministic values for building chains in tests.

use rollup_checkpoint_types::{BatchAddress, BatchRecord, ChainNamespace, RollupEvent, ValidatorId};
use rollup_crypto::{generate_secret_key, pubkey_from_secret};
use rollup_primitives::Buf32;

/// A leaf made of 32 copies of `byte`.
pub fn leaf(byte: u8) -> Buf32 {
    Buf32::from([byte; 32])
}

pub fn test_namespace() -> ChainNamespace {
    ChainNamespace::new(Buf32::from([0x5a; 32]))
}

/// A validator with a freshly generated schnorr key.
#[derive(Debug, Clone)]
pub struct TestValidator {
    sk: Buf32,
    id: ValidatorId,
}

impl TestValidator {
    pub fn new() -> Self {
        let sk = generate_secret_key();
        let pk = pubkey_from_secret(&sk).expect("test: derive pubkey");
        Self {
            sk,
            id: ValidatorId::new(pk),
        }
    }

    pub fn id(&self) -> ValidatorId {
        self.id
    }

    pub fn secret_key(&self) -> &Buf32 {
        &self.sk
    }
}

impl Default for TestValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a committed record for `batch_number` correctly linked to its
/// predecessor in `ns`, with its matching commit event.
pub fn linked_record(
    ns: &ChainNamespace,
    batch_number: u64,
    leaf: Buf32,
    validator: ValidatorId,
    committed_at: u64,
) -> (BatchAddress, BatchRecord, RollupEvent) {
    let prev = batch_number
        .checked_sub(1)
        .map(|prev| BatchAddress::derive(ns, prev));
    let record = BatchRecord::new_committed(
        batch_number,
        leaf,
        prev,
        validator,
        committed_at,
        Vec::new(),
    );
    let event = RollupEvent::BatchCommitted {
        batch_number,
        leaf,
        validator,
        committed_at,
    };
    (BatchAddress::derive(ns, batch_number), record, event)
}
