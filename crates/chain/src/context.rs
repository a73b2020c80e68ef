use rollup_checkpoint_types::ValidatorId;

/// Facts the host runtime supplies for the current call.
///
/// The signer must already be authenticated by whoever builds the context.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CallContext {
    signer: ValidatorId,
    timestamp: u64,
}

impl CallContext {
    pub fn new(signer: ValidatorId, timestamp: u64) -> Self {
        Self { signer, timestamp }
    }

    pub fn signer(&self) -> &ValidatorId {
        &self.signer
    }

    /// Host clock, unix seconds.
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }
}
