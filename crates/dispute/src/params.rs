use serde::{Deserialize, Serialize};

/// Upper bound on proof elements, enough for a tree of 2^64 leaves.
pub const DEFAULT_MAX_PROOF_LEN: usize = 64;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct DisputeParams {
    /// Seconds after commitment during which a batch may be disputed. `None`
    /// keeps batches disputable forever.
    #[serde(default)]
    pub window_secs: Option<u64>,

    #[serde(default = "default_max_proof_len")]
    pub max_proof_len: usize,
}

fn default_max_proof_len() -> usize {
    DEFAULT_MAX_PROOF_LEN
}

impl Default for DisputeParams {
    fn default() -> Self {
        Self {
            window_secs: None,
            max_proof_len: DEFAULT_MAX_PROOF_LEN,
        }
    }
}

impl DisputeParams {
    /// Last timestamp at which a batch committed at `committed_at` can still
    /// be disputed.
    pub fn deadline(&self, committed_at: u64) -> Option<u64> {
        self.window_secs
            .map(|window| committed_at.saturating_add(window))
    }
}
