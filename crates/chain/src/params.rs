use rollup_checkpoint_types::{ChainNamespace, DEFAULT_MAX_RECENT_ROOTS};
use serde::{Deserialize, Serialize};

/// Parameters fixed for the lifetime of a chain.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChainParams {
    pub namespace: ChainNamespace,

    /// How many predecessor leaves each record carries.
    #[serde(default = "default_max_recent_roots")]
    pub max_recent_roots: usize,
}

fn default_max_recent_roots() -> usize {
    DEFAULT_MAX_RECENT_ROOTS
}

impl ChainParams {
    pub fn new(namespace: ChainNamespace) -> Self {
        Self {
            namespace,
            max_recent_roots: DEFAULT_MAX_RECENT_ROOTS,
        }
    }
}
