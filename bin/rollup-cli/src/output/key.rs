use std::path::PathBuf;

use rollup_checkpoint_types::ValidatorId;
use serde::Serialize;

use super::{helpers::porcelain_field, traits::Formattable};

/// A freshly generated validator key.
#[derive(Serialize)]
pub(crate) struct KeyInfo {
    pub(crate) key_file: PathBuf,
    pub(crate) validator_id: ValidatorId,
}

impl Formattable for KeyInfo {
    fn format_porcelain(&self) -> String {
        [
            porcelain_field("key.file", self.key_file.display()),
            porcelain_field("key.validator_id", self.validator_id),
        ]
        .join("\n")
    }
}
