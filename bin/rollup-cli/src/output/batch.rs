//! Batch record formatting implementations

use rollup_checkpoint_types::{BatchAddress, BatchRecord, DisputeOutcome};
use serde::Serialize;

use super::{
    helpers::{porcelain_field, porcelain_optional},
    traits::Formattable,
};

/// A batch record together with the address it lives at.
#[derive(Serialize)]
pub(crate) struct BatchInfo<'a> {
    pub(crate) address: BatchAddress,
    pub(crate) record: &'a BatchRecord,
}

impl BatchInfo<'_> {
    fn porcelain_lines(&self, prefix: &str) -> Vec<String> {
        let record = self.record;
        let mut output = vec![
            porcelain_field(&format!("{prefix}.batch_number"), record.batch_number()),
            porcelain_field(&format!("{prefix}.address"), self.address),
            porcelain_field(&format!("{prefix}.leaf"), record.leaf()),
            porcelain_optional(
                &format!("{prefix}.previous_reference"),
                record.previous_reference(),
            ),
            porcelain_field(&format!("{prefix}.validator"), record.validator()),
            porcelain_field(&format!("{prefix}.status"), format!("{:?}", record.status())),
            porcelain_field(&format!("{prefix}.committed_at"), record.committed_at()),
        ];

        for (i, root) in record.recent_roots().iter().enumerate() {
            output.push(porcelain_field(&format!("{prefix}.recent_roots[{i}]"), root));
        }

        output
    }
}

impl Formattable for BatchInfo<'_> {
    fn format_porcelain(&self) -> String {
        self.porcelain_lines("batch").join("\n")
    }
}

#[derive(Serialize)]
pub(crate) struct AddressInfo {
    pub(crate) batch_number: u64,
    pub(crate) address: BatchAddress,
}

impl Formattable for AddressInfo {
    fn format_porcelain(&self) -> String {
        [
            porcelain_field("batch_number", self.batch_number),
            porcelain_field("address", self.address),
        ]
        .join("\n")
    }
}

/// Batches summary information displayed to the user
#[derive(Serialize)]
pub(crate) struct BatchesSummaryInfo {
    pub(crate) last_batch_number: Option<u64>,
    pub(crate) total_batches: u64,
    pub(crate) committed_batches: u64,
    pub(crate) disputed_batches: u64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) missing_batch_numbers: Vec<u64>,
}

impl Formattable for BatchesSummaryInfo {
    fn format_porcelain(&self) -> String {
        let mut output = vec![
            porcelain_optional("batches_summary.last_batch_number", self.last_batch_number),
            porcelain_field("batches_summary.total_batches", self.total_batches),
            porcelain_field("batches_summary.committed_batches", self.committed_batches),
            porcelain_field("batches_summary.disputed_batches", self.disputed_batches),
        ];

        for n in &self.missing_batch_numbers {
            output.push(porcelain_field("batches_summary.missing_batch_number", n));
        }

        output.join("\n")
    }
}

/// The linked chain from a batch back to the root, newest first.
#[derive(Serialize)]
pub(crate) struct ChainAuditInfo<'a> {
    pub(crate) tip: u64,
    pub(crate) batches: Vec<BatchInfo<'a>>,
}

impl Formattable for ChainAuditInfo<'_> {
    fn format_porcelain(&self) -> String {
        let mut output = vec![
            porcelain_field("audit.tip", self.tip),
            porcelain_field("audit.length", self.batches.len()),
            porcelain_field("audit.valid", true),
        ];

        for (i, batch) in self.batches.iter().enumerate() {
            output.extend(batch.porcelain_lines(&format!("audit.batches[{i}]")));
        }

        output.join("\n")
    }
}

#[derive(Serialize)]
pub(crate) struct DisputeInfo {
    pub(crate) batch_number: u64,
    pub(crate) outcome: DisputeOutcome,
}

impl Formattable for DisputeInfo {
    fn format_porcelain(&self) -> String {
        [
            porcelain_field("dispute.batch_number", self.batch_number),
            porcelain_field("dispute.outcome", format!("{:?}", self.outcome)),
        ]
        .join("\n")
    }
}
