use std::path::PathBuf;

use anyhow::{anyhow, bail, Context};
use argh::FromArgs;
use rollup_checkpoint_types::{BatchAddress, BatchStatus};
use rollup_config::Config;
use rollup_primitives::Buf32;
use rollup_program::{ExecOutcome, Instruction, SignedInstruction};
use tracing::*;

use crate::{
    cli::OutputFormat,
    context::CliContext,
    helpers::{host_time, load_secret_key},
    output::{
        batch::{AddressInfo, BatchInfo, BatchesSummaryInfo, ChainAuditInfo},
        output,
    },
};

#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand, name = "derive-address")]
/// Print the storage address of a batch
pub(crate) struct DeriveAddressArgs {
    /// batch number
    #[argh(positional)]
    pub(crate) batch_number: u64,

    /// output format: "json" or "porcelain"
    #[argh(option, short = 'o', default = "OutputFormat::Porcelain")]
    pub(crate) output_format: OutputFormat,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand, name = "submit")]
/// Sign and submit a state commitment
pub(crate) struct SubmitArgs {
    /// batch number
    #[argh(positional)]
    pub(crate) batch_number: u64,

    /// committed leaf, hex
    #[argh(positional)]
    pub(crate) leaf: Buf32,

    /// address of the preceding batch record
    #[argh(option, short = 'r')]
    pub(crate) previous_reference: Option<BatchAddress>,

    /// link to the preceding batch automatically
    #[argh(switch, short = 'a')]
    pub(crate) auto_link: bool,

    /// file holding the validator secret key, hex
    #[argh(option, short = 'k')]
    pub(crate) key_file: PathBuf,

    /// host time in unix seconds (default: system clock)
    #[argh(option)]
    pub(crate) now: Option<u64>,

    /// output format: "json" or "porcelain"
    #[argh(option, short = 'o', default = "OutputFormat::Porcelain")]
    pub(crate) output_format: OutputFormat,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand, name = "get-batch")]
/// Get batch record
pub(crate) struct GetBatchArgs {
    /// batch number
    #[argh(positional)]
    pub(crate) batch_number: u64,

    /// output format: "json" or "porcelain"
    #[argh(option, short = 'o', default = "OutputFormat::Porcelain")]
    pub(crate) output_format: OutputFormat,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand, name = "get-batches-summary")]
/// Get batches summary
pub(crate) struct GetBatchesSummaryArgs {
    /// output format: "json" or "porcelain"
    #[argh(option, short = 'o', default = "OutputFormat::Porcelain")]
    pub(crate) output_format: OutputFormat,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand, name = "audit-chain")]
/// Walk and validate the chain back to the root
pub(crate) struct AuditChainArgs {
    /// batch to start from (default: last batch)
    #[argh(positional)]
    pub(crate) batch_number: Option<u64>,

    /// output format: "json" or "porcelain"
    #[argh(option, short = 'o', default = "OutputFormat::Porcelain")]
    pub(crate) output_format: OutputFormat,
}

/// Print the address a batch number derives to.
pub(crate) fn derive_address(config: &Config, args: DeriveAddressArgs) -> anyhow::Result<()> {
    let info = AddressInfo {
        batch_number: args.batch_number,
        address: BatchAddress::derive(&config.chain.namespace, args.batch_number),
    };
    output(&info, args.output_format)
}

/// Sign a commitment with the given key and execute it.
pub(crate) fn submit(ctx: &CliContext, args: SubmitArgs) -> anyhow::Result<()> {
    let sk = load_secret_key(&args.key_file)?;
    let program = ctx.program();

    let previous_reference = match args.previous_reference {
        Some(prev) => Some(prev),
        None if args.auto_link => args
            .batch_number
            .checked_sub(1)
            .map(|n| program.chain().derive_address(n)),
        None => None,
    };

    let ix = Instruction::SubmitStateCommitment {
        batch_number: args.batch_number,
        leaf: args.leaf,
        previous_reference,
    };
    let signed = SignedInstruction::sign(ix, &sk).context("failed to sign instruction")?;
    let now = host_time(args.now)?;

    let record = match program.execute(&signed, now)? {
        ExecOutcome::Committed { record } => record,
        other => bail!("unexpected outcome for a commitment: {other:?}"),
    };
    info!(batch_number = %record.batch_number(), "submitted commitment");

    let info = BatchInfo {
        address: program.chain().derive_address(record.batch_number()),
        record: &record,
    };
    output(&info, args.output_format)
}

/// Get batch record by number.
pub(crate) fn get_batch(ctx: &CliContext, args: GetBatchArgs) -> anyhow::Result<()> {
    let chain = ctx.chain();
    let record = chain
        .get_batch(args.batch_number)?
        .ok_or_else(|| anyhow!("no batch {} found", args.batch_number))?;

    let info = BatchInfo {
        address: chain.derive_address(args.batch_number),
        record: &record,
    };
    output(&info, args.output_format)
}

/// Get summary of all batches.
pub(crate) fn get_batches_summary(
    ctx: &CliContext,
    args: GetBatchesSummaryArgs,
) -> anyhow::Result<()> {
    let chain = ctx.chain();
    let last_batch_number = chain.last_batch_number()?;

    let mut info = BatchesSummaryInfo {
        last_batch_number,
        total_batches: 0,
        committed_batches: 0,
        disputed_batches: 0,
        missing_batch_numbers: Vec::new(),
    };

    if let Some(last) = last_batch_number {
        for n in 0..=last {
            match chain.get_batch(n)? {
                Some(record) => {
                    info.total_batches += 1;
                    match record.status() {
                        BatchStatus::Committed => info.committed_batches += 1,
                        BatchStatus::Disputed => info.disputed_batches += 1,
                    }
                }
                None => info.missing_batch_numbers.push(n),
            }
        }
    }

    output(&info, args.output_format)
}

/// Walk the chain from a batch back to the root, validating every link.
pub(crate) fn audit_chain(ctx: &CliContext, args: AuditChainArgs) -> anyhow::Result<()> {
    let chain = ctx.chain();
    let tip = match args.batch_number {
        Some(n) => n,
        None => chain
            .last_batch_number()?
            .ok_or_else(|| anyhow!("no batches committed yet"))?,
    };

    let records = chain.audit_chain(tip)?;
    let info = ChainAuditInfo {
        tip,
        batches: records
            .iter()
            .map(|record| BatchInfo {
                address: chain.derive_address(record.batch_number()),
                record,
            })
            .collect(),
    };
    output(&info, args.output_format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmd::test_utils::{open_test_context, write_key};

    fn submit_args(key_file: PathBuf, batch_number: u64, leaf: u8, auto_link: bool) -> SubmitArgs {
        SubmitArgs {
            batch_number,
            leaf: Buf32::from([leaf; 32]),
            previous_reference: None,
            auto_link,
            key_file,
            now: Some(1_000 + batch_number),
            output_format: OutputFormat::Json,
        }
    }

    #[test]
    fn test_submit_and_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = open_test_context(&dir.path().join("data"));
        let key = write_key(dir.path(), "v.key");

        submit(&ctx, submit_args(key.clone(), 0, 1, false)).unwrap();
        submit(&ctx, submit_args(key.clone(), 1, 2, true)).unwrap();

        let chain = ctx.chain();
        let rec = chain.get_batch(1).unwrap().unwrap();
        assert_eq!(*rec.leaf(), Buf32::from([2; 32]));
        assert_eq!(rec.previous_reference(), Some(&chain.derive_address(0)));
        assert_eq!(rec.committed_at(), 1_001);

        get_batch(
            &ctx,
            GetBatchArgs {
                batch_number: 1,
                output_format: OutputFormat::Porcelain,
            },
        )
        .unwrap();
        audit_chain(
            &ctx,
            AuditChainArgs {
                batch_number: None,
                output_format: OutputFormat::Json,
            },
        )
        .unwrap();
        get_batches_summary(
            &ctx,
            GetBatchesSummaryArgs {
                output_format: OutputFormat::Porcelain,
            },
        )
        .unwrap();
    }

    #[test]
    fn test_submit_without_link_fails() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = open_test_context(&dir.path().join("data"));
        let key = write_key(dir.path(), "v.key");

        submit(&ctx, submit_args(key.clone(), 0, 1, false)).unwrap();
        assert!(submit(&ctx, submit_args(key, 1, 2, false)).is_err());
        assert!(ctx.chain().get_batch(1).unwrap().is_none());
    }

    #[test]
    fn test_reads_on_empty_chain_fail() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = open_test_context(dir.path());

        let missing = GetBatchArgs {
            batch_number: 0,
            output_format: OutputFormat::Porcelain,
        };
        assert!(get_batch(&ctx, missing).is_err());

        let audit = AuditChainArgs {
            batch_number: None,
            output_format: OutputFormat::Porcelain,
        };
        assert!(audit_chain(&ctx, audit).is_err());
    }

    #[test]
    fn test_derive_address_matches_chain() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = open_test_context(dir.path());
        let args = DeriveAddressArgs {
            batch_number: 3,
            output_format: OutputFormat::Json,
        };
        derive_address(ctx.config(), args).unwrap();
    }
}
