use std::path::PathBuf;

use anyhow::{bail, Context};
use argh::FromArgs;
use rollup_primitives::Buf32;
use rollup_program::{ExecOutcome, Instruction, SignedInstruction};
use tracing::*;

use crate::{
    cli::OutputFormat,
    context::CliContext,
    helpers::{host_time, load_secret_key},
    output::{batch::DisputeInfo, output},
};

#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand, name = "dispute")]
/// Sign and submit a fraud proof against a committed batch
pub(crate) struct DisputeArgs {
    /// batch number
    #[argh(positional)]
    pub(crate) batch_number: u64,

    /// the leaf asserted to be correct, hex
    #[argh(positional)]
    pub(crate) leaf: Buf32,

    /// proof element, hex, repeat for each level from the leaf up
    #[argh(option, short = 'p')]
    pub(crate) proof_elements: Vec<Buf32>,

    /// file holding the challenger secret key, hex
    #[argh(option, short = 'k')]
    pub(crate) key_file: PathBuf,

    /// host time in unix seconds (default: system clock)
    #[argh(option)]
    pub(crate) now: Option<u64>,

    /// output format: "json" or "porcelain"
    #[argh(option, short = 'o', default = "OutputFormat::Porcelain")]
    pub(crate) output_format: OutputFormat,
}

/// Sign a fraud proof with the given key and execute it.
///
/// Proofs are checked against the trusted roots in the operator's config only.
pub(crate) fn dispute(ctx: &CliContext, args: DisputeArgs) -> anyhow::Result<()> {
    let sk = load_secret_key(&args.key_file)?;
    let program = ctx.program();

    let ix = Instruction::ProcessFraudProof {
        batch_number: args.batch_number,
        leaf: args.leaf,
        proof_elements: args.proof_elements,
    };
    let signed = SignedInstruction::sign(ix, &sk).context("failed to sign instruction")?;
    let now = host_time(args.now)?;

    let outcome = match program.execute(&signed, now)? {
        ExecOutcome::Dispute { outcome } => outcome,
        other => bail!("unexpected outcome for a dispute: {other:?}"),
    };
    info!(batch_number = %args.batch_number, ?outcome, "processed fraud proof");

    let info = DisputeInfo {
        batch_number: args.batch_number,
        outcome,
    };
    output(&info, args.output_format)
}

#[cfg(test)]
mod tests {
    use rollup_checkpoint_types::BatchStatus;
    use rollup_config::{DisputeConfig, TrustedRootEntry};

    use super::*;
    use crate::cmd::{
        batch::{submit, SubmitArgs},
        test_utils::{open_test_context_with, write_key},
    };

    fn dispute_args(key_file: PathBuf, leaf: u8) -> DisputeArgs {
        DisputeArgs {
            batch_number: 0,
            leaf: Buf32::from([leaf; 32]),
            proof_elements: Vec::new(),
            key_file,
            now: Some(2_000),
            output_format: OutputFormat::Porcelain,
        }
    }

    fn batch_status(ctx: &CliContext) -> BatchStatus {
        ctx.chain().get_batch(0).unwrap().unwrap().status()
    }

    #[test]
    fn test_dispute_against_configured_root() {
        let dir = tempfile::tempdir().unwrap();
        let dispute_config = DisputeConfig {
            trusted_roots: vec![TrustedRootEntry {
                batch_number: 0,
                root: Buf32::from([3; 32]),
            }],
            ..Default::default()
        };
        let ctx = open_test_context_with(&dir.path().join("data"), dispute_config);
        let validator = write_key(dir.path(), "validator.key");
        let challenger = write_key(dir.path(), "challenger.key");

        let commit = SubmitArgs {
            batch_number: 0,
            leaf: Buf32::from([1; 32]),
            previous_reference: None,
            auto_link: false,
            key_file: validator,
            now: Some(1_000),
            output_format: OutputFormat::Json,
        };
        submit(&ctx, commit).unwrap();

        // Same leaf: nothing to dispute.
        dispute(&ctx, dispute_args(challenger.clone(), 1)).unwrap();
        assert_eq!(batch_status(&ctx), BatchStatus::Committed);

        // A leaf that doesn't fold to the configured root is not a valid proof.
        assert!(dispute(&ctx, dispute_args(challenger.clone(), 4)).is_err());
        assert_eq!(batch_status(&ctx), BatchStatus::Committed);

        dispute(&ctx, dispute_args(challenger.clone(), 3)).unwrap();
        assert_eq!(batch_status(&ctx), BatchStatus::Disputed);

        assert!(dispute(&ctx, dispute_args(challenger, 3)).is_err());
    }

    #[test]
    fn test_dispute_without_configured_root_fails() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = open_test_context_with(&dir.path().join("data"), DisputeConfig::default());
        let validator = write_key(dir.path(), "validator.key");
        let challenger = write_key(dir.path(), "challenger.key");

        let commit = SubmitArgs {
            batch_number: 0,
            leaf: Buf32::from([1; 32]),
            previous_reference: None,
            auto_link: false,
            key_file: validator,
            now: Some(1_000),
            output_format: OutputFormat::Json,
        };
        submit(&ctx, commit).unwrap();

        // The challenger's own leaf can never stand in for a trusted root.
        assert!(dispute(&ctx, dispute_args(challenger, 3)).is_err());
        assert_eq!(batch_status(&ctx), BatchStatus::Committed);
    }

    #[test]
    fn test_trusted_root_flag_not_accepted() {
        let leaf = Buf32::from([3; 32]).to_string();
        let res = DisputeArgs::from_args(
            &["dispute"],
            &["0", &leaf, "-k", "challenger.key", "-t", &leaf],
        );
        assert!(res.is_err());
    }
}
