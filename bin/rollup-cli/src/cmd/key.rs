use std::{fs, path::PathBuf};

use anyhow::{bail, Context};
use argh::FromArgs;
use rollup_crypto::schnorr::generate_secret_key;
use tracing::*;

use crate::{
    cli::OutputFormat,
    helpers::validator_id,
    output::{key::KeyInfo, output},
};

#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand, name = "gen-key")]
/// Generate a validator secret key and write it to a file
pub(crate) struct GenKeyArgs {
    /// output path
    #[argh(positional)]
    pub(crate) path: PathBuf,

    /// force overwrite
    #[argh(switch, short = 'f')]
    pub(crate) force: bool,

    /// output format: "json" or "porcelain"
    #[argh(option, short = 'o', default = "OutputFormat::Porcelain")]
    pub(crate) output_format: OutputFormat,
}

/// Generates a new key and prints the validator id it signs as.
pub(crate) fn gen_key(args: GenKeyArgs) -> anyhow::Result<()> {
    if args.path.exists() && !args.force {
        bail!("{} already exists, pass -f to overwrite", args.path.display());
    }

    let sk = generate_secret_key();
    let validator_id = validator_id(&sk)?;
    fs::write(&args.path, format!("{sk}\n"))
        .with_context(|| format!("failed to write key to {}", args.path.display()))?;
    info!(path = ?args.path, %validator_id, "generated validator key");

    let info = KeyInfo {
        key_file: args.path,
        validator_id,
    };
    output(&info, args.output_format)
}
