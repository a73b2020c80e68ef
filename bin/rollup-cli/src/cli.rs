use std::{path::PathBuf, str::FromStr};

use argh::FromArgs;

use crate::cmd::{
    batch::{AuditChainArgs, DeriveAddressArgs, GetBatchArgs, GetBatchesSummaryArgs, SubmitArgs},
    dispute::DisputeArgs,
    event::GetEventsArgs,
    key::GenKeyArgs,
};

#[derive(FromArgs, Debug)]
/// Operator and auditor tool for a rollup checkpoint chain
pub(crate) struct Cli {
    /// path to the TOML config file
    #[argh(option, short = 'c')]
    pub(crate) config: Option<PathBuf>,

    /// data directory, overrides the one in the config
    #[argh(option, short = 'd')]
    pub(crate) datadir: Option<PathBuf>,

    #[argh(subcommand)]
    pub(crate) cmd: Command,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand)]
pub(crate) enum Command {
    GenKey(GenKeyArgs),
    DeriveAddress(DeriveAddressArgs),
    Submit(SubmitArgs),
    Dispute(DisputeArgs),
    GetBatch(GetBatchArgs),
    GetBatchesSummary(GetBatchesSummaryArgs),
    AuditChain(AuditChainArgs),
    GetEvents(GetEventsArgs),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum OutputFormat {
    Json,
    Porcelain,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "porcelain" => Ok(Self::Porcelain),
            other => Err(format!("unknown output format {other}, expected json or porcelain")),
        }
    }
}
