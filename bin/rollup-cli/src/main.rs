//! Binary entry-point for the rollup operator tool.
//! Parses CLI arguments with **argh** and runs one command against a datadir.
mod cli;
mod cmd;
mod context;
mod helpers;
mod output;

use std::path::PathBuf;

use anyhow::{anyhow, Context};
use rollup_common::logging::{self, FileLoggingConfig, LoggerConfig};
use rollup_config::{load_config, Config};

use crate::{
    cli::{Cli, Command},
    cmd::{
        batch::{audit_chain, derive_address, get_batch, get_batches_summary, submit},
        dispute::dispute,
        event::get_events,
        key::gen_key,
    },
    context::CliContext,
};

const SERVICE_NAME: &str = "rollup-cli";

fn main() {
    let cli: Cli = argh::from_env();

    if let Err(e) = run(cli) {
        eprintln!("{e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli
        .config
        .as_deref()
        .map(load_config)
        .transpose()
        .context("failed to load config")?;

    logging::init(logger_config(config.as_ref()));

    match cli.cmd {
        Command::GenKey(args) => gen_key(args),
        Command::DeriveAddress(args) => derive_address(&require_config(config)?, args),
        Command::Submit(args) => submit(&open_context(config, cli.datadir)?, args),
        Command::Dispute(args) => dispute(&open_context(config, cli.datadir)?, args),
        Command::GetBatch(args) => get_batch(&open_context(config, cli.datadir)?, args),
        Command::GetBatchesSummary(args) => {
            get_batches_summary(&open_context(config, cli.datadir)?, args)
        }
        Command::AuditChain(args) => audit_chain(&open_context(config, cli.datadir)?, args),
        Command::GetEvents(args) => get_events(&open_context(config, cli.datadir)?, args),
    }
}

fn require_config(config: Option<Config>) -> anyhow::Result<Config> {
    config.ok_or_else(|| anyhow!("this command needs a config file, pass one with -c"))
}

fn open_context(config: Option<Config>, datadir: Option<PathBuf>) -> anyhow::Result<CliContext> {
    let mut config = require_config(config)?;
    if let Some(datadir) = datadir {
        config.datadir = datadir;
    }
    CliContext::open(config)
}

/// Logs go to stderr so that command output on stdout stays parseable.
fn logger_config(config: Option<&Config>) -> LoggerConfig {
    let mut lconfig = LoggerConfig::new(SERVICE_NAME.to_string()).with_stderr(true);

    let Some(logging) = config.map(|c| &c.logging) else {
        return lconfig;
    };

    let json = logging.json_format.unwrap_or(false);
    lconfig = lconfig.with_json_logging(json);

    if let Some(log_dir) = &logging.log_dir {
        let prefix = logging
            .log_file_prefix
            .clone()
            .unwrap_or_else(|| SERVICE_NAME.to_string());
        lconfig = lconfig
            .with_file_logging(FileLoggingConfig::new(log_dir.clone(), prefix).with_json_format(json));
    }

    lconfig
}
