//! Output formatting for command results.

pub(crate) mod batch;
pub(crate) mod event;
mod helpers;
pub(crate) mod key;
mod traits;

use serde::Serialize;

use self::traits::Formattable;
use crate::cli::OutputFormat;

/// Prints `value` to stdout in the requested format.
pub(crate) fn output<T: Formattable + Serialize>(
    value: &T,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Porcelain => println!("{}", value.format_porcelain()),
    }
    Ok(())
}
