use argh::FromArgs;
use rollup_db_types::traits::RollupEventDatabase;

use crate::{
    cli::OutputFormat,
    context::CliContext,
    output::{
        event::{EventInfo, EventsInfo},
        output,
    },
};

#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand, name = "get-events")]
/// Get entries of the event log
pub(crate) struct GetEventsArgs {
    /// index of the first event
    #[argh(option, short = 's', default = "0")]
    pub(crate) start: u64,

    /// maximum number of events
    #[argh(option, short = 'l', default = "100")]
    pub(crate) limit: u64,

    /// output format: "json" or "porcelain"
    #[argh(option, short = 'o', default = "OutputFormat::Porcelain")]
    pub(crate) output_format: OutputFormat,
}

/// Get a page of the event log.
pub(crate) fn get_events(ctx: &CliContext, args: GetEventsArgs) -> anyhow::Result<()> {
    let db = ctx.event_db();
    let end = args.start.saturating_add(args.limit);

    let info = EventsInfo {
        last_event_index: db.get_last_event_idx()?,
        events: db
            .get_events_range(args.start, end)?
            .into_iter()
            .map(|(event_index, event)| EventInfo { event_index, event })
            .collect(),
    };
    output(&info, args.output_format)
}
