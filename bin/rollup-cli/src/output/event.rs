//! Event log formatting implementations

use rollup_checkpoint_types::RollupEvent;
use serde::Serialize;

use super::{
    helpers::{porcelain_field, porcelain_optional},
    traits::Formattable,
};

#[derive(Serialize)]
pub(crate) struct EventInfo {
    pub(crate) event_index: u64,
    pub(crate) event: RollupEvent,
}

impl EventInfo {
    fn porcelain_lines(&self) -> Vec<String> {
        let prefix = format!("events[{}]", self.event_index);
        let field = |name: &str| format!("{prefix}.{name}");

        match &self.event {
            RollupEvent::BatchCommitted {
                batch_number,
                leaf,
                validator,
                committed_at,
            } => vec![
                porcelain_field(&field("kind"), "BatchCommitted"),
                porcelain_field(&field("batch_number"), batch_number),
                porcelain_field(&field("leaf"), leaf),
                porcelain_field(&field("validator"), validator),
                porcelain_field(&field("committed_at"), committed_at),
            ],
            RollupEvent::FraudConfirmed {
                batch_number,
                validator,
                committed_leaf,
                asserted_leaf,
                challenger,
                committed_at,
                disputed_at,
            } => vec![
                porcelain_field(&field("kind"), "FraudConfirmed"),
                porcelain_field(&field("batch_number"), batch_number),
                porcelain_field(&field("validator"), validator),
                porcelain_field(&field("committed_leaf"), committed_leaf),
                porcelain_field(&field("asserted_leaf"), asserted_leaf),
                porcelain_field(&field("challenger"), challenger),
                porcelain_field(&field("committed_at"), committed_at),
                porcelain_field(&field("disputed_at"), disputed_at),
            ],
        }
    }
}

/// A page of the event log.
#[derive(Serialize)]
pub(crate) struct EventsInfo {
    pub(crate) last_event_index: Option<u64>,
    pub(crate) events: Vec<EventInfo>,
}

impl Formattable for EventsInfo {
    fn format_porcelain(&self) -> String {
        let mut output = vec![
            porcelain_optional("events.last_event_index", self.last_event_index),
            porcelain_field("events.count", self.events.len()),
        ];
        for event in &self.events {
            output.extend(event.porcelain_lines());
        }
        output.join("\n")
    }
}
