use rollup_checkpoint_types::{BatchAddress, BatchRecord, BatchStatus, ChainNamespace, RollupEvent};
use rollup_db_types::{traits::*, DbError, DbResult};
use sled::transaction::{abort, ConflictableTransactionResult};
use tracing::*;

use super::schemas::{BatchIndexSchema, BatchRecordSchema, RollupEventSchema, SequenceSchema};
use crate::schema::TxTree;

/// Sequence key holding the index the next event will be written at.
const NEXT_EVENT_IDX_KEY: u8 = 0;

define_sled_database!(
    pub struct RollupDBSled {
        record_tree: BatchRecordSchema,
        index_tree: BatchIndexSchema,
        event_tree: RollupEventSchema,
        seq_tree: SequenceSchema,
    }
);

/// Appends an event inside a transaction, returning its index.
fn append_event(
    events: &TxTree<'_, RollupEventSchema>,
    seq: &TxTree<'_, SequenceSchema>,
    event: &RollupEvent,
) -> ConflictableTransactionResult<u64, DbError> {
    let idx = seq.get(&NEXT_EVENT_IDX_KEY)?.unwrap_or(0);
    events.insert(&idx, event)?;
    seq.insert(&NEXT_EVENT_IDX_KEY, &(idx + 1))?;
    Ok(idx)
}

impl BatchRecordDatabase for RollupDBSled {
    fn put_new_batch_record(
        &self,
        namespace: ChainNamespace,
        addr: BatchAddress,
        record: BatchRecord,
        event: RollupEvent,
    ) -> DbResult<u64> {
        let batch_number = record.batch_number();
        let idx = self.config.with_tx(
            "put_new_batch_record",
            (
                self.record_tree.raw(),
                self.index_tree.raw(),
                self.event_tree.raw(),
                self.seq_tree.raw(),
            ),
            |(rt, it, et, st)| {
                let records = TxTree::<BatchRecordSchema>::new(rt);
                if records.get(&addr)?.is_some() {
                    return abort(DbError::EntryAlreadyExists);
                }
                records.insert(&addr, &record)?;
                TxTree::<BatchIndexSchema>::new(it).insert(&(namespace, batch_number), &addr)?;
                append_event(&TxTree::new(et), &TxTree::new(st), &event)
            },
        )?;
        self.flush_if_configured()?;
        trace!(%batch_number, %addr, event_idx = idx, "stored batch record");
        Ok(idx)
    }

    fn get_batch_record(&self, addr: BatchAddress) -> DbResult<Option<BatchRecord>> {
        self.record_tree.get(&addr)
    }

    fn update_batch_status(
        &self,
        addr: BatchAddress,
        from: BatchStatus,
        to: BatchStatus,
        event: RollupEvent,
    ) -> DbResult<(BatchRecord, u64)> {
        let res = self.config.with_tx(
            "update_batch_status",
            (
                self.record_tree.raw(),
                self.event_tree.raw(),
                self.seq_tree.raw(),
            ),
            |(rt, et, st)| {
                let records = TxTree::<BatchRecordSchema>::new(rt);
                let Some(record) = records.get(&addr)? else {
                    return abort(DbError::NonExistentEntry);
                };
                if record.status() != from {
                    return abort(DbError::UnexpectedStatus {
                        expected: from,
                        found: record.status(),
                    });
                }
                let updated = record.with_status(to);
                records.insert(&addr, &updated)?;
                let idx = append_event(&TxTree::new(et), &TxTree::new(st), &event)?;
                Ok((updated, idx))
            },
        )?;
        self.flush_if_configured()?;
        Ok(res)
    }

    fn get_last_batch_number(&self, namespace: ChainNamespace) -> DbResult<Option<u64>> {
        let last = self
            .index_tree
            .last_with_prefix(namespace.inner().as_slice())?;
        Ok(last.map(|((_, num), _)| num))
    }
}

impl RollupEventDatabase for RollupDBSled {
    fn get_event(&self, idx: u64) -> DbResult<Option<RollupEvent>> {
        self.event_tree.get(&idx)
    }

    fn get_last_event_idx(&self) -> DbResult<Option<u64>> {
        Ok(self.event_tree.last()?.map(|(idx, _)| idx))
    }

    fn get_events_range(&self, start: u64, end: u64) -> DbResult<Vec<(u64, RollupEvent)>> {
        self.event_tree.range(&start, &end)
    }
}
