//! Trait definitions for low level database interfaces.
//!
//! Operations are NOT VALIDATED at this level beyond the storage invariants
//! each method documents. Chain linkage rules live in the chain manager.

use rollup_checkpoint_types::{BatchAddress, BatchRecord, BatchStatus, ChainNamespace, RollupEvent};

use crate::DbResult;

/// Database interface for committed batch records, keyed by derived address.
///
/// Every write also appends one event to the event log, atomically with the
/// record change. Nothing is persisted if a write fails.
pub trait BatchRecordDatabase: Send + Sync + 'static {
    /// Inserts a new batch record at `addr` and appends `event`, returning the
    /// new event's index. The record is also indexed under `namespace` by its
    /// batch number.
    ///
    /// Fails with [`DbError::EntryAlreadyExists`](crate::DbError::EntryAlreadyExists)
    /// if there's already a record at `addr`.
    fn put_new_batch_record(
        &self,
        namespace: ChainNamespace,
        addr: BatchAddress,
        record: BatchRecord,
        event: RollupEvent,
    ) -> DbResult<u64>;

    /// Gets the record at `addr`, if there is one.
    fn get_batch_record(&self, addr: BatchAddress) -> DbResult<Option<BatchRecord>>;

    /// Atomically moves the record at `addr` from status `from` to status `to`
    /// and appends `event`. Returns the updated record and the event index.
    ///
    /// Fails with [`DbError::NonExistentEntry`](crate::DbError::NonExistentEntry)
    /// if there is no record, or with
    /// [`DbError::UnexpectedStatus`](crate::DbError::UnexpectedStatus) if the
    /// stored status is not `from`.
    fn update_batch_status(
        &self,
        addr: BatchAddress,
        from: BatchStatus,
        to: BatchStatus,
        event: RollupEvent,
    ) -> DbResult<(BatchRecord, u64)>;

    /// Gets the highest batch number stored under `namespace`, if any. This is
    /// a convenience index for tooling.
    fn get_last_batch_number(&self, namespace: ChainNamespace) -> DbResult<Option<u64>>;
}

/// Read access to the append-only event log.
pub trait RollupEventDatabase: Send + Sync + 'static {
    /// Gets the event at `idx`.
    fn get_event(&self, idx: u64) -> DbResult<Option<RollupEvent>>;

    /// Gets the index of the most recent event, if any.
    fn get_last_event_idx(&self) -> DbResult<Option<u64>>;

    /// Returns events with indices in the half-open range `start..end`, in order.
    fn get_events_range(&self, start: u64, end: u64) -> DbResult<Vec<(u64, RollupEvent)>>;
}
