use rollup_checkpoint_types::{BatchAddress, BatchRecord, ChainNamespace, RollupEvent};

define_table!(
    /// A table to store derived address -> `BatchRecord` mapping
    (BatchRecordSchema) BatchAddress => BatchRecord
);

define_table!(
    /// Index of (namespace, batch number) -> derived address, for tooling
    (BatchIndexSchema) (ChainNamespace, u64) => BatchAddress
);

define_table!(
    /// Append-only event log, keyed by sequence index
    (RollupEventSchema) u64 => RollupEvent
);

define_table!(
    /// Monotonic counters, one per key
    (SequenceSchema) u8 => u64
);
