use rollup_checkpoint_types::{
    BatchAddress, BatchRecord, BatchStatus, ChainNamespace, RollupEvent, ValidatorId,
};
use rollup_db_types::{
    traits::{BatchRecordDatabase, RollupEventDatabase},
    DbError,
};
use rollup_test_utils::{
    fixtures::{leaf, linked_record, test_namespace},
    ArbitraryGenerator,
};

fn fraud_event(record: &BatchRecord, challenger: ValidatorId) -> RollupEvent {
    RollupEvent::FraudConfirmed {
        batch_number: record.batch_number(),
        validator: *record.validator(),
        committed_leaf: *record.leaf(),
        asserted_leaf: leaf(0xee),
        challenger,
        committed_at: record.committed_at(),
        disputed_at: record.committed_at() + 1,
    }
}

pub fn test_put_and_get_record(db: &(impl BatchRecordDatabase + RollupEventDatabase)) {
    let mut ag = ArbitraryGenerator::new();
    let ns = test_namespace();
    let (addr, record, event) = linked_record(&ns, 0, leaf(1), ag.generate(), 100);

    let idx = db
        .put_new_batch_record(ns, addr, record.clone(), event.clone())
        .expect("test: put");
    assert_eq!(idx, 0);

    let stored = db
        .get_batch_record(addr)
        .expect("test: get")
        .expect("test: get missing");
    assert_eq!(stored, record);
    assert_eq!(db.get_event(idx).expect("test: get event"), Some(event));
}

pub fn test_get_missing_record(db: &impl BatchRecordDatabase) {
    let addr = BatchAddress::derive(&test_namespace(), 7);
    assert_eq!(db.get_batch_record(addr).expect("test: get"), None);
    assert_eq!(
        db.get_last_batch_number(test_namespace())
            .expect("test: last"),
        None
    );
}

pub fn test_put_duplicate_fails(db: &(impl BatchRecordDatabase + RollupEventDatabase)) {
    let mut ag = ArbitraryGenerator::new();
    let ns = test_namespace();
    let (addr, first, event) = linked_record(&ns, 0, leaf(1), ag.generate(), 100);
    db.put_new_batch_record(ns, addr, first.clone(), event)
        .expect("test: put");

    let (_, second, event2) = linked_record(&ns, 0, leaf(2), ag.generate(), 200);
    let err = db
        .put_new_batch_record(ns, addr, second, event2)
        .expect_err("test: passed unexpectedly");
    assert_eq!(err, DbError::EntryAlreadyExists);

    // Neither the record nor the log changed.
    assert_eq!(db.get_batch_record(addr).expect("test: get"), Some(first));
    assert_eq!(db.get_last_event_idx().expect("test: last event"), Some(0));
}

pub fn test_update_status(db: &(impl BatchRecordDatabase + RollupEventDatabase)) {
    let mut ag = ArbitraryGenerator::new();
    let ns = test_namespace();
    let (addr, record, event) = linked_record(&ns, 0, leaf(1), ag.generate(), 100);
    db.put_new_batch_record(ns, addr, record.clone(), event)
        .expect("test: put");

    let fraud = fraud_event(&record, ag.generate());
    let (updated, idx) = db
        .update_batch_status(
            addr,
            BatchStatus::Committed,
            BatchStatus::Disputed,
            fraud.clone(),
        )
        .expect("test: update");
    assert_eq!(idx, 1);
    assert_eq!(updated, record.clone().with_status(BatchStatus::Disputed));
    assert_eq!(
        db.get_batch_record(addr).expect("test: get"),
        Some(updated)
    );
    assert_eq!(db.get_event(1).expect("test: get event"), Some(fraud));
}

pub fn test_update_status_unexpected(db: &(impl BatchRecordDatabase + RollupEventDatabase)) {
    let mut ag = ArbitraryGenerator::new();
    let ns = test_namespace();
    let (addr, record, event) = linked_record(&ns, 0, leaf(1), ag.generate(), 100);
    db.put_new_batch_record(ns, addr, record.clone(), event)
        .expect("test: put");

    let fraud = fraud_event(&record, ag.generate());
    db.update_batch_status(
        addr,
        BatchStatus::Committed,
        BatchStatus::Disputed,
        fraud.clone(),
    )
    .expect("test: first update");

    let err = db
        .update_batch_status(addr, BatchStatus::Committed, BatchStatus::Disputed, fraud)
        .expect_err("test: passed unexpectedly");
    assert_eq!(
        err,
        DbError::UnexpectedStatus {
            expected: BatchStatus::Committed,
            found: BatchStatus::Disputed,
        }
    );
    assert_eq!(db.get_last_event_idx().expect("test: last event"), Some(1));
}

pub fn test_update_status_missing(db: &(impl BatchRecordDatabase + RollupEventDatabase)) {
    let mut ag = ArbitraryGenerator::new();
    let ns = test_namespace();
    let (addr, record, _) = linked_record(&ns, 3, leaf(1), ag.generate(), 100);

    let err = db
        .update_batch_status(
            addr,
            BatchStatus::Committed,
            BatchStatus::Disputed,
            fraud_event(&record, ag.generate()),
        )
        .expect_err("test: passed unexpectedly");
    assert_eq!(err, DbError::NonExistentEntry);
    assert_eq!(db.get_last_event_idx().expect("test: last event"), None);
}

pub fn test_event_log_is_gapless(db: &(impl BatchRecordDatabase + RollupEventDatabase)) {
    let mut ag = ArbitraryGenerator::new();
    let ns = test_namespace();
    assert_eq!(db.get_last_event_idx().expect("test: last event"), None);

    let mut expected = Vec::new();
    for n in 0..5u64 {
        let (addr, record, event) = linked_record(&ns, n, leaf(n as u8), ag.generate(), n * 10);
        let idx = db
            .put_new_batch_record(ns, addr, record, event.clone())
            .expect("test: put");
        assert_eq!(idx, n);
        expected.push((n, event));
    }

    assert_eq!(db.get_last_event_idx().expect("test: last event"), Some(4));
    assert_eq!(
        db.get_events_range(0, 5).expect("test: range"),
        expected
    );
    assert_eq!(
        db.get_events_range(1, 3).expect("test: range"),
        expected[1..3].to_vec()
    );
    assert!(db.get_events_range(3, 3).expect("test: range").is_empty());
    assert!(db.get_events_range(4, 2).expect("test: range").is_empty());
}

pub fn test_batch_index(db: &(impl BatchRecordDatabase + RollupEventDatabase)) {
    let mut ag = ArbitraryGenerator::new();
    let ns = test_namespace();
    assert_eq!(db.get_last_batch_number(ns).expect("test: last"), None);

    // Index ordering must be numeric, including across byte boundaries.
    for n in [0u64, 1, 255, 256] {
        let (addr, record, event) = linked_record(&ns, n, leaf(1), ag.generate(), 0);
        db.put_new_batch_record(ns, addr, record, event)
            .expect("test: put");
        assert_eq!(db.get_last_batch_number(ns).expect("test: last"), Some(n));
    }
}

pub fn test_batch_index_per_namespace(db: &(impl BatchRecordDatabase + RollupEventDatabase)) {
    let mut ag = ArbitraryGenerator::new();
    let ns_a = ChainNamespace::new(leaf(0xa1));
    let ns_b = ChainNamespace::new(leaf(0xb2));

    let mut a_addrs = Vec::new();
    for n in 0..=3u64 {
        let (addr, record, event) = linked_record(&ns_a, n, leaf(n as u8), ag.generate(), n);
        db.put_new_batch_record(ns_a, addr, record, event)
            .expect("test: put a");
        a_addrs.push(addr);
    }
    assert_eq!(db.get_last_batch_number(ns_b).expect("test: last b"), None);

    let (b_addr, b_record, event) = linked_record(&ns_b, 0, leaf(0xbb), ag.generate(), 10);
    db.put_new_batch_record(ns_b, b_addr, b_record.clone(), event)
        .expect("test: put b");

    assert_eq!(db.get_last_batch_number(ns_a).expect("test: last a"), Some(3));
    assert_eq!(db.get_last_batch_number(ns_b).expect("test: last b"), Some(0));

    // Batch 0 of each chain lives at its own address.
    assert_ne!(a_addrs[0], b_addr);
    assert_eq!(db.get_batch_record(b_addr).expect("test: get b"), Some(b_record));
    let a0 = db
        .get_batch_record(a_addrs[0])
        .expect("test: get a")
        .expect("test: a0 missing");
    assert_eq!(a0.leaf(), &leaf(0));
}

pub fn test_arbitrary_record(db: &(impl BatchRecordDatabase + RollupEventDatabase)) {
    let mut ag = ArbitraryGenerator::new();
    let record: BatchRecord = ag.generate();
    let event: RollupEvent = ag.generate();
    let ns: ChainNamespace = ag.generate();
    let addr = BatchAddress::derive(&ns, record.batch_number());

    db.put_new_batch_record(ns, addr, record.clone(), event.clone())
        .expect("test: put");
    assert_eq!(db.get_batch_record(addr).expect("test: get"), Some(record));
    assert_eq!(db.get_event(0).expect("test: get event"), Some(event));
}

#[macro_export]
macro_rules! rollup_db_tests {
    ($setup_expr:expr) => {
        #[test]
        fn test_put_and_get_record() {
            let db = $setup_expr;
            $crate::batch_tests::test_put_and_get_record(&db);
        }

        #[test]
        fn test_get_missing_record() {
            let db = $setup_expr;
            $crate::batch_tests::test_get_missing_record(&db);
        }

        #[test]
        fn test_put_duplicate_fails() {
            let db = $setup_expr;
            $crate::batch_tests::test_put_duplicate_fails(&db);
        }

        #[test]
        fn test_update_status() {
            let db = $setup_expr;
            $crate::batch_tests::test_update_status(&db);
        }

        #[test]
        fn test_update_status_unexpected() {
            let db = $setup_expr;
            $crate::batch_tests::test_update_status_unexpected(&db);
        }

        #[test]
        fn test_update_status_missing() {
            let db = $setup_expr;
            $crate::batch_tests::test_update_status_missing(&db);
        }

        #[test]
        fn test_event_log_is_gapless() {
            let db = $setup_expr;
            $crate::batch_tests::test_event_log_is_gapless(&db);
        }

        #[test]
        fn test_batch_index() {
            let db = $setup_expr;
            $crate::batch_tests::test_batch_index(&db);
        }

        #[test]
        fn test_batch_index_per_namespace() {
            let db = $setup_expr;
            $crate::batch_tests::test_batch_index_per_namespace(&db);
        }

        #[test]
        fn test_arbitrary_record() {
            let db = $setup_expr;
            $crate::batch_tests::test_arbitrary_record(&db);
        }
    };
}
