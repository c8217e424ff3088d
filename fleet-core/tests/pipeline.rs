mod support;

use chrono::NaiveDate;
use fleet_config::shared::PipelineConfig;
use fleet_core::destination::{MemoryDestination, RecordSet};
use fleet_core::pipeline::Pipeline;
use fleet_core::store::MemorySnapshotStore;
use fleet_telemetry::tracing::init_test_tracing;

use crate::support::{FailingDestination, FixedSource, full_line, new_batch, snapshot_text};

fn run_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 4).unwrap()
}

fn yesterday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 3).unwrap()
}

fn config_with_words(words: &[&str]) -> PipelineConfig {
    PipelineConfig {
        color_words: words.iter().map(|word| word.to_string()).collect(),
        ..Default::default()
    }
}

#[tokio::test]
async fn pipeline_reconciles_full_scenario() {
    init_test_tracing();

    // 25-line snapshot: header, 22 data lines, 2 trailing error rows.
    let store = MemorySnapshotStore::new();
    store.insert(yesterday(), snapshot_text(22)).await;

    let destination = MemoryDestination::new();
    let source = FixedSource::new(new_batch(10, 2));

    let mut pipeline = Pipeline::new(
        config_with_words(&["orange"]),
        source,
        store.clone(),
        destination.clone(),
    )
    .unwrap();

    let report = pipeline.run(run_date()).await.unwrap();

    assert_eq!(report.defleet, 10);
    assert_eq!(report.updates, 10);
    assert_eq!(report.errors, 2);
    assert_eq!(report.infleet, 10);
    assert_eq!(report.fleet, 10);
    assert_eq!(report.history, 20);
    assert_eq!(report.snapshot_records, 24);

    // Defleet takes the last 10 of the 22 usable tail records.
    let defleet = destination.document_for(RecordSet::Defleet).await.unwrap();
    assert_eq!(defleet.count, 10);
    assert_eq!(defleet.records[0]["plate_number"], "PLT0012");
    assert_eq!(defleet.records[9]["plate_number"], "PLT0021");

    // Updates take the last 10 of the remaining 12, with the color override.
    let updates = destination.document_for(RecordSet::Updates).await.unwrap();
    assert_eq!(updates.records[0]["plate_number"], "PLT0002");
    assert_eq!(updates.records[9]["plate_number"], "PLT0011");
    for record in updates.records.as_array().unwrap() {
        assert_eq!(record["color"], "orange");
    }

    // Errors are the trailing window of the new batch, full schema.
    let errors = destination.document_for(RecordSet::Errors).await.unwrap();
    assert_eq!(errors.records[0]["plate_number"], "BAD0000");
    assert_eq!(errors.records[1]["plate_number"], "BAD0001");
    assert_eq!(errors.records[1]["email"], "");

    // History is arrivals first, then updates.
    let history = destination.document_for(RecordSet::History).await.unwrap();
    assert_eq!(history.records[0]["plate_number"], "NEW0000");
    assert_eq!(history.records[10]["plate_number"], "PLT0002");

    // The merged snapshot carries the override and the new batch verbatim.
    let snapshots = store.snapshots().await;
    let merged = snapshots.get(&run_date()).unwrap();
    let lines: Vec<&str> = merged.lines().collect();
    assert_eq!(lines.len(), 25);
    assert_eq!(lines[0], "24");
    assert!(lines[1].contains("|blue|"));
    assert!(lines[2].contains("|blue|"));
    assert!(lines[3].contains("|orange|"));
    assert!(lines[12].contains("|orange|"));
    assert_eq!(lines[13], full_line("NEW", 0));
    assert_eq!(lines[24], support::short_line("BAD", 1));
}

#[tokio::test]
async fn pipeline_bootstraps_from_absent_snapshot() {
    init_test_tracing();

    let store = MemorySnapshotStore::new();
    let destination = MemoryDestination::new();
    let source = FixedSource::new(new_batch(3, 2));

    let mut pipeline = Pipeline::new(
        config_with_words(&["orange"]),
        source,
        store.clone(),
        destination.clone(),
    )
    .unwrap();

    let report = pipeline.run(run_date()).await.unwrap();

    assert_eq!(report.defleet, 0);
    assert_eq!(report.updates, 0);
    assert_eq!(report.errors, 2);
    assert_eq!(report.infleet, 3);
    assert_eq!(report.history, 3);
    assert_eq!(report.snapshot_records, 5);

    let snapshots = store.snapshots().await;
    let merged = snapshots.get(&run_date()).unwrap();
    assert!(merged.starts_with("5\n"));
}

#[tokio::test]
async fn pipeline_handles_empty_batch_and_empty_snapshot() {
    init_test_tracing();

    let store = MemorySnapshotStore::new();
    let destination = MemoryDestination::new();
    let source = FixedSource::new(vec![]);

    let mut pipeline = Pipeline::new(
        config_with_words(&["orange"]),
        source,
        store.clone(),
        destination.clone(),
    )
    .unwrap();

    let report = pipeline.run(run_date()).await.unwrap();

    assert_eq!(report.errors, 0);
    assert_eq!(report.infleet, 0);
    assert_eq!(report.snapshot_records, 0);

    // Every record set is still emitted, empty.
    let documents = destination.documents().await;
    assert_eq!(documents.len(), RecordSet::ALL.len());
    assert!(documents.iter().all(|document| document.count == 0));

    let snapshots = store.snapshots().await;
    assert_eq!(snapshots.get(&run_date()).unwrap(), "0\n");
}

#[tokio::test]
async fn pipeline_short_tail_feeds_whole_tail_to_updates() {
    init_test_tracing();

    // 8 usable records: below the defleet threshold.
    let store = MemorySnapshotStore::new();
    store.insert(yesterday(), snapshot_text(8)).await;

    let destination = MemoryDestination::new();
    let source = FixedSource::new(new_batch(4, 2));

    let mut pipeline = Pipeline::new(
        config_with_words(&["orange"]),
        source,
        store.clone(),
        destination.clone(),
    )
    .unwrap();

    let report = pipeline.run(run_date()).await.unwrap();

    assert_eq!(report.defleet, 0);
    assert_eq!(report.updates, 8);
    assert_eq!(report.snapshot_records, 8 + 6);
}

#[tokio::test]
async fn pipeline_cycles_color_words_by_position() {
    init_test_tracing();

    let store = MemorySnapshotStore::new();
    store.insert(yesterday(), snapshot_text(19)).await;

    let destination = MemoryDestination::new();
    let source = FixedSource::new(new_batch(2, 2));

    let mut pipeline = Pipeline::new(
        config_with_words(&["red", "green", "blue"]),
        source,
        store.clone(),
        destination.clone(),
    )
    .unwrap();

    pipeline.run(run_date()).await.unwrap();

    let updates = destination.document_for(RecordSet::Updates).await.unwrap();
    let records = updates.records.as_array().unwrap();
    assert_eq!(records.len(), 9);
    for (position, record) in records.iter().enumerate() {
        let expected = ["red", "green", "blue"][position % 3];
        assert_eq!(record["color"], expected);
    }
}

#[tokio::test]
async fn pipeline_drops_first_line_of_headerless_snapshot() {
    init_test_tracing();

    // Snapshot written without a count header: the partitioner still treats
    // the first line as one and the first data record is lost.
    let mut headerless = String::new();
    for i in 0..6 {
        headerless.push_str(&full_line("PLT", i));
        headerless.push('\n');
    }

    let store = MemorySnapshotStore::new();
    store.insert(yesterday(), headerless).await;

    let destination = MemoryDestination::new();
    let source = FixedSource::new(vec![]);

    let mut pipeline = Pipeline::new(
        config_with_words(&["orange"]),
        source,
        store.clone(),
        destination.clone(),
    )
    .unwrap();

    pipeline.run(run_date()).await.unwrap();

    let snapshots = store.snapshots().await;
    let merged = snapshots.get(&run_date()).unwrap();
    assert!(!merged.contains("PLT0000"));
    // Lines 1..=4 survive the header strip, 5 and 6 fall to the trailing
    // error strip, leaving three records.
    assert!(merged.starts_with("3\n"));
    assert!(merged.contains("PLT0001"));
    assert!(merged.contains("PLT0003"));
    assert!(!merged.contains("PLT0004"));
}

#[tokio::test]
async fn pipeline_is_idempotent_with_frozen_inputs() {
    init_test_tracing();

    let mut merged = Vec::new();
    for _ in 0..2 {
        let store = MemorySnapshotStore::new();
        store.insert(yesterday(), snapshot_text(22)).await;
        let destination = MemoryDestination::new();
        let source = FixedSource::new(new_batch(10, 2));

        let mut pipeline = Pipeline::new(
            config_with_words(&["orange"]),
            source,
            store.clone(),
            destination,
        )
        .unwrap();
        pipeline.run(run_date()).await.unwrap();

        let snapshots = store.snapshots().await;
        merged.push(snapshots.get(&run_date()).unwrap().clone());
    }

    assert_eq!(merged[0], merged[1]);
}

#[tokio::test]
async fn failed_emission_leaves_previous_snapshot_untouched() {
    init_test_tracing();

    let store = MemorySnapshotStore::new();
    store.insert(yesterday(), snapshot_text(22)).await;

    let source = FixedSource::new(new_batch(10, 2));

    let mut pipeline = Pipeline::new(
        config_with_words(&["orange"]),
        source,
        store.clone(),
        FailingDestination,
    )
    .unwrap();

    let result = pipeline.run(run_date()).await;
    assert!(result.is_err());

    let snapshots = store.snapshots().await;
    assert_eq!(snapshots.len(), 1);
    assert!(snapshots.contains_key(&yesterday()));
}

#[tokio::test]
async fn documents_are_tagged_with_the_run_date() {
    init_test_tracing();

    let store = MemorySnapshotStore::new();
    let destination = MemoryDestination::new();
    let source = FixedSource::new(new_batch(2, 2));

    let mut pipeline = Pipeline::new(
        config_with_words(&["orange"]),
        source,
        store,
        destination.clone(),
    )
    .unwrap();

    pipeline.run(run_date()).await.unwrap();

    let documents = destination.documents().await;
    assert!(documents.iter().all(|document| document.tag == "20260804"));
}

#[tokio::test]
async fn pipeline_rejects_empty_color_word_list() {
    init_test_tracing();

    let result = Pipeline::new(
        config_with_words(&[]),
        FixedSource::new(vec![]),
        MemorySnapshotStore::new(),
        MemoryDestination::new(),
    );

    assert!(result.is_err());
}
