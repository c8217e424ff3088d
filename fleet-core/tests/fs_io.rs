use chrono::NaiveDate;
use fleet_core::destination::{Destination, FsDestination, RecordSet, RecordSetDocument};
use fleet_core::store::{FsSnapshotStore, SnapshotStore};
use fleet_core::types::VehicleRecord;
use fleet_telemetry::tracing::init_test_tracing;

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, day).unwrap()
}

#[tokio::test]
async fn fs_snapshot_store_round_trips_by_date() {
    init_test_tracing();

    let dir = tempfile::tempdir().unwrap();
    let store = FsSnapshotStore::new(dir.path(), "fleet");

    store.persist(date(1), "1\nPLT0000|CA\n").await.unwrap();
    store.persist(date(3), "1\nPLT0001|CA\n").await.unwrap();

    // Strictly before: the run dated the 3rd sees the snapshot from the 1st.
    let found = store.fetch_latest(date(3)).await.unwrap();
    assert_eq!(found.as_deref(), Some("1\nPLT0000|CA\n"));

    let found = store.fetch_latest(date(4)).await.unwrap();
    assert_eq!(found.as_deref(), Some("1\nPLT0001|CA\n"));

    let found = store.fetch_latest(date(1)).await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn fs_snapshot_store_ignores_foreign_files() {
    init_test_tracing();

    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("notes.txt"), "not a snapshot").unwrap();
    std::fs::write(dir.path().join("fleet-notadate.txt"), "2\n").unwrap();
    std::fs::write(dir.path().join("other-20260801.txt"), "2\n").unwrap();

    let store = FsSnapshotStore::new(dir.path(), "fleet");
    let found = store.fetch_latest(date(4)).await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn fs_snapshot_store_missing_directory_bootstraps_empty() {
    init_test_tracing();

    let dir = tempfile::tempdir().unwrap();
    let store = FsSnapshotStore::new(dir.path().join("never-created"), "fleet");
    let found = store.fetch_latest(date(4)).await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn fs_destination_writes_record_set_documents() {
    init_test_tracing();

    let dir = tempfile::tempdir().unwrap();
    let destination = FsDestination::new(dir.path());

    let records = vec![VehicleRecord {
        plate_number: "AAA1111".to_string(),
        plate_state: "CA".to_string(),
        year: "2020".to_string(),
        make: "Ford".to_string(),
        model: "F-150".to_string(),
        color: "orange".to_string(),
        vin: "VIN00000000000001".to_string(),
    }];
    let document = RecordSetDocument::new(RecordSet::Updates, "20260804", &records).unwrap();

    destination.write_record_set(document).await.unwrap();

    let written = std::fs::read_to_string(dir.path().join("updates-20260804.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(parsed["record_set"], "updates");
    assert_eq!(parsed["tag"], "20260804");
    assert_eq!(parsed["count"], 1);
    assert_eq!(parsed["records"][0]["plate_number"], "AAA1111");
    assert_eq!(parsed["records"][0]["color"], "orange");
}
