use chrono::NaiveDate;
use fleet_config::shared::ReconcilerConfig;
use fleet_core::destination::FsDestination;
use fleet_core::pipeline::Pipeline;
use fleet_core::source::SyntheticSource;
use fleet_core::store::FsSnapshotStore;
use tracing::info;

use crate::error::ReconcilerResult;

/// Runs one reconciliation with the provided configuration.
///
/// Wires the filesystem snapshot store and destination together with the
/// synthetic record source, then executes the pipeline for the given date.
pub async fn run_reconciler_with_config(
    config: ReconcilerConfig,
    run_date: NaiveDate,
    seed: Option<u64>,
) -> ReconcilerResult<()> {
    info!(
        "starting reconciler for {run_date} with a batch of {} records",
        config.pipeline.batch.new_records
    );

    let source = match seed {
        Some(seed) => SyntheticSource::with_seed(seed),
        None => SyntheticSource::new(),
    };
    let store = FsSnapshotStore::new(
        config.snapshots.root_dir.clone(),
        config.snapshots.file_prefix.clone(),
    );
    let destination = FsDestination::new(config.output.root_dir.clone());

    let mut pipeline = Pipeline::new(config.pipeline, source, store, destination)?;
    let report = pipeline.run(run_date).await?;

    info!(
        infleet = report.infleet,
        defleet = report.defleet,
        updates = report.updates,
        errors = report.errors,
        history = report.history,
        snapshot_records = report.snapshot_records,
        "reconciliation run completed"
    );

    Ok(())
}
