//! The reconciliation engine.
//!
//! Orchestrates one daily run: fetch the new batch and yesterday's snapshot,
//! partition, transform, classify, compose the history set and the merged
//! snapshot, then emit the six record sets and persist the snapshot. Every
//! step runs even when its input is empty; empty in means empty out. All
//! computation completes before the first emission, and the merged snapshot
//! is persisted last, so a failed run leaves the previous snapshot untouched.

use std::sync::Arc;

use chrono::NaiveDate;
use fleet_config::shared::PipelineConfig;
use tracing::info;

use crate::classify::{classify_new_batch, compose_history};
use crate::codec;
use crate::destination::{Destination, RecordSet, RecordSetDocument};
use crate::error::{ErrorKind, FleetResult};
use crate::fleet_error;
use crate::snapshot::{PartitionedSnapshot, partition_snapshot};
use crate::source::RecordSource;
use crate::store::SnapshotStore;
use crate::transform::apply_update_overrides;
use crate::types::{FlatRecord, FleetKey, FullRecord, VehicleRecord};

/// Date format used for the run tag on emitted documents.
const RUN_TAG_FORMAT: &str = "%Y%m%d";

/// Everything a run produces, computed in full before emission.
#[derive(Debug)]
struct RunOutputs {
    defleet_records: Vec<VehicleRecord>,
    update_records: Vec<VehicleRecord>,
    error_records: Vec<FullRecord>,
    infleet_records: Vec<VehicleRecord>,
    fleet_records: Vec<FleetKey>,
    history_records: Vec<VehicleRecord>,
    merged_snapshot: String,
    snapshot_records: usize,
}

/// Per-set record counts of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub run_date: NaiveDate,
    pub defleet: usize,
    pub updates: usize,
    pub errors: usize,
    pub infleet: usize,
    pub fleet: usize,
    pub history: usize,
    /// Number of data lines in the persisted merged snapshot.
    pub snapshot_records: usize,
}

/// The reconciliation pipeline, generic over its three collaborators.
#[derive(Debug)]
pub struct Pipeline<R, S, D> {
    config: Arc<PipelineConfig>,
    source: R,
    store: S,
    destination: D,
}

impl<R, S, D> Pipeline<R, S, D>
where
    R: RecordSource,
    S: SnapshotStore,
    D: Destination,
{
    /// Creates a pipeline after validating its configuration.
    pub fn new(config: PipelineConfig, source: R, store: S, destination: D) -> FleetResult<Self> {
        config.validate().map_err(|err| {
            fleet_error!(
                ErrorKind::ConfigError,
                "Invalid pipeline configuration",
                detail = err.to_string(),
                source: err
            )
        })?;

        Ok(Self {
            config: Arc::new(config),
            source,
            store,
            destination,
        })
    }

    /// Executes one reconciliation run for the given date.
    ///
    /// Emits the six categorized record sets tagged with the run date and
    /// persists the merged snapshot, which becomes "yesterday" for the next
    /// run.
    pub async fn run(&mut self, run_date: NaiveDate) -> FleetResult<RunReport> {
        info!("starting reconciliation run for {run_date}");

        let outputs = self.reconcile(run_date).await?;

        let report = RunReport {
            run_date,
            defleet: outputs.defleet_records.len(),
            updates: outputs.update_records.len(),
            errors: outputs.error_records.len(),
            infleet: outputs.infleet_records.len(),
            fleet: outputs.fleet_records.len(),
            history: outputs.history_records.len(),
            snapshot_records: outputs.snapshot_records,
        };

        self.emit(run_date, outputs).await?;

        info!(
            "completed reconciliation run for {run_date}: {} infleet, {} defleet, {} updates",
            report.infleet, report.defleet, report.updates
        );

        Ok(report)
    }

    /// Computes all record sets and the merged snapshot without emitting
    /// anything.
    async fn reconcile(&self, run_date: NaiveDate) -> FleetResult<RunOutputs> {
        let new_lines = self
            .source
            .fetch_batch(self.config.batch.new_records)
            .await?;
        let prior_snapshot = self.store.fetch_latest(run_date).await?;

        let PartitionedSnapshot {
            defleet_records,
            mut tail,
        } = partition_snapshot(prior_snapshot.as_deref());

        let update_records = apply_update_overrides(&mut tail, &self.config.color_words)?;

        let classified = classify_new_batch(&new_lines);
        let history_records = compose_history(&classified.infleet_records, &update_records);

        let snapshot_records = tail.len() + new_lines.len();
        let merged_snapshot = render_merged_snapshot(&tail, &new_lines);

        Ok(RunOutputs {
            defleet_records: defleet_records.iter().map(VehicleRecord::project).collect(),
            update_records,
            error_records: classified.error_records,
            infleet_records: classified.infleet_records,
            fleet_records: classified.fleet_records,
            history_records,
            merged_snapshot,
            snapshot_records,
        })
    }

    /// Emits the record sets and then persists the merged snapshot.
    async fn emit(&self, run_date: NaiveDate, outputs: RunOutputs) -> FleetResult<()> {
        let tag = run_date.format(RUN_TAG_FORMAT).to_string();

        for record_set in RecordSet::ALL {
            let document = match record_set {
                RecordSet::Errors => {
                    RecordSetDocument::new(record_set, tag.clone(), &outputs.error_records)?
                }
                RecordSet::Infleet => {
                    RecordSetDocument::new(record_set, tag.clone(), &outputs.infleet_records)?
                }
                RecordSet::Fleet => {
                    RecordSetDocument::new(record_set, tag.clone(), &outputs.fleet_records)?
                }
                RecordSet::Defleet => {
                    RecordSetDocument::new(record_set, tag.clone(), &outputs.defleet_records)?
                }
                RecordSet::Updates => {
                    RecordSetDocument::new(record_set, tag.clone(), &outputs.update_records)?
                }
                RecordSet::History => {
                    RecordSetDocument::new(record_set, tag.clone(), &outputs.history_records)?
                }
            };

            self.destination.write_record_set(document).await?;
        }

        self.store.persist(run_date, &outputs.merged_snapshot).await
    }
}

/// Renders the merged snapshot: count header, mutated tail, then the new
/// batch verbatim.
fn render_merged_snapshot(tail: &[FlatRecord], new_lines: &[String]) -> String {
    let mut out = String::new();
    out.push_str(&(tail.len() + new_lines.len()).to_string());
    out.push('\n');

    for record in tail {
        out.push_str(&codec::encode(record));
        out.push('\n');
    }
    for line in new_lines {
        out.push_str(line);
        out.push('\n');
    }

    out
}
