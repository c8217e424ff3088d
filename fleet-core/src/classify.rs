//! New-batch classification.
//!
//! The freshly generated batch is split by a trailing-window rule: the last
//! two lines are the run's anomalous records, everything before them joins
//! the fleet. Classification is positional only; line content is never
//! inspected.

use tracing::info;

use crate::codec;
use crate::types::{FleetKey, FullRecord, VehicleRecord};

/// Number of trailing new-batch lines classified as error records.
pub const NEW_BATCH_ERROR_ROWS: usize = 2;

/// The record sets produced by classifying a new batch.
#[derive(Debug, Default)]
pub struct ClassifiedBatch {
    /// The trailing malformed/incomplete entries, full-schema projection.
    pub error_records: Vec<FullRecord>,
    /// Today's arrivals, vehicle-schema projection.
    pub infleet_records: Vec<VehicleRecord>,
    /// The arrivals reduced to plate number and plate state.
    pub fleet_records: Vec<FleetKey>,
}

/// Classifies the new batch into error, infleet, and fleet record sets.
///
/// A batch with fewer than [`NEW_BATCH_ERROR_ROWS`] lines yields that many
/// error records and no arrivals; an empty batch yields empty sets.
pub fn classify_new_batch(lines: &[String]) -> ClassifiedBatch {
    let split = lines.len().saturating_sub(NEW_BATCH_ERROR_ROWS);

    let error_records = lines[split..]
        .iter()
        .map(|line| FullRecord::project(&codec::decode(line)))
        .collect::<Vec<_>>();

    let infleet_records = lines[..split]
        .iter()
        .map(|line| VehicleRecord::project(&codec::decode(line)))
        .collect::<Vec<_>>();

    let fleet_records = infleet_records
        .iter()
        .map(FleetKey::from_vehicle)
        .collect::<Vec<_>>();

    info!(
        "classified new batch into {} infleet and {} error records",
        infleet_records.len(),
        error_records.len()
    );

    ClassifiedBatch {
        error_records,
        infleet_records,
        fleet_records,
    }
}

/// Composes the history set: today's arrivals first, then the carried-over
/// updates, in that order.
pub fn compose_history(
    infleet_records: &[VehicleRecord],
    update_records: &[VehicleRecord],
) -> Vec<VehicleRecord> {
    infleet_records
        .iter()
        .chain(update_records.iter())
        .cloned()
        .collect()
}
