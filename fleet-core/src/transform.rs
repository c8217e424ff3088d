//! Update-batch derivation.
//!
//! The update batch is carved from the end of the working tail, with the
//! color field overridden by cycling through a fixed word list. The override
//! is applied to the tail records in place, so the merged snapshot and the
//! emitted update batch always agree on the new colors.

use tracing::info;

use crate::bail;
use crate::error::{ErrorKind, FleetResult};
use crate::schema::columns;
use crate::types::{FlatRecord, VehicleRecord};

/// Number of tail records taken into the update batch.
pub const UPDATE_BATCH_SIZE: usize = 10;

/// Overrides the color of the last [`UPDATE_BATCH_SIZE`] tail records and
/// returns their vehicle-schema projections.
///
/// When the tail holds fewer records, all of them are taken. The color of the
/// record at position `i` within the batch becomes
/// `color_words[i % color_words.len()]`; a single-word list paints the whole
/// batch the same color.
pub fn apply_update_overrides(
    tail: &mut [FlatRecord],
    color_words: &[String],
) -> FleetResult<Vec<VehicleRecord>> {
    if color_words.is_empty() {
        bail!(
            ErrorKind::ConfigError,
            "Color word list is empty",
            "the update transformer requires at least one override word"
        );
    }

    let take = tail.len().min(UPDATE_BATCH_SIZE);
    let start = tail.len() - take;

    let mut update_records = Vec::with_capacity(take);
    for (position, record) in tail[start..].iter_mut().enumerate() {
        let color = &color_words[position % color_words.len()];
        record.set_field(columns::COLOR, color.clone());
        update_records.push(VehicleRecord::project(record));
    }

    info!("derived update batch of {} records", update_records.len());

    Ok(update_records)
}
