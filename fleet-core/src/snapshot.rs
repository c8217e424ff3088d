//! Snapshot partitioning.
//!
//! A loaded snapshot is split into the defleet batch and the working tail
//! that feeds the update transformer. The first line of a snapshot is always
//! treated as the count header and discarded, even when the file was written
//! without one; a headerless snapshot therefore loses its first data line.
//! This matches the persisted format and is covered by tests rather than
//! papered over.

use tracing::info;

use crate::codec;
use crate::types::FlatRecord;

/// Number of records carved off the end of the tail as the defleet batch.
pub const DEFLEET_BATCH_SIZE: usize = 10;

/// Number of trailing lines treated as the previous run's error rows.
pub const TRAILING_ERROR_ROWS: usize = 2;

/// Result of carving a snapshot into its reconciliation inputs.
#[derive(Debug, Default)]
pub struct PartitionedSnapshot {
    /// The last [`DEFLEET_BATCH_SIZE`] records of the stripped snapshot, or
    /// empty when fewer were available.
    pub defleet_records: Vec<FlatRecord>,
    /// The working tail remaining after defleet removal.
    pub tail: Vec<FlatRecord>,
}

/// Partitions raw snapshot text into the defleet batch and working tail.
///
/// An absent snapshot yields the empty-system bootstrap: both parts empty,
/// never an error. Steps, in order:
///
/// 1. Split into non-empty, whitespace-trimmed lines.
/// 2. Discard the first line unconditionally (the count header).
/// 3. Discard the last [`TRAILING_ERROR_ROWS`] lines when at least that many
///    remain (the previous run's error rows).
/// 4. Remove the last [`DEFLEET_BATCH_SIZE`] records as the defleet batch
///    when at least that many remain; otherwise the batch is empty and
///    nothing is removed.
pub fn partition_snapshot(raw: Option<&str>) -> PartitionedSnapshot {
    let Some(raw) = raw else {
        info!("no prior snapshot found, starting from an empty tail");
        return PartitionedSnapshot::default();
    };

    let mut lines: Vec<&str> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if !lines.is_empty() {
        lines.remove(0);
    }

    if lines.len() >= TRAILING_ERROR_ROWS {
        lines.truncate(lines.len() - TRAILING_ERROR_ROWS);
    }

    let mut tail: Vec<FlatRecord> = lines.into_iter().map(codec::decode).collect();

    let defleet_records = if tail.len() >= DEFLEET_BATCH_SIZE {
        tail.split_off(tail.len() - DEFLEET_BATCH_SIZE)
    } else {
        Vec::new()
    };

    info!(
        "partitioned snapshot into {} defleet records and a tail of {}",
        defleet_records.len(),
        tail.len()
    );

    PartitionedSnapshot {
        defleet_records,
        tail,
    }
}
