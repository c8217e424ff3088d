use std::future::Future;

use chrono::NaiveDate;

use crate::error::FleetResult;

/// Trait for stores holding date-encoded snapshots of the fleet state.
///
/// [`SnapshotStore`] implementations own the mapping from a reference date to
/// the snapshot that should seed a run. A missing snapshot is the
/// empty-system bootstrap and is reported as `None`, never as an error; I/O
/// failures are errors and abort the run.
///
/// Implementations must acquire whatever connection or file resources they
/// need per call and release them before returning, whether the call
/// succeeds or fails.
pub trait SnapshotStore {
    /// Returns the contents of the most recent snapshot dated strictly
    /// before `before`, or `None` when no snapshot exists.
    fn fetch_latest(
        &self,
        before: NaiveDate,
    ) -> impl Future<Output = FleetResult<Option<String>>> + Send;

    /// Persists the merged snapshot under the given run date, replacing any
    /// snapshot already stored for that date.
    fn persist(
        &self,
        date: NaiveDate,
        contents: &str,
    ) -> impl Future<Output = FleetResult<()>> + Send;
}
