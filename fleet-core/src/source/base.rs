use std::future::Future;

use crate::error::FleetResult;

/// Trait for systems that produce the daily new batch of fleet records.
///
/// [`RecordSource`] implementations return schema-full flat-record lines,
/// delimiter-consistent with the record codec. A batch may be empty; the
/// pipeline treats an empty batch as a valid run input.
///
/// Keeping generation behind this seam lets the reconciliation core be tested
/// with fixed, literal fixtures independent of any randomness source.
pub trait RecordSource {
    /// Produces today's new batch of `count` flat-record lines.
    fn fetch_batch(&self, count: usize) -> impl Future<Output = FleetResult<Vec<String>>> + Send;
}
