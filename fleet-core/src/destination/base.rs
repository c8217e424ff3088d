use std::fmt;
use std::future::Future;

use serde::Serialize;

use crate::error::FleetResult;

/// Identifies one of the categorized record sets emitted by a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordSet {
    /// Vehicles removed from active fleet tracking.
    Defleet,
    /// Carried-over vehicles with the color override applied.
    Updates,
    /// The trailing malformed/incomplete entries of the new batch.
    Errors,
    /// Vehicles added to active fleet tracking today.
    Infleet,
    /// The arrivals reduced to plate number and plate state.
    Fleet,
    /// Arrivals followed by updates: everything that changed today.
    History,
}

impl RecordSet {
    /// All record sets, in emission order.
    pub const ALL: [RecordSet; 6] = [
        RecordSet::Errors,
        RecordSet::Infleet,
        RecordSet::Fleet,
        RecordSet::Defleet,
        RecordSet::Updates,
        RecordSet::History,
    ];

    /// Returns the stable name of the record set.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordSet::Defleet => "defleet",
            RecordSet::Updates => "updates",
            RecordSet::Errors => "errors",
            RecordSet::Infleet => "infleet",
            RecordSet::Fleet => "fleet",
            RecordSet::History => "history",
        }
    }
}

impl fmt::Display for RecordSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named record set rendered for persistence, tagged with the run date.
#[derive(Debug, Clone, Serialize)]
pub struct RecordSetDocument {
    /// Which record set this document holds.
    pub record_set: RecordSet,
    /// Timestamp tag of the run, `YYYYMMDD`.
    pub tag: String,
    /// Number of records in the set.
    pub count: usize,
    /// The records themselves, already rendered to JSON.
    pub records: serde_json::Value,
}

impl RecordSetDocument {
    /// Builds a document from any serializable record slice.
    pub fn new<T>(record_set: RecordSet, tag: impl Into<String>, records: &[T]) -> FleetResult<Self>
    where
        T: Serialize,
    {
        let rendered = serde_json::to_value(records)?;

        Ok(Self {
            record_set,
            tag: tag.into(),
            count: records.len(),
            records: rendered,
        })
    }
}

/// Trait for systems that receive the categorized record sets of a run.
///
/// [`Destination`] implementations define how record-set documents are
/// written out. The pipeline emits documents only after the whole run has
/// been computed, and persists the merged snapshot after the last document,
/// so a failing destination leaves the previous snapshot untouched.
pub trait Destination {
    /// Writes one categorized record set document.
    fn write_record_set(
        &self,
        document: RecordSetDocument,
    ) -> impl Future<Output = FleetResult<()>> + Send;
}
