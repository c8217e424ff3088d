//! Shared fixtures for pipeline integration tests.

use fleet_core::error::{ErrorKind, FleetResult};
use fleet_core::fleet_error;
use fleet_core::source::RecordSource;

/// A record source replaying a fixed batch of lines, ignoring the requested
/// count.
#[derive(Debug, Clone)]
pub struct FixedSource {
    lines: Vec<String>,
}

impl FixedSource {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }
}

impl RecordSource for FixedSource {
    async fn fetch_batch(&self, _count: usize) -> FleetResult<Vec<String>> {
        Ok(self.lines.clone())
    }
}

/// A destination that rejects every write.
#[derive(Debug, Clone)]
pub struct FailingDestination;

impl fleet_core::destination::Destination for FailingDestination {
    async fn write_record_set(
        &self,
        _document: fleet_core::destination::RecordSetDocument,
    ) -> FleetResult<()> {
        Err(fleet_error!(
            ErrorKind::DestinationIo,
            "Destination rejected the write"
        ))
    }
}

/// Builds a full-schema flat-record line with predictable field values.
pub fn full_line(prefix: &str, i: usize) -> String {
    format!(
        "{prefix}{i:04}|CA|2020|Ford|F-150|blue|VIN{i:014}|metro|id-{i:04}|Ada|Lovelace|{n} Main St||Albany|NY|12207|US|555-000-{i:04}|ada.lovelace@fleetmail.test",
        n = i + 1,
    )
}

/// Builds an incomplete trailing entry, plate and state plus year and make.
pub fn short_line(prefix: &str, i: usize) -> String {
    format!("{prefix}{i:04}|NV|2020|Ford")
}

/// Builds a new batch of `full` complete lines followed by `short` incomplete
/// ones.
pub fn new_batch(full: usize, short: usize) -> Vec<String> {
    let mut lines: Vec<String> = (0..full).map(|i| full_line("NEW", i)).collect();
    lines.extend((0..short).map(|i| short_line("BAD", i)));
    lines
}

/// Builds snapshot text: count header, `data` full-schema lines, and two
/// trailing error rows.
pub fn snapshot_text(data: usize) -> String {
    let mut out = format!("{data}\n");
    for i in 0..data {
        out.push_str(&full_line("PLT", i));
        out.push('\n');
    }
    out.push_str(&short_line("ERR", 0));
    out.push('\n');
    out.push_str(&short_line("ERR", 1));
    out.push('\n');
    out
}
