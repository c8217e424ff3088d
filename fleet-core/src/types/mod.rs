//! Record types flowing through the reconciliation pipeline.

mod projected;
mod record;

pub use projected::{FleetKey, FullRecord, VehicleRecord};
pub use record::FlatRecord;
