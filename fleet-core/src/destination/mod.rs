//! Destinations receiving the categorized record sets of a run.

mod base;
mod fs;
mod memory;

pub use base::{Destination, RecordSet, RecordSetDocument};
pub use fs::FsDestination;
pub use memory::MemoryDestination;
