//! Snapshot stores holding the previous run's persisted state.

mod base;
mod fs;
mod memory;

pub use base::SnapshotStore;
pub use fs::FsSnapshotStore;
pub use memory::MemorySnapshotStore;
