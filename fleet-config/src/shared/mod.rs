//! Shared configuration types for the fleet feed reconciler.

mod base;
mod batch;
mod output;
mod pipeline;
mod reconciler;
mod snapshot;

pub use base::ValidationError;
pub use batch::BatchConfig;
pub use output::OutputConfig;
pub use pipeline::PipelineConfig;
pub use reconciler::ReconcilerConfig;
pub use snapshot::SnapshotStoreConfig;
