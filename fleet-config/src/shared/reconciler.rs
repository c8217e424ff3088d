use serde::{Deserialize, Serialize};

use crate::Config;
use crate::shared::{OutputConfig, PipelineConfig, SnapshotStoreConfig, ValidationError};

/// Complete configuration for the reconciler service.
///
/// Aggregates the pipeline settings, the snapshot store location, and the
/// output destination. Typically loaded from configuration files at startup.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReconcilerConfig {
    /// Configuration for the reconciliation pipeline.
    #[serde(default)]
    pub pipeline: PipelineConfig,
    /// Configuration for the snapshot store.
    #[serde(default)]
    pub snapshots: SnapshotStoreConfig,
    /// Configuration for the record-set output destination.
    #[serde(default)]
    pub output: OutputConfig,
}

impl ReconcilerConfig {
    /// Validates the complete reconciler configuration.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.pipeline.validate()?;
        self.snapshots.validate()?;
        self.output.validate()
    }
}

impl Config for ReconcilerConfig {
    const LIST_PARSE_KEYS: &'static [&'static str] = &["pipeline.color_words"];
}
