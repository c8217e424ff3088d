use serde::{Deserialize, Serialize};

use crate::shared::ValidationError;

/// Batch sizing configuration for a reconciliation run.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct BatchConfig {
    /// Number of records the source generates for today's new batch.
    #[serde(default = "default_new_records")]
    pub new_records: usize,
}

impl BatchConfig {
    /// Default number of freshly generated records per run.
    pub const DEFAULT_NEW_RECORDS: usize = 25;

    /// Upper bound on the new-batch size accepted from configuration.
    pub const MAX_NEW_RECORDS: usize = 100_000;

    /// Validates batch configuration settings.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.new_records > Self::MAX_NEW_RECORDS {
            return Err(ValidationError::NewRecordsTooLarge(Self::MAX_NEW_RECORDS));
        }

        Ok(())
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            new_records: default_new_records(),
        }
    }
}

fn default_new_records() -> usize {
    BatchConfig::DEFAULT_NEW_RECORDS
}
