use serde::{Deserialize, Serialize};

use crate::shared::ValidationError;

/// Configuration for the record-set output directory.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct OutputConfig {
    /// Directory the destination writes record-set documents into.
    #[serde(default = "default_root_dir")]
    pub root_dir: String,
}

impl OutputConfig {
    /// Default output directory.
    pub const DEFAULT_ROOT_DIR: &'static str = "out";

    /// Validates output configuration settings.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.root_dir.is_empty() {
            return Err(ValidationError::EmptyField("output.root_dir"));
        }

        Ok(())
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            root_dir: default_root_dir(),
        }
    }
}

fn default_root_dir() -> String {
    OutputConfig::DEFAULT_ROOT_DIR.to_string()
}
