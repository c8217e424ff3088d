use serde::{Deserialize, Serialize};

use crate::shared::{BatchConfig, ValidationError};

/// Configuration for the reconciliation pipeline.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PipelineConfig {
    /// Batch sizing for the run.
    #[serde(default)]
    pub batch: BatchConfig,
    /// Word list cycled through when overriding the color field of the update
    /// batch. With a single word, every updated record receives the same
    /// literal override.
    #[serde(default = "default_color_words")]
    pub color_words: Vec<String>,
}

impl PipelineConfig {
    /// Default color override word.
    pub const DEFAULT_COLOR_WORD: &'static str = "silver";

    /// Validates pipeline configuration settings.
    ///
    /// Ensures the color word list is non-empty and the batch settings are in
    /// range.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.color_words.is_empty() {
            return Err(ValidationError::EmptyColorWords);
        }

        self.batch.validate()
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            batch: BatchConfig::default(),
            color_words: default_color_words(),
        }
    }
}

fn default_color_words() -> Vec<String> {
    vec![PipelineConfig::DEFAULT_COLOR_WORD.to_string()]
}
