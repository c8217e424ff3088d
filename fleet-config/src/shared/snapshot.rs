use serde::{Deserialize, Serialize};

use crate::shared::ValidationError;

/// Configuration for the snapshot store directory.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SnapshotStoreConfig {
    /// Directory holding the date-encoded snapshot files.
    #[serde(default = "default_root_dir")]
    pub root_dir: String,
    /// File-name prefix for snapshot files (`{prefix}-YYYYMMDD.txt`).
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
}

impl SnapshotStoreConfig {
    /// Default snapshot directory.
    pub const DEFAULT_ROOT_DIR: &'static str = "snapshots";

    /// Default snapshot file prefix.
    pub const DEFAULT_FILE_PREFIX: &'static str = "fleet";

    /// Validates snapshot store configuration settings.
    ///
    /// The prefix must be a plain file-name component so that date parsing of
    /// directory entries stays unambiguous.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.root_dir.is_empty() {
            return Err(ValidationError::EmptyField("snapshots.root_dir"));
        }

        if self.file_prefix.is_empty() || self.file_prefix.contains(['/', '\\']) {
            return Err(ValidationError::InvalidSnapshotPrefix);
        }

        Ok(())
    }
}

impl Default for SnapshotStoreConfig {
    fn default() -> Self {
        Self {
            root_dir: default_root_dir(),
            file_prefix: default_file_prefix(),
        }
    }
}

fn default_root_dir() -> String {
    SnapshotStoreConfig::DEFAULT_ROOT_DIR.to_string()
}

fn default_file_prefix() -> String {
    SnapshotStoreConfig::DEFAULT_FILE_PREFIX.to_string()
}
