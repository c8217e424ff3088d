use thiserror::Error;

/// Configuration validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The color word list used for update overrides cannot be empty.
    #[error("`pipeline.color_words` must contain at least one word")]
    EmptyColorWords,
    /// The requested new-batch size exceeds the supported maximum.
    #[error("`pipeline.batch.new_records` cannot exceed {0}")]
    NewRecordsTooLarge(usize),
    /// The snapshot file prefix must be a plain file-name component.
    #[error("`snapshots.file_prefix` cannot be empty or contain path separators")]
    InvalidSnapshotPrefix,
    /// A required string field was left empty.
    #[error("`{0}` cannot be empty")]
    EmptyField(&'static str),
}
