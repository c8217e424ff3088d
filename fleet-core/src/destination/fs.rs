use std::path::PathBuf;

use tracing::info;

use crate::destination::base::{Destination, RecordSetDocument};
use crate::error::{ErrorKind, FleetResult};
use crate::fleet_error;

/// Filesystem-backed destination.
///
/// Writes each record set as a pretty-printed JSON document named
/// `{record_set}-{tag}.json` under the output directory. The directory is
/// created on first use.
#[derive(Debug, Clone)]
pub struct FsDestination {
    root_dir: PathBuf,
}

impl FsDestination {
    /// Creates a destination writing into the given directory.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
        }
    }
}

impl Destination for FsDestination {
    async fn write_record_set(&self, document: RecordSetDocument) -> FleetResult<()> {
        tokio::fs::create_dir_all(&self.root_dir)
            .await
            .map_err(|err| {
                fleet_error!(
                    ErrorKind::DestinationIo,
                    "Failed to create output directory",
                    detail = self.root_dir.display().to_string(),
                    source: err
                )
            })?;

        let path = self
            .root_dir
            .join(format!("{}-{}.json", document.record_set, document.tag));

        let rendered = serde_json::to_vec_pretty(&document)?;

        tokio::fs::write(&path, rendered).await.map_err(|err| {
            fleet_error!(
                ErrorKind::DestinationIo,
                "Failed to write record set document",
                detail = path.display().to_string(),
                source: err
            )
        })?;

        info!(
            "wrote {} {} records to {}",
            document.count,
            document.record_set,
            path.display()
        );

        Ok(())
    }
}
