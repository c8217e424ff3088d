use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::info;

use crate::error::{ErrorKind, FleetResult};
use crate::fleet_error;
use crate::store::base::SnapshotStore;

/// Date format used in snapshot file names.
const SNAPSHOT_DATE_FORMAT: &str = "%Y%m%d";

/// Extension of snapshot files.
const SNAPSHOT_EXTENSION: &str = "txt";

/// Filesystem-backed snapshot store.
///
/// Snapshots live in a single directory as `{prefix}-YYYYMMDD.txt` files.
/// Fetching lists the directory, parses the date-encoded names, and reads the
/// newest file dated strictly before the reference date. Directory and file
/// handles are scoped to each call.
#[derive(Debug, Clone)]
pub struct FsSnapshotStore {
    root_dir: PathBuf,
    file_prefix: String,
}

impl FsSnapshotStore {
    /// Creates a store over the given directory and file prefix.
    ///
    /// The directory is created lazily on the first persist.
    pub fn new(root_dir: impl Into<PathBuf>, file_prefix: impl Into<String>) -> Self {
        Self {
            root_dir: root_dir.into(),
            file_prefix: file_prefix.into(),
        }
    }

    fn snapshot_path(&self, date: NaiveDate) -> PathBuf {
        self.root_dir.join(format!(
            "{}-{}.{}",
            self.file_prefix,
            date.format(SNAPSHOT_DATE_FORMAT),
            SNAPSHOT_EXTENSION
        ))
    }

    /// Parses the snapshot date out of a directory entry name, returning
    /// `None` for files that do not belong to this store.
    fn parse_snapshot_date(&self, file_name: &str) -> Option<NaiveDate> {
        let stem = file_name
            .strip_prefix(self.file_prefix.as_str())?
            .strip_prefix('-')?
            .strip_suffix(SNAPSHOT_EXTENSION)?
            .strip_suffix('.')?;

        NaiveDate::parse_from_str(stem, SNAPSHOT_DATE_FORMAT).ok()
    }
}

impl SnapshotStore for FsSnapshotStore {
    async fn fetch_latest(&self, before: NaiveDate) -> FleetResult<Option<String>> {
        let mut entries = match tokio::fs::read_dir(&self.root_dir).await {
            Ok(entries) => entries,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(fleet_error!(
                    ErrorKind::SnapshotStoreIo,
                    "Failed to list snapshot directory",
                    detail = self.root_dir.display().to_string(),
                    source: err
                ));
            }
        };

        let mut latest: Option<(NaiveDate, PathBuf)> = None;
        loop {
            let entry = entries.next_entry().await.map_err(|err| {
                fleet_error!(
                    ErrorKind::SnapshotStoreIo,
                    "Failed to read snapshot directory entry",
                    detail = self.root_dir.display().to_string(),
                    source: err
                )
            })?;
            let Some(entry) = entry else {
                break;
            };

            let file_name = entry.file_name();
            let Some(date) = file_name
                .to_str()
                .and_then(|name| self.parse_snapshot_date(name))
            else {
                continue;
            };

            if date < before && latest.as_ref().is_none_or(|(current, _)| date > *current) {
                latest = Some((date, entry.path()));
            }
        }

        let Some((date, path)) = latest else {
            info!("no snapshot found before {before}");
            return Ok(None);
        };

        info!("loading snapshot dated {date} from {}", path.display());

        read_snapshot(&path).await.map(Some)
    }

    async fn persist(&self, date: NaiveDate, contents: &str) -> FleetResult<()> {
        tokio::fs::create_dir_all(&self.root_dir)
            .await
            .map_err(|err| {
                fleet_error!(
                    ErrorKind::SnapshotStoreIo,
                    "Failed to create snapshot directory",
                    detail = self.root_dir.display().to_string(),
                    source: err
                )
            })?;

        let path = self.snapshot_path(date);
        tokio::fs::write(&path, contents).await.map_err(|err| {
            fleet_error!(
                ErrorKind::SnapshotStoreIo,
                "Failed to write snapshot",
                detail = path.display().to_string(),
                source: err
            )
        })?;

        info!("persisted snapshot dated {date} to {}", path.display());

        Ok(())
    }
}

async fn read_snapshot(path: &Path) -> FleetResult<String> {
    tokio::fs::read_to_string(path).await.map_err(|err| {
        fleet_error!(
            ErrorKind::SnapshotStoreIo,
            "Failed to read snapshot",
            detail = path.display().to_string(),
            source: err
        )
    })
}
