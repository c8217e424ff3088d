use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::Mutex;
use tracing::info;

use crate::error::FleetResult;
use crate::store::base::SnapshotStore;

/// In-memory snapshot store for testing and development purposes.
///
/// [`MemorySnapshotStore`] keeps all snapshots in a date-ordered map, making
/// it ideal for exercising the pipeline against literal fixtures. All data is
/// lost when the process terminates.
#[derive(Debug, Clone, Default)]
pub struct MemorySnapshotStore {
    inner: Arc<Mutex<BTreeMap<NaiveDate, String>>>,
}

impl MemorySnapshotStore {
    /// Creates a new empty memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with a snapshot for the given date.
    pub async fn insert(&self, date: NaiveDate, contents: impl Into<String>) {
        let mut inner = self.inner.lock().await;
        inner.insert(date, contents.into());
    }

    /// Returns a copy of all stored snapshots, ordered by date.
    ///
    /// Useful for verifying what a pipeline run persisted.
    pub async fn snapshots(&self) -> BTreeMap<NaiveDate, String> {
        let inner = self.inner.lock().await;
        inner.clone()
    }
}

impl SnapshotStore for MemorySnapshotStore {
    async fn fetch_latest(&self, before: NaiveDate) -> FleetResult<Option<String>> {
        let inner = self.inner.lock().await;

        Ok(inner
            .range(..before)
            .next_back()
            .map(|(_, contents)| contents.clone()))
    }

    async fn persist(&self, date: NaiveDate, contents: &str) -> FleetResult<()> {
        let mut inner = self.inner.lock().await;

        info!("storing snapshot dated {date} ({} bytes)", contents.len());

        inner.insert(date, contents.to_string());

        Ok(())
    }
}
