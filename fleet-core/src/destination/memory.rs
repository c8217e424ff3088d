use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::info;

use crate::destination::base::{Destination, RecordSet, RecordSetDocument};
use crate::error::FleetResult;

/// In-memory destination for testing and development purposes.
///
/// [`MemoryDestination`] stores every written document, making it ideal for
/// asserting on pipeline output. All data is held in memory and lost when the
/// process terminates.
#[derive(Debug, Clone, Default)]
pub struct MemoryDestination {
    inner: Arc<Mutex<Vec<RecordSetDocument>>>,
}

impl MemoryDestination {
    /// Creates a new empty memory destination.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of all documents written so far, in write order.
    pub async fn documents(&self) -> Vec<RecordSetDocument> {
        let inner = self.inner.lock().await;
        inner.clone()
    }

    /// Returns the most recent document written for the given record set.
    pub async fn document_for(&self, record_set: RecordSet) -> Option<RecordSetDocument> {
        let inner = self.inner.lock().await;
        inner
            .iter()
            .rev()
            .find(|document| document.record_set == record_set)
            .cloned()
    }

    /// Clears all stored documents.
    pub async fn clear(&self) {
        let mut inner = self.inner.lock().await;
        inner.clear();
    }
}

impl Destination for MemoryDestination {
    async fn write_record_set(&self, document: RecordSetDocument) -> FleetResult<()> {
        let mut inner = self.inner.lock().await;

        info!(
            "storing {} {} records tagged {}",
            document.count, document.record_set, document.tag
        );

        inner.push(document);

        Ok(())
    }
}
