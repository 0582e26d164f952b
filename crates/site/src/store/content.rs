//! The current portfolio snapshot.

use folio_core::{Snapshot, SnapshotPatch, seed};
use tracing::instrument;

use super::{DATA_KEY, Storage, StorageError};

/// Holds the current snapshot and writes it back on every change.
#[derive(Debug)]
pub struct ContentStore<S> {
    storage: S,
    data: Snapshot,
}

impl<S: Storage> ContentStore<S> {
    /// Load the persisted snapshot, falling back to the seed.
    ///
    /// Never fails: a missing value means nothing was saved yet, and an
    /// unreadable or unparseable value is logged and replaced by the seed in
    /// memory. Storage is left untouched until the next save.
    #[instrument(skip(storage))]
    pub async fn load(storage: S) -> Self {
        let data = match storage.get_item(DATA_KEY).await {
            Ok(Some(raw)) => match serde_json::from_str::<Snapshot>(&raw) {
                Ok(data) => data,
                Err(e) => {
                    tracing::warn!(error = %e, "Stored portfolio data is invalid, using defaults");
                    seed()
                }
            },
            Ok(None) => {
                tracing::debug!("No stored portfolio data, using defaults");
                seed()
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read portfolio data, using defaults");
                seed()
            }
        };

        Self { storage, data }
    }

    /// The current snapshot.
    #[must_use]
    pub const fn snapshot(&self) -> &Snapshot {
        &self.data
    }

    /// The backing storage.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Merge `patch` over the current snapshot and persist the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the merged snapshot could not be written. The
    /// in-memory snapshot is replaced either way.
    #[instrument(skip_all, fields(fields = ?patch.fields()))]
    pub async fn update_data(&mut self, patch: SnapshotPatch) -> Result<(), StorageError> {
        let merged = std::mem::take(&mut self.data).merge(patch);
        self.data = merged;
        self.persist().await
    }

    /// Replace the snapshot with the seed and persist it.
    ///
    /// # Errors
    ///
    /// Returns an error if the seed could not be written.
    #[instrument(skip_all)]
    pub async fn reset_data(&mut self) -> Result<(), StorageError> {
        self.data = seed();
        self.persist().await
    }

    async fn persist(&self) -> Result<(), StorageError> {
        let raw = serde_json::to_string(&self.data)?;
        self.storage.set_item(DATA_KEY, &raw).await?;
        tracing::info!("Portfolio data saved");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use folio_core::{Project, ProjectId};

    use super::*;
    use crate::store::MemoryStorage;

    #[tokio::test]
    async fn test_load_without_data_uses_seed() {
        let store = ContentStore::load(MemoryStorage::new()).await;
        assert_eq!(store.snapshot(), &seed());
        assert_eq!(store.storage().get_item(DATA_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_load_with_corrupt_data_uses_seed() {
        let storage = MemoryStorage::with_items([(DATA_KEY, "{\"profile\":")]);
        let store = ContentStore::load(storage).await;
        assert_eq!(store.snapshot(), &seed());
    }

    #[tokio::test]
    async fn test_update_survives_reload() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = ContentStore::load(Arc::clone(&storage)).await;

        let mut projects = store.snapshot().projects.clone();
        projects.insert(0, Project::placeholder(ProjectId::new("p-new")));
        let patch = SnapshotPatch {
            projects: Some(projects),
            ..Default::default()
        };
        let expected = seed().merge(patch.clone());

        store.update_data(patch).await.unwrap();
        assert_eq!(store.snapshot(), &expected);

        let reloaded = ContentStore::load(storage).await;
        assert_eq!(reloaded.snapshot(), &expected);
        assert_eq!(reloaded.snapshot().skills, seed().skills);
    }

    #[tokio::test]
    async fn test_reset_restores_seed() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = ContentStore::load(Arc::clone(&storage)).await;

        store
            .update_data(SnapshotPatch {
                testimonials: Some(Vec::new()),
                ..Default::default()
            })
            .await
            .unwrap();
        store.reset_data().await.unwrap();

        let reloaded = ContentStore::load(storage).await;
        assert_eq!(reloaded.snapshot(), &seed());
    }
}
