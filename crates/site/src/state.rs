//! Application state shared across handlers.

use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::SiteConfig;
use crate::services::{ContactRelay, FormSubmitRelay, RelayError};
use crate::store::{ContentStore, FileStorage, Storage, StorageError};

/// Content store over whichever storage adapter the site was built with.
pub type SharedContent = ContentStore<Arc<dyn Storage>>;

/// Error creating application state.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("failed to open storage: {0}")]
    Storage(#[from] StorageError),
    #[error("failed to create relay client: {0}")]
    Relay(#[from] RelayError),
}

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// the content store, the mail relay and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: SiteConfig,
    content: RwLock<SharedContent>,
    relay: Arc<dyn ContactRelay>,
}

impl AppState {
    /// Create application state over the given storage and relay.
    ///
    /// Loads the snapshot from `storage`, falling back to the seed.
    pub async fn new(
        config: SiteConfig,
        storage: Arc<dyn Storage>,
        relay: Arc<dyn ContactRelay>,
    ) -> Self {
        let content = ContentStore::load(storage).await;

        Self {
            inner: Arc::new(AppStateInner {
                config,
                content: RwLock::new(content),
                relay,
            }),
        }
    }

    /// Create production state: file storage at the configured path and
    /// the HTTP mail relay.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage file cannot be read or the HTTP
    /// client cannot be built.
    pub async fn from_config(config: SiteConfig) -> Result<Self, StateError> {
        let storage = FileStorage::open(&config.storage_path).await?;
        let relay = FormSubmitRelay::new(&config.relay)?;
        Ok(Self::new(config, Arc::new(storage), Arc::new(relay)).await)
    }

    /// Get a reference to the site configuration.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }

    /// Lock the content store for reading.
    pub async fn content(&self) -> RwLockReadGuard<'_, SharedContent> {
        self.inner.content.read().await
    }

    /// Lock the content store for writing. Saves hold this lock until the
    /// snapshot is persisted.
    pub async fn content_mut(&self) -> RwLockWriteGuard<'_, SharedContent> {
        self.inner.content.write().await
    }

    /// Get a reference to the mail relay.
    #[must_use]
    pub fn relay(&self) -> &dyn ContactRelay {
        self.inner.relay.as_ref()
    }
}
