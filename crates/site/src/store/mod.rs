//! Persistence for portfolio content and the admin flag.
//!
//! Everything is kept in a string-keyed [`Storage`]: the serialized
//! snapshot under [`DATA_KEY`] and the literal `"true"` under [`AUTH_KEY`]
//! for an authenticated browser. Both values are overwritten whole, never
//! patched.
//!
//! # Stores
//!
//! - [`ContentStore`] - the current snapshot, shared by every request
//! - [`AuthStore`] - one browser's admin flag, backed by its session
//!
//! # Adapters
//!
//! - [`FileStorage`] - JSON file on disk (production)
//! - [`MemoryStorage`] - in-process map (tests, dry runs)

pub mod auth;
pub mod content;
pub mod file;
pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

pub use auth::AuthStore;
pub use content::ContentStore;
pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Storage key holding the serialized snapshot.
pub const DATA_KEY: &str = "portfolio_data";

/// Storage key holding the admin flag.
pub const AUTH_KEY: &str = "portfolio_auth";

/// Errors raised by storage adapters.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file is not a JSON object of strings.
    #[error("storage file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// The session backing the store rejected the operation.
    #[error("session error: {0}")]
    Session(String),
}

/// A string key-value store with whole-value writes.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Read a value, `None` if the key was never set or was removed.
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite a value.
    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a value. Removing a missing key is not an error.
    async fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

#[async_trait]
impl<S: Storage + ?Sized> Storage for Arc<S> {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key).await
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value).await
    }

    async fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key).await
    }
}
