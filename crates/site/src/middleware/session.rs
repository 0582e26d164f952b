//! Session middleware configuration.
//!
//! Sessions live in process memory. They only carry the admin flag, so a
//! restart logging the admin out is acceptable.

use async_trait::async_trait;
use tower_sessions::{Expiry, MemoryStore, Session, SessionManagerLayer};

use crate::config::SiteConfig;
use crate::store::{Storage, StorageError};

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "folio_session";

/// Session expiry time in seconds (7 days).
const SESSION_EXPIRY_SECONDS: i64 = 7 * 24 * 60 * 60;

/// Create the session layer with an in-memory store.
#[must_use]
pub fn create_session_layer(config: &SiteConfig) -> SessionManagerLayer<MemoryStore> {
    let is_secure = config.base_url.starts_with("https://");

    SessionManagerLayer::new(MemoryStore::default())
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(is_secure)
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}

/// [`Storage`] over one browser's session, so per-browser values like the
/// admin flag live with the browser rather than in the shared file.
#[derive(Debug, Clone)]
pub struct SessionStorage(pub Session);

#[async_trait]
impl Storage for SessionStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.0.get::<String>(key).await.map_err(session_error)
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.0.insert(key, value).await.map_err(session_error)
    }

    async fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.0
            .remove::<String>(key)
            .await
            .map(|_| ())
            .map_err(session_error)
    }
}

fn session_error(e: tower_sessions::session::Error) -> StorageError {
    StorageError::Session(e.to_string())
}
