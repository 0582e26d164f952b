//! The admin flag for one browser.

use folio_core::AuthState;
use secrecy::{ExposeSecret, SecretString};

use super::{AUTH_KEY, Storage, StorageError};

/// Literal stored under [`AUTH_KEY`] while authenticated.
const AUTHENTICATED: &str = "true";

/// Tracks whether one browser has entered the admin password.
///
/// The password is a single configured literal compared as-is. There are no
/// accounts, no hashing and no lockout.
pub struct AuthStore<S> {
    storage: S,
    password: SecretString,
    state: AuthState,
}

impl<S: Storage> AuthStore<S> {
    /// Read the flag from storage. Anything other than `"true"` is
    /// unauthenticated.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be read.
    pub async fn load(storage: S, password: SecretString) -> Result<Self, StorageError> {
        let is_authenticated = storage.get_item(AUTH_KEY).await?.as_deref() == Some(AUTHENTICATED);
        Ok(Self {
            storage,
            password,
            state: AuthState { is_authenticated },
        })
    }

    /// Whether the admin password has been entered.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.state.is_authenticated
    }

    /// Check `password` and, on a match, persist the flag.
    ///
    /// Returns whether the password matched. A mismatch changes nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the flag could not be written.
    pub async fn login(&mut self, password: &str) -> Result<bool, StorageError> {
        if password != self.password.expose_secret() {
            tracing::info!("Admin login rejected");
            return Ok(false);
        }

        self.storage.set_item(AUTH_KEY, AUTHENTICATED).await?;
        self.state.is_authenticated = true;
        tracing::info!("Admin logged in");
        Ok(true)
    }

    /// Clear the flag.
    ///
    /// # Errors
    ///
    /// Returns an error if the flag could not be removed.
    pub async fn logout(&mut self) -> Result<(), StorageError> {
        self.storage.remove_item(AUTH_KEY).await?;
        self.state.is_authenticated = false;
        tracing::info!("Admin logged out");
        Ok(())
    }
}

impl<S> std::fmt::Debug for AuthStore<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthStore")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
