//! Authentication extractors.
//!
//! The admin flag is read from the session through [`AuthStore`], so every
//! browser has its own flag.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use super::session::SessionStorage;
use crate::state::AppState;
use crate::store::AuthStore;

/// Auth store backed by the requesting browser's session.
pub type SessionAuth = AuthStore<SessionStorage>;

/// Error returned when the admin flag is required but not set.
pub enum AuthRejection {
    /// Redirect to the login page.
    RedirectToLogin,
    /// The session layer is missing or the session could not be read.
    SessionUnavailable,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to("/login").into_response(),
            Self::SessionUnavailable => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        }
    }
}

async fn load_auth(parts: &Parts, state: &AppState) -> Result<SessionAuth, AuthRejection> {
    let session = parts
        .extensions
        .get::<Session>()
        .cloned()
        .ok_or(AuthRejection::SessionUnavailable)?;

    AuthStore::load(SessionStorage(session), state.config().admin_password.clone())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to read session");
            AuthRejection::SessionUnavailable
        })
}

/// Extractor giving access to the browser's auth store, whatever its state.
///
/// Used by the login and logout handlers.
pub struct Auth(pub SessionAuth);

impl FromRequestParts<AppState> for Auth {
    type Rejection = AuthRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        load_auth(parts, state).await.map(Self)
    }
}

/// Extractor that requires the admin flag.
///
/// If the flag is not set, redirects to `/login`.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(_: RequireAuth) -> impl IntoResponse {
///     "admin only"
/// }
/// ```
pub struct RequireAuth;

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = AuthRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth = load_auth(parts, state).await?;
        if !auth.is_authenticated() {
            tracing::debug!(path = %parts.uri.path(), "Admin route requested without login");
            return Err(AuthRejection::RedirectToLogin);
        }
        Ok(Self)
    }
}

/// Extractor reporting whether the admin flag is set, for navigation.
///
/// Never rejects; a missing or unreadable session counts as logged out.
pub struct OptionalAuth(pub bool);

impl FromRequestParts<AppState> for OptionalAuth {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self(
            load_auth(parts, state)
                .await
                .is_ok_and(|auth| auth.is_authenticated()),
        ))
    }
}
