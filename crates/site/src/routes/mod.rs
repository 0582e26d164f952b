//! HTTP route handlers for the site.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Portfolio page
//! GET  /contact/form           - Idle contact form fragment (HTMX)
//! POST /contact                - Send a contact message (returns fragment)
//!
//! # Auth
//! GET  /login                  - Login page
//! POST /login                  - Login action
//! POST /logout                 - Logout action
//!
//! # Admin (requires auth)
//! GET  /admin                  - Overview
//! POST /admin/reset            - Reset content to the defaults
//! GET  /admin/profile          - Profile editor
//! POST /admin/profile          - Save profile
//! GET  /admin/{section}        - List editor (services, experience, projects, testimonials)
//! POST /admin/{section}        - Add, remove or save in a list editor
//! GET  /admin/{*unknown}       - Redirect to /admin
//! ```
//!
//! Any other path redirects to `/`.

pub mod admin;
pub mod auth;
pub mod contact;
pub mod home;

use axum::{
    Router,
    http::Uri,
    response::Redirect,
    routing::{get, post},
};
use folio_core::Profile;

use crate::state::AppState;

/// Create the public and auth routes, plus the admin area.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/contact", post(contact::submit))
        .route("/contact/form", get(contact::form))
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", post(auth::logout))
        .merge(admin::routes())
        .fallback(unknown_path)
}

async fn unknown_path(uri: Uri) -> Redirect {
    tracing::debug!(path = %uri.path(), "Unknown path, redirecting home");
    Redirect::to("/")
}

/// Owner details shown in the public navigation and footer.
#[derive(Debug, Clone)]
pub struct SiteChrome {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    /// Social links, empty when not set.
    pub github: String,
    pub linkedin: String,
    pub twitter: String,
    /// Whether to offer the dashboard link instead of login.
    pub is_admin: bool,
}

impl SiteChrome {
    #[must_use]
    pub fn new(profile: &Profile, is_admin: bool) -> Self {
        let socials = &profile.socials;
        Self {
            name: profile.name.clone(),
            email: profile.email.clone(),
            phone: profile.phone.clone(),
            address: profile.address.clone(),
            github: socials.github.clone().unwrap_or_default(),
            linkedin: socials.linkedin.clone().unwrap_or_default(),
            twitter: socials.twitter.clone().unwrap_or_default(),
            is_admin,
        }
    }
}
