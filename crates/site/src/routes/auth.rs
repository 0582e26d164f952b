//! Login and logout route handlers.
//!
//! A single configured password unlocks the admin area for the browser
//! that entered it.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use folio_core::AdminSection;
use serde::Deserialize;
use tracing::instrument;

use crate::config::DEFAULT_ADMIN_PASSWORD;
use crate::error::{Result, add_breadcrumb};
use crate::filters;
use crate::middleware::Auth;
use crate::state::AppState;

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    /// Error shown under the password field, empty when none.
    pub error: String,
}

/// Login form data.
#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub password: String,
}

/// Render the login page.
///
/// GET /login
pub async fn login_page() -> LoginTemplate {
    LoginTemplate {
        error: String::new(),
    }
}

/// Check the password and unlock the admin area.
///
/// POST /login
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    Auth(mut auth): Auth,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    if auth.login(&form.password).await? {
        add_breadcrumb("auth", "Admin logged in");
        return Ok(Redirect::to(AdminSection::Overview.path()).into_response());
    }

    let error = if state.config().uses_default_password() {
        format!("Invalid password. Try \"{DEFAULT_ADMIN_PASSWORD}\"")
    } else {
        "Invalid password.".to_string()
    };

    Ok(LoginTemplate { error }.into_response())
}

/// Clear the admin flag.
///
/// POST /logout
#[instrument(skip_all)]
pub async fn logout(Auth(mut auth): Auth) -> Result<Redirect> {
    auth.logout().await?;
    add_breadcrumb("auth", "Admin logged out");
    Ok(Redirect::to("/"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_login_page_renders_error() {
        let html = LoginTemplate {
            error: "Invalid password.".to_string(),
        }
        .render()
        .unwrap();
        assert!(html.contains("Invalid password."));
        assert!(html.contains("type=\"password\""));
    }
}
