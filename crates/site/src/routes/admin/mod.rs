//! Admin area route handlers.
//!
//! Every page is built from [`AdminSection`]: the route table, the sidebar
//! and the editor headings. Every handler takes [`RequireAuth`], so a
//! browser without the admin flag is sent to `/login`.

pub mod draft;
pub mod experience;
pub mod profile;
pub mod projects;
pub mod services;
pub mod testimonials;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Router,
    extract::{Path, State},
    response::Redirect,
    routing::{any, get, post},
};
use folio_core::{AdminSection, Snapshot};
use tracing::instrument;

use crate::error::{Result, add_breadcrumb};
use crate::filters;
use crate::middleware::RequireAuth;
use crate::state::AppState;

/// Create the admin router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(AdminSection::Overview.path(), get(overview))
        .route("/admin/", any(|| async { Redirect::to(AdminSection::Overview.path()) }))
        .route("/admin/reset", post(reset))
        .route(AdminSection::Profile.path(), get(profile::edit).post(profile::update))
        .route(AdminSection::Services.path(), get(services::edit).post(services::update))
        .route(
            AdminSection::Experience.path(),
            get(experience::edit).post(experience::update),
        )
        .route(AdminSection::Projects.path(), get(projects::edit).post(projects::update))
        .route(
            AdminSection::Testimonials.path(),
            get(testimonials::edit).post(testimonials::update),
        )
        .route("/admin/{*rest}", any(unknown_section))
}

/// One sidebar entry.
#[derive(Debug, Clone)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// Sidebar entries with `current` highlighted.
#[must_use]
pub fn nav(current: AdminSection) -> Vec<NavLink> {
    AdminSection::ALL
        .into_iter()
        .map(|section| NavLink {
            href: section.path(),
            label: section.label(),
            active: section == current,
        })
        .collect()
}

/// Overview page.
#[derive(Template, WebTemplate)]
#[template(path = "admin/overview.html")]
pub struct OverviewTemplate {
    pub nav: Vec<NavLink>,
    pub name: String,
    pub email: String,
    pub project_count: usize,
    pub service_count: usize,
    pub experience_count: usize,
    pub flash: String,
}

impl OverviewTemplate {
    fn new(snapshot: &Snapshot) -> Self {
        Self {
            nav: nav(AdminSection::Overview),
            name: snapshot.profile.name.clone(),
            email: snapshot.profile.email.clone(),
            project_count: snapshot.projects.len(),
            service_count: snapshot.services.len(),
            experience_count: snapshot.experience.len(),
            flash: String::new(),
        }
    }
}

/// GET /admin
pub async fn overview(_: RequireAuth, State(state): State<AppState>) -> OverviewTemplate {
    OverviewTemplate::new(state.content().await.snapshot())
}

/// Replace all content with the defaults.
///
/// POST /admin/reset
#[instrument(skip_all)]
pub async fn reset(_: RequireAuth, State(state): State<AppState>) -> Result<OverviewTemplate> {
    let mut content = state.content_mut().await;
    content.reset_data().await?;
    tracing::info!("Content reset to defaults");
    add_breadcrumb("admin", "Content reset");

    let mut page = OverviewTemplate::new(content.snapshot());
    page.flash = AdminSection::Overview.saved_message().to_string();
    Ok(page)
}

/// Anything under `/admin/` that is not a section.
///
/// A known section with extra slashes goes to its canonical path; anything
/// else goes to the overview. Any method is accepted and answered with a
/// 303, so a stray form post lands on a page instead of a 405.
async fn unknown_section(Path(rest): Path<String>) -> Redirect {
    if let Some(section) = AdminSection::from_subpath(&rest) {
        return Redirect::to(section.path());
    }

    tracing::warn!(path = %rest, "Unknown admin section, redirecting to overview");
    Redirect::to(AdminSection::Overview.path())
}
