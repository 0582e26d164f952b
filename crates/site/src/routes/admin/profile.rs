//! Profile editor.
//!
//! Edits the profile singleton and the skills list, committed together.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State};
use folio_core::text::{join_tags, split_tags};
use folio_core::{AdminSection, Profile, Snapshot, SnapshotPatch, Socials};
use serde::Deserialize;
use tracing::instrument;

use super::{NavLink, nav};
use crate::error::{Result, add_breadcrumb};
use crate::filters;
use crate::middleware::RequireAuth;
use crate::state::AppState;

/// Posted profile form, also used to render the form. Empty social links
/// mean none; skills are comma-separated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProfileForm {
    pub name: String,
    pub role: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub summary: String,
    pub github: String,
    pub linkedin: String,
    pub twitter: String,
    pub skills: String,
}

impl ProfileForm {
    fn from_snapshot(snapshot: &Snapshot) -> Self {
        let profile = &snapshot.profile;
        Self {
            name: profile.name.clone(),
            role: profile.role.clone(),
            email: profile.email.clone(),
            phone: profile.phone.clone(),
            address: profile.address.clone(),
            summary: profile.summary.clone(),
            github: profile.socials.github.clone().unwrap_or_default(),
            linkedin: profile.socials.linkedin.clone().unwrap_or_default(),
            twitter: profile.socials.twitter.clone().unwrap_or_default(),
            skills: join_tags(&snapshot.skills),
        }
    }

    fn to_patch(&self) -> SnapshotPatch {
        SnapshotPatch {
            profile: Some(Profile {
                name: self.name.clone(),
                role: self.role.clone(),
                email: self.email.clone(),
                phone: self.phone.clone(),
                address: self.address.clone(),
                summary: self.summary.clone(),
                socials: Socials {
                    github: optional(&self.github),
                    linkedin: optional(&self.linkedin),
                    twitter: optional(&self.twitter),
                },
            }),
            skills: Some(split_tags(&self.skills)),
            ..Default::default()
        }
    }
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Profile editor page.
#[derive(Template, WebTemplate)]
#[template(path = "admin/profile.html")]
pub struct ProfileTemplate {
    pub nav: Vec<NavLink>,
    pub form: ProfileForm,
    pub flash: String,
}

/// GET /admin/profile
pub async fn edit(_: RequireAuth, State(state): State<AppState>) -> ProfileTemplate {
    let content = state.content().await;
    ProfileTemplate {
        nav: nav(AdminSection::Profile),
        form: ProfileForm::from_snapshot(content.snapshot()),
        flash: String::new(),
    }
}

/// POST /admin/profile
#[instrument(skip_all)]
pub async fn update(
    _: RequireAuth,
    State(state): State<AppState>,
    Form(form): Form<ProfileForm>,
) -> Result<ProfileTemplate> {
    state.content_mut().await.update_data(form.to_patch()).await?;
    tracing::info!("Profile saved");
    add_breadcrumb("admin", AdminSection::Profile.saved_message());

    Ok(ProfileTemplate {
        nav: nav(AdminSection::Profile),
        form,
        flash: AdminSection::Profile.saved_message().to_string(),
    })
}
