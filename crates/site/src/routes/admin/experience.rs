//! Experience editor. Bullet points are edited one per line.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State};
use folio_core::text::{join_lines, split_lines};
use folio_core::{AdminSection, Experience, ExperienceId, Snapshot, SnapshotPatch};
use tracing::instrument;

use super::draft::{DraftRow, Editor, FieldMap, PostedFields, field};
use super::{NavLink, nav};
use crate::error::Result;
use crate::filters;
use crate::middleware::RequireAuth;
use crate::state::AppState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceRow {
    pub id: String,
    pub company: String,
    pub role: String,
    pub period: String,
    pub description: String,
}

impl DraftRow for ExperienceRow {
    type Item = Experience;

    const SECTION: AdminSection = AdminSection::Experience;
    const PREPEND: bool = true;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_item(experience: &Experience) -> Self {
        Self {
            id: experience.id.to_string(),
            company: experience.company.clone(),
            role: experience.role.clone(),
            period: experience.period.clone(),
            description: join_lines(&experience.description),
        }
    }

    fn from_fields(fields: &FieldMap) -> Self {
        Self {
            id: field(fields, "id"),
            company: field(fields, "company"),
            role: field(fields, "role"),
            period: field(fields, "period"),
            description: field(fields, "description"),
        }
    }

    fn placeholder(id: String) -> Self {
        Self::from_item(&Experience::placeholder(ExperienceId::new(id)))
    }

    fn to_item(&self) -> std::result::Result<Experience, String> {
        Ok(Experience {
            id: ExperienceId::new(self.id.clone()),
            company: self.company.clone(),
            role: self.role.clone(),
            period: self.period.clone(),
            description: split_lines(&self.description),
        })
    }

    fn slice(snapshot: &Snapshot) -> &[Experience] {
        &snapshot.experience
    }

    fn patch(items: Vec<Experience>) -> SnapshotPatch {
        SnapshotPatch {
            experience: Some(items),
            ..Default::default()
        }
    }
}

/// Experience editor page.
#[derive(Template, WebTemplate)]
#[template(path = "admin/experience.html")]
pub struct ExperienceTemplate {
    pub nav: Vec<NavLink>,
    pub rows: Vec<ExperienceRow>,
    pub flash: String,
    pub error: String,
}

impl From<Editor<ExperienceRow>> for ExperienceTemplate {
    fn from(editor: Editor<ExperienceRow>) -> Self {
        Self {
            nav: nav(AdminSection::Experience),
            rows: editor.rows,
            flash: editor.flash,
            error: editor.error,
        }
    }
}

/// GET /admin/experience
pub async fn edit(_: RequireAuth, State(state): State<AppState>) -> ExperienceTemplate {
    Editor::load(state.content().await.snapshot()).into()
}

/// POST /admin/experience
#[instrument(skip_all)]
pub async fn update(
    _: RequireAuth,
    State(state): State<AppState>,
    Form(fields): Form<PostedFields>,
) -> Result<ExperienceTemplate> {
    Ok(Editor::<ExperienceRow>::handle(&state, fields).await?.into())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_description_lines_are_split_on_save() {
        let row = ExperienceRow {
            id: "e9".to_string(),
            company: "Acme".to_string(),
            role: "Engineer".to_string(),
            period: "2020 - 2021".to_string(),
            description: "Built things\r\n\r\n  Shipped things  \r\n".to_string(),
        };

        let item = row.to_item().unwrap();
        assert_eq!(
            item.description,
            vec!["Built things".to_string(), "Shipped things".to_string()]
        );
    }

    #[test]
    fn test_placeholder() {
        let row = ExperienceRow::placeholder("123".to_string());
        assert_eq!(row.company, "Company Name");
        assert_eq!(row.description, "Responsibility 1");
    }

    #[test]
    fn test_page_renders_editor_buttons() {
        let html = ExperienceTemplate::from(Editor::<ExperienceRow>::load(&folio_core::seed()))
            .render()
            .unwrap();
        let add = r#"class="btn btn-outline btn-md" name="action" value="add">Add Job</button>"#;
        assert!(html.contains(add));
        assert!(html.contains(r#"name="action" value="save">Save Changes</button>"#));
    }
}
