//! Projects editor.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State};
use folio_core::text::{join_tags, split_tags};
use folio_core::{AdminSection, Project, ProjectId, Snapshot, SnapshotPatch};
use tracing::instrument;

use super::draft::{DraftRow, Editor, FieldMap, PostedFields, field};
use super::{NavLink, nav};
use crate::error::Result;
use crate::filters;
use crate::middleware::RequireAuth;
use crate::state::AppState;

/// Editable project. Tags are one comma-separated string; an empty link
/// means none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRow {
    pub id: String,
    pub title: String,
    pub description: String,
    pub link: String,
    pub tags: String,
    pub image: String,
}

impl DraftRow for ProjectRow {
    type Item = Project;

    const SECTION: AdminSection = AdminSection::Projects;
    const PREPEND: bool = true;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_item(project: &Project) -> Self {
        Self {
            id: project.id.to_string(),
            title: project.title.clone(),
            description: project.description.clone(),
            link: project.link.clone().unwrap_or_default(),
            tags: join_tags(&project.tags),
            image: project.image.clone(),
        }
    }

    fn from_fields(fields: &FieldMap) -> Self {
        Self {
            id: field(fields, "id"),
            title: field(fields, "title"),
            description: field(fields, "description"),
            link: field(fields, "link"),
            tags: field(fields, "tags"),
            image: field(fields, "image"),
        }
    }

    fn placeholder(id: String) -> Self {
        Self::from_item(&Project::placeholder(ProjectId::new(id)))
    }

    fn to_item(&self) -> std::result::Result<Project, String> {
        let link = self.link.trim();
        Ok(Project {
            id: ProjectId::new(self.id.clone()),
            title: self.title.clone(),
            description: self.description.clone(),
            link: (!link.is_empty()).then(|| link.to_string()),
            tags: split_tags(&self.tags),
            image: self.image.clone(),
        })
    }

    fn slice(snapshot: &Snapshot) -> &[Project] {
        &snapshot.projects
    }

    fn patch(items: Vec<Project>) -> SnapshotPatch {
        SnapshotPatch {
            projects: Some(items),
            ..Default::default()
        }
    }
}

/// Projects editor page.
#[derive(Template, WebTemplate)]
#[template(path = "admin/projects.html")]
pub struct ProjectsTemplate {
    pub nav: Vec<NavLink>,
    pub rows: Vec<ProjectRow>,
    pub flash: String,
    pub error: String,
}

impl From<Editor<ProjectRow>> for ProjectsTemplate {
    fn from(editor: Editor<ProjectRow>) -> Self {
        Self {
            nav: nav(AdminSection::Projects),
            rows: editor.rows,
            flash: editor.flash,
            error: editor.error,
        }
    }
}

/// GET /admin/projects
pub async fn edit(_: RequireAuth, State(state): State<AppState>) -> ProjectsTemplate {
    Editor::load(state.content().await.snapshot()).into()
}

/// POST /admin/projects
#[instrument(skip_all)]
pub async fn update(
    _: RequireAuth,
    State(state): State<AppState>,
    Form(fields): Form<PostedFields>,
) -> Result<ProjectsTemplate> {
    Ok(Editor::<ProjectRow>::handle(&state, fields).await?.into())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use folio_core::seed;

    use super::*;

    #[test]
    fn test_row_round_trip_normalizes_tags_and_link() {
        let row = ProjectRow {
            id: "p9".to_string(),
            title: "T".to_string(),
            description: "D".to_string(),
            link: "  ".to_string(),
            tags: "Rust,  Axum , ".to_string(),
            image: "https://example.com/i.png".to_string(),
        };

        let project = row.to_item().unwrap();
        assert_eq!(project.link, None);
        assert_eq!(project.tags, vec!["Rust".to_string(), "Axum".to_string()]);
        assert_eq!(ProjectRow::from_item(&project).tags, "Rust, Axum");
    }

    #[test]
    fn test_add_prepends_placeholder() {
        let mut editor = Editor::<ProjectRow>::load(&seed());
        editor.add();

        let first = editor.rows.first().unwrap();
        assert_eq!(first.title, "New Project Title");
        assert_eq!(first.tags, "Web, React");
        assert_eq!(editor.rows.len(), seed().projects.len() + 1);
    }

    #[test]
    fn test_remove_only_touches_draft() {
        let snapshot = seed();
        let mut editor = Editor::<ProjectRow>::load(&snapshot);
        editor.remove("p2");

        assert!(editor.rows.iter().all(|r| r.id != "p2"));
        assert_eq!(snapshot.projects.len(), 4);
    }

    #[test]
    fn test_page_renders_rows() {
        let html = ProjectsTemplate::from(Editor::<ProjectRow>::load(&seed()))
            .render()
            .unwrap();
        assert!(html.contains("Manage Projects"));
        assert!(html.contains("remove:p1"));

        let save = html.find(r#"name="action" value="save""#).unwrap();
        let add = html.find(r#"name="action" value="add""#).unwrap();
        assert!(save < add);
    }
}
