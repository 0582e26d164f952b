//! Services editor.
//!
//! The icon is typed by name and checked against the known icons only on
//! save, so a typo is shown back with an error instead of being dropped.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State};
use folio_core::{AdminSection, Service, ServiceIcon, ServiceId, Snapshot, SnapshotPatch};
use tracing::instrument;

use super::draft::{DraftRow, Editor, FieldMap, PostedFields, field};
use super::{NavLink, nav};
use crate::error::Result;
use crate::filters;
use crate::middleware::RequireAuth;
use crate::state::AppState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRow {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
}

impl DraftRow for ServiceRow {
    type Item = Service;

    const SECTION: AdminSection = AdminSection::Services;
    const PREPEND: bool = false;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_item(service: &Service) -> Self {
        Self {
            id: service.id.to_string(),
            title: service.title.clone(),
            description: service.description.clone(),
            icon: service.icon.name().to_string(),
        }
    }

    fn from_fields(fields: &FieldMap) -> Self {
        Self {
            id: field(fields, "id"),
            title: field(fields, "title"),
            description: field(fields, "description"),
            icon: field(fields, "icon"),
        }
    }

    fn placeholder(id: String) -> Self {
        Self::from_item(&Service::placeholder(ServiceId::new(id)))
    }

    fn to_item(&self) -> std::result::Result<Service, String> {
        let icon = ServiceIcon::parse(&self.icon)
            .map_err(|e| format!("Service \"{}\": {e}", self.title))?;
        Ok(Service {
            id: ServiceId::new(self.id.clone()),
            title: self.title.clone(),
            description: self.description.clone(),
            icon,
        })
    }

    fn slice(snapshot: &Snapshot) -> &[Service] {
        &snapshot.services
    }

    fn patch(items: Vec<Service>) -> SnapshotPatch {
        SnapshotPatch {
            services: Some(items),
            ..Default::default()
        }
    }
}

/// Services editor page.
#[derive(Template, WebTemplate)]
#[template(path = "admin/services.html")]
pub struct ServicesTemplate {
    pub nav: Vec<NavLink>,
    pub rows: Vec<ServiceRow>,
    pub flash: String,
    pub error: String,
    /// Names offered as suggestions in the icon field.
    pub icons: Vec<&'static str>,
}

impl From<Editor<ServiceRow>> for ServicesTemplate {
    fn from(editor: Editor<ServiceRow>) -> Self {
        Self {
            nav: nav(AdminSection::Services),
            rows: editor.rows,
            flash: editor.flash,
            error: editor.error,
            icons: ServiceIcon::ALL.iter().map(|icon| icon.name()).collect(),
        }
    }
}

/// GET /admin/services
pub async fn edit(_: RequireAuth, State(state): State<AppState>) -> ServicesTemplate {
    Editor::load(state.content().await.snapshot()).into()
}

/// POST /admin/services
#[instrument(skip_all)]
pub async fn update(
    _: RequireAuth,
    State(state): State<AppState>,
    Form(fields): Form<PostedFields>,
) -> Result<ServicesTemplate> {
    Ok(Editor::<ServiceRow>::handle(&state, fields).await?.into())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use folio_core::seed;

    use super::*;

    #[test]
    fn test_unknown_icon_rejects_save() {
        let mut editor = Editor::<ServiceRow>::load(&seed());
        editor.rows[0].icon = "Rocket".to_string();

        let err = editor.items().unwrap_err();
        assert!(err.contains("Rocket"));
        assert!(err.contains(seed().services[0].title.as_str()));
    }

    #[test]
    fn test_add_appends_placeholder() {
        let mut editor = Editor::<ServiceRow>::load(&seed());
        editor.add();

        let last = editor.rows.last().unwrap();
        assert_eq!(last.title, "New Service");
        assert_eq!(last.icon, "Code");
        assert_eq!(editor.items().unwrap().len(), seed().services.len() + 1);
    }

    #[test]
    fn test_page_shows_error_and_typed_icon() {
        let mut editor = Editor::<ServiceRow>::load(&seed());
        editor.rows[0].icon = "Rocket".to_string();
        editor.error = editor.items().unwrap_err();

        let html = ServicesTemplate::from(editor).render().unwrap();
        assert!(html.contains("value=\"Rocket\""));
        assert!(html.contains("unknown service icon"));
    }
}
