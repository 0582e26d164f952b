//! Testimonials editor.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State};
use folio_core::{AdminSection, Snapshot, SnapshotPatch, Testimonial, TestimonialId};
use tracing::instrument;

use super::draft::{DraftRow, Editor, FieldMap, PostedFields, field};
use super::{NavLink, nav};
use crate::error::Result;
use crate::filters;
use crate::middleware::RequireAuth;
use crate::state::AppState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestimonialRow {
    pub id: String,
    pub name: String,
    pub role: String,
    pub company: String,
    pub text: String,
    pub avatar: String,
}

impl DraftRow for TestimonialRow {
    type Item = Testimonial;

    const SECTION: AdminSection = AdminSection::Testimonials;
    const PREPEND: bool = false;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_item(testimonial: &Testimonial) -> Self {
        Self {
            id: testimonial.id.to_string(),
            name: testimonial.name.clone(),
            role: testimonial.role.clone(),
            company: testimonial.company.clone(),
            text: testimonial.text.clone(),
            avatar: testimonial.avatar.clone(),
        }
    }

    fn from_fields(fields: &FieldMap) -> Self {
        Self {
            id: field(fields, "id"),
            name: field(fields, "name"),
            role: field(fields, "role"),
            company: field(fields, "company"),
            text: field(fields, "text"),
            avatar: field(fields, "avatar"),
        }
    }

    fn placeholder(id: String) -> Self {
        Self::from_item(&Testimonial::placeholder(TestimonialId::new(id)))
    }

    fn to_item(&self) -> std::result::Result<Testimonial, String> {
        Ok(Testimonial {
            id: TestimonialId::new(self.id.clone()),
            name: self.name.clone(),
            role: self.role.clone(),
            company: self.company.clone(),
            text: self.text.clone(),
            avatar: self.avatar.clone(),
        })
    }

    fn slice(snapshot: &Snapshot) -> &[Testimonial] {
        &snapshot.testimonials
    }

    fn patch(items: Vec<Testimonial>) -> SnapshotPatch {
        SnapshotPatch {
            testimonials: Some(items),
            ..Default::default()
        }
    }
}

/// Testimonials editor page.
#[derive(Template, WebTemplate)]
#[template(path = "admin/testimonials.html")]
pub struct TestimonialsTemplate {
    pub nav: Vec<NavLink>,
    pub rows: Vec<TestimonialRow>,
    pub flash: String,
    pub error: String,
}

impl From<Editor<TestimonialRow>> for TestimonialsTemplate {
    fn from(editor: Editor<TestimonialRow>) -> Self {
        Self {
            nav: nav(AdminSection::Testimonials),
            rows: editor.rows,
            flash: editor.flash,
            error: editor.error,
        }
    }
}

/// GET /admin/testimonials
pub async fn edit(_: RequireAuth, State(state): State<AppState>) -> TestimonialsTemplate {
    Editor::load(state.content().await.snapshot()).into()
}

/// POST /admin/testimonials
#[instrument(skip_all)]
pub async fn update(
    _: RequireAuth,
    State(state): State<AppState>,
    Form(fields): Form<PostedFields>,
) -> Result<TestimonialsTemplate> {
    Ok(Editor::<TestimonialRow>::handle(&state, fields).await?.into())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use folio_core::seed;

    use super::*;

    #[test]
    fn test_row_round_trip() {
        let testimonial = seed().testimonials[0].clone();
        let row = TestimonialRow::from_item(&testimonial);
        assert_eq!(row.id, testimonial.id.as_str());
        assert_eq!(row.to_item().unwrap(), testimonial);
    }

    #[test]
    fn test_add_appends_placeholder() {
        let seed = seed();
        let mut editor = Editor::<TestimonialRow>::load(&seed);
        editor.add();

        assert_eq!(editor.rows.first().unwrap().id, seed.testimonials[0].id.as_str());
        let last = editor.rows.last().unwrap();
        assert_eq!(last.name, "Client Name");
        assert_eq!(last.text, "Feedback text...");
        assert_eq!(editor.items().unwrap().len(), seed.testimonials.len() + 1);
    }

    #[test]
    fn test_patch_touches_only_testimonials() {
        let patch = TestimonialRow::patch(seed().testimonials);
        assert_eq!(patch.fields(), vec!["testimonials"]);
    }

    #[test]
    fn test_page_renders_rows() {
        let seed = seed();
        let html = TestimonialsTemplate::from(Editor::<TestimonialRow>::load(&seed))
            .render()
            .unwrap();
        assert!(html.contains(&format!("remove:{}", seed.testimonials[0].id)));
        assert!(html.contains(r#"name="action" value="add">Add New</button>"#));
    }
}
