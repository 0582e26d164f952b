//! Portfolio page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use folio_core::{Experience, Project, Service, Snapshot, Testimonial};
use tracing::instrument;

use super::SiteChrome;
use super::contact::ContactFormTemplate;
use crate::filters;
use crate::middleware::OptionalAuth;
use crate::state::AppState;

/// Skills shown in the hero.
const HERO_SKILLS: usize = 6;

/// Projects shown in the featured grid.
const FEATURED_PROJECTS: usize = 4;

/// Service card with its icon resolved to markup.
#[derive(Debug, Clone)]
pub struct ServiceCard {
    pub title: String,
    pub description: String,
    pub glyph: &'static str,
}

impl From<&Service> for ServiceCard {
    fn from(service: &Service) -> Self {
        Self {
            title: service.title.clone(),
            description: service.description.clone(),
            glyph: service.icon.glyph(),
        }
    }
}

/// Project card; `link` is empty when the project has none.
#[derive(Debug, Clone)]
pub struct ProjectCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub link: String,
    pub tags: Vec<String>,
    pub image: String,
}

impl From<&Project> for ProjectCard {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id.to_string(),
            title: project.title.clone(),
            description: project.description.clone(),
            link: project.link.clone().unwrap_or_default(),
            tags: project.tags.clone(),
            image: project.image.clone(),
        }
    }
}

/// Portfolio page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub site: SiteChrome,
    pub summary: String,
    pub hero_skills: Vec<String>,
    pub skills: Vec<String>,
    pub services: Vec<ServiceCard>,
    pub experience: Vec<Experience>,
    pub projects: Vec<ProjectCard>,
    pub testimonials: Vec<Testimonial>,
    pub contact: ContactFormTemplate,
}

impl HomeTemplate {
    fn new(snapshot: &Snapshot, is_admin: bool) -> Self {
        Self {
            site: SiteChrome::new(&snapshot.profile, is_admin),
            summary: snapshot.profile.summary.clone(),
            hero_skills: snapshot.skills.iter().take(HERO_SKILLS).cloned().collect(),
            skills: snapshot.skills.clone(),
            services: snapshot.services.iter().map(ServiceCard::from).collect(),
            experience: snapshot.experience.clone(),
            projects: snapshot
                .projects
                .iter()
                .take(FEATURED_PROJECTS)
                .map(ProjectCard::from)
                .collect(),
            testimonials: snapshot.testimonials.clone(),
            contact: ContactFormTemplate::idle(),
        }
    }
}

/// Display the portfolio page.
#[instrument(skip_all)]
pub async fn home(
    State(state): State<AppState>,
    OptionalAuth(is_admin): OptionalAuth,
) -> HomeTemplate {
    let content = state.content().await;
    HomeTemplate::new(content.snapshot(), is_admin)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use folio_core::{ProjectId, seed};

    use super::*;

    #[test]
    fn test_home_limits_hero_skills_and_projects() {
        let mut snapshot = seed();
        snapshot
            .projects
            .push(Project::placeholder(ProjectId::new("p5")));

        let page = HomeTemplate::new(&snapshot, false);
        assert_eq!(page.hero_skills.len(), HERO_SKILLS);
        assert_eq!(page.skills.len(), snapshot.skills.len());
        assert_eq!(page.projects.len(), FEATURED_PROJECTS);
        assert!(page.projects.iter().all(|p| p.id != "p5"));
    }

    #[test]
    fn test_project_card_without_link() {
        let mut project = Project::placeholder(ProjectId::new("p9"));
        project.link = None;
        assert!(ProjectCard::from(&project).link.is_empty());
    }

    #[test]
    fn test_home_renders_content() {
        let html = HomeTemplate::new(&seed(), false).render().unwrap();
        let seed = seed();
        assert!(html.contains(&seed.profile.summary));
        assert!(html.contains(seed.services[0].title.as_str()));
        assert!(html.contains(seed.testimonials[0].text.as_str()));
        assert!(html.contains("href=\"/login\""));
    }
}
