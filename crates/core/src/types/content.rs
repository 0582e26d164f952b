//! Portfolio content entities.
//!
//! [`Snapshot`] is the single unit of persistence: the whole thing is
//! serialized, stored and replaced at once. Editors commit one slice at a
//! time through a [`SnapshotPatch`].

use serde::{Deserialize, Serialize};

use super::icon::ServiceIcon;
use super::id::{ExperienceId, ProjectId, ServiceId, TestimonialId};

/// Links to the owner's social profiles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Socials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
}

/// The site owner's profile. Exactly one per snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub summary: String,
    #[serde(default)]
    pub socials: Socials,
}

/// A service offered, shown in the "What I Do" section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: ServiceId,
    pub title: String,
    pub description: String,
    pub icon: ServiceIcon,
}

impl Service {
    /// A new service with placeholder text, appended by the editor.
    #[must_use]
    pub fn placeholder(id: ServiceId) -> Self {
        Self {
            id,
            title: "New Service".to_string(),
            description: "Service description...".to_string(),
            icon: ServiceIcon::Code,
        }
    }
}

/// A past or current position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub id: ExperienceId,
    pub company: String,
    pub role: String,
    /// Free text, e.g. "Mar 2022 - Oct 2024".
    pub period: String,
    /// Bullet points, in display order.
    pub description: Vec<String>,
}

impl Experience {
    /// A new position with placeholder text, prepended by the editor.
    #[must_use]
    pub fn placeholder(id: ExperienceId) -> Self {
        Self {
            id,
            company: "Company Name".to_string(),
            role: "Job Title".to_string(),
            period: "2024 - Present".to_string(),
            description: vec!["Responsibility 1".to_string()],
        }
    }
}

/// A showcased project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub tags: Vec<String>,
    /// Image URL.
    pub image: String,
}

impl Project {
    /// A new project with placeholder text, prepended by the editor.
    #[must_use]
    pub fn placeholder(id: ProjectId) -> Self {
        Self {
            id,
            title: "New Project Title".to_string(),
            description: "Describe the project here...".to_string(),
            link: Some("https://example.com".to_string()),
            tags: vec!["Web".to_string(), "React".to_string()],
            image: "https://picsum.photos/seed/new/800/600".to_string(),
        }
    }
}

/// A client testimonial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: TestimonialId,
    pub name: String,
    pub role: String,
    pub company: String,
    pub text: String,
    /// Avatar image URL.
    pub avatar: String,
}

impl Testimonial {
    /// A new testimonial with placeholder text, appended by the editor.
    #[must_use]
    pub fn placeholder(id: TestimonialId) -> Self {
        Self {
            id,
            name: "Client Name".to_string(),
            role: "Client Role".to_string(),
            company: "Company".to_string(),
            text: "Feedback text...".to_string(),
            avatar: "https://picsum.photos/100/100".to_string(),
        }
    }
}

/// All editable portfolio content at a point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub profile: Profile,
    pub skills: Vec<String>,
    pub services: Vec<Service>,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub testimonials: Vec<Testimonial>,
}

impl Snapshot {
    /// Shallow-merge `patch` over this snapshot.
    ///
    /// Every field present in the patch replaces the corresponding field
    /// wholesale; absent fields are kept.
    #[must_use]
    pub fn merge(self, patch: SnapshotPatch) -> Self {
        Self {
            profile: patch.profile.unwrap_or(self.profile),
            skills: patch.skills.unwrap_or(self.skills),
            services: patch.services.unwrap_or(self.services),
            experience: patch.experience.unwrap_or(self.experience),
            projects: patch.projects.unwrap_or(self.projects),
            testimonials: patch.testimonials.unwrap_or(self.testimonials),
        }
    }

    /// Ids that appear more than once within their list, as `(list, id)`.
    #[must_use]
    pub fn duplicate_ids(&self) -> Vec<(&'static str, String)> {
        let mut duplicates = Vec::new();
        collect_duplicates(
            "services",
            self.services.iter().map(|s| s.id.as_str()),
            &mut duplicates,
        );
        collect_duplicates(
            "experience",
            self.experience.iter().map(|e| e.id.as_str()),
            &mut duplicates,
        );
        collect_duplicates(
            "projects",
            self.projects.iter().map(|p| p.id.as_str()),
            &mut duplicates,
        );
        collect_duplicates(
            "testimonials",
            self.testimonials.iter().map(|t| t.id.as_str()),
            &mut duplicates,
        );
        duplicates
    }
}

fn collect_duplicates<'a>(
    list: &'static str,
    ids: impl Iterator<Item = &'a str>,
    out: &mut Vec<(&'static str, String)>,
) {
    let mut seen = std::collections::HashSet::new();
    for id in ids {
        if !seen.insert(id) && !out.iter().any(|(l, d)| *l == list && d == id) {
            out.push((list, id.to_owned()));
        }
    }
}

/// A partial snapshot: the fields an editor wants to replace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<Service>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<Vec<Experience>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<Project>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub testimonials: Option<Vec<Testimonial>>,
}

impl SnapshotPatch {
    /// Names of the top-level fields this patch replaces, for logging.
    #[must_use]
    pub fn fields(&self) -> Vec<&'static str> {
        [
            ("profile", self.profile.is_some()),
            ("skills", self.skills.is_some()),
            ("services", self.services.is_some()),
            ("experience", self.experience.is_some()),
            ("projects", self.projects.is_some()),
            ("testimonials", self.testimonials.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, present)| present.then_some(name))
        .collect()
    }
}

impl From<Snapshot> for SnapshotPatch {
    /// A patch replacing every field.
    fn from(snapshot: Snapshot) -> Self {
        Self {
            profile: Some(snapshot.profile),
            skills: Some(snapshot.skills),
            services: Some(snapshot.services),
            experience: Some(snapshot.experience),
            projects: Some(snapshot.projects),
            testimonials: Some(snapshot.testimonials),
        }
    }
}

/// Whether the current browser has passed the admin password check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthState {
    pub is_authenticated: bool,
}
