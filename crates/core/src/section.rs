//! Admin sections.

use core::fmt;

/// One page of the admin area.
///
/// The set is closed: the route table, the sidebar and the editors are all
/// derived from [`AdminSection::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdminSection {
    Overview,
    Profile,
    Services,
    Experience,
    Projects,
    Testimonials,
}

impl AdminSection {
    /// Every section, in sidebar order.
    pub const ALL: [Self; 6] = [
        Self::Overview,
        Self::Profile,
        Self::Services,
        Self::Experience,
        Self::Projects,
        Self::Testimonials,
    ];

    /// Path segment below `/admin` (empty for the overview).
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Overview => "",
            Self::Profile => "profile",
            Self::Services => "services",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Testimonials => "testimonials",
        }
    }

    /// Absolute path of the section.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Overview => "/admin",
            Self::Profile => "/admin/profile",
            Self::Services => "/admin/services",
            Self::Experience => "/admin/experience",
            Self::Projects => "/admin/projects",
            Self::Testimonials => "/admin/testimonials",
        }
    }

    /// Sidebar label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Profile => "Profile Info",
            Self::Services => "Services",
            Self::Experience => "Experience",
            Self::Projects => "Projects",
            Self::Testimonials => "Testimonials",
        }
    }

    /// Confirmation shown after a successful save.
    #[must_use]
    pub const fn saved_message(self) -> &'static str {
        match self {
            Self::Overview => "Content reset to default.",
            Self::Profile => "Profile updated!",
            Self::Services => "Services saved successfully!",
            Self::Experience => "Experience saved successfully!",
            Self::Projects => "Projects saved successfully!",
            Self::Testimonials => "Testimonials saved successfully!",
        }
    }

    /// Look up a section by the path below `/admin`.
    ///
    /// Leading and trailing slashes are ignored, so `""`, `"/"` and
    /// `"/projects/"` all resolve. Unknown paths return `None`.
    #[must_use]
    pub fn from_subpath(subpath: &str) -> Option<Self> {
        let slug = subpath.trim_matches('/');
        Self::ALL.into_iter().find(|s| s.slug() == slug)
    }
}

impl fmt::Display for AdminSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overview_matches_empty_and_slash() {
        assert_eq!(AdminSection::from_subpath(""), Some(AdminSection::Overview));
        assert_eq!(AdminSection::from_subpath("/"), Some(AdminSection::Overview));
    }

    #[test]
    fn test_known_subpaths() {
        assert_eq!(
            AdminSection::from_subpath("/testimonials"),
            Some(AdminSection::Testimonials)
        );
        assert_eq!(
            AdminSection::from_subpath("projects/"),
            Some(AdminSection::Projects)
        );
    }

    #[test]
    fn test_unknown_subpath() {
        assert_eq!(AdminSection::from_subpath("/billing"), None);
        assert_eq!(AdminSection::from_subpath("/projects/extra"), None);
    }

    #[test]
    fn test_paths_agree_with_slugs() {
        for section in AdminSection::ALL {
            let expected = if section.slug().is_empty() {
                "/admin".to_string()
            } else {
                format!("/admin/{}", section.slug())
            };
            assert_eq!(section.path(), expected);
        }
    }
}
