//! Service icons.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when an icon name is not one of the known icons.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown service icon \"{name}\" (expected one of: Globe, Smartphone, Database, ShoppingCart, Code)")]
pub struct IconParseError {
    /// The rejected name.
    pub name: String,
}

/// The glyph shown next to a service.
///
/// Stored by name (`"Globe"`, `"ShoppingCart"`, ...). Every variant has a
/// glyph; a name outside this set fails to parse rather than silently
/// rendering a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ServiceIcon {
    Globe,
    Smartphone,
    Database,
    ShoppingCart,
    #[default]
    Code,
}

impl ServiceIcon {
    /// Every icon, in the order offered by the services editor.
    pub const ALL: [Self; 5] = [
        Self::Globe,
        Self::Smartphone,
        Self::Database,
        Self::ShoppingCart,
        Self::Code,
    ];

    /// The stored name of this icon.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Globe => "Globe",
            Self::Smartphone => "Smartphone",
            Self::Database => "Database",
            Self::ShoppingCart => "ShoppingCart",
            Self::Code => "Code",
        }
    }

    /// Inline SVG markup for this icon (24x24 stroke icons).
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Globe => concat!(
                r#"<svg class="icon" viewBox="0 0 24 24" aria-hidden="true">"#,
                r#"<circle cx="12" cy="12" r="10"/>"#,
                r#"<path d="M2 12h20M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z"/>"#,
                "</svg>"
            ),
            Self::Smartphone => concat!(
                r#"<svg class="icon" viewBox="0 0 24 24" aria-hidden="true">"#,
                r#"<rect x="5" y="2" width="14" height="20" rx="2" ry="2"/>"#,
                r#"<path d="M12 18h.01"/>"#,
                "</svg>"
            ),
            Self::Database => concat!(
                r#"<svg class="icon" viewBox="0 0 24 24" aria-hidden="true">"#,
                r#"<ellipse cx="12" cy="5" rx="9" ry="3"/>"#,
                r#"<path d="M3 5v14c0 1.66 4 3 9 3s9-1.34 9-3V5"/>"#,
                r#"<path d="M3 12c0 1.66 4 3 9 3s9-1.34 9-3"/>"#,
                "</svg>"
            ),
            Self::ShoppingCart => concat!(
                r#"<svg class="icon" viewBox="0 0 24 24" aria-hidden="true">"#,
                r#"<circle cx="9" cy="21" r="1"/><circle cx="20" cy="21" r="1"/>"#,
                r#"<path d="M1 1h4l2.68 13.39a2 2 0 0 0 2 1.61h9.72a2 2 0 0 0 2-1.61L23 6H6"/>"#,
                "</svg>"
            ),
            Self::Code => concat!(
                r#"<svg class="icon" viewBox="0 0 24 24" aria-hidden="true">"#,
                r#"<path d="M16 18l6-6-6-6M8 6l-6 6 6 6"/>"#,
                "</svg>"
            ),
        }
    }

    /// Parse an icon name, ignoring surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`IconParseError`] if the name is not a known icon.
    pub fn parse(name: &str) -> Result<Self, IconParseError> {
        let trimmed = name.trim();
        Self::ALL
            .into_iter()
            .find(|icon| icon.name() == trimmed)
            .ok_or_else(|| IconParseError {
                name: trimmed.to_owned(),
            })
    }
}

impl fmt::Display for ServiceIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for ServiceIcon {
    type Err = IconParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_every_icon_round_trips_by_name() {
        for icon in ServiceIcon::ALL {
            assert_eq!(ServiceIcon::parse(icon.name()).unwrap(), icon);
            assert!(icon.glyph().starts_with("<svg"));
        }
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(ServiceIcon::parse("  Globe ").unwrap(), ServiceIcon::Globe);
    }

    #[test]
    fn test_unknown_icon_is_an_error() {
        let err = ServiceIcon::parse("Rocket").unwrap_err();
        assert_eq!(err.name, "Rocket");
        assert!(err.to_string().contains("Rocket"));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!(ServiceIcon::parse("globe").is_err());
    }

    #[test]
    fn test_serde_uses_names() {
        let json = serde_json::to_string(&ServiceIcon::ShoppingCart).unwrap();
        assert_eq!(json, "\"ShoppingCart\"");
        assert!(serde_json::from_str::<ServiceIcon>("\"Rocket\"").is_err());
    }
}
