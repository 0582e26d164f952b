//! Contact form model.
//!
//! A submission moves through `Idle -> Submitting -> {Success, Error}`.
//! Success is shown for [`SUCCESS_DISPLAY`] and then reverts to idle so the
//! visitor can write again; an error stays until the visitor resubmits.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How long the success banner stays up before the form returns to idle.
pub const SUCCESS_DISPLAY: Duration = Duration::from_secs(5);

/// Rendering hint passed to the mail relay.
pub const RELAY_TEMPLATE: &str = "table";

/// Subject used when the visitor leaves the subject blank.
const NO_SUBJECT: &str = "No Subject";

/// The four fields a visitor fills in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

impl ContactForm {
    /// Subject line of the relayed email.
    #[must_use]
    pub fn relay_subject(&self) -> String {
        let subject = self.subject.trim();
        let subject = if subject.is_empty() { NO_SUBJECT } else { subject };
        format!("New Portfolio Message: {subject}")
    }

    /// Domain part of the visitor's address, empty if there is none.
    #[must_use]
    pub fn email_domain(&self) -> &str {
        self.email.rsplit_once('@').map_or("", |(_, domain)| domain.trim())
    }

    /// Body sent to the mail relay.
    #[must_use]
    pub fn to_payload(&self) -> RelayPayload<'_> {
        RelayPayload {
            name: &self.name,
            email: &self.email,
            subject: &self.subject,
            message: &self.message,
            relay_subject: self.relay_subject(),
            template: RELAY_TEMPLATE,
        }
    }
}

/// JSON body accepted by the mail relay: the form fields plus two
/// underscore-prefixed control fields.
#[derive(Debug, Serialize)]
pub struct RelayPayload<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub subject: &'a str,
    pub message: &'a str,
    #[serde(rename = "_subject")]
    pub relay_subject: String,
    #[serde(rename = "_template")]
    pub template: &'static str,
}

/// Visible state of the contact form, as rendered by the server.
///
/// The in-flight state lives in the browser: the submit button is disabled
/// and reads "Sending..." while the request is pending, which also keeps a
/// second submission from starting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactStatus {
    #[default]
    Idle,
    Success,
    Error,
}

impl ContactStatus {
    /// Status after the relay answered.
    #[must_use]
    pub const fn after_send(delivered: bool) -> Self {
        if delivered { Self::Success } else { Self::Error }
    }

    /// How long this status is shown before the form returns to idle.
    ///
    /// Only success expires; an error stays until the visitor resubmits.
    #[must_use]
    pub const fn display_for(self) -> Option<Duration> {
        match self {
            Self::Success => Some(SUCCESS_DISPLAY),
            Self::Idle | Self::Error => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn form() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Let's build something".to_string(),
        }
    }

    #[test]
    fn test_relay_subject() {
        assert_eq!(form().relay_subject(), "New Portfolio Message: Hello");

        let blank = ContactForm {
            subject: "   ".to_string(),
            ..form()
        };
        assert_eq!(blank.relay_subject(), "New Portfolio Message: No Subject");
    }

    #[test]
    fn test_payload_json_shape() {
        let form = form();
        let json = serde_json::to_value(form.to_payload()).unwrap();
        assert_eq!(json["name"], "Ada");
        assert_eq!(json["email"], "ada@example.com");
        assert_eq!(json["subject"], "Hello");
        assert_eq!(json["message"], "Let's build something");
        assert_eq!(json["_subject"], "New Portfolio Message: Hello");
        assert_eq!(json["_template"], "table");
        assert_eq!(json.as_object().unwrap().len(), 6);
    }

    #[test]
    fn test_status_after_send() {
        assert_eq!(ContactStatus::after_send(true), ContactStatus::Success);
        assert_eq!(ContactStatus::after_send(false), ContactStatus::Error);
    }

    #[test]
    fn test_only_success_expires() {
        assert_eq!(ContactStatus::Success.display_for(), Some(SUCCESS_DISPLAY));
        assert_eq!(ContactStatus::Error.display_for(), None);
        assert_eq!(ContactStatus::Idle.display_for(), None);
    }

    #[test]
    fn test_email_domain() {
        assert_eq!(form().email_domain(), "example.com");

        let odd = ContactForm {
            email: "no-at-sign".to_string(),
            ..form()
        };
        assert_eq!(odd.email_domain(), "");
    }
}
