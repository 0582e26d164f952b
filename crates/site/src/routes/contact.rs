//! Contact form route handlers.
//!
//! The form is an HTMX fragment that replaces itself. A successful send
//! clears the fields and schedules a reload of the idle form; a failed send
//! keeps what the visitor typed.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State};
use folio_core::{ContactForm, ContactStatus};
use tracing::instrument;

use crate::state::AppState;

/// Contact form fragment.
#[derive(Debug, Clone, Template, WebTemplate)]
#[template(path = "contact/form.html")]
pub struct ContactFormTemplate {
    pub form: ContactForm,
    pub sent: bool,
    pub failed: bool,
    /// Delay before the banner is replaced by the idle form, zero if it
    /// stays.
    pub reset_after_ms: u128,
}

impl ContactFormTemplate {
    /// Empty form with no banner.
    #[must_use]
    pub fn idle() -> Self {
        Self::for_status(ContactStatus::Idle, ContactForm::default())
    }

    fn for_status(status: ContactStatus, form: ContactForm) -> Self {
        let sent = status == ContactStatus::Success;
        Self {
            form: if sent { ContactForm::default() } else { form },
            sent,
            failed: status == ContactStatus::Error,
            reset_after_ms: status.display_for().unwrap_or_default().as_millis(),
        }
    }
}

/// Idle contact form (HTMX), fetched when a success banner expires.
pub async fn form() -> ContactFormTemplate {
    ContactFormTemplate::idle()
}

/// Send a contact message through the mail relay (HTMX).
///
/// Always answers with the form fragment: a success banner and empty fields,
/// or an error banner and the submitted fields.
#[instrument(skip_all, fields(email_domain = %form.email_domain()))]
pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<ContactForm>,
) -> ContactFormTemplate {
    let delivered = match state.relay().send(&form).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to relay contact message");
            false
        }
    };

    ContactFormTemplate::for_status(ContactStatus::after_send(delivered), form)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "A project".to_string(),
        }
    }

    #[test]
    fn test_success_clears_fields() {
        let page = ContactFormTemplate::for_status(ContactStatus::Success, filled());
        assert!(page.sent);
        assert!(!page.failed);
        assert_eq!(page.form, ContactForm::default());

        let html = page.render().unwrap();
        assert!(html.contains("Message sent successfully!"));
        assert!(html.contains("load delay:5000ms"));
    }

    #[test]
    fn test_error_keeps_fields() {
        let page = ContactFormTemplate::for_status(ContactStatus::Error, filled());
        assert!(page.failed);
        assert_eq!(page.form, filled());

        let html = page.render().unwrap();
        assert!(html.contains("Something went wrong. Please try again later."));
        assert!(html.contains("value=\"ada@example.com\""));
        assert_eq!(page.reset_after_ms, 0);
        assert!(!html.contains("/contact/form"));
    }

    #[test]
    fn test_idle_has_no_banner() {
        let html = ContactFormTemplate::idle().render().unwrap();
        assert!(!html.contains("Message sent successfully!"));
        assert!(!html.contains("Something went wrong"));
        assert!(html.contains("Send Message"));
    }
}
