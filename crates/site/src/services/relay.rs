//! Mail relay client for the contact form.
//!
//! The relay is a third-party HTTP endpoint that accepts a JSON body and
//! emails it to the site owner. Any 2xx response counts as delivered; the
//! body is ignored. There is no retry.

use async_trait::async_trait;
use folio_core::ContactForm;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use thiserror::Error;
use url::Url;

use crate::config::RelayConfig;

/// Errors that can occur when relaying a message.
#[derive(Debug, Error)]
pub enum RelayError {
    /// HTTP request failed or timed out.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Relay answered with a non-success status.
    #[error("Relay rejected the message with status {status}")]
    Rejected { status: u16 },
}

/// Something that can deliver a contact form submission.
#[async_trait]
pub trait ContactRelay: Send + Sync {
    /// Deliver one submission.
    async fn send(&self, form: &ContactForm) -> Result<(), RelayError>;
}

/// Relay client for FormSubmit-style AJAX endpoints.
#[derive(Debug, Clone)]
pub struct FormSubmitRelay {
    client: reqwest::Client,
    endpoint: Url,
}

impl FormSubmitRelay {
    /// Create a relay client.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &RelayConfig) -> Result<Self, RelayError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }
}

#[async_trait]
impl ContactRelay for FormSubmitRelay {
    #[tracing::instrument(skip_all, fields(endpoint = %self.endpoint))]
    async fn send(&self, form: &ContactForm) -> Result<(), RelayError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&form.to_payload())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RelayError::Rejected {
                status: status.as_u16(),
            });
        }

        tracing::info!(status = status.as_u16(), "Contact message relayed");
        Ok(())
    }
}
