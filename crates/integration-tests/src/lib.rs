//! End-to-end tests for Folio.
//!
//! The site router is driven in-process with `tower::ServiceExt::oneshot`,
//! over in-memory storage and a fake mail relay, so no server or network is
//! needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p folio-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::missing_panics_doc, clippy::expect_used)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use folio_core::ContactForm;
use folio_site::config::{DEFAULT_ADMIN_PASSWORD, SiteConfig};
use folio_site::services::{ContactRelay, RelayError};
use folio_site::state::AppState;
use folio_site::store::{MemoryStorage, Storage};
use tower::ServiceExt;

/// A relay that records submissions and answers with a fixed outcome.
#[derive(Debug, Default)]
pub struct FakeRelay {
    fail: bool,
    sent: Mutex<Vec<ContactForm>>,
}

impl FakeRelay {
    /// A relay where every send succeeds.
    #[must_use]
    pub fn accepting() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// A relay where every send fails as if the relay were unreachable.
    #[must_use]
    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            fail: true,
            ..Self::default()
        })
    }

    /// Submissions received so far.
    #[must_use]
    pub fn sent(&self) -> Vec<ContactForm> {
        self.sent.lock().expect("relay lock poisoned").clone()
    }
}

#[async_trait]
impl ContactRelay for FakeRelay {
    async fn send(&self, form: &ContactForm) -> Result<(), RelayError> {
        self.sent.lock().expect("relay lock poisoned").push(form.clone());
        if self.fail {
            Err(RelayError::Rejected { status: 503 })
        } else {
            Ok(())
        }
    }
}

/// A response reduced to what the tests look at.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: String,
}

/// One browser talking to one app instance. Keeps the session cookie
/// between requests.
pub struct TestApp {
    router: Router,
    cookie: Option<String>,
}

impl TestApp {
    /// Build the app over `storage` with default configuration.
    pub async fn new(storage: Arc<MemoryStorage>, relay: Arc<FakeRelay>) -> Self {
        let config = SiteConfig::from_lookup(|_| None).expect("default config is valid");
        let storage: Arc<dyn Storage> = storage;
        let state = AppState::new(config, storage, relay).await;

        Self {
            router: folio_site::app(state),
            cookie: None,
        }
    }

    /// GET `path`.
    pub async fn get(&mut self, path: &str) -> TestResponse {
        let request = self.request("GET", path).body(Body::empty());
        self.send(request.expect("valid request")).await
    }

    /// POST `fields` to `path` as an urlencoded form. Repeated names are
    /// kept in order.
    pub async fn post_form(&mut self, path: &str, fields: &[(&str, &str)]) -> TestResponse {
        let body = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(fields)
            .finish();
        let request = self
            .request("POST", path)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body));
        self.send(request.expect("valid request")).await
    }

    /// Log in with the default admin password.
    pub async fn login(&mut self) -> TestResponse {
        self.post_form("/login", &[("password", DEFAULT_ADMIN_PASSWORD)])
            .await
    }

    fn request(&self, method: &str, path: &str) -> axum::http::request::Builder {
        let builder = Request::builder().method(method).uri(path);
        match &self.cookie {
            Some(cookie) => builder.header(header::COOKIE, cookie),
            None => builder,
        }
    }

    async fn send(&mut self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        if let Some(set_cookie) = response.headers().get(header::SET_COOKIE) {
            let value = set_cookie.to_str().expect("cookie is ascii");
            let pair = value.split(';').next().unwrap_or(value);
            self.cookie = Some(pair.to_string());
        }

        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body is readable");

        TestResponse {
            status,
            location,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }
}

/// The value of the first `attr="..."` after `marker` in `html`.
#[must_use]
pub fn attr_after<'a>(html: &'a str, marker: &str, attr: &str) -> Option<&'a str> {
    let start = html.find(marker)?;
    let rest = html.get(start..)?;
    let needle = format!("{attr}=\"");
    let value_start = rest.find(&needle)? + needle.len();
    let value = rest.get(value_start..)?;
    value.find('"').and_then(|end| value.get(..end))
}
