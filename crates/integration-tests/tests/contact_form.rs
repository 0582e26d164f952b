//! Contact form submission through the mail relay.

#![allow(clippy::indexing_slicing)]

use axum::http::StatusCode;
use folio_integration_tests::{FakeRelay, TestApp};
use folio_site::store::MemoryStorage;

const FIELDS: [(&str, &str); 4] = [
    ("name", "Ada Lovelace"),
    ("email", "ada@example.com"),
    ("subject", "Analytical Engine"),
    ("message", "Can you build a site for it?"),
];

#[tokio::test]
async fn test_delivered_message_clears_form() {
    let relay = FakeRelay::accepting();
    let mut app = TestApp::new(MemoryStorage::new().into(), relay.clone()).await;

    let resp = app.post_form("/contact", &FIELDS).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("Message sent successfully!"));
    assert!(!resp.body.contains("value=\"ada@example.com\""));
    assert!(resp.body.contains("hx-get=\"/contact/form\""));

    let sent = relay.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].email, "ada@example.com");
    assert_eq!(sent[0].subject, "Analytical Engine");
}

#[tokio::test]
async fn test_failed_relay_keeps_fields() {
    let relay = FakeRelay::failing();
    let mut app = TestApp::new(MemoryStorage::new().into(), relay.clone()).await;

    let resp = app.post_form("/contact", &FIELDS).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("Something went wrong. Please try again later."));
    assert!(resp.body.contains("value=\"ada@example.com\""));
    assert!(resp.body.contains("Can you build a site for it?"));
    assert_eq!(relay.sent().len(), 1);
}

#[tokio::test]
async fn test_idle_form_fragment() {
    let mut app = TestApp::new(MemoryStorage::new().into(), FakeRelay::accepting()).await;

    let resp = app.get("/contact/form").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("id=\"contact-form\""));
    assert!(!resp.body.contains("Message sent successfully!"));
}
