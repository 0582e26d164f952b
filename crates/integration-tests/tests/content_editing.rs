//! Editing content in the admin and seeing it on the public page.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::sync::Arc;

use axum::http::StatusCode;
use folio_core::seed;
use folio_core::text::join_tags;
use folio_integration_tests::{FakeRelay, TestApp, attr_after};
use folio_site::store::{DATA_KEY, MemoryStorage, Storage};

/// Posted fields for the seed projects, in editor order.
fn seed_project_fields() -> Vec<(String, String)> {
    seed()
        .projects
        .iter()
        .flat_map(|p| {
            [
                ("id", p.id.to_string()),
                ("title", p.title.clone()),
                ("description", p.description.clone()),
                ("link", p.link.clone().unwrap_or_default()),
                ("tags", join_tags(&p.tags)),
                ("image", p.image.clone()),
            ]
        })
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

fn borrowed(fields: &[(String, String)]) -> Vec<(&str, &str)> {
    fields.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect()
}

#[tokio::test]
async fn test_added_project_survives_restart() {
    let storage = Arc::new(MemoryStorage::new());
    let mut app = TestApp::new(storage.clone(), FakeRelay::accepting()).await;
    app.login().await;

    // Add a row to the draft; nothing is saved yet
    let mut fields = seed_project_fields();
    fields.push(("action".to_string(), "add".to_string()));
    let resp = app.post_form("/admin/projects", &borrowed(&fields)).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("New Project Title"));
    assert!(storage.get_item(DATA_KEY).await.unwrap().is_none());

    let new_id = attr_after(&resp.body, "name=\"id\"", "value")
        .expect("draft has rows")
        .to_string();
    assert!(seed().projects.iter().all(|p| p.id.as_str() != new_id));

    // Fill in the new row and save
    let mut fields = vec![
        ("id".to_string(), new_id.clone()),
        ("title".to_string(), "Ferris Tracker".to_string()),
        ("description".to_string(), "Tracks crabs.".to_string()),
        ("link".to_string(), String::new()),
        ("tags".to_string(), "Rust,  Axum ,HTMX".to_string()),
        ("image".to_string(), "https://picsum.photos/seed/ferris/800/600".to_string()),
    ];
    fields.extend(seed_project_fields());
    fields.push(("action".to_string(), "save".to_string()));
    let resp = app.post_form("/admin/projects", &borrowed(&fields)).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("Projects saved successfully!"));

    // A fresh app over the same storage sees the saved project
    let mut restarted = TestApp::new(storage, FakeRelay::accepting()).await;
    let resp = restarted.get("/").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains(&format!("id=\"project-{new_id}\"")));
    assert!(resp.body.contains("Ferris Tracker"));
    assert!(resp.body.contains(">Rust<"));
    assert!(resp.body.contains(">Axum<"));
    assert!(resp.body.contains(">HTMX<"));
}

#[tokio::test]
async fn test_remove_is_discarded_without_save() {
    let storage = Arc::new(MemoryStorage::new());
    let mut app = TestApp::new(storage.clone(), FakeRelay::accepting()).await;
    app.login().await;

    let first = seed().projects[0].id.to_string();
    let remove = format!("remove:{first}");
    let mut fields = seed_project_fields();
    fields.push(("action".to_string(), remove.clone()));

    let resp = app.post_form("/admin/projects", &borrowed(&fields)).await;
    assert!(!resp.body.contains(&remove));

    // Leaving without saving keeps the stored list intact
    let resp = app.get("/admin/projects").await;
    assert!(resp.body.contains(&remove));
    assert!(storage.get_item(DATA_KEY).await.unwrap().is_none());
}

#[tokio::test]
async fn test_profile_edit_and_reset() {
    let storage = Arc::new(MemoryStorage::new());
    let mut app = TestApp::new(storage.clone(), FakeRelay::accepting()).await;
    app.login().await;

    let profile = seed().profile;
    let resp = app
        .post_form(
            "/admin/profile",
            &[
                ("name", "Grace Hopper"),
                ("role", profile.role.as_str()),
                ("email", profile.email.as_str()),
                ("phone", profile.phone.as_str()),
                ("address", profile.address.as_str()),
                ("summary", "Compilers and more."),
                ("skills", "COBOL, Rust"),
                ("github", ""),
                ("linkedin", ""),
                ("twitter", ""),
            ],
        )
        .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("Profile updated!"));

    let resp = app.get("/").await;
    assert!(resp.body.contains("Grace Hopper"));
    assert!(resp.body.contains("Compilers and more."));
    assert!(resp.body.contains(">COBOL<"));

    let resp = app.post_form("/admin/reset", &[]).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("Welcome back, Mubashir T!"));

    let resp = app.get("/").await;
    assert!(!resp.body.contains("Grace Hopper"));
}

#[tokio::test]
async fn test_unknown_icon_is_not_saved() {
    let storage = Arc::new(MemoryStorage::new());
    let mut app = TestApp::new(storage.clone(), FakeRelay::accepting()).await;
    app.login().await;

    let seed = seed();
    let service = &seed.services[0];
    let resp = app
        .post_form(
            "/admin/services",
            &[
                ("id", service.id.as_str()),
                ("title", service.title.as_str()),
                ("description", service.description.as_str()),
                ("icon", "Rocket"),
                ("action", "save"),
            ],
        )
        .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("unknown service icon"));
    assert!(storage.get_item(DATA_KEY).await.unwrap().is_none());
}
