//! End-to-end: controllers on top of the live API client.

use folio_client::ApiClient;
use folio_core::Category;
use folio_view::{
    ContactForm, NotificationCenter, Phase, ProfileController, ProjectsController, Sources,
};
use serde_json::{Value, json};
use std::sync::Arc;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn project_json(id: &str, category: &str) -> Value {
    json!({
        "id": id,
        "title": format!("Project {id}"),
        "description": "A project",
        "image": "https://img.test/p.png",
        "category": category,
        "tags": ["Modern"],
        "is_featured": false,
        "created_at": "2025-01-15T12:00:00.000000"
    })
}

async fn sources(server: &MockServer) -> Sources {
    Sources::remote(ApiClient::new(format!("{}/api", server.uri())).unwrap())
}

async fn mount_category(server: &MockServer, category: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/api/projects/{category}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_projects_three_zero_two() {
    let server = MockServer::start().await;
    mount_category(
        &server,
        "cv",
        json!([
            project_json("a", "cv"),
            project_json("b", "cv"),
            project_json("c", "cv"),
        ]),
    )
    .await;
    mount_category(&server, "branding", json!([])).await;
    mount_category(
        &server,
        "social",
        json!([project_json("d", "social"), project_json("e", "social")]),
    )
    .await;

    let center = Arc::new(NotificationCenter::new());
    let ctl = ProjectsController::new(sources(&server).await.projects, center.clone());
    ctl.activate().await;

    let view = ctl.view();
    assert_eq!(view.phase, Phase::Ready);
    assert_eq!(view.buckets.count(Category::Cv), 3);
    assert!(view.is_empty(Category::Branding));
    assert_eq!(view.buckets.count(Category::Social), 2);
    assert!(center.is_empty());
}

#[tokio::test]
async fn test_projects_server_error_fails_section() {
    let server = MockServer::start().await;
    mount_category(&server, "cv", json!([])).await;
    mount_category(&server, "social", json!([])).await;
    Mock::given(method("GET"))
        .and(path("/api/projects/branding"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"detail": "db offline"})))
        .mount(&server)
        .await;

    let center = Arc::new(NotificationCenter::new());
    let ctl = ProjectsController::new(sources(&server).await.projects, center.clone());
    ctl.activate().await;

    assert_eq!(ctl.view().phase, Phase::Failed("db offline".to_string()));
    assert_eq!(center.len(), 1);
}

#[tokio::test]
async fn test_cv_download_counts_locally() {
    let server = MockServer::start().await;
    let profile = json!({
        "name": "X",
        "cv_download_count": 5
    });
    Mock::given(method("GET"))
        .and(path("/api/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile))
        .mount(&server)
        .await;
    let body = json!({"message": "CV download count incremented"});
    Mock::given(method("POST"))
        .and(path("/api/profile/cv-download"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&server)
        .await;

    let center = Arc::new(NotificationCenter::new());
    let ctl = ProfileController::new(sources(&server).await.profile, center.clone());
    ctl.activate().await;
    assert_eq!(ctl.download_cv().await.unwrap(), 6);

    let profile = ctl.view().profile.unwrap();
    assert_eq!(profile.name, "X");
    assert_eq!(profile.cv_download_count, 6);
}

#[tokio::test]
async fn test_contact_posts_to_backend() {
    let server = MockServer::start().await;
    let posted = json!({
        "name": "Ann",
        "email": "ann@example.test",
        "message": "Hi"
    });
    let stored = json!({
        "id": "c-1",
        "name": "Ann",
        "email": "ann@example.test",
        "message": "Hi",
        "created_at": "2025-01-15T12:00:00",
        "is_read": false
    });
    Mock::given(method("POST"))
        .and(path("/api/contacts"))
        .and(body_json(posted))
        .respond_with(ResponseTemplate::new(200).set_body_json(stored))
        .expect(1)
        .mount(&server)
        .await;

    let center = Arc::new(NotificationCenter::new());
    let form = ContactForm::new(sources(&server).await.contact, center.clone());
    form.fill(folio_core::NewContact::new("Ann", "ann@example.test", "Hi"));
    form.submit().await.unwrap();

    assert!(form.view().draft.is_empty());
    assert_eq!(center.len(), 1);
}
