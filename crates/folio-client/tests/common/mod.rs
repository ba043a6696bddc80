//! Common test utilities for folio-client integration tests.

use folio_client::{ApiClient, Hook, RequestInfo, TransportError};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use wiremock::MockServer;

/// Hook that records every call it sees.
#[derive(Default)]
pub struct RecordingHook {
    pub requests: Mutex<Vec<RequestInfo>>,
    pub failures: Mutex<Vec<(RequestInfo, String)>>,
}

impl Hook for RecordingHook {
    fn on_request(&self, request: &RequestInfo) {
        self.requests.lock().unwrap().push(request.clone());
    }

    fn on_failure(&self, request: &RequestInfo, error: &TransportError) {
        self.failures
            .lock()
            .unwrap()
            .push((request.clone(), error.message()));
    }
}

/// A mock backend plus a client pointed at its `/api` base.
pub struct TestBackend {
    pub server: MockServer,
    pub api: ApiClient,
    pub hook: Arc<RecordingHook>,
}

impl TestBackend {
    pub async fn start() -> Self {
        Self::start_with_timeout(Duration::from_secs(10)).await
    }

    pub async fn start_with_timeout(timeout: Duration) -> Self {
        let server = MockServer::start().await;
        let hook = Arc::new(RecordingHook::default());
        let api = ApiClient::builder(format!("{}/api", server.uri()))
            .timeout(timeout)
            .hook(hook.clone())
            .build()
            .expect("client should build");
        Self { server, api, hook }
    }
}

pub fn project_json(id: &str, category: &str) -> Value {
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

pub fn contact_json(id: &str) -> Value {
    json!({
        "id": id,
        "name": "Ann",
        "email": "ann@example.test",
        "message": "Hello",
        "created_at": "2025-01-15T12:00:00",
        "is_read": false
    })
}

pub fn testimonial_json(id: &str) -> Value {
    json!({
        "id": id,
        "name": "Sarah Johnson",
        "role": "Marketing Director",
        "company": "TechCorp",
        "message": "Exceptional work",
        "avatar": "https://img.test/a.png",
        "created_at": "2025-01-15T12:00:00",
        "is_active": true
    })
}

pub fn profile_json(downloads: u64) -> Value {
    json!({
        "name": "Ashin Krishna",
        "bio": "Visual designer",
        "email": "ashin@example.test",
        "linkedin": "https://linkedin.test/ashin",
        "behance": "https://behance.test/ashin",
        "cv_download_count": downloads,
        "total_projects": 150,
        "happy_clients": 50,
        "awards": 5,
        "updated_at": "2025-01-15T12:00:00"
    })
}
