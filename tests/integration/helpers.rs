//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use guestlist_api::{AppState, build_app};
use guestlist_core::config::{AppConfig, StoreProvider};
use guestlist_database::{MemoryStore, Stores};

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
}

impl TestApp {
    /// Create a new test application backed by an empty in-memory store
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.database.provider = StoreProvider::Memory;

        let stores = Stores::memory(MemoryStore::new());
        let router = build_app(AppState::new(config, stores));

        Self { router }
    }

    /// Create a table and return its id
    pub async fn create_table(&self, capacity: i32) -> i64 {
        let response = self
            .request(
                "POST",
                "/tables",
                Some(serde_json::json!({ "capacity": capacity })),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "{}", response.text);
        response.body["id"].as_i64().expect("table id in response")
    }

    /// Register a guest at a table
    pub async fn register(&self, name: &str, table: i64, entourage: i32) -> TestResponse {
        self.request(
            "POST",
            &format!("/guest_list/{name}"),
            Some(serde_json::json!({
                "table": table,
                "accompanying_guests": entourage,
            })),
        )
        .await
    }

    /// Check a guest in with the given entourage
    pub async fn arrive(&self, name: &str, entourage: i32) -> TestResponse {
        self.request(
            "PUT",
            &format!("/guests/{name}"),
            Some(serde_json::json!({ "accompanying_guests": entourage })),
        )
        .await
    }

    /// Free seats reported for a table
    pub async fn seats_empty_at(&self, table: i64) -> i64 {
        let response = self
            .request("GET", &format!("/tables/{table}/seats_empty"), None)
            .await;
        assert_eq!(response.status, StatusCode::OK, "{}", response.text);
        response.body["seats_empty"]
            .as_i64()
            .expect("seats_empty in response")
    }

    /// Make a JSON request to the test server
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();
        self.request_raw(method, path, &body_str).await
    }

    /// Make a request with a raw body string
    pub async fn request_raw(&self, method: &str, path: &str, body: &str) -> TestResponse {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let text = String::from_utf8_lossy(&body_bytes).into_owned();
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body, text }
    }
}

/// Test response wrapper
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
    /// Raw body text
    pub text: String,
}
