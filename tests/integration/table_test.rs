//! Integration tests for tables and free-seat queries.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_create_and_get_table() {
    let app = helpers::TestApp::new();
    let id = app.create_table(8).await;

    let response = app.request("GET", &format!("/tables/{id}"), None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], id);
    assert_eq!(response.body["capacity"], 8);
}

#[tokio::test]
async fn test_list_tables() {
    let app = helpers::TestApp::new();
    app.create_table(4).await;
    app.create_table(6).await;

    let response = app.request("GET", "/tables", None).await;
    assert_eq!(response.status, StatusCode::OK);
    let tables = response.body["tables"].as_array().unwrap();
    assert_eq!(tables.len(), 2);
}

#[tokio::test]
async fn test_create_table_rejects_non_positive_capacity() {
    let app = helpers::TestApp::new();

    for capacity in [0, -3] {
        let response = app
            .request(
                "POST",
                "/tables",
                Some(serde_json::json!({ "capacity": capacity })),
            )
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.body["error"], "BAD_INPUT");
    }
}

#[tokio::test]
async fn test_create_table_rejects_unknown_fields() {
    let app = helpers::TestApp::new();
    let response = app
        .request(
            "POST",
            "/tables",
            Some(serde_json::json!({ "capacity": 4, "shape": "round" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "BAD_INPUT");
}

#[tokio::test]
async fn test_unknown_table() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/tables/99", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app.request("GET", "/tables/99/seats_empty", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_numeric_table_id() {
    let app = helpers::TestApp::new();
    let response = app.request("GET", "/tables/seven/seats_empty", None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "BAD_INPUT");
}

#[tokio::test]
async fn test_delete_table_is_not_implemented() {
    let app = helpers::TestApp::new();
    let id = app.create_table(4).await;

    let response = app.request("DELETE", &format!("/tables/{id}"), None).await;
    assert_eq!(response.status, StatusCode::NOT_IMPLEMENTED);

    let response = app.request("GET", &format!("/tables/{id}"), None).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_total_seats_empty() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/seats_empty", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["seats_empty"], 0);

    let a = app.create_table(10).await;
    let b = app.create_table(5).await;
    app.register("ana", a, 3).await;
    app.register("leo", b, 0).await;

    let response = app.request("GET", "/seats_empty", None).await;
    assert_eq!(response.body["seats_empty"], 10);
}

#[tokio::test]
async fn test_ping_and_health() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/ping", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text, "pong");

    let response = app.request("GET", "/health", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["store"], "memory");
}
