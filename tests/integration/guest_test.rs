//! Integration tests for guest registration, check-in, and departure.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_register_and_get_guest() {
    let app = helpers::TestApp::new();
    let table = app.create_table(10).await;

    let response = app.register("ana", table, 2).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["name"], "ana");

    let response = app.request("GET", "/guest_list/ana", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["name"], "ana");
    assert_eq!(response.body["accompanying_guests"], 2);
    assert_eq!(response.body["arrival_status"], "not_arrived");

    assert_eq!(app.seats_empty_at(table).await, 7);
}

#[tokio::test]
async fn test_register_over_capacity() {
    let app = helpers::TestApp::new();
    let table = app.create_table(10).await;
    app.register("Ana", table, 5).await;

    let response = app.register("Leo", table, 5).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "EXCEEDS_CAPACITY");
    assert_eq!(response.body["details"]["available"], 4);
    assert_eq!(response.body["details"]["shortfall"], 2);

    let response = app.request("GET", "/guest_list/Leo", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_register_duplicate_name() {
    let app = helpers::TestApp::new();
    let table = app.create_table(10).await;
    app.register("ana", table, 0).await;

    let response = app.register("ana", table, 0).await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["error"], "ALREADY_EXISTS");
}

#[tokio::test]
async fn test_register_bad_input() {
    let app = helpers::TestApp::new();
    let table = app.create_table(10).await;

    let response = app.register("ana", table, -1).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app.register("ana%20maria", table, 0).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request_raw("POST", "/guest_list/ana", r#"{"table": "one"}"#)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "BAD_INPUT");

    let response = app.request("GET", "/guest_list", None).await;
    assert_eq!(response.body["guests"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_register_at_unknown_table() {
    let app = helpers::TestApp::new();
    let response = app.register("ana", 42, 0).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_guest_list_shows_table() {
    let app = helpers::TestApp::new();
    let table = app.create_table(10).await;
    app.register("ana", table, 1).await;

    let response = app.request("GET", "/guest_list", None).await;
    assert_eq!(response.status, StatusCode::OK);
    let guests = response.body["guests"].as_array().unwrap();
    assert_eq!(guests.len(), 1);
    assert_eq!(guests[0]["name"], "ana");
    assert_eq!(guests[0]["table"], table);
    assert_eq!(guests[0]["accompanying_guests"], 1);
}

#[tokio::test]
async fn test_arrival_rejected_then_admitted() {
    let app = helpers::TestApp::new();
    let table = app.create_table(4).await;
    app.register("ana", table, 1).await;

    let response = app.arrive("ana", 4).await;
    assert_eq!(response.status, StatusCode::OK);
    let guest = app.request("GET", "/guest_list/ana", None).await;
    assert_eq!(guest.body["arrival_status"], "rejected");
    assert!(!guest.body["arrived_at"].is_null());
    assert_eq!(app.seats_empty_at(table).await, 4);

    app.arrive("ana", 3).await;
    let guest = app.request("GET", "/guest_list/ana", None).await;
    assert_eq!(guest.body["arrival_status"], "arrived");
    assert_eq!(app.seats_empty_at(table).await, 0);
}

#[tokio::test]
async fn test_rejected_guest_rearriving_with_same_party_stays_rejected() {
    let app = helpers::TestApp::new();
    let table = app.create_table(4).await;
    app.register("ana", table, 1).await;

    assert_eq!(app.arrive("ana", 4).await.status, StatusCode::OK);
    assert_eq!(app.arrive("ana", 4).await.status, StatusCode::OK);

    let guest = app.request("GET", "/guest_list/ana", None).await;
    assert_eq!(guest.body["arrival_status"], "rejected");
    assert_eq!(guest.body["accompanying_guests"], 4);
    assert_eq!(app.seats_empty_at(table).await, 4);
}

#[tokio::test]
async fn test_arrival_errors() {
    let app = helpers::TestApp::new();
    let table = app.create_table(4).await;
    app.register("ana", table, 1).await;

    let response = app.arrive("nobody", 0).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app.arrive("ana", -1).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request_raw("PUT", "/guests/ana", r#"{"accompanying_guests": 1, "note": "late"}"#)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let guest = app.request("GET", "/guest_list/ana", None).await;
    assert_eq!(guest.body["arrival_status"], "not_arrived");
}

#[tokio::test]
async fn test_depart() {
    let app = helpers::TestApp::new();
    let table = app.create_table(4).await;
    app.register("ana", table, 1).await;

    let response = app.request("DELETE", "/guests/ana", None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "ARRIVAL_STATUS");

    app.arrive("ana", 1).await;
    let response = app.request("DELETE", "/guests/ana", None).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert_eq!(app.seats_empty_at(table).await, 4);

    let response = app.request("DELETE", "/guests/ana", None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app.arrive("ana", 0).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "ARRIVAL_STATUS");
}

#[tokio::test]
async fn test_arrived_guests_listing() {
    let app = helpers::TestApp::new();
    let table = app.create_table(20).await;
    for name in ["ana", "leo", "mia"] {
        app.register(name, table, 1).await;
    }
    app.arrive("leo", 2).await;
    app.arrive("mia", 1).await;
    app.request("DELETE", "/guests/mia", None).await;

    let response = app.request("GET", "/guests", None).await;
    assert_eq!(response.status, StatusCode::OK);
    let guests = response.body["guests"].as_array().unwrap();
    let mut names: Vec<&str> = guests.iter().filter_map(|g| g["name"].as_str()).collect();
    names.sort();
    assert_eq!(names, vec!["leo", "mia"]);
    assert!(guests.iter().all(|g| !g["time_arrived"].is_null()));
}

#[tokio::test]
async fn test_event_walkthrough() {
    let app = helpers::TestApp::new();
    let table = app.create_table(10).await;

    assert_eq!(app.register("Ana", table, 5).await.status, StatusCode::OK);
    assert_eq!(app.seats_empty_at(table).await, 4);
    assert_eq!(
        app.register("Leo", table, 5).await.status,
        StatusCode::BAD_REQUEST
    );

    assert_eq!(app.arrive("Ana", 3).await.status, StatusCode::OK);
    assert_eq!(app.seats_empty_at(table).await, 6);

    let response = app.request("DELETE", "/guests/Ana", None).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
    let guest = app.request("GET", "/guest_list/Ana", None).await;
    assert_eq!(guest.body["arrival_status"], "left");

    let response = app.request("GET", "/seats_empty", None).await;
    assert_eq!(response.body["seats_empty"], 10);
}
