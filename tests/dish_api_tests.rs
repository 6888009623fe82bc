//! End-to-end tests for the dish resource
//!
//! These tests drive the full router over HTTP: guard chains, store
//! mutation, and error rendering. Ids come from a sequential supplier so
//! routes are predictable.

use axum::http::StatusCode;
use axum_test::TestServer;
use platter::prelude::*;
use std::sync::Arc;

fn test_server() -> (TestServer, AppState) {
    let state = AppState::new().with_ids(Arc::new(SequentialIdSupplier::default()));
    let server = TestServer::new(build_router(state.clone()));
    (server, state)
}

fn pasta() -> Value {
    json!({
        "data": {
            "name": "Pasta",
            "description": "Tomato",
            "price": 12,
            "image_url": "u"
        }
    })
}

// =============================================================================
// List
// =============================================================================

#[tokio::test]
async fn test_list_starts_empty() {
    let (server, _) = test_server();

    let response = server.get("/dishes").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn test_list_returns_created_dishes_in_insertion_order() {
    let (server, _) = test_server();

    for name in ["Pasta", "Pizza", "Salad"] {
        let mut payload = pasta();
        payload["data"]["name"] = json!(name);
        server.post("/dishes").json(&payload).await.assert_status(StatusCode::CREATED);
    }

    let body: Value = server.get("/dishes").await.json();
    let names: Vec<&str> = body["data"]
        .as_array()
        .expect("data is an array")
        .iter()
        .map(|dish| dish["name"].as_str().expect("name is a string"))
        .collect();
    assert_eq!(names, vec!["Pasta", "Pizza", "Salad"]);
}

// =============================================================================
// Create
// =============================================================================

#[tokio::test]
async fn test_create_returns_201_with_generated_id() {
    let (server, state) = test_server();

    let response = server.post("/dishes").json(&pasta()).await;
    response.assert_status(StatusCode::CREATED);

    let body: Value = response.json();
    assert_eq!(body["data"]["id"], "1");
    assert_eq!(body["data"]["name"], "Pasta");
    assert_eq!(body["data"]["description"], "Tomato");
    assert_eq!(body["data"]["price"], 12);
    assert_eq!(body["data"]["image_url"], "u");
    assert_eq!(state.dishes.len(), 1);
}

#[tokio::test]
async fn test_created_ids_are_unique() {
    let (server, _) = test_server();

    let first: Value = server.post("/dishes").json(&pasta()).await.json();
    let second: Value = server.post("/dishes").json(&pasta()).await.json();
    assert_ne!(first["data"]["id"], second["data"]["id"]);
}

#[tokio::test]
async fn test_create_requires_name() {
    let (server, state) = test_server();

    let mut payload = pasta();
    payload["data"].as_object_mut().expect("data object").remove("name");

    let response = server.post("/dishes").json(&payload).await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["error"], "Dish must include a name");
    assert!(state.dishes.is_empty());
}

#[tokio::test]
async fn test_create_rejects_empty_name() {
    let (server, _) = test_server();

    let mut payload = pasta();
    payload["data"]["name"] = json!("");

    let response = server.post("/dishes").json(&payload).await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["error"], "Dish must include a name");
}

#[tokio::test]
async fn test_create_requires_description() {
    let (server, _) = test_server();

    let mut payload = pasta();
    payload["data"].as_object_mut().expect("data object").remove("description");

    let body: Value = server.post("/dishes").json(&payload).await.json();
    assert_eq!(body["error"], "Dish must include a description");
}

#[tokio::test]
async fn test_create_requires_price() {
    let (server, _) = test_server();

    let mut payload = pasta();
    payload["data"].as_object_mut().expect("data object").remove("price");

    let body: Value = server.post("/dishes").json(&payload).await.json();
    assert_eq!(body["error"], "Dish must include a price");
}

#[tokio::test]
async fn test_create_requires_image_url() {
    let (server, _) = test_server();

    let mut payload = pasta();
    payload["data"].as_object_mut().expect("data object").remove("image_url");

    let body: Value = server.post("/dishes").json(&payload).await.json();
    assert_eq!(body["error"], "Dish must include a image_url");
}

#[tokio::test]
async fn test_create_rejects_zero_price() {
    let (server, state) = test_server();

    let mut payload = pasta();
    payload["data"]["price"] = json!(0);

    let response = server.post("/dishes").json(&payload).await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(
        body["error"],
        "Dish must have a price that is an integer greater than 0"
    );
    assert!(state.dishes.is_empty());
}

#[tokio::test]
async fn test_create_rejects_fractional_price() {
    let (server, _) = test_server();

    let mut payload = pasta();
    payload["data"]["price"] = json!(12.5);

    let body: Value = server.post("/dishes").json(&payload).await.json();
    assert_eq!(
        body["error"],
        "Dish must have a price that is an integer greater than 0"
    );
}

#[tokio::test]
async fn test_create_rejects_string_price() {
    let (server, _) = test_server();

    let mut payload = pasta();
    payload["data"]["price"] = json!("12");

    let response = server.post("/dishes").json(&payload).await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(
        body["error"],
        "Dish must have a price that is an integer greater than 0"
    );
}

// =============================================================================
// Read
// =============================================================================

#[tokio::test]
async fn test_read_returns_the_stored_dish() {
    let (server, _) = test_server();
    server.post("/dishes").json(&pasta()).await.assert_status(StatusCode::CREATED);

    let response = server.get("/dishes/1").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["data"]["id"], "1");
    assert_eq!(body["data"]["name"], "Pasta");
}

#[tokio::test]
async fn test_read_unknown_id_is_404() {
    let (server, _) = test_server();

    let response = server.get("/dishes/99").await;
    response.assert_status(StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["error"], "Dish id does not exist: 99");
}

// =============================================================================
// Update
// =============================================================================

#[tokio::test]
async fn test_update_overwrites_every_field_but_the_id() {
    let (server, state) = test_server();
    server.post("/dishes").json(&pasta()).await.assert_status(StatusCode::CREATED);

    let response = server
        .put("/dishes/1")
        .json(&json!({
            "data": {
                "name": "Ravioli",
                "description": "Spinach",
                "price": 9,
                "image_url": "v"
            }
        }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["data"]["id"], "1");
    assert_eq!(body["data"]["name"], "Ravioli");
    assert_eq!(body["data"]["price"], 9);

    let stored = state.dishes.get("1").expect("dish still stored");
    assert_eq!(stored.name, "Ravioli");
    assert_eq!(stored.description, "Spinach");
    assert_eq!(stored.price, 9);
    assert_eq!(stored.image_url, "v");
}

#[tokio::test]
async fn test_update_without_body_id_keeps_route_id() {
    let (server, _) = test_server();
    server.post("/dishes").json(&pasta()).await.assert_status(StatusCode::CREATED);

    let body: Value = server.put("/dishes/1").json(&pasta()).await.json();
    assert_eq!(body["data"]["id"], "1");
}

#[tokio::test]
async fn test_update_accepts_matching_body_id() {
    let (server, _) = test_server();
    server.post("/dishes").json(&pasta()).await.assert_status(StatusCode::CREATED);

    let mut payload = pasta();
    payload["data"]["id"] = json!("1");

    server.put("/dishes/1").json(&payload).await.assert_status_ok();
}

#[tokio::test]
async fn test_update_rejects_mismatched_body_id() {
    let (server, state) = test_server();
    server.post("/dishes").json(&pasta()).await.assert_status(StatusCode::CREATED);
    let before = state.dishes.get("1");

    let mut payload = pasta();
    payload["data"]["id"] = json!("99");
    payload["data"]["name"] = json!("Ravioli");

    let response = server.put("/dishes/1").json(&payload).await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(
        body["error"],
        "Dish id does not match route id. Dish: 99, Route: 1"
    );
    assert_eq!(state.dishes.get("1"), before);
}

#[tokio::test]
async fn test_update_requires_the_same_fields_as_create() {
    let (server, state) = test_server();
    server.post("/dishes").json(&pasta()).await.assert_status(StatusCode::CREATED);
    let before = state.dishes.get("1");

    let mut payload = pasta();
    payload["data"].as_object_mut().expect("data object").remove("description");

    let response = server.put("/dishes/1").json(&payload).await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["error"], "Dish must include a description");
    assert_eq!(state.dishes.get("1"), before);
}

#[tokio::test]
async fn test_update_unknown_id_is_404() {
    let (server, _) = test_server();

    let response = server.put("/dishes/7").json(&pasta()).await;
    response.assert_status(StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["error"], "Dish id does not exist: 7");
}

// =============================================================================
// Routing edges
// =============================================================================

#[tokio::test]
async fn test_dishes_expose_no_delete_route() {
    let (server, state) = test_server();
    server.post("/dishes").json(&pasta()).await.assert_status(StatusCode::CREATED);

    let response = server.delete("/dishes/1").await;
    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(state.dishes.len(), 1);
}

#[tokio::test]
async fn test_unknown_path_hits_the_fallback() {
    let (server, _) = test_server();

    let response = server.get("/nope").await;
    response.assert_status(StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["error"], "Not found: GET /nope");
}

#[tokio::test]
async fn test_health_check() {
    let (server, _) = test_server();

    let response = server.get("/health").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
}
