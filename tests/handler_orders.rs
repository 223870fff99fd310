mod common;

use axum::http::StatusCode;
use serde_json::json;
use std::sync::Arc;

fn dosa_order(total: f64) -> serde_json::Value {
    json!({
        "items": [{"name": "Masala Dosa", "price": 70, "quantity": 1}],
        "delivery_fee": 10,
        "total": total,
        "customer_name": "Ravi",
        "phone": "9876543210"
    })
}

#[tokio::test]
async fn test_place_order_success() {
    let store = Arc::new(common::InMemoryStore::new());
    let server = common::create_test_server(store.clone());

    let response = server.post("/order").json(&dosa_order(80.0)).await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["message"], "Order placed successfully");
    assert!(json["order_id"].is_string());
    assert_eq!(store.count("order"), 1);
}

#[tokio::test]
async fn test_place_order_total_mismatch() {
    let store = Arc::new(common::InMemoryStore::new());
    let server = common::create_test_server(store.clone());

    let response = server.post("/order").json(&dosa_order(75.0)).await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["message"], "Total does not match order items");
    assert_eq!(store.count("order"), 0);
}

#[tokio::test]
async fn test_place_order_rounding_boundary() {
    let store = Arc::new(common::InMemoryStore::new());
    let server = common::create_test_server(store.clone());

    let response = server
        .post("/order")
        .json(&json!({
            "items": [{"name": "Special", "price": 49.995, "quantity": 1}],
            "delivery_fee": 0.005,
            "total": 50.00
        }))
        .await;

    response.assert_status_ok();
    assert_eq!(store.count("order"), 1);
}

#[tokio::test]
async fn test_place_order_without_items() {
    let server = common::create_test_server(Arc::new(common::InMemoryStore::new()));

    let response = server
        .post("/order")
        .json(&json!({"items": [], "delivery_fee": 30, "total": 30}))
        .await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_place_order_malformed_body() {
    let store = Arc::new(common::InMemoryStore::new());
    let server = common::create_test_server(store.clone());

    let response = server
        .post("/order")
        .json(&json!({"items": [{"name": "Masala Dosa", "price": "seventy", "quantity": 1}]}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(store.count("order"), 0);
}

#[tokio::test]
async fn test_place_order_zero_quantity() {
    let store = Arc::new(common::InMemoryStore::new());
    let server = common::create_test_server(store.clone());

    let response = server
        .post("/order")
        .json(&json!({
            "items": [{"name": "Masala Dosa", "price": 70, "quantity": 0}],
            "delivery_fee": 10,
            "total": 10
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(store.count("order"), 0);
}

#[tokio::test]
async fn test_place_order_database_unavailable() {
    let server = common::create_unavailable_server();

    let response = server.post("/order").json(&dosa_order(80.0)).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "internal_error");
}

#[tokio::test]
async fn test_list_orders_respects_limit() {
    let store = Arc::new(common::InMemoryStore::new());
    let server = common::create_test_server(store.clone());

    for _ in 0..3 {
        server
            .post("/order")
            .json(&dosa_order(80.0))
            .await
            .assert_status_ok();
    }

    let response = server.get("/orders").add_query_param("limit", 2).await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let orders = json["orders"].as_array().unwrap();
    assert_eq!(orders.len(), 2);
}

#[tokio::test]
async fn test_list_orders_returns_stored_fields() {
    let store = Arc::new(common::InMemoryStore::new());
    let server = common::create_test_server(store.clone());

    let placed = server
        .post("/order")
        .json(&dosa_order(80.0))
        .await
        .json::<serde_json::Value>();

    let json = server.get("/orders").await.json::<serde_json::Value>();
    let orders = json["orders"].as_array().unwrap();

    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0]["_id"], placed["order_id"]);
    assert_eq!(orders[0]["customer_name"], "Ravi");
    assert_eq!(orders[0]["items"][0]["name"], "Masala Dosa");
    assert_eq!(orders[0]["total"].as_f64(), Some(80.0));
    assert!(orders[0]["created_at"].is_string());
}

#[tokio::test]
async fn test_list_orders_default_limit() {
    let store = Arc::new(common::InMemoryStore::new());
    let server = common::create_test_server(store.clone());

    for _ in 0..55 {
        server
            .post("/order")
            .json(&dosa_order(80.0))
            .await
            .assert_status_ok();
    }

    let json = server.get("/orders").await.json::<serde_json::Value>();

    assert_eq!(json["orders"].as_array().unwrap().len(), 50);
}

#[tokio::test]
async fn test_list_orders_invalid_limit() {
    let server = common::create_test_server(Arc::new(common::InMemoryStore::new()));

    let response = server.get("/orders").add_query_param("limit", "many").await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_orders_storage_failure() {
    let server = common::create_test_server(Arc::new(common::BrokenStore));

    let response = server.get("/orders").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}
