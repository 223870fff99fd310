mod common;

use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn test_diagnostics_connected() {
    let store = Arc::new(common::InMemoryStore::new());
    let server = common::create_test_server(store.clone());

    server
        .post("/order")
        .json(&json!({"items": [], "delivery_fee": 10, "total": 10}))
        .await
        .assert_status_ok();

    let response = server.get("/test").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["backend"], "✅ Running");
    assert_eq!(json["database"], "✅ Connected & Working");
    assert_eq!(json["database_url"], "✅ Set");
    assert_eq!(json["database_name"], "✅ Set");
    assert_eq!(json["connection_status"], "Connected");
    assert_eq!(json["collections"], json!(["order"]));
}

#[tokio::test]
async fn test_diagnostics_database_not_initialized() {
    let server = common::create_unavailable_server();

    let response = server.get("/test").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["backend"], "✅ Running");
    assert_eq!(json["database"], "⚠️  Available but not initialized");
    assert_eq!(json["database_url"], "❌ Not Set");
    assert_eq!(json["database_name"], "❌ Not Set");
    assert_eq!(json["connection_status"], "Not Connected");
    assert_eq!(json["collections"], json!([]));
}

#[tokio::test]
async fn test_diagnostics_database_error_is_reported() {
    let server = common::create_test_server(Arc::new(common::BrokenStore));

    let response = server.get("/test").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let database = json["database"].as_str().unwrap();
    assert!(database.starts_with("⚠️  Connected but Error: "));
    assert_eq!(json["connection_status"], "Connected");
}

#[tokio::test]
async fn test_diagnostics_structure() {
    let server = common::create_test_server(Arc::new(common::InMemoryStore::new()));

    let json = server.get("/test").await.json::<serde_json::Value>();

    for key in [
        "backend",
        "database",
        "database_url",
        "database_name",
        "connection_status",
        "collections",
    ] {
        assert!(json.get(key).is_some(), "missing key {key}");
    }
}
