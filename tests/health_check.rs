mod common;

use common::TestApp;
use reqwest::Client;

#[tokio::test]
async fn root_returns_greeting() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["message"], "Hello from Finance Tracker API!");

    app.cleanup().await;
}

#[tokio::test]
async fn health_check_reports_connected_database() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/api/v1/health", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["message"], "API is running");
    assert_eq!(body["database"], "connected");
    assert!(body.get("error").is_none());

    app.cleanup().await;
}

#[tokio::test]
async fn health_check_reports_disconnected_database_with_status_200() {
    // Nothing listens on the discard port; server selection fails fast.
    let app = TestApp::spawn_with_database_uri(
        "mongodb://127.0.0.1:9/?serverSelectionTimeoutMS=1000&connectTimeoutMS=1000",
    )
    .await;
    let client = Client::new();

    let response = client
        .get(format!("{}/api/v1/health", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "unhealthy");
    assert_eq!(body["database"], "disconnected");
    let error = body["error"].as_str().expect("error should be a string");
    assert!(!error.is_empty());
}

#[tokio::test]
async fn root_works_regardless_of_database_state() {
    let app = TestApp::spawn_with_database_uri(
        "mongodb://127.0.0.1:9/?serverSelectionTimeoutMS=1000&connectTimeoutMS=1000",
    )
    .await;
    let client = Client::new();

    let response = client
        .get(format!("{}/", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["message"], "Hello from Finance Tracker API!");
}
