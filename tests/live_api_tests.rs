//! Tests against a running server wired to a real sheet

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api";

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_submit_then_recap() {
    let client = Client::new();

    let before: Value = client
        .get(format!("{}/visit-recap", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    let response = client
        .post(format!("{}/submit-guest", BASE_URL))
        .json(&json!({
            "name": "Integration Test",
            "email": "test@example.org",
            "institution": "Test Suite",
            "subject": "Automated check",
            "message": "Please ignore this row"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let after: Value = client
        .get(format!("{}/visit-recap", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    let total = |v: &Value| v["totalVisits"].as_u64().expect("No totalVisits");
    assert!(total(&after) > total(&before));
    assert!(after["filteredVisits"].as_u64() <= after["totalVisits"].as_u64());
}

#[tokio::test]
#[ignore]
async fn test_submit_missing_fields() {
    let client = Client::new();

    let response = client
        .post(format!("{}/submit-guest", BASE_URL))
        .json(&json!({ "name": "Incomplete" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}
