//! API integration tests
//!
//! These run against a live server started with `cargo run`.
//! Run with: cargo test -- --ignored

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

async fn open_draft(client: &Client, user_name: &str) -> Value {
    let response = client
        .post(format!("{}/inspections", BASE_URL))
        .json(&json!({ "user_name": user_name }))
        .send()
        .await
        .expect("Failed to create draft");
    assert_eq!(response.status(), 201);
    response.json().await.expect("Failed to parse draft")
}

#[tokio::test]
#[ignore]
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
async fn test_list_equipment_with_filters() {
    let client = Client::new();

    let response = client
        .get(format!("{}/equipment?search=petzl&status=good", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let items = body["items"].as_array().expect("items array");
    assert!(items
        .iter()
        .all(|i| i["manufacturer"] == "Petzl" && i["status"] == "good"));
}

#[tokio::test]
#[ignore]
async fn test_equipment_lookup_miss_is_404() {
    let client = Client::new();

    let response = client
        .get(format!("{}/equipment/NO-SUCH-SERIAL/facts", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_inspection_flow_end_to_end() {
    let client = Client::new();

    let draft = open_draft(&client, "Team A").await;
    let draft_id = draft["id"].as_str().expect("draft id");

    // Add an item by serial number
    let response = client
        .post(format!("{}/inspections/{}/items", BASE_URL, draft_id))
        .json(&json!({ "serial_number": "SN-123" }))
        .send()
        .await
        .expect("Failed to add item");
    assert_eq!(response.status(), 201);
    let draft: Value = response.json().await.expect("Failed to parse draft");
    let items = draft["items"].as_array().expect("items array");
    assert_eq!(items.len(), 1);
    assert!(items[0]["outcome"].is_null());
    let item_id = items[0]["id"].as_str().expect("item id");

    // Not completable yet
    let validation: Value = client
        .get(format!("{}/inspections/{}/validation", BASE_URL, draft_id))
        .send()
        .await
        .expect("Failed to get validation")
        .json()
        .await
        .expect("Failed to parse validation");
    assert_eq!(validation["can_complete"], false);

    // Completing now must fail with the reasons
    let response = client
        .post(format!("{}/inspections/{}/complete", BASE_URL, draft_id))
        .send()
        .await
        .expect("Failed to send complete");
    assert_eq!(response.status(), 422);

    // Fill in condition and outcome
    let response = client
        .put(format!(
            "{}/inspections/{}/items/{}/condition",
            BASE_URL, draft_id, item_id
        ))
        .json(&json!({ "condition": "Webbing frayed" }))
        .send()
        .await
        .expect("Failed to set condition");
    assert!(response.status().is_success());

    let response = client
        .put(format!(
            "{}/inspections/{}/items/{}/outcome",
            BASE_URL, draft_id, item_id
        ))
        .json(&json!({ "outcome": "repair" }))
        .send()
        .await
        .expect("Failed to set outcome");
    assert!(response.status().is_success());

    let validation: Value = client
        .get(format!("{}/inspections/{}/validation", BASE_URL, draft_id))
        .send()
        .await
        .expect("Failed to get validation")
        .json()
        .await
        .expect("Failed to parse validation");
    assert_eq!(validation["can_complete"], true);
    assert!(validation["messages"].as_array().unwrap().is_empty());

    // Complete and check the archived report
    let response = client
        .post(format!("{}/inspections/{}/complete", BASE_URL, draft_id))
        .send()
        .await
        .expect("Failed to complete");
    assert_eq!(response.status(), 201);
    let report: Value = response.json().await.expect("Failed to parse report");
    assert_eq!(report["status"], "completed");
    assert_eq!(report["equipment_count"], 1);
    assert_eq!(report["results"]["repair"], 1);

    // Draft is gone
    let response = client
        .get(format!("{}/inspections/{}", BASE_URL, draft_id))
        .send()
        .await
        .expect("Failed to get draft");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_blank_serial_is_rejected() {
    let client = Client::new();

    let draft = open_draft(&client, "Team B").await;
    let draft_id = draft["id"].as_str().expect("draft id");

    let response = client
        .post(format!("{}/inspections/{}/items", BASE_URL, draft_id))
        .json(&json!({ "serial_number": "   " }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_create_user_conflict() {
    let client = Client::new();

    let body = json!({
        "name": "Max Mustermann",
        "email": "max.mustermann@cgh-it.de",
        "role": "administrator",
        "organization": "CGH IT-Solutions"
    });

    let response = client
        .post(format!("{}/users", BASE_URL))
        .json(&body)
        .send()
        .await
        .expect("Failed to send request");

    // Seeded user already owns this email
    assert_eq!(response.status(), 409);
}

#[tokio::test]
#[ignore]
async fn test_report_archive_filters() {
    let client = Client::new();

    let response = client
        .get(format!("{}/reports?status=draft&year=2024", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let items = body["items"].as_array().expect("items array");
    assert!(items.iter().all(|r| r["status"] == "draft"));
}

#[tokio::test]
#[ignore]
async fn test_stats() {
    let client = Client::new();

    let response = client
        .get(format!("{}/stats", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["active_equipment"].is_number());
    assert!(body["completed_this_year"].is_number());
}
