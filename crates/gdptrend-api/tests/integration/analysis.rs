//! The analysis route and its payload contract.

use crate::common::{TestHarness, read_json};
use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_analysis_of_empty_collection_is_no_data() {
    let harness = TestHarness::new();

    let resp = harness.post_json("/analysis", json!({})).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = read_json(resp).await;
    assert_eq!(body["error"], "No data available for analysis.");
    assert!(body.get("summary").is_none());

    // The model must never be called for an empty collection.
    assert_eq!(harness.model.request_count(), 0);
}

#[tokio::test]
async fn test_analysis_returns_summary() {
    let harness = TestHarness::with_model_responses(vec![
        r#"{"summary": "GDP grew roughly 10% between 2020 and 2021."}"#.to_string(),
    ]);
    harness.create_record("2020", "100", "X").await;
    harness.create_record("2021", "110", "X").await;

    let resp = harness.post_json("/analysis", json!({})).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = read_json(resp).await;
    assert_eq!(
        body["summary"],
        "GDP grew roughly 10% between 2020 and 2021."
    );
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn test_analysis_prompt_contains_points_in_year_order() {
    let harness = TestHarness::with_model_responses(vec![
        r#"{"summary": "ok"}"#.to_string(),
    ]);
    // Insert out of order; the store lists ascending by year.
    harness.create_record("2021", "110", "X").await;
    harness.create_record("2020", "100", "X").await;

    harness.post_json("/analysis", json!({})).await;

    let requests = harness.model.requests();
    assert_eq!(requests.len(), 1);
    let prompt = &requests[0].prompt;
    let first = prompt.find("Year: 2020, Value: 100").unwrap();
    let second = prompt.find("Year: 2021, Value: 110").unwrap();
    assert!(first < second);
    // Country never reaches the model.
    assert!(!prompt.contains("X"));
}

#[tokio::test]
async fn test_model_failure_is_panel_error() {
    // Scripted reply is not the required summary JSON.
    let harness = TestHarness::with_model_responses(vec!["not json".to_string()]);
    harness.create_record("2020", "100", "X").await;

    let resp = harness.post_json("/analysis", json!({})).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = read_json(resp).await;
    assert_eq!(body["error"], "Failed to perform trend analysis.");
    assert!(body.get("summary").is_none());
}
