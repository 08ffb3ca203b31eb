//! Record CRUD routes: creation, validation, uniqueness, edit, delete.

use crate::common::{TestHarness, read_json};
use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_create_record_on_empty_collection() {
    let harness = TestHarness::new();

    let resp = harness
        .post_json(
            "/records",
            json!({ "year": "2023", "value": "23320.5", "country": "United States" }),
        )
        .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let record = read_json(resp).await;
    assert_eq!(record["year"], 2023);
    assert_eq!(record["value"], 23320.5);
    assert_eq!(record["country"], "United States");
    assert!(!record["id"].as_str().unwrap().is_empty());

    let list = read_json(harness.get("/records").await).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["year"], 2023);
}

#[tokio::test]
async fn test_create_duplicate_year_is_conflict() {
    let harness = TestHarness::new();
    harness.create_record("2023", "23320.5", "United States").await;

    let resp = harness
        .post_json(
            "/records",
            json!({ "year": "2023", "value": "100", "country": "X" }),
        )
        .await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let body = read_json(resp).await;
    let form_errors = body["errors"]["_form"].as_array().unwrap();
    assert!(form_errors[0]
        .as_str()
        .unwrap()
        .contains("already exists"));

    // Collection still has exactly one 2023 record.
    let list = read_json(harness.get("/records").await).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["country"], "United States");
}

#[tokio::test]
async fn test_create_with_invalid_fields_returns_field_errors() {
    let harness = TestHarness::new();

    let resp = harness
        .post_json(
            "/records",
            json!({ "year": "abc", "value": "-1", "country": "" }),
        )
        .await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = read_json(resp).await;
    assert_eq!(body["errors"]["year"][0], "Year must be a whole number.");
    assert_eq!(
        body["errors"]["value"][0],
        "GDP value must be a positive number."
    );
    assert_eq!(body["errors"]["country"][0], "Country must not be empty.");
}

#[tokio::test]
async fn test_create_year_bounds() {
    let harness = TestHarness::new();

    let resp = harness
        .post_json(
            "/records",
            json!({ "year": "1899", "value": "100", "country": "X" }),
        )
        .await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json(resp).await;
    assert_eq!(body["errors"]["year"][0], "Year must be 1900 or later.");

    let resp = harness
        .post_json(
            "/records",
            json!({ "year": "3000", "value": "100", "country": "X" }),
        )
        .await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json(resp).await;
    assert_eq!(
        body["errors"]["year"][0],
        "Year cannot be in the distant future."
    );
}

#[tokio::test]
async fn test_list_is_sorted_ascending_by_year() {
    let harness = TestHarness::new();
    harness.create_record("2021", "110", "X").await;
    harness.create_record("1999", "50", "X").await;
    harness.create_record("2023", "130", "X").await;

    let list = read_json(harness.get("/records").await).await;
    let years: Vec<i64> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["year"].as_i64().unwrap())
        .collect();
    assert_eq!(years, vec![1999, 2021, 2023]);
}

#[tokio::test]
async fn test_update_value() {
    let harness = TestHarness::new();
    let id = harness.create_record("2023", "100", "X").await;

    let resp = harness
        .patch_json(&format!("/records/{id}"), json!({ "value": 250.5 }))
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await["value"], 250.5);
}

#[tokio::test]
async fn test_update_negative_value_rejected_without_mutation() {
    let harness = TestHarness::new();
    let id = harness.create_record("2023", "100", "X").await;

    let resp = harness
        .patch_json(&format!("/records/{id}"), json!({ "value": -5 }))
        .await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json(resp).await;
    assert_eq!(
        body["errors"]["value"][0],
        "GDP value must be a positive number."
    );

    let list = read_json(harness.get("/records").await).await;
    assert_eq!(list[0]["value"], 100.0);
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found() {
    let harness = TestHarness::new();

    let resp = harness
        .patch_json("/records/nope", json!({ "value": 10 }))
        .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_record() {
    let harness = TestHarness::new();
    let id = harness.create_record("2023", "100", "X").await;

    let resp = harness.delete(&format!("/records/{id}")).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let list = read_json(harness.get("/records").await).await;
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_double_delete_is_not_found() {
    let harness = TestHarness::new();
    let id = harness.create_record("2023", "100", "X").await;

    harness.delete(&format!("/records/{id}")).await;
    let resp = harness.delete(&format!("/records/{id}")).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_route() {
    let harness = TestHarness::new();
    let resp = harness.get("/health").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await["status"], "ok");
}
