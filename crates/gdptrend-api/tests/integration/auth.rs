//! Auth layer wiring: protected routes vs. the open health probe.

use crate::common::{TestHarness, read_json};
use axum::body::Body;
use http::{Request, StatusCode};

#[tokio::test]
async fn test_protected_route_requires_token() {
    let harness = TestHarness::with_auth_secret("s3cret");

    let resp = harness.get("/records").await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body = read_json(resp).await;
    assert_eq!(body["error"], "missing authentication token");
}

#[tokio::test]
async fn test_wrong_token_rejected() {
    let harness = TestHarness::with_auth_secret("s3cret");

    let resp = harness
        .send(
            Request::builder()
                .uri("/records")
                .header("Authorization", "Bearer wrong")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_valid_token_reaches_handler() {
    let harness = TestHarness::with_auth_secret("s3cret");

    let resp = harness
        .send(
            Request::builder()
                .uri("/records")
                .header("Authorization", "Bearer s3cret")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(read_json(resp).await.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_health_is_open_without_token() {
    let harness = TestHarness::with_auth_secret("s3cret");

    let resp = harness.get("/health").await;
    assert_eq!(resp.status(), StatusCode::OK);
}
