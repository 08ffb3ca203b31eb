//! Common test utilities and harness for API integration tests.

use axum::Router;
use axum::body::Body;
use axum::response::Response;
use gdptrend_analysis::{MockModel, TrendSummarizer};
use gdptrend_api::{AppState, build_router};
use gdptrend_auth::{AuthConfig, SharedSecretValidator};
use gdptrend_store::MemoryStore;
use http::{Request, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Router plus a handle to the scripted model behind it.
pub struct TestHarness {
    /// Assembled application router
    pub router: Router,
    /// Scripted completion model behind the summarizer
    pub model: Arc<MockModel>,
}

impl TestHarness {
    /// Harness with auth disabled and the given scripted model replies.
    pub fn with_model_responses(responses: Vec<String>) -> Self {
        Self::build(responses, AuthConfig::default(), "unused")
    }

    /// Harness with auth disabled and a single scripted model reply.
    pub fn new() -> Self {
        Self::with_model_responses(vec![r#"{"summary": "Test summary."}"#.to_string()])
    }

    /// Harness requiring the given bearer secret on protected routes.
    pub fn with_auth_secret(secret: &str) -> Self {
        Self::build(Vec::new(), AuthConfig::enabled(), secret)
    }

    fn build(responses: Vec<String>, auth: AuthConfig, secret: &str) -> Self {
        let model = Arc::new(MockModel::new(responses));
        let store = Arc::new(MemoryStore::new());
        let state = AppState::new(store, TrendSummarizer::new(model.clone()));
        let validator = Arc::new(SharedSecretValidator::new(secret));
        let router = build_router(state, validator, auth);
        Self { router, model }
    }

    /// Sends a request through the router.
    pub async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, path: &str) -> Response {
        self.send(
            Request::builder()
                .uri(path)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    pub async fn post_json(&self, path: &str, body: Value) -> Response {
        self.send(
            Request::builder()
                .method("POST")
                .uri(path)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    pub async fn patch_json(&self, path: &str, body: Value) -> Response {
        self.send(
            Request::builder()
                .method("PATCH")
                .uri(path)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    pub async fn delete(&self, path: &str) -> Response {
        self.send(
            Request::builder()
                .method("DELETE")
                .uri(path)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    /// Creates a record through the API, returning its id.
    pub async fn create_record(&self, year: &str, value: &str, country: &str) -> String {
        let resp = self
            .post_json(
                "/records",
                serde_json::json!({ "year": year, "value": value, "country": country }),
            )
            .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        read_json(resp).await["id"].as_str().unwrap().to_string()
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads a response body as JSON.
pub async fn read_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
