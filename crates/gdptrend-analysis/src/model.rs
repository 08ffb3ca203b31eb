//! Completion-model abstraction and the mock provider.

use async_trait::async_trait;
use gdptrend_core::{Error, Result};
use std::collections::VecDeque;
use std::sync::Mutex;

/// A single completion call: one system prompt, one user prompt, one
/// bounded response.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// System prompt framing the model's role
    pub system: String,
    /// User prompt carrying the rendered data
    pub prompt: String,
    /// Upper bound on generated tokens
    pub max_tokens: u32,
}

impl CompletionRequest {
    /// Creates a request with an empty system prompt and a default token
    /// budget.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            system: String::new(),
            prompt: prompt.into(),
            max_tokens: 1024,
        }
    }

    /// Sets the system prompt.
    pub fn with_system_prompt(mut self, system: impl Into<String>) -> Self {
        self.system = system.into();
        self
    }

    /// Sets the max-tokens bound.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

/// Raw completion text returned by a model.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionResponse {
    /// Generated text
    pub content: String,
}

/// A hosted text-completion service.
///
/// One call in, one response out; no streaming, no retry. Implementations
/// map every transport and provider failure to
/// [`Error::Analysis`](gdptrend_core::Error::Analysis).
#[async_trait]
pub trait CompletionModel: Send + Sync {
    /// Executes a single completion call.
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse>;
}

/// Scripted model for tests: pops canned responses in order and records
/// every request it receives.
///
/// Public (not test-gated) so downstream crates can drive their own
/// integration tests against it.
#[derive(Debug, Default)]
pub struct MockModel {
    responses: Mutex<VecDeque<String>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl MockModel {
    /// Creates a mock that replies with `responses` in order.
    pub fn new(responses: Vec<String>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Creates a mock that replies with a single canned response.
    pub fn with_response(response: impl Into<String>) -> Self {
        Self::new(vec![response.into()])
    }

    /// All requests received so far, in call order.
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests
            .lock()
            .map(|reqs| reqs.clone())
            .unwrap_or_default()
    }

    /// Number of completion calls made against this mock.
    pub fn request_count(&self) -> usize {
        self.requests.lock().map(|reqs| reqs.len()).unwrap_or(0)
    }
}

#[async_trait]
impl CompletionModel for MockModel {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }
        let next = self.responses.lock().ok().and_then(|mut r| r.pop_front());
        match next {
            Some(content) => Ok(CompletionResponse { content }),
            None => Err(Error::analysis("mock model has no responses left")),
        }
    }
}
