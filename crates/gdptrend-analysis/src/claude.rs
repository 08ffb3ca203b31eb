//! Claude messages-API completion provider.

use crate::model::{CompletionModel, CompletionRequest, CompletionResponse};
use async_trait::async_trait;
use gdptrend_core::{Error, Result};
use serde::{Deserialize, Serialize};

const DEFAULT_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Completion provider backed by the Anthropic messages API.
///
/// API key and model name are injected at construction; the base URL can
/// be overridden for self-hosted gateways.
#[derive(Debug, Clone)]
pub struct ClaudeModel {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl ClaudeModel {
    /// Creates a provider for the hosted API.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: DEFAULT_API_URL.to_string(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Overrides the messages endpoint URL.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }
}

#[derive(Debug, Serialize)]
struct MessagesBody<'a> {
    model: &'a str,
    max_tokens: u32,
    #[serde(skip_serializing_if = "str::is_empty")]
    system: &'a str,
    messages: [WireMessage<'a>; 1],
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: String,
}

#[async_trait]
impl CompletionModel for ClaudeModel {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        let body = MessagesBody {
            model: &self.model,
            max_tokens: request.max_tokens,
            system: &request.system,
            messages: [WireMessage {
                role: "user",
                content: &request.prompt,
            }],
        };

        tracing::debug!(model = %self.model, max_tokens = request.max_tokens, "completion call");

        let response = self
            .client
            .post(&self.api_url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::analysis_with_source("completion request failed", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::analysis(format!(
                "completion service returned HTTP {status}"
            )));
        }

        let parsed: MessagesResponse = response
            .json()
            .await
            .map_err(|e| Error::analysis_with_source("malformed completion response", e))?;

        let content = parsed
            .content
            .into_iter()
            .map(|block| block.text)
            .collect::<String>();

        if content.is_empty() {
            return Err(Error::analysis("completion response contained no text"));
        }

        Ok(CompletionResponse { content })
    }
}
