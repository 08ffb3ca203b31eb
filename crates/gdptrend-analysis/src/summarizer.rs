//! The trend summarizer: fixed prompt in, one prose summary out.

use crate::model::{CompletionModel, CompletionRequest};
use gdptrend_core::{AnalysisSummary, Error, GdpPoint, Result};
use serde::Deserialize;
use std::sync::Arc;

/// Instruction framing for the analysis call. The response must be a JSON
/// object with a single `summary` field so the output contract stays
/// machine-checkable.
const SYSTEM_PROMPT: &str = "You are an expert economic analyst. Analyze the provided GDP data \
to identify growth trends and potential economic insights. Provide a detailed summary of your \
findings. Respond with a JSON object containing a single string field \"summary\".";

const MAX_SUMMARY_TOKENS: u32 = 1024;

/// Parsed shape of a well-formed model reply.
#[derive(Debug, Deserialize)]
struct SummaryPayload {
    summary: String,
}

/// Wraps a completion model with the fixed GDP-trend prompt.
#[derive(Clone)]
pub struct TrendSummarizer {
    model: Arc<dyn CompletionModel>,
}

impl TrendSummarizer {
    /// Creates a summarizer over an injected completion model.
    pub fn new(model: Arc<dyn CompletionModel>) -> Self {
        Self { model }
    }

    /// Summarizes an ordered sequence of GDP points.
    ///
    /// Fails with [`Error::NoData`](gdptrend_core::Error::NoData) on empty
    /// input without calling the model. Every model-side failure maps to
    /// [`Error::Analysis`](gdptrend_core::Error::Analysis); there is no
    /// retry and no partial output.
    pub async fn summarize(&self, points: &[GdpPoint]) -> Result<AnalysisSummary> {
        if points.is_empty() {
            return Err(Error::NoData);
        }

        tracing::info!(points = points.len(), "starting trend analysis");

        let request = CompletionRequest::new(render_prompt(points))
            .with_system_prompt(SYSTEM_PROMPT)
            .with_max_tokens(MAX_SUMMARY_TOKENS);

        let response = self.model.complete(request).await?;

        let payload: SummaryPayload = serde_json::from_str(&response.content)
            .map_err(|e| Error::analysis_with_source("model reply was not summary JSON", e))?;

        tracing::info!("trend analysis completed");

        Ok(AnalysisSummary {
            summary: payload.summary,
        })
    }
}

/// Renders the fixed data prompt: a header plus one
/// `"Year: {year}, Value: {value}"` line per point, in input order.
pub fn render_prompt(points: &[GdpPoint]) -> String {
    let mut prompt = String::from("GDP Data:\n");
    for point in points {
        prompt.push_str(&format!("Year: {}, Value: {}\n", point.year, point.value));
    }
    prompt
}
