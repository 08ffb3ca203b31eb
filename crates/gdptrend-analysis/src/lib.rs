#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! GDPTrend Trend Summarizer
//!
//! Renders an ordered list of `(year, value)` pairs into a fixed prompt,
//! sends it to a hosted completion model, and returns a single prose
//! summary or a typed failure. The model is the only non-deterministic
//! external dependency in the system; everything testable about this
//! crate is the contract shape, not trend quality.

pub mod claude;
pub mod model;
pub mod summarizer;

// Re-export core error types; analysis operations share the core taxonomy.
pub use gdptrend_core::{Error, Result};

pub use claude::ClaudeModel;
pub use model::{CompletionModel, CompletionRequest, CompletionResponse, MockModel};
pub use summarizer::TrendSummarizer;
