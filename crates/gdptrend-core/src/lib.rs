#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! GDPTrend Core Library
//!
//! Domain types, submission validation, and the shared error taxonomy for
//! the GDPTrend record-keeping system. This crate has no internal GDPTrend
//! dependencies (dependency level 0).

pub mod error;
pub mod types;
pub mod validate;

// Re-exports for convenience
pub use error::{Error, Result};
pub use types::{AnalysisSummary, GdpPoint, GdpRecord, RawRecordInput, RecordDraft, RecordId};
pub use validate::{ValidationErrors, current_year, validate_submission};
