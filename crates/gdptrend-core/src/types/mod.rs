//! Core types for GDP records and analysis.

mod ids;
mod proptests;
mod record;

pub use ids::RecordId;
pub use record::{AnalysisSummary, GdpPoint, GdpRecord, RawRecordInput, RecordDraft};
