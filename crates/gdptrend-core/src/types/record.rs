//! GDP record types: raw submissions, validated drafts, stored records,
//! and analysis payloads.

use crate::types::RecordId;
use serde::{Deserialize, Serialize};

/// An untyped record submission as received from a form or CLI arguments.
///
/// All fields arrive as text; [`validate_submission`](crate::validate::validate_submission)
/// is the only path from a raw input to a typed [`RecordDraft`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawRecordInput {
    /// Year field, e.g. `"2023"`
    #[serde(default)]
    pub year: String,
    /// GDP value field, e.g. `"23320.5"`
    #[serde(default)]
    pub value: String,
    /// Country label, e.g. `"United States"`
    #[serde(default)]
    pub country: String,
}

/// A validated but not yet stored GDP record.
///
/// Constructed only by the validator; carrying one is proof the static
/// field rules held at validation time. The year-uniqueness invariant is
/// checked later, by the store gateway at create time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordDraft {
    /// Observation year, in `[1900, current_year + 1]`
    pub year: i32,
    /// GDP magnitude, strictly positive and finite
    pub value: f64,
    /// Non-empty country label
    pub country: String,
}

/// A stored GDP observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GdpRecord {
    /// Store-assigned id, immutable after creation
    pub id: RecordId,
    /// Observation year
    pub year: i32,
    /// GDP magnitude
    pub value: f64,
    /// Country label
    pub country: String,
}

impl GdpRecord {
    /// Builds a stored record from a draft and the id the store assigned.
    pub fn from_draft(id: RecordId, draft: RecordDraft) -> Self {
        Self {
            id,
            year: draft.year,
            value: draft.value,
            country: draft.country,
        }
    }

    /// Projects the record onto the `(year, value)` pair the summarizer
    /// consumes. Country is deliberately dropped here.
    pub fn to_point(&self) -> GdpPoint {
        GdpPoint {
            year: self.year,
            value: self.value,
        }
    }
}

/// A `(year, value)` pair, the country-agnostic input to trend analysis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GdpPoint {
    /// Observation year
    pub year: i32,
    /// GDP magnitude
    pub value: f64,
}

/// The prose result of a trend analysis. Ephemeral, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    /// Free-text summary of GDP trends
    pub summary: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_draft_carries_all_fields() {
        let draft = RecordDraft {
            year: 2023,
            value: 23320.5,
            country: "United States".to_string(),
        };
        let id = RecordId::new("rec-1").unwrap();
        let record = GdpRecord::from_draft(id.clone(), draft);
        assert_eq!(record.id, id);
        assert_eq!(record.year, 2023);
        assert_eq!(record.value, 23320.5);
        assert_eq!(record.country, "United States");
    }

    #[test]
    fn test_to_point_strips_country() {
        let record = GdpRecord {
            id: RecordId::new("rec-1").unwrap(),
            year: 2020,
            value: 100.0,
            country: "X".to_string(),
        };
        let point = record.to_point();
        assert_eq!(point, GdpPoint { year: 2020, value: 100.0 });
    }

    #[test]
    fn test_raw_input_defaults_missing_fields() {
        let raw: RawRecordInput = serde_json::from_str(r#"{"year": "2023"}"#).unwrap();
        assert_eq!(raw.year, "2023");
        assert_eq!(raw.value, "");
        assert_eq!(raw.country, "");
    }

    #[test]
    fn test_record_serializes_with_flat_fields() {
        let record = GdpRecord {
            id: RecordId::new("rec-9").unwrap(),
            year: 2021,
            value: 110.0,
            country: "X".to_string(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], "rec-9");
        assert_eq!(json["year"], 2021);
        assert_eq!(json["country"], "X");
    }
}
