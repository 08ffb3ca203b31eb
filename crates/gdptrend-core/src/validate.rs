//! Static validation of raw record submissions.
//!
//! The validator turns an untyped `{year, value, country}` submission into
//! a typed [`RecordDraft`], or a per-field map of human-readable errors.
//! All rules are local to a single submission; the year-uniqueness check
//! needs a store query and lives in the gateway, not here.

use crate::types::{RawRecordInput, RecordDraft};
use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Earliest year a GDP record may carry.
pub const MIN_YEAR: i32 = 1900;

/// Per-field validation failures, in field order, messages in rule order.
///
/// Serializes as a plain `{field: [message, ...]}` map so the API can
/// return it inline for form rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    /// Creates an empty error map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message to a field's error list.
    pub fn push<F: Into<String>, M: Into<String>>(&mut self, field: F, message: M) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// Returns `true` if no field has any error.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages recorded for a field. Empty slice if the field is clean.
    pub fn field(&self, name: &str) -> &[String] {
        self.0.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterates over `(field, messages)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

/// The current calendar year (UTC), used as the upper year bound.
///
/// Callers thread the year through [`validate_submission`] explicitly so
/// tests never depend on the wall clock.
pub fn current_year() -> i32 {
    Utc::now().year()
}

/// Validates a raw submission against the static field rules.
///
/// All failing rules are reported together, grouped by field:
///
/// - `year`: integer, `MIN_YEAR <= year <= now_year + 1`
/// - `value`: finite float, strictly positive
/// - `country`: non-empty after trimming
///
/// # Examples
///
/// ```
/// use gdptrend_core::{RawRecordInput, validate_submission};
///
/// let raw = RawRecordInput {
///     year: "2023".into(),
///     value: "23320.5".into(),
///     country: "United States".into(),
/// };
/// let draft = validate_submission(&raw, 2025).unwrap();
/// assert_eq!(draft.year, 2023);
/// ```
pub fn validate_submission(
    raw: &RawRecordInput,
    now_year: i32,
) -> Result<RecordDraft, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let year = match raw.year.trim().parse::<i32>() {
        Ok(y) => {
            if y < MIN_YEAR {
                errors.push("year", "Year must be 1900 or later.");
            } else if y > now_year + 1 {
                errors.push("year", "Year cannot be in the distant future.");
            }
            Some(y)
        }
        Err(_) => {
            errors.push("year", "Year must be a whole number.");
            None
        }
    };

    let value = match raw.value.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => {
            if v <= 0.0 {
                errors.push("value", "GDP value must be a positive number.");
            }
            Some(v)
        }
        _ => {
            errors.push("value", "GDP value must be a number.");
            None
        }
    };

    let country = raw.country.trim();
    if country.is_empty() {
        errors.push("country", "Country must not be empty.");
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    // Both unwrapped values are Some here: a None recorded an error above.
    match (year, value) {
        (Some(year), Some(value)) => Ok(RecordDraft {
            year,
            value,
            country: country.to_string(),
        }),
        _ => Err(errors),
    }
}

/// Checks that an already-typed value is storable (finite and `> 0`).
///
/// Used by the update path, where `value` arrives as a number rather than
/// form text.
pub fn ensure_positive_value(value: f64) -> crate::Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(crate::Error::validation_field(
            "value",
            "GDP value must be a positive number.",
        ))
    }
}
