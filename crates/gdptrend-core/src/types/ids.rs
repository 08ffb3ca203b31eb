//! Unique identifier type for GDP records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque unique identifier for a stored GDP record.
///
/// Ids are assigned by the document store on creation and are immutable
/// thereafter. Any non-empty string is a valid id once assigned; this type
/// only rejects the empty string, which no store ever hands out.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Creates a record id from a store-assigned string.
    ///
    /// Returns `None` for an empty (or all-whitespace) id.
    ///
    /// # Examples
    ///
    /// ```
    /// use gdptrend_core::RecordId;
    ///
    /// let id = RecordId::new("rec_8f2a").unwrap();
    /// assert_eq!(id.as_str(), "rec_8f2a");
    /// assert!(RecordId::new("").is_none());
    /// ```
    pub fn new<S: Into<String>>(id: S) -> Option<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            None
        } else {
            Some(Self(id))
        }
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
