//! Error types for the GDPTrend core library.

use crate::validate::ValidationErrors;

/// Errors that can occur across GDPTrend operations.
///
/// All error variants are marked with `#[non_exhaustive]` to allow
/// adding new error types without breaking changes.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A submission failed one or more field-level validation rules.
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    /// A record for this year already exists in the collection.
    #[error("a record for year {year} already exists")]
    DuplicateYear {
        /// The year that collided with an existing record
        year: i32,
    },

    /// No record exists with the given id (stale id, double delete, etc.)
    #[error("record not found: {id}")]
    NotFound {
        /// Record id that was not found
        id: String,
    },

    /// Document store backend failure (transport, server fault, bad payload)
    #[error("store error: {message}")]
    Store {
        /// Human-readable error message
        message: String,
        /// Source error if available
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The summarizer was asked to analyze an empty data set.
    #[error("no data available for analysis")]
    NoData,

    /// Completion-model failure (transport, rate limit, malformed response)
    #[error("analysis error: {message}")]
    Analysis {
        /// Human-readable error message
        message: String,
        /// Source error if available
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration error
    #[error("configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// JSON serialization/deserialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error (config files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type alias for GDPTrend operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns whether this error is retryable.
    ///
    /// Retryable errors are transient backend failures; a retry with the
    /// same input may succeed. Validation and uniqueness errors are
    /// permanent for a given submission.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Store { .. } => true,
            Error::Analysis { .. } => true,
            Error::Io(_) => true,
            Error::Validation(_) => false,
            Error::DuplicateYear { .. } => false,
            Error::NotFound { .. } => false,
            Error::NoData => false,
            Error::Config { .. } => false,
            Error::Serialization(_) => false,
        }
    }

    /// Creates a new store error with a message.
    pub fn store<S: Into<String>>(message: S) -> Self {
        Error::Store {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new store error with a message and source error.
    pub fn store_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Store {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new analysis error with a message.
    pub fn analysis<S: Into<String>>(message: S) -> Self {
        Error::Analysis {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new analysis error with a message and source error.
    pub fn analysis_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Analysis {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates a new not-found error for a record id.
    pub fn not_found<S: Into<String>>(id: S) -> Self {
        Error::NotFound { id: id.into() }
    }

    /// Creates a validation error for a single field.
    pub fn validation_field<F, M>(field: F, message: M) -> Self
    where
        F: Into<String>,
        M: Into<String>,
    {
        let mut errors = ValidationErrors::new();
        errors.push(field, message);
        Error::Validation(errors)
    }
}
