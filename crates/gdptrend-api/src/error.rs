//! HTTP mapping of the shared error taxonomy.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use gdptrend_core::Error;
use serde_json::json;

/// Message shown at form level when a year collides with an existing
/// record. Matches the message end users see in the record form.
pub const DUPLICATE_YEAR_MESSAGE: &str = "A record for this year already exists. \
Please edit the existing record or choose a different year.";

/// Wrapper turning [`gdptrend_core::Error`] into an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            // Field-level errors render inline next to the offending input.
            Error::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "errors": errors })),
            )
                .into_response(),

            // Form-level error: recoverable by picking a different year.
            Error::DuplicateYear { .. } => (
                StatusCode::CONFLICT,
                Json(json!({ "errors": { "_form": [DUPLICATE_YEAR_MESSAGE] } })),
            )
                .into_response(),

            Error::NotFound { id } => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": format!("record not found: {id}") })),
            )
                .into_response(),

            Error::Store { message, .. } => {
                tracing::error!(%message, "store failure");
                (
                    StatusCode::BAD_GATEWAY,
                    Json(json!({ "error": "Database error: the record store is unavailable." })),
                )
                    .into_response()
            }

            err => {
                tracing::error!(error = %err, "unexpected failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Internal error." })),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_422() {
        let err = ApiError(Error::validation_field("year", "Year must be a whole number."));
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_duplicate_year_maps_to_409() {
        let err = ApiError(Error::DuplicateYear { year: 2023 });
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let err = ApiError(Error::not_found("rec-1"));
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_store_error_maps_to_502() {
        let err = ApiError(Error::store("connection refused"));
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    }
}
