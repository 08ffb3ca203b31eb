//! Route handlers.

use crate::error::ApiError;
use crate::state::AppState;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use gdptrend_core::{
    Error, GdpPoint, GdpRecord, RawRecordInput, RecordId, current_year, validate_submission,
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Liveness probe.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// `GET /records` — the full collection, ascending by year.
pub async fn list_records(
    State(state): State<AppState>,
) -> Result<Json<Vec<GdpRecord>>, ApiError> {
    let records = state.store.list().await?;
    Ok(Json(records))
}

/// `POST /records` — validate a raw submission and create the record.
pub async fn create_record(
    State(state): State<AppState>,
    Json(raw): Json<RawRecordInput>,
) -> Result<(StatusCode, Json<GdpRecord>), ApiError> {
    let draft = validate_submission(&raw, current_year()).map_err(Error::Validation)?;
    let record = state.store.create(draft).await?;
    tracing::info!(id = %record.id, year = record.year, "record created");
    Ok((StatusCode::CREATED, Json(record)))
}

/// Body of a `PATCH /records/{id}` request. Only `value` is editable.
#[derive(Debug, Deserialize)]
pub struct UpdateValueBody {
    /// Replacement GDP value, must be strictly positive
    pub value: f64,
}

/// `PATCH /records/{id}` — overwrite the value field.
pub async fn update_record(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateValueBody>,
) -> Result<Json<GdpRecord>, ApiError> {
    let id = RecordId::new(id).ok_or_else(|| Error::not_found(""))?;
    let record = state.store.update_value(&id, body.value).await?;
    tracing::info!(id = %record.id, value = record.value, "record updated");
    Ok(Json(record))
}

/// `DELETE /records/{id}` — remove a record; double delete is a 404.
pub async fn delete_record(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = RecordId::new(id).ok_or_else(|| Error::not_found(""))?;
    state.store.delete(&id).await?;
    tracing::info!(id = %id, "record deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Analysis payload: exactly one of `summary` or `error`, never both.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum AnalysisOutcome {
    /// The model produced a trend summary.
    Summary {
        /// Prose summary of GDP trends
        summary: String,
    },
    /// Analysis could not run; shown inside the analysis panel.
    Failure {
        /// Panel-level error message
        error: String,
    },
}

/// `POST /analysis` — summarize the current collection.
///
/// Panel-level failures (`NoData`, model faults) travel inside a 200
/// payload; only a store outage is a transport-level error.
pub async fn analyze(State(state): State<AppState>) -> Result<Json<AnalysisOutcome>, ApiError> {
    let records = state.store.list().await?;
    let points: Vec<GdpPoint> = records.iter().map(GdpRecord::to_point).collect();

    let outcome = match state.summarizer.summarize(&points).await {
        Ok(result) => AnalysisOutcome::Summary {
            summary: result.summary,
        },
        Err(Error::NoData) => AnalysisOutcome::Failure {
            error: "No data available for analysis.".to_string(),
        },
        Err(err) => {
            tracing::error!(error = %err, "trend analysis failed");
            AnalysisOutcome::Failure {
                error: "Failed to perform trend analysis.".to_string(),
            }
        }
    };

    Ok(Json(outcome))
}
