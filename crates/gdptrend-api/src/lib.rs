#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! GDPTrend HTTP API
//!
//! axum routes wiring the record store gateway, the trend summarizer, and
//! the auth middleware into one service:
//!
//! - `GET /health` — liveness, unauthenticated
//! - `GET /records` — all records, ascending by year
//! - `POST /records` — validated create, one record per year
//! - `PATCH /records/{id}` — overwrite the value field
//! - `DELETE /records/{id}` — remove a record
//! - `POST /analysis` — AI trend summary of the current collection
//!
//! Every failure returns the caller to an interactive idle state: field
//! errors inline, form-level errors under `_form`, analysis errors inside
//! the analysis payload.

pub mod error;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use server::{build_router, serve};
pub use state::AppState;
