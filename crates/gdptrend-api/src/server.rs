//! Router assembly and serving.

use crate::routes;
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, patch, post};
use gdptrend_auth::{AuthConfig, AuthLayer, TokenValidator};
use gdptrend_core::{Error, Result};
use std::sync::Arc;

/// Builds the full application router.
///
/// `/health` stays outside the auth layer; all record and analysis routes
/// sit behind it. With `auth.enabled == false` the layer passes requests
/// through, so dev setups need no token.
pub fn build_router<V: TokenValidator>(
    state: AppState,
    validator: Arc<V>,
    auth: AuthConfig,
) -> Router {
    let protected = Router::new()
        .route("/records", get(routes::list_records).post(routes::create_record))
        .route(
            "/records/{id}",
            patch(routes::update_record).delete(routes::delete_record),
        )
        .route("/analysis", post(routes::analyze))
        .layer(AuthLayer::new(validator, auth))
        .with_state(state);

    Router::new()
        .route("/health", get(routes::health))
        .merge(protected)
}

/// Binds `addr` and serves the router until the process is stopped.
pub async fn serve(addr: &str, router: Router) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| Error::config(format!("cannot bind {addr}: {e}")))?;

    tracing::info!(%addr, "API server listening");

    axum::serve(listener, router).await?;
    Ok(())
}
