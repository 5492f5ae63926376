//! `GET /health`.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
    /// Store the process was started with (`clickhouse` or `memory`).
    backend: &'static str,
}

/// Liveness only: the store is not queried, so a database outage does not
/// fail the check (profile lookups degrade to 404 instead).
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        backend: state.store.backend(),
    })
}
