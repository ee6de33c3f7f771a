//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (ready to serve traffic)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
///
/// Kubernetes liveness probe.
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Ready once there is at least one record to show.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    if dataset_ok(&state) {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// GET /health
///
/// Full health status with component details.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let (status, dataset) = if dataset_ok(&state) {
        ("healthy", "ok")
    } else {
        ("degraded", "empty")
    };

    Json(HealthResponse {
        status: status.to_string(),
        dataset: dataset.to_string(),
        records: state.dashboard.dataset().len(),
        regions: state.dashboard.regions().len(),
        ws_connections: state.ws_connection_count(),
        uptime_seconds: state.uptime_seconds(),
        started_at: state.started_at.to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

fn dataset_ok(state: &AppState) -> bool {
    !state.dashboard.dataset().is_empty()
}
