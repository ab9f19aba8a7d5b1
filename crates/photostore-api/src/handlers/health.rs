use axum::{extract::State, Json};
use photostore_core::models::HealthResponse;
use std::sync::Arc;

use crate::state::AppState;

/// Health check: uptime plus a database connectivity probe.
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses(
        (status = 200, description = "Service status", body = HealthResponse)
    )
)]
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let db_connection = match photostore_db::ping(&state.pool).await {
        Ok(()) => "connected".to_string(),
        Err(e) => {
            tracing::warn!(error = %e, "Database ping failed");
            "disconnected".to_string()
        }
    };

    Json(HealthResponse {
        status: "running".to_string(),
        uptime_in_secs: state.uptime_secs(),
        db_connection,
    })
}
