use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use photostore_core::models::AssetListResponse;
use photostore_core::ErrorMetadata;
use std::sync::Arc;

use crate::state::AppState;

/// Return all asset rows. No pagination, no filtering.
///
/// The failure body keeps the `data: []` shape so list consumers never
/// see a missing field.
#[utoipa::path(
    get,
    path = "/assets",
    tag = "assets",
    responses(
        (status = 200, description = "All stored assets", body = AssetListResponse),
        (status = 500, description = "Database failure", body = crate::error::ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "list_assets"))]
pub async fn list_assets(State(state): State<Arc<AppState>>) -> Response {
    match state.assets.list().await {
        Ok(assets) => Json(AssetListResponse::success(assets)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Asset listing failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "message": e.client_message(),
                    "data": [],
                })),
            )
                .into_response()
        }
    }
}
