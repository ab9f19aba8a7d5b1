use axum::{
    extract::{Path, State},
    Json,
};
use photostore_core::models::AssetDetailResponse;
use photostore_core::AppError;
use std::sync::Arc;

use crate::error::HttpAppError;
use crate::state::AppState;

/// Fetch one asset by identifier, with the derived public URL.
#[utoipa::path(
    get,
    path = "/image/{assetid}",
    tag = "assets",
    params(
        ("assetid" = i64, Path, description = "Asset identifier")
    ),
    responses(
        (status = 200, description = "Asset found", body = AssetDetailResponse),
        (status = 400, description = "Invalid asset ID", body = crate::error::ErrorResponse),
        (status = 404, description = "Asset not found", body = crate::error::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::error::ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "get_image"))]
pub async fn get_image(
    Path(assetid): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<AssetDetailResponse>, HttpAppError> {
    // The path parameter is validated by hand so a non-numeric id is a
    // 400, distinct from the 404 for an unknown id.
    let assetid: i64 = assetid
        .parse()
        .map_err(|_| AppError::InvalidInput("Invalid asset ID.".to_string()))?;

    let asset = state
        .assets
        .get(assetid)
        .await?
        .ok_or_else(|| AppError::NotFound("Asset not found.".to_string()))?;

    let s3_link = state.storage.public_url(&asset.bucketkey);

    Ok(Json(AssetDetailResponse::from_asset(asset, s3_link)))
}
