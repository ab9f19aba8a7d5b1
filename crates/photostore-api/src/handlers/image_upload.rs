use axum::{extract::State, Json};
use photostore_core::models::UploadImageResponse;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::error::{HttpAppError, Sentinel, ValidatedJson};
use crate::services::UploadService;
use crate::state::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct UploadImageRequest {
    pub assetname: String,
    /// Base64-encoded image payload.
    pub data: String,
    /// Target width: positive integer, as a JSON number or numeric string.
    #[schema(value_type = Option<i32>)]
    pub width: Option<serde_json::Value>,
    /// Target height: positive integer, as a JSON number or numeric string.
    #[schema(value_type = Option<i32>)]
    pub height: Option<serde_json::Value>,
}

/// Upload image handler
///
/// Runs the upload pipeline: base64 decode, image decode, dimension
/// validation, resize, object-store write, metadata insert. Failure
/// bodies carry `assetid: -1`.
#[utoipa::path(
    post,
    path = "/image",
    tag = "assets",
    request_body = UploadImageRequest,
    responses(
        (status = 200, description = "Image uploaded", body = UploadImageResponse),
        (status = 400, description = "Bad dimensions or unreadable image", body = crate::error::ErrorResponse),
        (status = 500, description = "Upload or persistence failure", body = crate::error::ErrorResponse)
    )
)]
#[tracing::instrument(
    skip(state, request),
    fields(assetname = %request.assetname, operation = "upload_image")
)]
pub async fn upload_image(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<UploadImageRequest>,
) -> Result<Json<UploadImageResponse>, HttpAppError> {
    let service = UploadService::new(&state);

    let response = service
        .upload(
            request.assetname.clone(),
            &request.data,
            request.width.as_ref(),
            request.height.as_ref(),
        )
        .await
        .map_err(|e| HttpAppError::from(e).with_sentinel(Sentinel::AssetId))?;

    Ok(Json(response))
}
