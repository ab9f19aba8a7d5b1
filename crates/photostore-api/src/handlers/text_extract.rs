use axum::{extract::State, Json};
use photostore_core::models::ExtractionResponse;
use photostore_core::AppError;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::error::{HttpAppError, ValidatedJson};
use crate::services::OcrService;
use crate::state::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ExtractTextRequest {
    /// Asset identifier, as a JSON number or numeric string.
    #[schema(value_type = Option<i64>)]
    pub assetid: Option<serde_json::Value>,
}

fn parse_assetid(value: Option<&serde_json::Value>) -> Option<i64> {
    match value? {
        serde_json::Value::Number(n) => n.as_i64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Extract text from a stored image and persist it as a text blob.
#[utoipa::path(
    post,
    path = "/extract-text-from-image",
    tag = "extractions",
    request_body = ExtractTextRequest,
    responses(
        (status = 200, description = "Text extracted", body = ExtractionResponse),
        (status = 400, description = "Missing assetid", body = crate::error::ErrorResponse),
        (status = 404, description = "Asset not found", body = crate::error::ErrorResponse),
        (status = 500, description = "Processing failure", body = crate::error::ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, request), fields(operation = "extract_text"))]
pub async fn extract_text(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<ExtractTextRequest>,
) -> Result<Json<ExtractionResponse>, HttpAppError> {
    let assetid = parse_assetid(request.assetid.as_ref()).ok_or_else(|| {
        AppError::InvalidInput("Missing 'assetid' in request body.".to_string())
    })?;

    let service = OcrService::new(&state);
    let response = service.extract(assetid).await?;

    Ok(Json(response))
}
