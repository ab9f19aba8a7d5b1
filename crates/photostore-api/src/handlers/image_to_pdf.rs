use axum::{extract::State, Json};
use photostore_core::models::PdfCreatedResponse;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::error::{HttpAppError, Sentinel, ValidatedJson};
use crate::services::PdfService;
use crate::state::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ImagesToPdfRequest {
    /// Storage keys of existing assets, in page order.
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(rename = "pdfName")]
    pub pdf_name: String,
}

/// Assemble stored images into a single PDF document.
///
/// Failure bodies carry `pdfId: -1`.
#[utoipa::path(
    post,
    path = "/image-to-pdf",
    tag = "documents",
    request_body = ImagesToPdfRequest,
    responses(
        (status = 200, description = "PDF created", body = PdfCreatedResponse),
        (status = 400, description = "Empty image list", body = crate::error::ErrorResponse),
        (status = 500, description = "Assembly, upload, or persistence failure", body = crate::error::ErrorResponse)
    )
)]
#[tracing::instrument(
    skip(state, request),
    fields(pdf_name = %request.pdf_name, pages = request.images.len(), operation = "image_to_pdf")
)]
pub async fn image_to_pdf(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<ImagesToPdfRequest>,
) -> Result<Json<PdfCreatedResponse>, HttpAppError> {
    let service = PdfService::new(&state);

    let response = service
        .create(&request.images, &request.pdf_name)
        .await
        .map_err(|e| HttpAppError::from(e).with_sentinel(Sentinel::PdfId))?;

    Ok(Json(response))
}
