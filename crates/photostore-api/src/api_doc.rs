//! OpenAPI documentation.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Photostore API",
        description = "HTTP backend for photo storage: image upload with resize, PDF assembly, and OCR text extraction.",
        version = "0.1.0"
    ),
    paths(
        crate::handlers::health::health,
        crate::handlers::assets_list::list_assets,
        crate::handlers::image_get::get_image,
        crate::handlers::image_upload::upload_image,
        crate::handlers::image_to_pdf::image_to_pdf,
        crate::handlers::text_extract::extract_text,
    ),
    components(schemas(
        photostore_core::models::Asset,
        photostore_core::models::AssetListResponse,
        photostore_core::models::AssetDetailResponse,
        photostore_core::models::UploadImageResponse,
        photostore_core::models::PdfCreatedResponse,
        photostore_core::models::ExtractionResponse,
        photostore_core::models::HealthResponse,
        crate::error::ErrorResponse,
        crate::handlers::image_upload::UploadImageRequest,
        crate::handlers::image_to_pdf::ImagesToPdfRequest,
        crate::handlers::text_extract::ExtractTextRequest,
    )),
    tags(
        (name = "health", description = "Service status"),
        (name = "assets", description = "Image upload and retrieval"),
        (name = "documents", description = "PDF assembly"),
        (name = "extractions", description = "OCR text extraction"),
    )
)]
pub struct ApiDoc;
