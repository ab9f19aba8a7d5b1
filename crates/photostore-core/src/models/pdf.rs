//! PDF document response projection.

use serde::Serialize;
use utoipa::ToSchema;

/// Success payload for POST /image-to-pdf.
#[derive(Debug, Serialize, ToSchema)]
pub struct PdfCreatedResponse {
    pub message: String,
    #[serde(rename = "pdfId")]
    pub pdf_id: i64,
    #[serde(rename = "pdfUrl")]
    pub pdf_url: String,
}

impl PdfCreatedResponse {
    pub fn new(pdf_id: i64, pdf_url: String) -> Self {
        Self {
            message: "PDF created successfully.".to_string(),
            pdf_id,
            pdf_url,
        }
    }
}
