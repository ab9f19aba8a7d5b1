//! OCR extraction response projection.

use serde::Serialize;
use utoipa::ToSchema;

/// Success payload for POST /extract-text-from-image.
#[derive(Debug, Serialize, ToSchema)]
pub struct ExtractionResponse {
    pub message: String,
    #[serde(rename = "s3Key")]
    pub s3_key: String,
    pub s3_link: String,
}

impl ExtractionResponse {
    pub fn new(s3_key: String, s3_link: String) -> Self {
        Self {
            message: "Image text extracted and uploaded successfully.".to_string(),
            s3_key,
            s3_link,
        }
    }
}
