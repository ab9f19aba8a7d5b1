//! OCR extraction pipeline: look up, fetch, recognize, store, record.

use photostore_core::models::ExtractionResponse;
use photostore_core::AppError;
use photostore_storage::{generate_storage_key, TEXT_FOLDER};

use crate::state::AppState;

pub struct OcrService<'a> {
    state: &'a AppState,
}

impl<'a> OcrService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Extract text from a stored asset and persist it as a text blob.
    pub async fn extract(&self, assetid: i64) -> Result<ExtractionResponse, AppError> {
        // Step 1: resolve the asset's storage key.
        let asset = self
            .state
            .assets
            .get(assetid)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("No image found with assetid: {}", assetid))
            })?;

        // Step 2: fetch the image bytes.
        let image = self
            .state
            .storage
            .download(&asset.bucketkey)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, key = %asset.bucketkey, "Image fetch for OCR failed");
                AppError::Recognition("Failed to process Image from S3.".to_string())
            })?;

        // Step 3: recognition. Long-running; progress chatter is ignored.
        let text = self.state.ocr.recognize(&image).await.map_err(|e| {
            tracing::error!(error = %e, assetid = assetid, "Text recognition failed");
            AppError::Recognition("Failed to process Image from S3.".to_string())
        })?;

        // Step 4: store the text as a plain-text blob under a fresh key.
        let text_key = generate_storage_key(TEXT_FOLDER, "txt");
        let text_url = self
            .state
            .storage
            .upload_with_key(&text_key, text.into_bytes(), "text/plain")
            .await
            .map_err(|e| {
                tracing::error!(error = %e, key = %text_key, "Extracted text upload failed");
                AppError::Storage("Failed to upload extracted text to S3.".to_string())
            })?;

        // Step 5: record the text key for the asset. A failure here is
        // logged but the response still reports success: the extraction
        // artifact is already durable in the object store.
        if let Err(e) = self.state.extractions.upsert(assetid, &text_key).await {
            tracing::warn!(
                error = %e,
                assetid = assetid,
                key = %text_key,
                "Extraction record update failed; text blob is not referenced"
            );
        }

        tracing::info!(assetid = assetid, key = %text_key, "Text extraction complete");

        Ok(ExtractionResponse::new(text_key, text_url))
    }
}
