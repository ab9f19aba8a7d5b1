//! PDF assembly pipeline: fetch, lay out, store, persist.
//!
//! All-or-nothing: any fetch failure for any source image aborts the
//! whole assembly and nothing is persisted. Page order always matches
//! input order.

use photostore_core::models::PdfCreatedResponse;
use photostore_core::AppError;
use photostore_processing::{AssemblyError, PdfAssembler};
use photostore_storage::{generate_storage_key, PDF_FOLDER};

use crate::state::AppState;

pub struct PdfService<'a> {
    state: &'a AppState,
}

impl<'a> PdfService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Assemble the given stored images, in order, into one PDF document.
    pub async fn create(
        &self,
        images: &[String],
        pdf_name: &str,
    ) -> Result<PdfCreatedResponse, AppError> {
        // Step 1: reject an empty list before any network call.
        if images.is_empty() {
            return Err(AppError::InvalidInput(
                "At least one image is required to create a PDF.".to_string(),
            ));
        }

        // Step 2: fetch every source blob; input order is page order.
        let mut buffers = Vec::with_capacity(images.len());
        for image_key in images {
            let data = self.state.storage.download(image_key).await.map_err(|e| {
                tracing::error!(error = %e, key = %image_key, "Source image fetch failed");
                AppError::Storage(format!("Failed to fetch image '{}' from S3.", image_key))
            })?;
            buffers.push(data);
        }

        // Steps 3-4: page layout and serialization are CPU-bound.
        let pdf_bytes = tokio::task::spawn_blocking(move || PdfAssembler::assemble(&buffers))
            .await
            .map_err(|e| AppError::Internal(format!("Assembly task failed: {}", e)))?
            .map_err(|e| match e {
                AssemblyError::EmptyDocument => AppError::InvalidInput(e.to_string()),
                other => AppError::PdfAssembly(other.to_string()),
            })?;

        // Step 5: upload the finished document; no metadata on failure.
        let pdf_key = generate_storage_key(PDF_FOLDER, "pdf");
        let pdf_url = self
            .state
            .storage
            .upload_with_key(&pdf_key, pdf_bytes, "application/pdf")
            .await
            .map_err(|e| {
                tracing::error!(error = %e, key = %pdf_key, "PDF upload to object store failed");
                AppError::Storage("Failed to upload PDF to S3.".to_string())
            })?;

        // Step 6: persist the document row; page count equals input length.
        let pdf_id = self
            .state
            .pdfs
            .create(pdf_name, &pdf_key, images.len() as i32)
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    key = %pdf_key,
                    "PDF metadata insert failed; uploaded blob is orphaned"
                );
                AppError::Persistence(
                    "Failed to save PDF metadata to database.".to_string(),
                )
            })?;

        tracing::info!(
            pdf_id = pdf_id,
            key = %pdf_key,
            pages = images.len(),
            "PDF assembled"
        );

        Ok(PdfCreatedResponse::new(pdf_id, pdf_url))
    }
}
