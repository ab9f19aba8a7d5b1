//! Upload pipeline: decode, measure, resize, store, persist.
//!
//! Step ordering is the contract: the object-store write always happens
//! before the metadata insert, and the insert is what commits the asset.
//! A crash between the two leaves an orphaned blob, which is accepted and
//! logged; there is no compensating delete.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use photostore_core::models::UploadImageResponse;
use photostore_core::AppError;
use photostore_db::NewAsset;
use photostore_processing::{ImageProcessor, ImageResizer};
use photostore_storage::{generate_storage_key, IMAGE_FOLDER};

use crate::state::AppState;

/// Parse a client-supplied dimension: a positive integer, given either as
/// a JSON number or a string of digits. Anything else is rejected.
pub fn parse_dimension(value: Option<&serde_json::Value>) -> Option<u32> {
    let parsed = match value? {
        serde_json::Value::Number(n) => n.as_u64(),
        serde_json::Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }?;
    if parsed == 0 || parsed > u32::MAX as u64 {
        return None;
    }
    Some(parsed as u32)
}

pub struct UploadService<'a> {
    state: &'a AppState,
}

impl<'a> UploadService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Run the full upload pipeline for one asset.
    pub async fn upload(
        &self,
        assetname: String,
        data_b64: &str,
        width: Option<&serde_json::Value>,
        height: Option<&serde_json::Value>,
    ) -> Result<UploadImageResponse, AppError> {
        // Step 1: base64 payload -> bytes. No side effects yet.
        let image_bytes = BASE64.decode(data_b64).map_err(|_| {
            AppError::InvalidInput("Image data must be valid base64.".to_string())
        })?;

        // Step 2: intrinsic dimensions, before any network call.
        // Image decode is CPU-bound; run off the async pool.
        let decode_input = image_bytes.clone();
        let (original_width, original_height) =
            tokio::task::spawn_blocking(move || ImageProcessor::decode_dimensions(&decode_input))
                .await
                .map_err(|e| AppError::Internal(format!("Decode task failed: {}", e)))?
                .map_err(|_| {
                    AppError::ImageProcessing("Unreadable image data.".to_string())
                })?;

        // Step 3: target dimensions must be positive integers.
        let (target_width, target_height) =
            match (parse_dimension(width), parse_dimension(height)) {
                (Some(w), Some(h)) => (w, h),
                _ => {
                    return Err(AppError::InvalidInput(
                        "Height and width must be valid integers.".to_string(),
                    ))
                }
            };

        // Step 4: resize to exactly the requested dimensions.
        let resized = tokio::task::spawn_blocking(move || {
            ImageResizer::resize_exact(&image_bytes, target_width, target_height)
        })
        .await
        .map_err(|e| AppError::Internal(format!("Resize task failed: {}", e)))?
        .map_err(|e| AppError::Internal(format!("Failed to resize image: {}", e)))?;

        // Step 5: object-store write under a fresh key. On failure no
        // metadata row exists yet.
        let storage_key = generate_storage_key(IMAGE_FOLDER, "jpg");
        let object_url = self
            .state
            .storage
            .upload_with_key(&storage_key, resized.to_vec(), "image/jpeg")
            .await
            .map_err(|e| {
                tracing::error!(error = %e, key = %storage_key, "Image upload to object store failed");
                AppError::Storage("Failed to upload image to S3".to_string())
            })?;

        // Step 6: metadata insert commits the asset. On failure the blob
        // stays orphaned in the store.
        let assetid = self
            .state
            .assets
            .create(NewAsset {
                assetname,
                bucketkey: storage_key.clone(),
                original_width: original_width as i32,
                original_height: original_height as i32,
                resized_width: target_width as i32,
                resized_height: target_height as i32,
                is_resized: true,
            })
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    key = %storage_key,
                    "Metadata insert failed; uploaded blob is orphaned"
                );
                AppError::Persistence(
                    "Failed to save image metadata to database.".to_string(),
                )
            })?;

        tracing::info!(
            assetid = assetid,
            key = %storage_key,
            original_width = original_width,
            original_height = original_height,
            resized_width = target_width,
            resized_height = target_height,
            "Image uploaded"
        );

        Ok(UploadImageResponse {
            message: "success".to_string(),
            assetid,
            object_url,
            original_image_width: original_width,
            original_image_height: original_height,
            resized_image_width: target_width,
            resized_image_height: target_height,
        })
    }
}
