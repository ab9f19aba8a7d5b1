//! Shared key generation for storage backends.
//!
//! Key format: `{folder}/{uuid}.{ext}`. Uniqueness rests on UUIDv4
//! randomness; there is no separate collision check.

use uuid::Uuid;

/// Folder prefix for uploaded (resized) images.
pub const IMAGE_FOLDER: &str = "image_assets";
/// Folder prefix for assembled PDF documents.
pub const PDF_FOLDER: &str = "pdf_assets";
/// Folder prefix for extracted text blobs.
pub const TEXT_FOLDER: &str = "textract_jobs";

/// Generate a fresh storage key under the given folder with the given
/// extension. All backends use this format for consistency.
pub fn generate_storage_key(folder: &str, extension: &str) -> String {
    format!("{}/{}.{}", folder, Uuid::new_v4(), extension)
}
