//! Domain models and JSON response projections.

mod asset;
mod extraction;
mod health;
mod pdf;

pub use asset::{Asset, AssetDetailResponse, AssetListResponse, UploadImageResponse};
pub use extraction::ExtractionResponse;
pub use health::HealthResponse;
pub use pdf::PdfCreatedResponse;
