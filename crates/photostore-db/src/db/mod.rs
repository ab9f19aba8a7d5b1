//! Database repositories for the data access layer
//!
//! One repository per table: assets, pdf documents, text extractions.
//! Inserts return the generated identifier via RETURNING; `fetch_one`
//! makes anything other than exactly one inserted row an error.

mod asset;
mod extraction;
mod pdf;

pub use asset::{AssetRepository, NewAsset};
pub use extraction::TextExtractionRepository;
pub use pdf::PdfRepository;

use sqlx::PgPool;

/// Cheap connectivity probe for the health endpoint.
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(pool)
        .await?;
    Ok(())
}
