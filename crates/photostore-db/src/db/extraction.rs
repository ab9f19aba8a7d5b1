use photostore_core::AppError;
use sqlx::PgPool;

/// Repository for the `textract_jobs` table: one record per asset, the
/// latest extraction overwrites the previous one.
#[derive(Clone)]
pub struct TextExtractionRepository {
    pool: PgPool,
}

impl TextExtractionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record the text blob key for an asset, replacing any earlier one.
    #[tracing::instrument(
        skip(self),
        fields(db.table = "textract_jobs", db.operation = "upsert")
    )]
    pub async fn upsert(&self, assetid: i64, s3key: &str) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO textract_jobs (assetid, s3key, updated_at)
            VALUES ($1, $2, now())
            ON CONFLICT (assetid)
            DO UPDATE SET s3key = EXCLUDED.s3key, updated_at = now()
            "#,
        )
        .bind(assetid)
        .bind(s3key)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
