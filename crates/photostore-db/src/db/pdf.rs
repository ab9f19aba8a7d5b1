use photostore_core::AppError;
use sqlx::PgPool;

/// Repository for the `pdf_assets` table.
#[derive(Clone)]
pub struct PdfRepository {
    pool: PgPool,
}

impl PdfRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a document row and return the assigned identifier.
    #[tracing::instrument(
        skip(self),
        fields(db.table = "pdf_assets", db.operation = "insert")
    )]
    pub async fn create(
        &self,
        pdfname: &str,
        pdfkey: &str,
        page_count: i32,
    ) -> Result<i64, AppError> {
        let pdfid: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO pdf_assets (pdfname, pdfkey, page_count)
            VALUES ($1, $2, $3)
            RETURNING pdfid
            "#,
        )
        .bind(pdfname)
        .bind(pdfkey)
        .bind(page_count)
        .fetch_one(&self.pool)
        .await?;

        Ok(pdfid)
    }
}
