use photostore_core::models::Asset;
use photostore_core::AppError;
use sqlx::PgPool;

/// Column values for a new asset row. The storage key must already
/// address uploaded bytes; inserting the row is what commits the asset.
#[derive(Debug, Clone)]
pub struct NewAsset {
    pub assetname: String,
    pub bucketkey: String,
    pub original_width: i32,
    pub original_height: i32,
    pub resized_width: i32,
    pub resized_height: i32,
    pub is_resized: bool,
}

/// Repository for the `image_assets` table.
#[derive(Clone)]
pub struct AssetRepository {
    pool: PgPool,
}

impl AssetRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new asset row and return the assigned identifier.
    #[tracing::instrument(
        skip(self, asset),
        fields(db.table = "image_assets", db.operation = "insert")
    )]
    pub async fn create(&self, asset: NewAsset) -> Result<i64, AppError> {
        let assetid: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO image_assets (
                assetname, bucketkey,
                original_width, original_height,
                resized_width, resized_height, is_resized
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING assetid
            "#,
        )
        .bind(&asset.assetname)
        .bind(&asset.bucketkey)
        .bind(asset.original_width)
        .bind(asset.original_height)
        .bind(asset.resized_width)
        .bind(asset.resized_height)
        .bind(asset.is_resized)
        .fetch_one(&self.pool)
        .await?;

        Ok(assetid)
    }

    /// Fetch a single asset by identifier.
    pub async fn get(&self, assetid: i64) -> Result<Option<Asset>, AppError> {
        let asset = sqlx::query_as::<_, Asset>(
            "SELECT * FROM image_assets WHERE assetid = $1",
        )
        .bind(assetid)
        .fetch_optional(&self.pool)
        .await?;

        Ok(asset)
    }

    /// Return all asset rows, oldest first. No pagination.
    pub async fn list(&self) -> Result<Vec<Asset>, AppError> {
        let assets = sqlx::query_as::<_, Asset>(
            "SELECT * FROM image_assets ORDER BY assetid",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(assets)
    }
}
