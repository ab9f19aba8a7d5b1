use crate::traits::{Storage, StorageError, StorageResult};
use async_trait::async_trait;
use photostore_core::StorageBackend;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Local filesystem storage implementation
#[derive(Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
    base_url: String,
}

impl LocalStorage {
    /// Create a new LocalStorage instance
    ///
    /// # Arguments
    /// * `base_path` - Root directory for file storage (e.g., "/var/lib/photostore/media")
    /// * `base_url` - Base URL for serving files (e.g., "http://localhost:8081/media")
    pub async fn new(base_path: impl Into<PathBuf>, base_url: String) -> StorageResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create storage directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        Ok(LocalStorage {
            base_path,
            base_url,
        })
    }

    /// Convert storage key to filesystem path with security validation
    ///
    /// Rejects keys that could escape the base storage directory.
    fn key_to_path(&self, storage_key: &str) -> StorageResult<PathBuf> {
        if storage_key.contains("..") || storage_key.starts_with('/') {
            return Err(StorageError::InvalidKey(
                "Storage key contains invalid characters".to_string(),
            ));
        }
        Ok(self.base_path.join(storage_key))
    }

    /// Generate public URL for file
    fn generate_url(&self, key: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), key)
    }

    /// Ensure parent directory exists
    async fn ensure_parent_dir(&self, path: &Path) -> StorageResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl Storage for LocalStorage {
    async fn upload_with_key(
        &self,
        storage_key: &str,
        data: Vec<u8>,
        _content_type: &str,
    ) -> StorageResult<String> {
        let path = self.key_to_path(storage_key)?;
        self.ensure_parent_dir(&path).await?;

        fs::write(&path, &data).await.map_err(|e| {
            tracing::error!(
                error = %e,
                key = %storage_key,
                "Local storage write failed"
            );
            StorageError::UploadFailed(e.to_string())
        })?;

        tracing::info!(
            key = %storage_key,
            size_bytes = data.len() as u64,
            "Local storage write successful"
        );

        Ok(self.generate_url(storage_key))
    }

    async fn download(&self, storage_key: &str) -> StorageResult<Vec<u8>> {
        let path = self.key_to_path(storage_key)?;

        match fs::read(&path).await {
            Ok(data) => Ok(data),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StorageError::NotFound(storage_key.to_string()))
            }
            Err(e) => Err(StorageError::DownloadFailed(e.to_string())),
        }
    }

    async fn exists(&self, storage_key: &str) -> StorageResult<bool> {
        let path = self.key_to_path(storage_key)?;
        Ok(fs::try_exists(&path).await.unwrap_or(false))
    }

    fn public_url(&self, storage_key: &str) -> String {
        self.generate_url(storage_key)
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Local
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn test_storage() -> (TempDir, LocalStorage) {
        let dir = TempDir::new().expect("temp dir");
        let storage = LocalStorage::new(dir.path(), "http://localhost:8081/media".to_string())
            .await
            .expect("storage");
        (dir, storage)
    }

    #[tokio::test]
    async fn test_upload_then_download_roundtrip() {
        let (_dir, storage) = test_storage().await;
        let url = storage
            .upload_with_key("image_assets/test.jpg", b"bytes".to_vec(), "image/jpeg")
            .await
            .expect("upload");
        assert_eq!(
            url,
            "http://localhost:8081/media/image_assets/test.jpg"
        );

        let data = storage.download("image_assets/test.jpg").await.expect("download");
        assert_eq!(data, b"bytes");
    }

    #[tokio::test]
    async fn test_download_missing_key_is_not_found() {
        let (_dir, storage) = test_storage().await;
        let err = storage.download("image_assets/missing.jpg").await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_path_traversal_rejected() {
        let (_dir, storage) = test_storage().await;
        let err = storage
            .upload_with_key("../escape.txt", b"x".to_vec(), "text/plain")
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::InvalidKey(_)));

        let err = storage.download("/etc/passwd").await.unwrap_err();
        assert!(matches!(err, StorageError::InvalidKey(_)));
    }

    #[tokio::test]
    async fn test_exists() {
        let (_dir, storage) = test_storage().await;
        assert!(!storage.exists("textract_jobs/a.txt").await.unwrap());
        storage
            .upload_with_key("textract_jobs/a.txt", b"hello".to_vec(), "text/plain")
            .await
            .unwrap();
        assert!(storage.exists("textract_jobs/a.txt").await.unwrap());
    }
}
