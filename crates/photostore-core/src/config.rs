//! Configuration module
//!
//! Environment-driven configuration, loaded once at startup and carried
//! in the application state. A `.env` file is honored when present.

use std::env;
use std::str::FromStr;

use crate::storage_types::StorageBackend;

const DEFAULT_SERVICE_PORT: u16 = 8081;
const DEFAULT_PAGE_SIZE: u32 = 12;
const DEFAULT_OCR_LANGUAGE: &str = "eng";
const DEFAULT_MAX_BODY_SIZE_BYTES: usize = 50 * 1024 * 1024;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 20;
const DEFAULT_DB_TIMEOUT_SECS: u64 = 30;

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub service_port: u16,
    pub database_url: String,
    pub db_max_connections: u32,
    pub db_timeout_seconds: u64,
    // Storage configuration
    pub storage_backend: StorageBackend,
    pub s3_bucket: Option<String>,
    pub s3_region: Option<String>,
    pub s3_endpoint: Option<String>,
    pub local_storage_path: Option<String>,
    pub local_storage_base_url: Option<String>,
    /// Path to an AWS shared credentials file, exported for the S3 client.
    pub aws_credentials_file: Option<String>,
    // Request handling
    pub max_body_size_bytes: usize,
    /// Suggested client page size; listing itself is unpaginated.
    pub page_size: u32,
    // OCR
    pub ocr_language: String,
}

fn env_parsed<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}

impl Config {
    /// Load configuration from the process environment (and `.env`).
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?;

        let storage_backend = env_opt("STORAGE_BACKEND")
            .map(|v| {
                v.parse::<StorageBackend>()
                    .map_err(|e| anyhow::anyhow!(e))
            })
            .transpose()?
            .unwrap_or(StorageBackend::S3);

        let config = Config {
            service_port: env_parsed("SERVICE_PORT", DEFAULT_SERVICE_PORT),
            database_url,
            db_max_connections: env_parsed("DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS),
            db_timeout_seconds: env_parsed("DB_TIMEOUT_SECONDS", DEFAULT_DB_TIMEOUT_SECS),
            storage_backend,
            s3_bucket: env_opt("S3_BUCKET"),
            s3_region: env_opt("S3_REGION").or_else(|| env_opt("AWS_REGION")),
            s3_endpoint: env_opt("S3_ENDPOINT"),
            local_storage_path: env_opt("LOCAL_STORAGE_PATH"),
            local_storage_base_url: env_opt("LOCAL_STORAGE_BASE_URL"),
            aws_credentials_file: env_opt("AWS_SHARED_CREDENTIALS_FILE"),
            max_body_size_bytes: env_parsed("MAX_BODY_SIZE_BYTES", DEFAULT_MAX_BODY_SIZE_BYTES),
            page_size: env_parsed("PAGE_SIZE", DEFAULT_PAGE_SIZE),
            ocr_language: env_opt("OCR_LANGUAGE")
                .unwrap_or_else(|| DEFAULT_OCR_LANGUAGE.to_string()),
        };

        Ok(config)
    }

    /// Fail fast on configuration that cannot serve requests.
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        match self.storage_backend {
            StorageBackend::S3 => {
                if self.s3_bucket.is_none() {
                    anyhow::bail!("S3_BUCKET must be set when STORAGE_BACKEND=s3");
                }
                if self.s3_region.is_none() {
                    anyhow::bail!("S3_REGION or AWS_REGION must be set when STORAGE_BACKEND=s3");
                }
            }
            StorageBackend::Local => {
                if self.local_storage_path.is_none() {
                    anyhow::bail!("LOCAL_STORAGE_PATH must be set when STORAGE_BACKEND=local");
                }
                if self.local_storage_base_url.is_none() {
                    anyhow::bail!(
                        "LOCAL_STORAGE_BASE_URL must be set when STORAGE_BACKEND=local"
                    );
                }
            }
        }
        if self.max_body_size_bytes == 0 {
            anyhow::bail!("MAX_BODY_SIZE_BYTES must be greater than zero");
        }
        Ok(())
    }

    /// Export the shared credentials file path for the S3 client, the way
    /// the service has always wired its AWS profile.
    pub fn export_aws_credentials(&self) {
        if let Some(ref path) = self.aws_credentials_file {
            env::set_var("AWS_SHARED_CREDENTIALS_FILE", path);
            tracing::debug!(path = %path, "AWS shared credentials file exported");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(backend: StorageBackend) -> Config {
        Config {
            service_port: DEFAULT_SERVICE_PORT,
            database_url: "postgres://localhost/photostore".to_string(),
            db_max_connections: DEFAULT_DB_MAX_CONNECTIONS,
            db_timeout_seconds: DEFAULT_DB_TIMEOUT_SECS,
            storage_backend: backend,
            s3_bucket: None,
            s3_region: None,
            s3_endpoint: None,
            local_storage_path: None,
            local_storage_base_url: None,
            aws_credentials_file: None,
            max_body_size_bytes: DEFAULT_MAX_BODY_SIZE_BYTES,
            page_size: DEFAULT_PAGE_SIZE,
            ocr_language: DEFAULT_OCR_LANGUAGE.to_string(),
        }
    }

    #[test]
    fn test_validate_s3_requires_bucket_and_region() {
        let mut config = test_config(StorageBackend::S3);
        assert!(config.validate().is_err());

        config.s3_bucket = Some("photoapp".to_string());
        assert!(config.validate().is_err());

        config.s3_region = Some("us-east-2".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_local_requires_path_and_url() {
        let mut config = test_config(StorageBackend::Local);
        assert!(config.validate().is_err());

        config.local_storage_path = Some("/tmp/photostore".to_string());
        config.local_storage_base_url = Some("http://localhost:8081/media".to_string());
        assert!(config.validate().is_ok());
    }
}
