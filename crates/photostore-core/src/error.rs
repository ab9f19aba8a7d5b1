//! Error types module
//!
//! All errors the pipelines produce are unified under the `AppError`
//! enum. Each variant self-describes its HTTP presentation through the
//! `ErrorMetadata` trait so the API layer can render a response without
//! matching on variants itself.

use sqlx::Error as SqlxError;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for recoverable issues
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// How an error should be presented over HTTP.
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Client-facing message (may differ from the internal error message)
    fn client_message(&self) -> String;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[source] SqlxError),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Image processing error: {0}")]
    ImageProcessing(String),

    #[error("PDF assembly error: {0}")]
    PdfAssembly(String),

    #[error("Text recognition error: {0}")]
    Recognition(String),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<SqlxError> for AppError {
    fn from(err: SqlxError) -> Self {
        AppError::Database(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl AppError {
    /// Error type name for structured logging.
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::Database(_) => "Database",
            AppError::Storage(_) => "Storage",
            AppError::ImageProcessing(_) => "ImageProcessing",
            AppError::PdfAssembly(_) => "PdfAssembly",
            AppError::Recognition(_) => "Recognition",
            AppError::Persistence(_) => "Persistence",
            AppError::InvalidInput(_) => "InvalidInput",
            AppError::NotFound(_) => "NotFound",
            AppError::Internal(_) => "Internal",
        }
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        match self {
            AppError::InvalidInput(_) | AppError::ImageProcessing(_) => 400,
            AppError::NotFound(_) => 404,
            AppError::Database(_)
            | AppError::Storage(_)
            | AppError::PdfAssembly(_)
            | AppError::Recognition(_)
            | AppError::Persistence(_)
            | AppError::Internal(_) => 500,
        }
    }

    fn client_message(&self) -> String {
        match self {
            // Internal detail stays out of responses; the rest carry
            // server-composed messages that are safe to pass through.
            AppError::Database(_) => "Internal server error.".to_string(),
            AppError::Internal(_) => "Internal server error.".to_string(),
            AppError::Storage(msg) => msg.clone(),
            AppError::ImageProcessing(msg) => msg.clone(),
            AppError::PdfAssembly(msg) => msg.clone(),
            AppError::Recognition(msg) => msg.clone(),
            AppError::Persistence(msg) => msg.clone(),
            AppError::InvalidInput(msg) => msg.clone(),
            AppError::NotFound(msg) => msg.clone(),
        }
    }

    fn log_level(&self) -> LogLevel {
        match self {
            AppError::InvalidInput(_) | AppError::NotFound(_) => LogLevel::Debug,
            AppError::ImageProcessing(_) => LogLevel::Warn,
            AppError::Database(_)
            | AppError::Storage(_)
            | AppError::PdfAssembly(_)
            | AppError::Recognition(_)
            | AppError::Persistence(_)
            | AppError::Internal(_) => LogLevel::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_metadata_database() {
        let err = AppError::from(SqlxError::PoolClosed);
        assert_eq!(err.http_status_code(), 500);
        assert_eq!(err.client_message(), "Internal server error.");
        assert_eq!(err.log_level(), LogLevel::Error);
    }

    #[test]
    fn test_error_metadata_not_found() {
        let err = AppError::NotFound("Asset not found.".to_string());
        assert_eq!(err.http_status_code(), 404);
        assert_eq!(err.client_message(), "Asset not found.");
        assert_eq!(err.log_level(), LogLevel::Debug);
    }

    #[test]
    fn test_error_metadata_invalid_input() {
        let err = AppError::InvalidInput("Height and width must be valid integers.".to_string());
        assert_eq!(err.http_status_code(), 400);
        assert_eq!(
            err.client_message(),
            "Height and width must be valid integers."
        );
        assert_eq!(err.log_level(), LogLevel::Debug);
    }

    #[test]
    fn test_internal_detail_is_hidden() {
        let err = AppError::Internal("connection string leaked".to_string());
        assert_eq!(err.client_message(), "Internal server error.");
    }
}
