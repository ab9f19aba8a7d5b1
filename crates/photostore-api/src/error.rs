//! HTTP error response conversion
//!
//! Wraps `AppError` for the orphan rule and renders every failure as a
//! JSON body with a human-readable `message`, plus the endpoint's
//! sentinel identifier field (`assetid: -1` / `pdfId: -1`) so callers can
//! distinguish success from failure without parsing status codes alone.

use axum::{
    extract::rejection::JsonRejection,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use photostore_core::{AppError, ErrorMetadata, LogLevel};
use photostore_storage::StorageError;
use serde::{de::DeserializeOwned, Serialize};
use utoipa::ToSchema;

/// Error body shape shared by all endpoints (documentation schema; the
/// sentinel field is added per endpoint at render time).
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
}

/// Which sentinel identifier field the failing endpoint carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentinel {
    None,
    AssetId,
    PdfId,
}

/// Wrapper type for AppError to implement IntoResponse. Necessary because
/// of Rust's orphan rules - IntoResponse (external trait) cannot be
/// implemented for AppError (type from photostore-core).
#[derive(Debug)]
pub struct HttpAppError {
    error: AppError,
    sentinel: Sentinel,
}

impl HttpAppError {
    /// Attach the sentinel identifier field for this endpoint's failures.
    pub fn with_sentinel(mut self, sentinel: Sentinel) -> Self {
        self.sentinel = sentinel;
        self
    }
}

impl From<AppError> for HttpAppError {
    fn from(error: AppError) -> Self {
        HttpAppError {
            error,
            sentinel: Sentinel::None,
        }
    }
}

impl From<StorageError> for HttpAppError {
    fn from(err: StorageError) -> Self {
        let app = match err {
            StorageError::NotFound(msg) => AppError::NotFound(msg),
            StorageError::InvalidKey(msg) => AppError::InvalidInput(msg),
            other => AppError::Storage(other.to_string()),
        };
        HttpAppError::from(app)
    }
}

/// Convert JSON body deserialization failures into a 400 with our error
/// body format.
impl From<JsonRejection> for HttpAppError {
    fn from(rejection: JsonRejection) -> Self {
        HttpAppError::from(AppError::InvalidInput(format!(
            "Invalid request body: {}",
            rejection.body_text()
        )))
    }
}

/// JSON body extractor that returns our error body format (400 + JSON) on
/// deserialization failure, instead of axum's plain-text default.
#[derive(Debug, Clone, Copy)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = HttpAppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(inner) = Json::<T>::from_request(req, state)
            .await
            .map_err(HttpAppError::from)?;
        Ok(ValidatedJson(inner))
    }
}

fn log_error(error: &AppError) {
    let error_type = error.error_type();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, error_type = error_type, "Request failed");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, error_type = error_type, "Request failed");
        }
        LogLevel::Error => {
            tracing::error!(error = %error, error_type = error_type, "Request failed");
        }
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.error.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        log_error(&self.error);

        let mut body = serde_json::json!({
            "message": self.error.client_message(),
        });
        match self.sentinel {
            Sentinel::AssetId => {
                body["assetid"] = serde_json::json!(-1);
            }
            Sentinel::PdfId => {
                body["pdfId"] = serde_json::json!(-1);
            }
            Sentinel::None => {}
        }

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_storage_error_not_found() {
        let err: HttpAppError = StorageError::NotFound("image_assets/x.jpg".to_string()).into();
        assert_eq!(err.error.http_status_code(), 404);
    }

    #[test]
    fn test_from_storage_error_upload_failed() {
        let err: HttpAppError = StorageError::UploadFailed("timeout".to_string()).into();
        assert_eq!(err.error.http_status_code(), 500);
    }

    #[tokio::test]
    async fn test_sentinel_field_in_body() {
        let err = HttpAppError::from(AppError::InvalidInput(
            "Height and width must be valid integers.".to_string(),
        ))
        .with_sentinel(Sentinel::AssetId);

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["assetid"], -1);
        assert_eq!(body["message"], "Height and width must be valid integers.");
    }

    #[tokio::test]
    async fn test_no_sentinel_by_default() {
        let err = HttpAppError::from(AppError::NotFound("Asset not found.".to_string()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body.get("assetid").is_none());
        assert!(body.get("pdfId").is_none());
    }
}
