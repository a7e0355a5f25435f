use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use crewdesk_core::error::CoreError;
use crewdesk_db::{ManagerError, StoreError};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`StoreError`] for store
/// failures. Implements [`IntoResponse`] to produce consistent JSON error
/// responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A document store failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<ManagerError> for AppError {
    fn from(err: ManagerError) -> Self {
        match err {
            ManagerError::Core(core) => AppError::Core(core),
            ManagerError::Store(store) => AppError::Store(store),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::InvalidIdentifier(_) => {
                    (StatusCode::BAD_REQUEST, "INVALID_IDENTIFIER", core.to_string())
                }
                CoreError::MissingField(_) => {
                    (StatusCode::BAD_REQUEST, "MISSING_FIELD", core.to_string())
                }
                CoreError::UnknownReference { .. } => {
                    (StatusCode::BAD_REQUEST, "UNKNOWN_REFERENCE", core.to_string())
                }
                CoreError::NotFound { .. } => {
                    (StatusCode::NOT_FOUND, "NOT_FOUND", core.to_string())
                }
            },

            // Store failures are 500s with a sanitized message; the detail
            // goes to the log, not the client.
            AppError::Store(err) => {
                tracing::error!(error = %err, "Store error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORE_ERROR",
                    "The document store is unavailable".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
