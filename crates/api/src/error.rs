use artcraft_core::error::CoreError;
use artcraft_db::repositories::UpsertError;
use artcraft_db::DbError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for request-shape errors and the driver error for
/// database faults. Implements [`IntoResponse`] to produce consistent JSON
/// error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `artcraft_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from the MongoDB driver.
    #[error("Database error: {0}")]
    Database(#[from] DbError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<UpsertError> for AppError {
    fn from(err: UpsertError) -> Self {
        match err {
            UpsertError::Document(core) => AppError::Core(core),
            UpsertError::Database(db) => AppError::Database(db),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                // Malformed ids are a server fault, not a 4xx.
                CoreError::InvalidId(raw) => {
                    tracing::warn!(id = %raw, "Rejected malformed document id");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INVALID_ID",
                        format!("'{raw}' is not a valid document id"),
                    )
                }
                CoreError::InvalidDocument(msg) => {
                    (StatusCode::BAD_REQUEST, "INVALID_DOCUMENT", msg.clone())
                }
            },

            // --- Database errors ---
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "A database error occurred".to_string(),
                )
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
