use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use romshelf_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds a database variant.
/// Implements [`IntoResponse`] to produce the API's JSON error bodies:
/// `{"message"}` for not-found, `{"message", "field"}` for validation
/// failures, and a sanitized `{"message"}` for everything unexpected.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `romshelf-core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Core(CoreError::NotFound { entity, .. }) => (
                StatusCode::NOT_FOUND,
                axum::Json(json!({ "message": format!("{entity} not found") })),
            )
                .into_response(),

            AppError::Core(CoreError::Validation { field, message }) => (
                StatusCode::BAD_REQUEST,
                axum::Json(json!({ "message": message, "field": field })),
            )
                .into_response(),

            AppError::Core(CoreError::Internal(msg)) => {
                tracing::error!(error = %msg, "Internal core error");
                internal_error_response()
            }

            AppError::Database(sqlx::Error::RowNotFound) => (
                StatusCode::NOT_FOUND,
                axum::Json(json!({ "message": "Resource not found" })),
            )
                .into_response(),

            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                internal_error_response()
            }
        }
    }
}

fn internal_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        axum::Json(json!({ "message": "An internal error occurred" })),
    )
        .into_response()
}
