use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use palette_core::error::CoreError;
use palette_db::StoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for validation and lookup failures and [`StoreError`]
/// for storage failures. Implements [`IntoResponse`] to produce consistent
/// `{ "error", "code" }` JSON bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `palette_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failure reported by the storage accessor.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A request body that could not be read as JSON.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => classify_core_error(core),
            AppError::Store(store) => classify_store_error(store),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn classify_core_error(err: &CoreError) -> (StatusCode, &'static str, String) {
    match err {
        CoreError::InvalidId(_) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            "INVALID_ID",
            err.to_string(),
        ),
        CoreError::Validation(msg) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            "VALIDATION_ERROR",
            msg.clone(),
        ),
        CoreError::NotFound { .. } | CoreError::NoMatch(_) => {
            (StatusCode::NOT_FOUND, "NOT_FOUND", err.to_string())
        }
        CoreError::InvalidHexcode => (StatusCode::NOT_FOUND, "INVALID_HEXCODE", err.to_string()),
    }
}

/// Classify a storage failure into an HTTP status, error code, and message.
///
/// Every storage failure, constraint violations included, is a 500 with a
/// sanitized message. The cause is only logged.
fn classify_store_error(err: &StoreError) -> (StatusCode, &'static str, String) {
    match err {
        StoreError::ForeignKey(constraint) => {
            tracing::error!(%constraint, "Foreign key violation");
            internal()
        }
        StoreError::Database(sqlx_err) => {
            tracing::error!(error = %sqlx_err, "Database error");
            internal()
        }
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}
