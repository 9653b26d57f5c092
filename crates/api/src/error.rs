use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use fes_db::error::StoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`StoreError`] for listing-store failures and adds HTTP-specific
/// variants. Implements [`IntoResponse`] to produce consistent JSON error
/// responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A failure from the listing store.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Store(StoreError::Connectivity(err)) => {
                tracing::error!(error = %err, "Listing store unavailable");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "STORE_UNAVAILABLE",
                    "The listing store is unavailable".to_string(),
                )
            }
            AppError::Store(StoreError::Decode { kind, source }) => {
                tracing::error!(%kind, error = %source, "Listing row failed to decode");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
