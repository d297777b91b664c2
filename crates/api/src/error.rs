use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use lumen_baas::BaasError;
use lumen_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`BaasError`] for content
/// source failures. Implements [`IntoResponse`] to produce consistent JSON
/// error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `lumen_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A read from the content source failed.
    #[error("Content source error: {0}")]
    Upstream(#[from] BaasError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(CoreError::NotFound { entity, id }) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("{entity} with id {id} not found"),
            ),

            AppError::Upstream(err) => classify_upstream_error(err),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a content source error into an HTTP status, error code, and
/// message.
///
/// - Timeouts map to 504.
/// - Everything else maps to 502 with a sanitized message; the detail is
///   only logged.
fn classify_upstream_error(err: &BaasError) -> (StatusCode, &'static str, String) {
    tracing::error!(error = %err, "Content source request failed");
    match err {
        BaasError::Request(e) if e.is_timeout() => (
            StatusCode::GATEWAY_TIMEOUT,
            "UPSTREAM_TIMEOUT",
            "The content service did not respond in time".to_string(),
        ),
        _ => (
            StatusCode::BAD_GATEWAY,
            "UPSTREAM_ERROR",
            "The content service is unavailable".to_string(),
        ),
    }
}
