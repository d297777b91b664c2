//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no router is
//! involved.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use lumen_api::error::AppError;
use lumen_baas::BaasError;
use lumen_core::error::CoreError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Project",
        id: "p42".into(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Project with id p42 not found");
}

// ---------------------------------------------------------------------------
// Test: upstream failures map to 502 without leaking the response body
// ---------------------------------------------------------------------------

#[tokio::test]
async fn upstream_api_error_returns_502_with_sanitized_message() {
    let err = AppError::Upstream(BaasError::Api {
        status: 401,
        body: "secret project key rejected".into(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["code"], "UPSTREAM_ERROR");
    assert_eq!(json["error"], "The content service is unavailable");
    assert!(!json.to_string().contains("secret"));
}

#[tokio::test]
async fn upstream_decode_error_returns_502() {
    let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = AppError::Upstream(BaasError::Decode {
        collection: "projects".into(),
        source,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["code"], "UPSTREAM_ERROR");
}
