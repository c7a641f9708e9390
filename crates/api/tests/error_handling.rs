//! Tests for `AppError` → HTTP response mapping.
//!
//! These tests verify that each `AppError` variant produces the correct HTTP
//! status code, error code, and message. They do NOT need an HTTP server --
//! they call `IntoResponse` directly on `AppError` values.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use palette_api::error::AppError;
use palette_core::error::CoreError;
use palette_db::StoreError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn invalid_id_returns_422() {
    let (status, json) = error_to_response(CoreError::InvalidId("abc".into()).into()).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["code"], "INVALID_ID");
    assert_eq!(json["error"], "Incorrect ID: abc, Required data type: <Number>");
}

#[tokio::test]
async fn validation_error_returns_422_with_message_verbatim() {
    let msg = "Expected format: { name: <String> }, Your missing a name property";
    let (status, json) = error_to_response(CoreError::Validation(msg.into()).into()).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], msg);
}

#[tokio::test]
async fn not_found_returns_404() {
    let err = CoreError::NotFound {
        entity: "palette",
        id: 42,
    };
    let (status, json) = error_to_response(err.into()).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Could not locate palette: 42");
}

#[tokio::test]
async fn no_match_returns_404() {
    let err = CoreError::NoMatch("There are currently no saved pallets".into());
    let (status, json) = error_to_response(err.into()).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "There are currently no saved pallets");
}

#[tokio::test]
async fn invalid_hexcode_returns_404() {
    let (status, json) = error_to_response(CoreError::InvalidHexcode.into()).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "INVALID_HEXCODE");
    assert_eq!(json["error"], "Please provide 5-6 digit hexcode");
}

#[tokio::test]
async fn foreign_key_violation_returns_500_and_sanitizes_message() {
    let err = StoreError::ForeignKey("fk_palettes_project_id".into());
    let (status, json) = error_to_response(err.into()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn database_error_returns_500_and_sanitizes_message() {
    let err = StoreError::Database(sqlx::Error::Protocol(
        "connection to 10.0.0.5 refused".into(),
    ));
    let (status, json) = error_to_response(err.into()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn bad_request_returns_400_with_message() {
    let err = AppError::BadRequest("Malformed JSON body: EOF while parsing".into());
    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "Malformed JSON body: EOF while parsing");
}
