// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::http::StatusCode;
use axum::response::IntoResponse;
use infravision::error::AppError;

mod common;

#[tokio::test]
async fn test_database_error_passes_message_through() {
    let response = AppError::Database("duplicate key value".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = common::body_json(response).await;
    assert_eq!(body["error"], "database_error");
    assert_eq!(body["details"], "duplicate key value");
}

#[tokio::test]
async fn test_internal_error_hides_details() {
    let response = AppError::Internal(anyhow::anyhow!("secret detail")).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = common::body_json(response).await;
    assert_eq!(body["error"], "internal_error");
    assert!(body.get("details").is_none());
}

#[test]
fn test_status_mapping() {
    assert_eq!(
        AppError::Unauthorized.into_response().status(),
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(
        AppError::NotFound("site".to_string()).into_response().status(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        AppError::BadRequest("bad".to_string()).into_response().status(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        AppError::ModelApi("HTTP 500".to_string()).into_response().status(),
        StatusCode::BAD_GATEWAY
    );
}
