use crate::ApiError;
use crate::payment::PaymentError;

use wc_auth::AuthError;
use wc_core::{CoreError, Theme};

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let (status, json) = body_json(ApiError::not_found("Wedding not found")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Wedding not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let (status, json) = body_json(ApiError::validation("Name is required", "guest_name")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "guest_name");
}

#[tokio::test]
async fn test_unauthorized_returns_401() {
    let (status, json) = body_json(ApiError::unauthorized("Invalid session")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_payment_unavailable_returns_503() {
    let error = ApiError::PaymentUnavailable {
        message: "Card payments are not configured".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["error"]["code"], "PAYMENT_UNAVAILABLE");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "Database operation failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[test]
fn test_invalid_theme_converts_to_validation_listing_themes() {
    let core_error = "gothic".parse::<Theme>().unwrap_err();

    let api_error: ApiError = core_error.into();

    match api_error {
        ApiError::Validation { message, field, .. } => {
            assert_eq!(message, "Invalid theme. Must be one of: classic, modern, boho");
            assert_eq!(field.as_deref(), Some("theme"));
        }
        other => panic!("Expected Validation, got {:?}", other),
    }
}

#[test]
fn test_core_validation_keeps_field() {
    let core_error = CoreError::Validation {
        message: "Amount must be positive".into(),
        field: Some("amount".into()),
        location: ErrorLocation::from(Location::caller()),
    };

    let api_error: ApiError = core_error.into();

    assert_eq!(api_error.status(), StatusCode::BAD_REQUEST);
    assert_eq!(api_error.code(), "VALIDATION_ERROR");
}

#[test]
fn test_invalid_credentials_maps_to_401_with_fixed_message() {
    let auth_error = AuthError::InvalidCredentials {
        location: ErrorLocation::from(Location::caller()),
    };

    let api_error: ApiError = auth_error.into();

    match api_error {
        ApiError::Unauthorized { message, .. } => {
            assert_eq!(message, "Incorrect username or password");
        }
        other => panic!("Expected Unauthorized, got {:?}", other),
    }
}

#[test]
fn test_duplicate_username_maps_to_400() {
    let auth_error = AuthError::DuplicateUsername {
        username: "prasanna".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let api_error: ApiError = auth_error.into();

    assert_eq!(api_error.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_provider_rejection_maps_to_400_with_provider_message() {
    let payment_error = PaymentError::Rejected {
        status: 402,
        message: "Your card was declined.".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let api_error: ApiError = payment_error.into();

    assert_eq!(api_error.status(), StatusCode::BAD_REQUEST);
    assert_eq!(api_error.code(), "PAYMENT_PROVIDER_ERROR");
    assert!(api_error.to_string().contains("Your card was declined."));
}

#[test]
fn test_unknown_intent_maps_to_404() {
    let payment_error = PaymentError::IntentNotFound {
        intent_id: "pi_missing".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let api_error: ApiError = payment_error.into();

    assert_eq!(api_error.status(), StatusCode::NOT_FOUND);
}
