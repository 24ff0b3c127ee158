//! REST API error types
//!
//! Every failure becomes `{"error": {"code", "message", "field?"}}` with a
//! matching HTTP status. Database details are logged, never returned.

use crate::payment::PaymentError;

use wc_auth::AuthError;
use wc_core::CoreError;
use wc_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g. "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Missing, unknown or rejected credentials (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Authenticated but not the owner (403)
    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    #[error("Rate limited: {message} {location}")]
    RateLimited {
        message: String,
        location: ErrorLocation,
    },

    /// The card provider failed or refused the request (400)
    #[error("Payment provider error: {message} {location}")]
    PaymentProvider {
        message: String,
        location: ErrorLocation,
    },

    /// Card payments are not configured (503)
    #[error("Payment unavailable: {message} {location}")]
    PaymentUnavailable {
        message: String,
        location: ErrorLocation,
    },

    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(message: impl Into<String>, field: &str) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Validation { .. } | Self::BadRequest { .. } | Self::PaymentProvider { .. } => {
                StatusCode::BAD_REQUEST
            }
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            Self::PaymentUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::BadRequest { .. } => "BAD_REQUEST",
            Self::Unauthorized { .. } => "UNAUTHORIZED",
            Self::Forbidden { .. } => "FORBIDDEN",
            Self::Conflict { .. } => "CONFLICT",
            Self::RateLimited { .. } => "RATE_LIMITED",
            Self::PaymentProvider { .. } => "PAYMENT_PROVIDER_ERROR",
            Self::PaymentUnavailable { .. } => "PAYMENT_UNAVAILABLE",
            Self::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::debug!("{}", self);
        }

        let code = self.code().to_string();
        let (message, field) = match self {
            Self::Validation { message, field, .. } => (message, field),
            Self::NotFound { message, .. }
            | Self::BadRequest { message, .. }
            | Self::Unauthorized { message, .. }
            | Self::Forbidden { message, .. }
            | Self::Conflict { message, .. }
            | Self::RateLimited { message, .. }
            | Self::PaymentProvider { message, .. }
            | Self::PaymentUnavailable { message, .. }
            | Self::Internal { message, .. } => (message, None),
        };

        let body = ApiErrorResponse {
            error: ApiErrorBody {
                code,
                message,
                field,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    #[track_caller]
    fn from(e: sqlx::Error) -> Self {
        log::error!("Database error: {}", e);
        ApiError::Internal {
            message: "Database operation failed".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<tokio::task::JoinError> for ApiError {
    #[track_caller]
    fn from(e: tokio::task::JoinError) -> Self {
        log::error!("Blocking task failed: {}", e);
        ApiError::Internal {
            message: "Internal server error".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        log::error!("Database error: {}", e);

        let message = match e {
            DbError::Migration { .. } => "Database migration error",
            DbError::Decode { .. } => "Stored data could not be read",
            _ => "Database operation failed",
        };

        ApiError::Internal {
            message: message.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let field = e.field().map(str::to_string);
        let message = match e {
            CoreError::Validation { message, .. } => message,
            CoreError::InvalidTheme { .. } => {
                "Invalid theme. Must be one of: classic, modern, boho".to_string()
            }
            CoreError::InvalidAttendance { value, .. } => {
                format!("Invalid attendance '{}'. Must be one of: yes, no", value)
            }
            CoreError::InvalidPaymentStatus { value, .. } => {
                format!("Invalid payment status '{}'", value)
            }
            CoreError::InvalidPaymentMethod { value, .. } => {
                format!("Invalid payment method '{}'", value)
            }
            CoreError::InvalidQrStyle { value, .. } => format!("Invalid QR style '{}'", value),
            CoreError::InvalidColor { value, .. } => {
                format!("Invalid color '{}': expected #RRGGBB", value)
            }
        };

        ApiError::Validation {
            message,
            field,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            AuthError::RateLimitExceeded { .. } => ApiError::RateLimited {
                message: e.user_message().to_string(),
                location,
            },
            AuthError::InvalidCredentials { .. } => ApiError::Unauthorized {
                message: "Incorrect username or password".to_string(),
                location,
            },
            AuthError::DuplicateUsername { .. } => ApiError::BadRequest {
                message: "Username already registered".to_string(),
                location,
            },
            _ => {
                log::error!("Auth error: {}", e);
                ApiError::Internal {
                    message: e.user_message().to_string(),
                    location,
                }
            }
        }
    }
}

impl From<PaymentError> for ApiError {
    #[track_caller]
    fn from(e: PaymentError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            PaymentError::IntentNotFound { intent_id, .. } => ApiError::NotFound {
                message: format!("Payment intent {} not found", intent_id),
                location,
            },
            PaymentError::Rejected { message, .. } => ApiError::PaymentProvider {
                message: format!("Payment provider error: {}", message),
                location,
            },
            PaymentError::Request { source, .. } => {
                log::error!("Payment provider unreachable: {}", source);
                ApiError::PaymentProvider {
                    message: "Payment provider could not be reached".to_string(),
                    location,
                }
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
