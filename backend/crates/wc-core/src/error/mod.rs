use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Invalid theme: {value} {location}")]
    InvalidTheme {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid attendance: {value} {location}")]
    InvalidAttendance {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid payment status: {value} {location}")]
    InvalidPaymentStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid payment method: {value} {location}")]
    InvalidPaymentMethod {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid QR style: {value} {location}")]
    InvalidQrStyle {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid color '{value}': expected #RRGGBB {location}")]
    InvalidColor {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Field name for validation failures, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => field.as_deref(),
            Self::InvalidTheme { .. } => Some("theme"),
            Self::InvalidAttendance { .. } => Some("attendance"),
            Self::InvalidPaymentStatus { .. } => Some("payment_status"),
            Self::InvalidPaymentMethod { .. } => Some("payment_method"),
            Self::InvalidQrStyle { .. } => Some("style"),
            Self::InvalidColor { .. } => None,
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
