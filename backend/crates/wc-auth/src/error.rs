use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Username already exists {location}")]
    DuplicateUsername {
        username: String,
        location: ErrorLocation,
    },

    #[error("Invalid username or password {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("Storage error: {message} {location}")]
    Storage {
        message: String,
        location: ErrorLocation,
    },

    #[error("Serialization error: {source} {location}")]
    Serialization {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Password hashing failed: {message} {location}")]
    PasswordHash {
        message: String,
        location: ErrorLocation,
    },

    #[error("Rate limit exceeded: {limit} attempts per {window_secs}s {location}")]
    RateLimitExceeded {
        limit: u32,
        window_secs: u64,
        location: ErrorLocation,
    },
}

impl AuthError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateUsername { .. } => "DUPLICATE_USERNAME",
            Self::InvalidCredentials { .. } => "INVALID_CREDENTIALS",
            Self::Storage { .. } => "STORAGE_ERROR",
            Self::Serialization { .. } => "SERIALIZATION_ERROR",
            Self::PasswordHash { .. } => "PASSWORD_HASH_ERROR",
            Self::RateLimitExceeded { .. } => "RATE_LIMITED",
        }
    }

    /// Message suitable for showing to the person at the keyboard
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::DuplicateUsername { .. } => "Username already exists",
            Self::InvalidCredentials { .. } => "Invalid username or password",
            Self::RateLimitExceeded { .. } => "Too many login attempts, try again later",
            Self::Storage { .. } | Self::Serialization { .. } => "Local storage is unavailable",
            Self::PasswordHash { .. } => "Password could not be processed",
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
