use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;
use wc_auth::AuthError;
use wc_core::CoreError;

/// Errors that can occur while talking to the server or the local store
#[derive(Error, Debug)]
pub enum ClientError {
    /// The server could not be reached at all (connection refused, DNS, timeout)
    #[error("Server unreachable: {message} {location}")]
    Unreachable {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with an error body
    #[error("API error: {message} (code: {code}, status: {status}) {location}")]
    Api {
        status: u16,
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Local store error: {source} (code: {})", .source.error_code())]
    Local {
        #[source]
        source: AuthError,
    },

    #[error("Failed to write {path}: {source} {location}")]
    Io {
        path: PathBuf,
        location: ErrorLocation,
        #[source]
        source: std::io::Error,
    },

    #[error("Not logged in; run `wedding auth login` first {location}")]
    NotLoggedIn { location: ErrorLocation },

    #[error("`{command}` needs the server and is unavailable offline {location}")]
    OfflineUnsupported {
        command: String,
        location: ErrorLocation,
    },

    #[error("Invalid argument: {message} {location}")]
    InvalidArgument {
        message: String,
        location: ErrorLocation,
    },
}

impl ClientError {
    /// Connection and timeout failures become [`ClientError::Unreachable`];
    /// everything else stays a plain HTTP error
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        let location = ErrorLocation::from(Location::caller());
        if err.is_connect() || err.is_timeout() {
            ClientError::Unreachable {
                message: err.to_string(),
                location,
                source: err,
            }
        } else {
            ClientError::Http {
                message: err.to_string(),
                location,
                source: err,
            }
        }
    }

    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn api_error(status: u16, code: String, message: String) -> Self {
        ClientError::Api {
            status,
            code,
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ClientError::Io {
            path: path.into(),
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }

    #[track_caller]
    pub fn not_logged_in() -> Self {
        ClientError::NotLoggedIn {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn offline_unsupported(command: impl Into<String>) -> Self {
        ClientError::OfflineUnsupported {
            command: command.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        ClientError::InvalidArgument {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Only an unreachable server may trigger the offline fallback.
    /// A rejection from a live server never does.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, ClientError::Unreachable { .. })
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

impl From<AuthError> for ClientError {
    fn from(source: AuthError) -> Self {
        ClientError::Local { source }
    }
}

impl From<CoreError> for ClientError {
    #[track_caller]
    fn from(err: CoreError) -> Self {
        ClientError::invalid_argument(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
