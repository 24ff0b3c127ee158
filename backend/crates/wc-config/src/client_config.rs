use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_CLIENT_TIMEOUT_SECS, DEFAULT_SERVER_URL,
    DEFAULT_STORAGE_FILE, MAX_CLIENT_TIMEOUT_SECS, MIN_CLIENT_TIMEOUT_SECS,
};

use std::path::Path;

use serde::Deserialize;
use wc_auth::PasswordScheme;

/// Settings for the `wedding` command-line client
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub server_url: String,
    /// Local storage JSON file, relative to the config directory
    pub storage_file: String,
    pub timeout_secs: u64,
    /// How offline registrations store passwords in the local file
    pub password_scheme: PasswordScheme,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: String::from(DEFAULT_SERVER_URL),
            storage_file: String::from(DEFAULT_STORAGE_FILE),
            timeout_secs: DEFAULT_CLIENT_TIMEOUT_SECS,
            password_scheme: PasswordScheme::default(),
        }
    }
}

impl ClientConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if Path::new(&self.storage_file).is_absolute() || self.storage_file.contains("..") {
            return Err(ConfigError::client(
                "client.storage_file must be relative and cannot contain '..'",
            ));
        }

        if self.timeout_secs < MIN_CLIENT_TIMEOUT_SECS || self.timeout_secs > MAX_CLIENT_TIMEOUT_SECS
        {
            return Err(ConfigError::client(format!(
                "client.timeout_secs must be {}-{}, got {}",
                MIN_CLIENT_TIMEOUT_SECS, MAX_CLIENT_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }
}
