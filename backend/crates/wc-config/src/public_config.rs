use crate::{ConfigError, ConfigErrorResult, DEFAULT_PUBLIC_ORIGIN};

use serde::Deserialize;

/// Where guests reach the UI; used to build share links and QR codes
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PublicConfig {
    pub origin: String,
}

impl Default for PublicConfig {
    fn default() -> Self {
        Self {
            origin: String::from(DEFAULT_PUBLIC_ORIGIN),
        }
    }
}

impl PublicConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(self.origin.starts_with("http://") || self.origin.starts_with("https://")) {
            return Err(ConfigError::config(format!(
                "public.origin must be an http(s) URL, got '{}'",
                self.origin
            )));
        }

        Ok(())
    }

    /// Origin without a trailing slash
    pub fn trimmed_origin(&self) -> &str {
        self.origin.trim_end_matches('/')
    }
}
