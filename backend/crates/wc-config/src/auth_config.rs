use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_DEMO_ACCOUNTS, DEFAULT_LOGIN_MAX_ATTEMPTS,
    DEFAULT_LOGIN_WINDOW_SECS, MAX_LOGIN_MAX_ATTEMPTS, MAX_LOGIN_WINDOW_SECS,
    MIN_LOGIN_MAX_ATTEMPTS, MIN_LOGIN_WINDOW_SECS,
};

use serde::Deserialize;

/// Account and login settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Seed the well-known demo accounts into the database at startup
    pub demo_accounts: bool,
    /// Login attempts allowed per username within `login_window_secs`
    pub login_max_attempts: u32,
    pub login_window_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            demo_accounts: DEFAULT_DEMO_ACCOUNTS,
            login_max_attempts: DEFAULT_LOGIN_MAX_ATTEMPTS,
            login_window_secs: DEFAULT_LOGIN_WINDOW_SECS,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.login_max_attempts < MIN_LOGIN_MAX_ATTEMPTS
            || self.login_max_attempts > MAX_LOGIN_MAX_ATTEMPTS
        {
            return Err(ConfigError::auth(format!(
                "auth.login_max_attempts must be {}-{}, got {}",
                MIN_LOGIN_MAX_ATTEMPTS, MAX_LOGIN_MAX_ATTEMPTS, self.login_max_attempts
            )));
        }

        if self.login_window_secs < MIN_LOGIN_WINDOW_SECS
            || self.login_window_secs > MAX_LOGIN_WINDOW_SECS
        {
            return Err(ConfigError::auth(format!(
                "auth.login_window_secs must be {}-{}, got {}",
                MIN_LOGIN_WINDOW_SECS, MAX_LOGIN_WINDOW_SECS, self.login_window_secs
            )));
        }

        Ok(())
    }
}
