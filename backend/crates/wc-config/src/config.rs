use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILE_NAME, ClientConfig, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR_NAME, DatabaseConfig, LoggingConfig, PaymentConfig, PublicConfig,
    ServerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub payment: PaymentConfig,
    pub public: PublicConfig,
    pub logging: LoggingConfig,
    pub client: ClientConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for WC_CONFIG_DIR env var, else use ./.wc/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply WC_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: WC_CONFIG_DIR env var > ./.wc/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.payment.validate()?;
        self.public.validate()?;
        self.client.validate()?;

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Get absolute path to the CLI local storage file.
    pub fn storage_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.client.storage_file))
    }

    /// Log file path, if file logging is configured.
    pub fn log_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match &self.logging.file {
            Some(file) => Ok(Some(
                Self::config_dir()?.join(&self.logging.dir).join(file),
            )),
            None => Ok(None),
        }
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (timeout {}s)",
            self.server.host, self.server.port, self.server.request_timeout_secs
        );
        if let Some(dir) = &self.server.static_dir {
            info!("  static: {}", dir);
        }
        info!(
            "  cors: {}",
            if self.server.cors_origins.is_empty() {
                String::from("any origin")
            } else {
                self.server.cors_origins.join(", ")
            }
        );
        info!(
            "  database: {} (max {} connections)",
            self.database.path, self.database.max_connections
        );
        info!(
            "  auth: demo_accounts={}, login limit {}/{}s",
            self.auth.demo_accounts, self.auth.login_max_attempts, self.auth.login_window_secs
        );
        info!(
            "  payment: {} (secret key {}, currency {})",
            self.payment.provider,
            if self.payment.stripe_secret_key.is_some() {
                "set"
            } else {
                "unset"
            },
            self.payment.default_currency
        );
        info!("  public origin: {}", self.public.origin);
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("WC_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("WC_SERVER_PORT", &mut self.server.port);
        Self::apply_env_option_string("WC_SERVER_STATIC_DIR", &mut self.server.static_dir);
        Self::apply_env_parse(
            "WC_SERVER_REQUEST_TIMEOUT_SECS",
            &mut self.server.request_timeout_secs,
        );
        Self::apply_env_list("WC_SERVER_CORS_ORIGINS", &mut self.server.cors_origins);

        // Database
        Self::apply_env_string("WC_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "WC_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );

        // Auth
        Self::apply_env_bool("WC_AUTH_DEMO_ACCOUNTS", &mut self.auth.demo_accounts);
        Self::apply_env_parse(
            "WC_AUTH_LOGIN_MAX_ATTEMPTS",
            &mut self.auth.login_max_attempts,
        );
        Self::apply_env_parse(
            "WC_AUTH_LOGIN_WINDOW_SECS",
            &mut self.auth.login_window_secs,
        );

        // Payment
        Self::apply_env_parse("WC_PAYMENT_PROVIDER", &mut self.payment.provider);
        Self::apply_env_option_string(
            "WC_STRIPE_SECRET_KEY",
            &mut self.payment.stripe_secret_key,
        );
        Self::apply_env_option_string(
            "WC_STRIPE_PUBLISHABLE_KEY",
            &mut self.payment.stripe_publishable_key,
        );
        Self::apply_env_string("WC_STRIPE_API_BASE", &mut self.payment.stripe_api_base);
        Self::apply_env_string(
            "WC_PAYMENT_DEFAULT_CURRENCY",
            &mut self.payment.default_currency,
        );

        // Public
        Self::apply_env_string("WC_PUBLIC_ORIGIN", &mut self.public.origin);

        // Logging
        Self::apply_env_parse("WC_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("WC_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_string("WC_LOG_DIR", &mut self.logging.dir);
        Self::apply_env_option_string("WC_LOG_FILE", &mut self.logging.file);

        // Client
        Self::apply_env_string("WC_SERVER_URL", &mut self.client.server_url);
        Self::apply_env_string("WC_STORAGE_FILE", &mut self.client.storage_file);
        Self::apply_env_parse("WC_CLIENT_TIMEOUT_SECS", &mut self.client.timeout_secs);
        Self::apply_env_parse(
            "WC_CLIENT_PASSWORD_SCHEME",
            &mut self.client.password_scheme,
        );
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }

    /// Helper: Apply environment variable override for comma-separated lists
    fn apply_env_list(var_name: &str, target: &mut Vec<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }
    }
}
