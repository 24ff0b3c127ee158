mod auth_config;
mod client_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod payment_config;
mod payment_provider_kind;
mod public_config;
mod server_config;

pub use auth_config::AuthConfig;
pub use client_config::ClientConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use payment_config::PaymentConfig;
pub use payment_provider_kind::PaymentProviderKind;
pub use public_config::PublicConfig;
pub use server_config::ServerConfig;

pub const CONFIG_DIR_ENV: &str = "WC_CONFIG_DIR";
pub const DEFAULT_CONFIG_DIR_NAME: &str = ".wc";
pub const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;
const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

const DEFAULT_DATABASE_FILENAME: &str = "wedding.db";
const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const MIN_MAX_CONNECTIONS: u32 = 1;
const MAX_MAX_CONNECTIONS: u32 = 100;

const DEFAULT_DEMO_ACCOUNTS: bool = false;
const DEFAULT_LOGIN_MAX_ATTEMPTS: u32 = 10;
const MIN_LOGIN_MAX_ATTEMPTS: u32 = 1;
const MAX_LOGIN_MAX_ATTEMPTS: u32 = 1000;
const DEFAULT_LOGIN_WINDOW_SECS: u64 = 60;
const MIN_LOGIN_WINDOW_SECS: u64 = 1;
const MAX_LOGIN_WINDOW_SECS: u64 = 3600;

const DEFAULT_STRIPE_API_BASE: &str = "https://api.stripe.com";
const DEFAULT_CURRENCY: &str = "inr";

const DEFAULT_PUBLIC_ORIGIN: &str = "http://localhost:3000";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_STORAGE_FILE: &str = "local_storage.json";
const DEFAULT_CLIENT_TIMEOUT_SECS: u64 = 10;
const MIN_CLIENT_TIMEOUT_SECS: u64 = 1;
const MAX_CLIENT_TIMEOUT_SECS: u64 = 300;

#[cfg(test)]
mod tests;
