use crate::payment::PaymentProvider;

use wc_auth::{LoginRateLimiter, RateLimitConfig};
use wc_config::Config;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub pool: sqlx::SqlitePool,
    pub login_limiter: Arc<LoginRateLimiter>,
    /// `None` when card payments are disabled
    pub payment_provider: Option<Arc<dyn PaymentProvider>>,
    pub settings: Arc<ApiSettings>,
}

/// Request-facing settings derived from configuration
#[derive(Debug, Clone)]
pub struct ApiSettings {
    /// Origin of the public site, used to build share links
    pub public_origin: String,
    pub default_currency: String,
    /// Empty allows any origin
    pub cors_origins: Vec<String>,
    /// Built UI served for non-API paths
    pub static_dir: Option<PathBuf>,
    pub request_timeout: Duration,
}

impl ApiSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            public_origin: config.public.trimmed_origin().to_string(),
            default_currency: config.payment.default_currency.clone(),
            cors_origins: config.server.cors_origins.clone(),
            static_dir: config.server.static_dir.as_ref().map(PathBuf::from),
            request_timeout: Duration::from_secs(config.server.request_timeout_secs),
        }
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl AppState {
    pub fn new(pool: sqlx::SqlitePool, settings: ApiSettings) -> Self {
        Self {
            pool,
            login_limiter: Arc::new(LoginRateLimiter::default()),
            payment_provider: None,
            settings: Arc::new(settings),
        }
    }

    pub fn with_login_limit(mut self, config: RateLimitConfig) -> Self {
        self.login_limiter = Arc::new(LoginRateLimiter::new(config));
        self
    }

    pub fn with_payment_provider(mut self, provider: Arc<dyn PaymentProvider>) -> Self {
        self.payment_provider = Some(provider);
        self
    }
}
