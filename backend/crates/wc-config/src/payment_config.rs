use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_CURRENCY, DEFAULT_STRIPE_API_BASE,
    PaymentProviderKind,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PaymentConfig {
    pub provider: PaymentProviderKind,
    pub stripe_secret_key: Option<String>,
    /// Handed to the UI so it can tokenize cards
    pub stripe_publishable_key: Option<String>,
    pub stripe_api_base: String,
    pub default_currency: String,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            provider: PaymentProviderKind::default(),
            stripe_secret_key: None,
            stripe_publishable_key: None,
            stripe_api_base: String::from(DEFAULT_STRIPE_API_BASE),
            default_currency: String::from(DEFAULT_CURRENCY),
        }
    }
}

impl PaymentConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.provider == PaymentProviderKind::Stripe {
            match &self.stripe_secret_key {
                Some(key) if !key.trim().is_empty() => {}
                _ => {
                    return Err(ConfigError::payment(
                        "payment.stripe_secret_key is required when payment.provider = \"stripe\"",
                    ));
                }
            }

            if !(self.stripe_api_base.starts_with("http://")
                || self.stripe_api_base.starts_with("https://"))
            {
                return Err(ConfigError::payment(format!(
                    "payment.stripe_api_base must be an http(s) URL, got '{}'",
                    self.stripe_api_base
                )));
            }
        }

        let currency = &self.default_currency;
        if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(ConfigError::payment(format!(
                "payment.default_currency must be 3 lowercase letters, got '{}'",
                currency
            )));
        }

        Ok(())
    }
}
