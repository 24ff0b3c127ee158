use crate::payment::{NewPaymentIntent, PaymentIntent, PaymentResult, StripeProvider};

use wc_config::{PaymentConfig, PaymentProviderKind};

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

/// Card payment processor. The server only creates and inspects intents;
/// card details never pass through it.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    fn name(&self) -> &'static str;

    async fn create_intent(&self, intent: &NewPaymentIntent) -> PaymentResult<PaymentIntent>;

    async fn retrieve_intent(&self, intent_id: &str) -> PaymentResult<PaymentIntent>;
}

/// Build the provider selected in configuration.
/// `None` disables card payments; UPI contributions keep working.
pub fn configured_provider(
    config: &PaymentConfig,
    timeout: Duration,
) -> PaymentResult<Option<Arc<dyn PaymentProvider>>> {
    match config.provider {
        PaymentProviderKind::None => Ok(None),
        PaymentProviderKind::Stripe => {
            let secret_key = config.stripe_secret_key.clone().unwrap_or_default();
            let provider = StripeProvider::new(secret_key, &config.stripe_api_base, timeout)?;
            Ok(Some(Arc::new(provider)))
        }
    }
}
