//! Stripe REST adapter.
//!
//! Talks to the Payment Intents API directly with form-encoded requests and a
//! bearer secret key. The base URL is configurable so tests can point it at a
//! mock server.

use crate::payment::{NewPaymentIntent, PaymentError, PaymentIntent, PaymentProvider, PaymentResult};

use std::panic::Location;
use std::time::Duration;

use async_trait::async_trait;
use error_location::ErrorLocation;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;

pub struct StripeProvider {
    client: Client,
    api_base: String,
    secret_key: String,
}

#[derive(Debug, Deserialize)]
struct StripeErrorBody {
    error: StripeErrorDetail,
}

#[derive(Debug, Deserialize)]
struct StripeErrorDetail {
    #[serde(default)]
    message: Option<String>,
}

impl StripeProvider {
    #[track_caller]
    pub fn new(
        secret_key: impl Into<String>,
        api_base: &str,
        timeout: Duration,
    ) -> PaymentResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            secret_key: secret_key.into(),
        })
    }

    fn intents_url(&self) -> String {
        format!("{}/v1/payment_intents", self.api_base)
    }

    async fn read_intent(response: Response, intent_id: Option<&str>) -> PaymentResult<PaymentIntent> {
        let status = response.status();

        if status.is_success() {
            return Ok(response.json::<PaymentIntent>().await?);
        }

        if let (StatusCode::NOT_FOUND, Some(intent_id)) = (status, intent_id) {
            return Err(PaymentError::IntentNotFound {
                intent_id: intent_id.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let message = match response.json::<StripeErrorBody>().await {
            Ok(body) => body.error.message,
            Err(_) => None,
        }
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        });

        Err(PaymentError::Rejected {
            status: status.as_u16(),
            message,
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

#[async_trait]
impl PaymentProvider for StripeProvider {
    fn name(&self) -> &'static str {
        "stripe"
    }

    async fn create_intent(&self, intent: &NewPaymentIntent) -> PaymentResult<PaymentIntent> {
        let mut form = vec![
            (String::from("amount"), intent.amount_minor.to_string()),
            (String::from("currency"), intent.currency.clone()),
        ];
        form.extend(
            intent
                .metadata
                .iter()
                .map(|(key, value)| (format!("metadata[{}]", key), value.clone())),
        );

        let response = self
            .client
            .post(self.intents_url())
            .bearer_auth(&self.secret_key)
            .form(&form)
            .send()
            .await?;

        let created = Self::read_intent(response, None).await?;
        log::info!(
            "Created payment intent {} for {} {}",
            created.id,
            created.amount,
            created.currency
        );
        Ok(created)
    }

    async fn retrieve_intent(&self, intent_id: &str) -> PaymentResult<PaymentIntent> {
        let response = self
            .client
            .get(format!("{}/{}", self.intents_url(), intent_id))
            .bearer_auth(&self.secret_key)
            .send()
            .await?;

        Self::read_intent(response, Some(intent_id)).await
    }
}
