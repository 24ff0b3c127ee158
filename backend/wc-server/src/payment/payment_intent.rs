use serde::Deserialize;

/// Provider-side record of a card payment
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PaymentIntent {
    pub id: String,
    /// Handed to the browser to confirm the card payment
    #[serde(default)]
    pub client_secret: Option<String>,
    /// Provider status string, `succeeded` once funds are captured
    pub status: String,
    /// Minor units (paise, cents)
    pub amount: i64,
    #[serde(default)]
    pub amount_received: i64,
    pub currency: String,
}

/// Parameters for a new card payment
#[derive(Debug, Clone, PartialEq)]
pub struct NewPaymentIntent {
    pub amount_minor: i64,
    pub currency: String,
    /// Stored on the intent for reconciliation in the provider dashboard
    pub metadata: Vec<(String, String)>,
}
