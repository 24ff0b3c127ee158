use serde::Deserialize;

/// Guest details for a honeymoon fund contribution, card or UPI
#[derive(Debug, Deserialize)]
pub struct ContributionRequest {
    /// Wedding UUID or shareable ID
    pub wedding_id: String,
    #[serde(default)]
    pub contributor_name: String,
    #[serde(default)]
    pub contributor_email: String,
    #[serde(default)]
    pub contributor_phone: String,
    /// Major currency units
    pub amount: f64,
    /// Defaults to the configured currency
    pub currency: Option<String>,
    #[serde(default)]
    pub message: String,
    /// UPI only: client-generated `UPI-{millis}-{suffix}` reference
    pub upi_reference: Option<String>,
}
