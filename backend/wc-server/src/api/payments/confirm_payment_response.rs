use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ConfirmPaymentResponse {
    pub success: bool,
    /// Provider status string, e.g. `succeeded`
    pub payment_status: String,
    /// Major currency units
    pub amount_received: f64,
}
