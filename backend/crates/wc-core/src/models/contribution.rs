//! Honeymoon fund contribution, paid by card or by manual UPI transfer.

use crate::{PaymentMethod, PaymentStatus};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_CURRENCY: &str = "inr";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    pub id: Uuid,
    pub wedding_id: Uuid,
    pub contributor_name: String,
    pub contributor_email: String,
    pub contributor_phone: String,
    /// Amount in major currency units (rupees, dollars)
    pub amount: f64,
    pub currency: String,
    pub payment_method: PaymentMethod,
    /// Card: provider payment-intent ID. UPI: client-generated reference.
    pub provider_reference: String,
    pub payment_status: PaymentStatus,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Contribution {
    /// A card contribution awaiting provider confirmation
    pub fn pending_card(
        wedding_id: Uuid,
        contributor_name: String,
        amount: f64,
        currency: String,
        payment_intent_id: String,
    ) -> Self {
        Self::new(
            wedding_id,
            contributor_name,
            amount,
            currency,
            PaymentMethod::Card,
            payment_intent_id,
            PaymentStatus::Pending,
        )
    }

    /// A self-reported UPI transfer. Recorded as completed without verification.
    pub fn reported_upi(
        wedding_id: Uuid,
        contributor_name: String,
        amount: f64,
        currency: String,
        upi_reference: String,
    ) -> Self {
        Self::new(
            wedding_id,
            contributor_name,
            amount,
            currency,
            PaymentMethod::Upi,
            upi_reference,
            PaymentStatus::Completed,
        )
    }

    fn new(
        wedding_id: Uuid,
        contributor_name: String,
        amount: f64,
        currency: String,
        payment_method: PaymentMethod,
        provider_reference: String,
        payment_status: PaymentStatus,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            wedding_id,
            contributor_name,
            contributor_email: String::new(),
            contributor_phone: String::new(),
            amount,
            currency,
            payment_method,
            provider_reference,
            payment_status,
            message: String::new(),
            created_at: now,
            updated_at: now,
        }
    }
}
