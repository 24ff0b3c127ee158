use wc_core::Contribution;

use serde::Serialize;

/// Completed contributions with their totals, for the couple's dashboard
#[derive(Debug, Serialize)]
pub struct ContributionListResponse {
    pub contributions: Vec<Contribution>,
    pub total_amount: f64,
    pub currency: String,
    pub count: i64,
}
