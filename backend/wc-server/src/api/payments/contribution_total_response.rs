use wc_db::ContributionSummary;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ContributionTotalResponse {
    pub total_amount: f64,
    pub currency: String,
    pub count: i64,
}

impl From<ContributionSummary> for ContributionTotalResponse {
    fn from(summary: ContributionSummary) -> Self {
        Self {
            total_amount: summary.total_amount,
            currency: summary.currency,
            count: summary.count,
        }
    }
}
