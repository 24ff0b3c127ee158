use wc_core::HoneymoonFund;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HoneymoonFundResponse {
    pub honeymoon_fund: HoneymoonFund,
}
