use wc_core::Faq;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct FaqRequest {
    #[serde(default)]
    pub session_id: Option<String>,
    pub faqs: Option<Vec<Faq>>,
}
