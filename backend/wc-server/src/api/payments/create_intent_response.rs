use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CreateIntentResponse {
    pub client_secret: Option<String>,
    pub payment_intent_id: String,
    pub contribution_id: String,
}
