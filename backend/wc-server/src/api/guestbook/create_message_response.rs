use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CreateMessageResponse {
    pub success: bool,
    pub message: String,
    pub message_id: String,
}
