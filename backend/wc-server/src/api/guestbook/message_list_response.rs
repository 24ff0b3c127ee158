use wc_core::GuestbookMessage;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MessageListResponse {
    pub success: bool,
    pub messages: Vec<GuestbookMessage>,
    pub total_count: usize,
}

impl From<Vec<GuestbookMessage>> for MessageListResponse {
    fn from(messages: Vec<GuestbookMessage>) -> Self {
        Self {
            success: true,
            total_count: messages.len(),
            messages,
        }
    }
}
