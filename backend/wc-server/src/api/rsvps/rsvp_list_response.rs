use wc_core::RsvpResponse;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RsvpListResponse {
    pub success: bool,
    pub rsvps: Vec<RsvpResponse>,
    pub total_count: usize,
}

impl From<Vec<RsvpResponse>> for RsvpListResponse {
    fn from(rsvps: Vec<RsvpResponse>) -> Self {
        Self {
            success: true,
            total_count: rsvps.len(),
            rsvps,
        }
    }
}
