use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CreateRsvpResponse {
    pub success: bool,
    pub message: String,
    pub rsvp_id: String,
}
