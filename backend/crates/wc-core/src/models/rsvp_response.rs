//! A guest's reply to the invitation.

use crate::Attendance;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsvpResponse {
    pub id: Uuid,
    pub wedding_id: Uuid,
    pub guest_name: String,
    pub guest_email: String,
    pub guest_phone: String,
    pub attendance: Attendance,
    /// Number of people in the party, at least 1
    pub guest_count: u32,
    pub dietary_restrictions: String,
    pub special_message: String,
    pub submitted_at: DateTime<Utc>,
}

impl RsvpResponse {
    pub fn new(wedding_id: Uuid, guest_name: String, attendance: Attendance) -> Self {
        Self {
            id: Uuid::new_v4(),
            wedding_id,
            guest_name,
            guest_email: String::new(),
            guest_phone: String::new(),
            attendance,
            guest_count: 1,
            dietary_restrictions: String::new(),
            special_message: String::new(),
            submitted_at: Utc::now(),
        }
    }

    pub fn is_attending(&self) -> bool {
        self.attendance == Attendance::Yes
    }
}
