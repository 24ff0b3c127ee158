use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Wedding IDs that always denote the public landing-page guestbook
pub const PUBLIC_GUESTBOOK_TARGETS: [&str; 3] = ["public", "default", ""];

/// Wedding ID stored for messages posted without a target
pub const PUBLIC_GUESTBOOK_ID: &str = "public";

/// Guestbook entry. Public messages show on the landing page,
/// private ones only on the couple's dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestbookMessage {
    pub id: Uuid,
    /// Wedding UUID, or `public` for the landing-page guestbook
    pub wedding_id: String,
    pub name: String,
    pub relationship: String,
    pub message: String,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
}

impl GuestbookMessage {
    pub fn new(wedding_id: String, name: String, message: String, is_public: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            wedding_id,
            name,
            relationship: String::new(),
            message,
            is_public,
            created_at: Utc::now(),
        }
    }
}

/// Visibility of a message posted through the public guestbook form.
///
/// Messages aimed at one of the public targets are always public;
/// otherwise the caller's flag wins and defaults to public.
pub fn resolve_visibility(wedding_id: &str, requested_public: Option<bool>) -> bool {
    PUBLIC_GUESTBOOK_TARGETS.contains(&wedding_id) || requested_public.unwrap_or(true)
}

/// Normalize an empty target to the public guestbook ID
pub fn normalize_target(wedding_id: &str) -> String {
    if wedding_id.is_empty() {
        String::from(PUBLIC_GUESTBOOK_ID)
    } else {
        wedding_id.to_string()
    }
}
