//! Wedding entity - one public invitation page per user.

use crate::WeddingContent;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Length of the public share identifier
pub const SHAREABLE_ID_LENGTH: usize = 8;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wedding {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Short public identifier used in share links and QR codes
    pub shareable_id: String,
    #[serde(flatten)]
    pub content: WeddingContent,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Wedding {
    pub fn new(user_id: Uuid, content: WeddingContent) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            shareable_id: generate_shareable_id(),
            content,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the editable content, keeping identity, share link and creation time
    pub fn replace_content(&mut self, content: WeddingContent) {
        self.content = content;
        self.touch();
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// First 8 characters of a random UUID
pub fn generate_shareable_id() -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(SHAREABLE_ID_LENGTH);
    id
}
