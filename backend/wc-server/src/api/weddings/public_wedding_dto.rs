use wc_core::{SHOWCASE_WEDDING_ID, Wedding, WeddingContent, showcase_content};

use chrono::{DateTime, Utc};
use serde::Serialize;

/// 2024-01-01T00:00:00Z, the fixed timestamp of the showcase page
const SHOWCASE_TIMESTAMP_SECS: i64 = 1_704_067_200;

/// Wedding as guests see it: everything except the owner
#[derive(Debug, Serialize)]
pub struct PublicWeddingDto {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shareable_id: Option<String>,
    #[serde(flatten)]
    pub content: WeddingContent,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PublicWeddingDto {
    /// Demo page for accounts that have no wedding of their own
    pub fn showcase() -> Self {
        let timestamp = DateTime::from_timestamp(SHOWCASE_TIMESTAMP_SECS, 0).unwrap_or_default();
        Self {
            id: SHOWCASE_WEDDING_ID.to_string(),
            shareable_id: None,
            content: showcase_content(),
            created_at: timestamp,
            updated_at: timestamp,
        }
    }
}

impl From<Wedding> for PublicWeddingDto {
    fn from(w: Wedding) -> Self {
        Self {
            id: w.id.to_string(),
            shareable_id: Some(w.shareable_id),
            content: w.content,
            created_at: w.created_at,
            updated_at: w.updated_at,
        }
    }
}
