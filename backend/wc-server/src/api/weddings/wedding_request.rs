use wc_core::WeddingContent;

use serde::Deserialize;

/// Full wedding content plus the caller's session.
/// Identity fields the UI echoes back (`id`, `shareable_id`) are ignored.
#[derive(Debug, Deserialize)]
pub struct WeddingRequest {
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(flatten)]
    pub content: WeddingContent,
}
