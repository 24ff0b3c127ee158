use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct GalleryRequest {
    #[serde(default)]
    pub session_id: Option<String>,
    /// List of photos or map of category to photo URLs, stored as sent
    pub gallery_photos: Option<Value>,
}
