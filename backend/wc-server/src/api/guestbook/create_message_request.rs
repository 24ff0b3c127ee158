use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateMessageRequest {
    /// Wedding UUID, or `public`/`default`/empty for the landing page
    #[serde(default)]
    pub wedding_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub relationship: String,
    #[serde(default)]
    pub message: String,
    pub is_public: Option<bool>,
    /// Only read by the private endpoint
    #[serde(default)]
    pub session_id: Option<String>,
}
