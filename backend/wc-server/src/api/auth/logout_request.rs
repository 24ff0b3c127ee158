use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct LogoutRequest {
    #[serde(default)]
    pub session_id: Option<String>,
}
