use serde::Deserialize;

/// Theme arrives as a raw string so unknown names get a 400 with a helpful message
#[derive(Debug, Deserialize)]
pub struct ThemeRequest {
    #[serde(default)]
    pub session_id: Option<String>,
    pub theme: Option<String>,
}
