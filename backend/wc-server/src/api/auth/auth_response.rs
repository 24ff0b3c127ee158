use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub session_id: String,
    pub user_id: String,
    pub username: String,
    pub success: bool,
}
