use serde::{Deserialize, Serialize};

/// Result of a successful local register or login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSuccess {
    pub success: bool,
    pub username: String,
    pub session_id: String,
}

impl AuthSuccess {
    pub fn new(username: impl Into<String>, session_id: String) -> Self {
        Self {
            success: true,
            username: username.into(),
            session_id,
        }
    }
}
