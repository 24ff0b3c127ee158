use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateRsvpRequest {
    /// Wedding UUID or shareable ID
    pub wedding_id: String,
    #[serde(default)]
    pub guest_name: String,
    #[serde(default)]
    pub guest_email: String,
    #[serde(default)]
    pub guest_phone: String,
    /// `yes` or `no`
    #[serde(default)]
    pub attendance: String,
    #[serde(default = "default_guest_count")]
    pub guest_count: u32,
    #[serde(default)]
    pub dietary_restrictions: String,
    #[serde(default)]
    pub special_message: String,
}

fn default_guest_count() -> u32 {
    1
}
