//! Honeymoon fund settings shown on the registry page.

use serde::{Deserialize, Serialize};

pub const DEFAULT_HONEYMOON_DESTINATION: &str = "Tokyo & Kyoto, Japan";
pub const DEFAULT_HONEYMOON_DESCRIPTION: &str = "Help us create unforgettable memories on our honeymoon to Japan. Every contribution, big or small, means the world to us!";
pub const DEFAULT_HONEYMOON_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1545569341-9eb8b30979d9?w=800&h=400&fit=crop";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoneymoonFund {
    /// UPI virtual payment address guests transfer to
    pub upi_id: String,
    pub phone_number: String,
    pub destination: String,
    pub description: String,
    pub image_url: String,
    pub is_active: bool,
}

impl Default for HoneymoonFund {
    fn default() -> Self {
        Self {
            upi_id: String::new(),
            phone_number: String::new(),
            destination: String::from(DEFAULT_HONEYMOON_DESTINATION),
            description: String::from(DEFAULT_HONEYMOON_DESCRIPTION),
            image_url: String::from(DEFAULT_HONEYMOON_IMAGE_URL),
            is_active: true,
        }
    }
}

impl HoneymoonFund {
    /// Whether guests can be offered the manual UPI transfer option
    pub fn accepts_upi(&self) -> bool {
        self.is_active && !self.upi_id.trim().is_empty()
    }
}
