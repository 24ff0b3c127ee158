use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct QrResponse {
    pub share_url: String,
    /// Image URL on the external QR rendering service
    pub qr_url: String,
    /// Suggested name for the downloaded PNG
    pub filename: String,
}
