use serde::Deserialize;

/// Optional styling for a share QR code. Colors accept `#RRGGBB` or `RRGGBB`.
#[derive(Debug, Default, Deserialize)]
pub struct QrQuery {
    pub style: Option<String>,
    pub color: Option<String>,
    pub background: Option<String>,
}
