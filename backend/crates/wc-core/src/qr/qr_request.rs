//! Request URLs for the third-party QR image services.
//!
//! Square, rounded, extra-rounded and classy codes come from the plain QR
//! service; dot styles come from the styling service. The `qzone` values
//! sent for rounded styles set a quiet zone in the plain service and may
//! not change module shapes at all.

use crate::{HexColor, QrStyle};

pub const QR_SERVICE_URL: &str = "https://api.qrserver.com/v1/create-qr-code/";
pub const QR_STYLING_SERVICE_URL: &str = "https://qr-code-styling.com/api/create";

/// Rendered edge length in pixels
pub const QR_SIZE_PX: u32 = 300;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrRequest {
    /// Text encoded in the code, usually the share URL
    pub data: String,
    pub foreground: HexColor,
    pub background: HexColor,
    pub style: QrStyle,
}

impl QrRequest {
    /// Black on white square code
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            foreground: HexColor::black(),
            background: HexColor::white(),
            style: QrStyle::Square,
        }
    }

    pub fn with_style(mut self, style: QrStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_colors(mut self, foreground: HexColor, background: HexColor) -> Self {
        self.foreground = foreground;
        self.background = background;
        self
    }

    /// Build the image URL for this request
    pub fn url(&self) -> String {
        if self.style.uses_dot_renderer() {
            let dot_type = if self.style == QrStyle::Dots {
                "square"
            } else {
                "rounded"
            };

            return format!(
                "{}?data={}&size={}&format=png&color={}&backgroundColor={}&dotType={}&cornerType=square",
                QR_STYLING_SERVICE_URL,
                urlencoding::encode(&self.data),
                QR_SIZE_PX,
                self.foreground,
                self.background,
                dot_type,
            );
        }

        let margin = if self.style == QrStyle::Classy { "2" } else { "0" };
        let size = format!("{}x{}", QR_SIZE_PX, QR_SIZE_PX);

        let mut params: Vec<(&str, &str)> = vec![
            ("size", size.as_str()),
            ("data", self.data.as_str()),
            ("color", self.foreground.as_str()),
            ("bgcolor", self.background.as_str()),
            ("format", "png"),
            ("ecc", "M"),
            ("margin", margin),
        ];

        match self.style {
            QrStyle::Rounded => params.push(("qzone", "1")),
            QrStyle::ExtraRounded => params.push(("qzone", "3")),
            _ => {}
        }

        let query = params
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{}", QR_SERVICE_URL, query)
    }
}
