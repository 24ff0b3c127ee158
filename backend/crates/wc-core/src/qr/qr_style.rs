use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Visual style of the generated QR code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum QrStyle {
    #[default]
    Square,
    Rounded,
    Dots,
    RoundedDots,
    ExtraRounded,
    Classy,
}

impl QrStyle {
    pub const ALL: [QrStyle; 6] = [
        QrStyle::Square,
        QrStyle::Rounded,
        QrStyle::Dots,
        QrStyle::RoundedDots,
        QrStyle::ExtraRounded,
        QrStyle::Classy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Square => "square",
            Self::Rounded => "rounded",
            Self::Dots => "dots",
            Self::RoundedDots => "rounded-dots",
            Self::ExtraRounded => "extra-rounded",
            Self::Classy => "classy",
        }
    }

    /// Dot styles are rendered by the styling service instead of the plain QR service
    pub fn uses_dot_renderer(&self) -> bool {
        matches!(self, Self::Dots | Self::RoundedDots)
    }
}

impl FromStr for QrStyle {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "square" => Ok(Self::Square),
            "rounded" => Ok(Self::Rounded),
            "dots" => Ok(Self::Dots),
            "rounded-dots" => Ok(Self::RoundedDots),
            "extra-rounded" => Ok(Self::ExtraRounded),
            "classy" => Ok(Self::Classy),
            _ => Err(CoreError::InvalidQrStyle {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for QrStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
