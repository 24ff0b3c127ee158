use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;

/// Six-digit RGB color. Accepts `#RRGGBB` or `RRGGBB`, keeps the caller's casing,
/// and renders without the leading `#` as the QR services expect.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexColor(String);

impl HexColor {
    pub fn black() -> Self {
        Self(String::from("000000"))
    }

    pub fn white() -> Self {
        Self(String::from("FFFFFF"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for HexColor {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s);

        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(CoreError::InvalidColor {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self(digits.to_string()))
    }
}

impl std::fmt::Display for HexColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
