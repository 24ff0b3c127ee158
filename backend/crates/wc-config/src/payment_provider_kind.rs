use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Which card-payment backend the server talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentProviderKind {
    /// Card payments disabled; only manual UPI contributions work
    #[default]
    None,
    Stripe,
}

impl PaymentProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Stripe => "stripe",
        }
    }
}

impl FromStr for PaymentProviderKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "stripe" => Ok(Self::Stripe),
            _ => Err(()),
        }
    }
}

impl fmt::Display for PaymentProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
