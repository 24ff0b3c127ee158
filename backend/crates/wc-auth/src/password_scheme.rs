use crate::{Result as AuthErrorResult, hash_password, verify_password};

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How the credential store keeps passwords at rest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PasswordScheme {
    /// Salted Argon2id hashes. Values that are not PHC strings are legacy
    /// plaintext entries and are compared verbatim.
    #[default]
    Argon2,
    /// Passwords stored verbatim, as the legacy browser client wrote them.
    /// Selected with `client.password_scheme = "plaintext"`.
    Plaintext,
}

impl PasswordScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Argon2 => "argon2",
            Self::Plaintext => "plaintext",
        }
    }

    /// Produce the value persisted for `password`
    pub fn protect(&self, password: &str) -> AuthErrorResult<String> {
        match self {
            Self::Argon2 => hash_password(password),
            Self::Plaintext => Ok(password.to_string()),
        }
    }

    /// Exact, case-sensitive comparison with no normalization
    pub fn matches(&self, password: &str, stored: &str) -> AuthErrorResult<bool> {
        match self {
            Self::Argon2 if is_phc_hash(stored) => verify_password(password, stored),
            Self::Argon2 | Self::Plaintext => Ok(password == stored),
        }
    }
}

/// Argon2 PHC strings always open with the algorithm identifier
fn is_phc_hash(stored: &str) -> bool {
    stored.starts_with("$argon2")
}

impl FromStr for PasswordScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "argon2" => Ok(Self::Argon2),
            "plaintext" => Ok(Self::Plaintext),
            _ => Err(format!("unknown password scheme '{}'", s)),
        }
    }
}
