use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Largest single contribution, in major units. Keeps minor-unit conversion
/// well inside `i64` and the stored `REAL` exact to the paisa.
pub const MAX_AMOUNT: f64 = 10_000_000.0;

/// Convert a major-unit amount (rupees) to minor units (paise) for the card provider.
/// Rounds to the nearest unit so 0.29 becomes 29, not 28.
pub fn to_minor_units(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

pub fn from_minor_units(minor: i64) -> f64 {
    minor as f64 / 100.0
}

/// Contribution amounts must be finite, at least one minor unit and no more
/// than [`MAX_AMOUNT`]
#[track_caller]
pub fn validate_amount(amount: f64) -> CoreErrorResult<()> {
    if !amount.is_finite() || amount <= 0.0 || to_minor_units(amount) < 1 {
        return Err(CoreError::Validation {
            message: format!("amount must be a positive number, got {}", amount),
            field: Some(String::from("amount")),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    if amount > MAX_AMOUNT {
        return Err(CoreError::Validation {
            message: format!("amount cannot exceed {}, got {}", MAX_AMOUNT, amount),
            field: Some(String::from("amount")),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(())
}

/// Currency codes are three lowercase ASCII letters (`inr`, `usd`)
#[track_caller]
pub fn validate_currency(currency: &str) -> CoreErrorResult<()> {
    if currency.len() != 3 || !currency.bytes().all(|b| b.is_ascii_lowercase()) {
        return Err(CoreError::Validation {
            message: format!("currency must be a 3-letter lowercase code, got '{}'", currency),
            field: Some(String::from("currency")),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(())
}
