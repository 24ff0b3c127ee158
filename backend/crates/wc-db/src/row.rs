//! Conversions from stored column values back into domain types.

use crate::{DbError, Result};

use std::panic::Location;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

#[track_caller]
pub(crate) fn uuid(table: &'static str, value: &str) -> Result<Uuid> {
    Uuid::parse_str(value).map_err(|e| DbError::Decode {
        table,
        message: format!("invalid UUID '{}': {}", value, e),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
pub(crate) fn timestamp(table: &'static str, millis: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis).ok_or_else(|| DbError::Decode {
        table,
        message: format!("timestamp out of range: {}", millis),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
pub(crate) fn parse<T>(table: &'static str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|e: T::Err| DbError::Decode {
        table,
        message: e.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
pub(crate) fn from_json<T: DeserializeOwned>(table: &'static str, json: &str) -> Result<T> {
    serde_json::from_str(json).map_err(|e| DbError::Decode {
        table,
        message: format!("invalid JSON document: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
pub(crate) fn to_json<T: Serialize>(what: &'static str, value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|source| DbError::Encode {
        what,
        source,
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
pub(crate) fn guest_count(table: &'static str, value: i64) -> Result<u32> {
    u32::try_from(value).map_err(|_| DbError::Decode {
        table,
        message: format!("guest_count out of range: {}", value),
        location: ErrorLocation::from(Location::caller()),
    })
}
