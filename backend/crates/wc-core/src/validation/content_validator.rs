use crate::{CoreError, Result as CoreErrorResult, WeddingContent};

use std::panic::Location;

use error_location::ErrorLocation;

pub const MAX_USERNAME_LENGTH: usize = 64;
pub const MAX_NAME_LENGTH: usize = 200;
pub const MAX_MESSAGE_LENGTH: usize = 2000;
pub const MAX_STORY_LENGTH: usize = 10_000;
pub const MAX_GUEST_COUNT: u32 = 50;

/// Validates guest- and couple-submitted content before it is stored
pub struct ContentValidator;

impl ContentValidator {
    /// Non-empty after trimming and within `max_length` characters
    #[track_caller]
    pub fn validate_required(value: &str, field: &str, max_length: usize) -> CoreErrorResult<()> {
        if value.trim().is_empty() {
            return Err(Self::error(format!("{} cannot be empty", field), field));
        }

        Self::validate_optional(value, field, max_length)
    }

    #[track_caller]
    pub fn validate_optional(value: &str, field: &str, max_length: usize) -> CoreErrorResult<()> {
        if value.chars().count() > max_length {
            return Err(Self::error(
                format!("{} must not exceed {} characters", field, max_length),
                field,
            ));
        }

        Ok(())
    }

    #[track_caller]
    pub fn validate_username(username: &str) -> CoreErrorResult<()> {
        Self::validate_required(username, "username", MAX_USERNAME_LENGTH)?;

        if username.chars().any(char::is_whitespace) {
            return Err(Self::error(
                "username cannot contain whitespace".to_string(),
                "username",
            ));
        }

        Ok(())
    }

    #[track_caller]
    pub fn validate_guest_count(guest_count: u32) -> CoreErrorResult<()> {
        if guest_count == 0 || guest_count > MAX_GUEST_COUNT {
            return Err(Self::error(
                format!("guest_count must be 1-{}, got {}", MAX_GUEST_COUNT, guest_count),
                "guest_count",
            ));
        }

        Ok(())
    }

    #[track_caller]
    pub fn validate_wedding_content(content: &WeddingContent) -> CoreErrorResult<()> {
        Self::validate_required(&content.couple_name_1, "couple_name_1", MAX_NAME_LENGTH)?;
        Self::validate_optional(&content.couple_name_2, "couple_name_2", MAX_NAME_LENGTH)?;
        Self::validate_optional(&content.venue_name, "venue_name", MAX_NAME_LENGTH)?;
        Self::validate_optional(&content.venue_location, "venue_location", MAX_NAME_LENGTH)?;
        Self::validate_optional(&content.their_story, "their_story", MAX_STORY_LENGTH)?;
        Ok(())
    }

    #[track_caller]
    fn error(message: String, field: &str) -> CoreError {
        CoreError::Validation {
            message,
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
