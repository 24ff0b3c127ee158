//! Shared lookups for handlers: session to user, user to wedding, and
//! public identifiers to weddings.

use crate::{ApiError, ApiResult};

use wc_core::{User, Wedding};
use wc_db::{SessionRepository, WeddingRepository};

use sqlx::SqlitePool;

/// Resolve a session ID to its user.
///
/// # Errors
/// - `ApiError::Unauthorized` if the ID is missing or unknown
pub async fn session_user(pool: &SqlitePool, session_id: Option<&str>) -> ApiResult<User> {
    let Some(session_id) = session_id else {
        return Err(ApiError::unauthorized("Session ID required"));
    };

    SessionRepository::new(pool.clone())
        .find_user(session_id)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Invalid session"))
}

/// The wedding owned by `user`, 404 if they never created one
pub async fn owned_wedding(pool: &SqlitePool, user: &User) -> ApiResult<Wedding> {
    WeddingRepository::new(pool.clone())
        .find_by_user(user.id)
        .await?
        .ok_or_else(|| ApiError::not_found("Wedding data not found"))
}

/// Resolve a public identifier to a wedding.
///
/// Accepts either the wedding UUID or its 8-character shareable ID, so
/// links printed before share IDs existed keep working.
pub async fn resolve_wedding(pool: &SqlitePool, identifier: &str) -> ApiResult<Wedding> {
    WeddingRepository::new(pool.clone())
        .find_by_any_id(identifier)
        .await?
        .ok_or_else(|| ApiError::not_found("Wedding not found"))
}
