//! Wedding page REST API handlers

use crate::{
    ApiError, ApiResult, AppState, PublicWeddingDto, SessionId, WeddingRequest,
    WeddingSectionResponse, owned_wedding, resolve_wedding, session_user,
};

use wc_core::{ContentValidator, User, Wedding};
use wc_db::{UserRepository, WeddingRepository};

use axum::{
    Json,
    extract::{Path, State},
};
use sqlx::SqlitePool;

/// POST /api/wedding
pub async fn create_wedding(
    State(state): State<AppState>,
    session: SessionId,
    Json(req): Json<WeddingRequest>,
) -> ApiResult<Json<Wedding>> {
    let session_id = session.or_body(req.session_id);
    let user = session_user(&state.pool, session_id.as_deref()).await?;
    ContentValidator::validate_wedding_content(&req.content)?;

    let repo = WeddingRepository::new(state.pool.clone());
    if repo.find_by_user(user.id).await?.is_some() {
        return Err(ApiError::bad_request(
            "User already has a wedding card. Use update endpoint instead.",
        ));
    }

    let wedding = Wedding::new(user.id, req.content);
    repo.create(&wedding).await?;

    log::info!(
        "Created wedding {} ({}) for '{}'",
        wedding.id,
        wedding.shareable_id,
        user.username
    );

    Ok(Json(wedding))
}

/// PUT /api/wedding
///
/// Replaces all content. Identity, share link and creation time are kept.
pub async fn update_wedding(
    State(state): State<AppState>,
    session: SessionId,
    Json(req): Json<WeddingRequest>,
) -> ApiResult<Json<Wedding>> {
    let session_id = session.or_body(req.session_id);
    let user = session_user(&state.pool, session_id.as_deref()).await?;
    ContentValidator::validate_wedding_content(&req.content)?;

    let mut wedding = owned_wedding(&state.pool, &user).await?;
    wedding.replace_content(req.content);

    WeddingRepository::new(state.pool.clone())
        .update(&wedding)
        .await?;

    log::info!("Updated wedding {} for '{}'", wedding.id, user.username);

    Ok(Json(wedding))
}

/// GET /api/wedding - owner view
pub async fn get_wedding(
    State(state): State<AppState>,
    SessionId(session_id): SessionId,
) -> ApiResult<Json<Wedding>> {
    let user = session_user(&state.pool, session_id.as_deref()).await?;
    Ok(Json(owned_wedding(&state.pool, &user).await?))
}

/// GET /api/wedding/public/{id}
pub async fn get_public_wedding(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
) -> ApiResult<Json<PublicWeddingDto>> {
    let wedding = resolve_wedding(&state.pool, &identifier).await?;
    Ok(Json(wedding.into()))
}

/// GET /api/wedding/share/{shareable_id}
pub async fn get_shared_wedding(
    State(state): State<AppState>,
    Path(shareable_id): Path<String>,
) -> ApiResult<Json<PublicWeddingDto>> {
    let wedding = resolve_wedding(&state.pool, &shareable_id).await?;
    Ok(Json(wedding.into()))
}

/// GET /api/wedding/user/{username}
///
/// Users who never created a wedding get the showcase page.
pub async fn get_wedding_by_username(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<Json<PublicWeddingDto>> {
    let user = find_user(&state.pool, &username).await?;
    Ok(Json(public_wedding_for(&state.pool, &user).await?))
}

/// GET /api/wedding/user/{username}/{section}
pub async fn get_wedding_section_by_username(
    State(state): State<AppState>,
    Path((username, section)): Path<(String, String)>,
) -> ApiResult<Json<WeddingSectionResponse>> {
    let user = find_user(&state.pool, &username).await?;
    let wedding = public_wedding_for(&state.pool, &user).await?;

    Ok(Json(WeddingSectionResponse {
        wedding,
        current_section: section,
        username,
    }))
}

async fn find_user(pool: &SqlitePool, username: &str) -> ApiResult<User> {
    UserRepository::new(pool.clone())
        .find_by_username(username)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))
}

async fn public_wedding_for(pool: &SqlitePool, user: &User) -> ApiResult<PublicWeddingDto> {
    let wedding = WeddingRepository::new(pool.clone())
        .find_by_user(user.id)
        .await?;

    Ok(match wedding {
        Some(wedding) => wedding.into(),
        None => PublicWeddingDto::showcase(),
    })
}
