//! Guestbook REST API handlers. Listings are newest first.

use crate::{
    ApiResult, AppState, CreateMessageRequest, CreateMessageResponse, MessageListResponse,
    SessionId, owned_wedding, resolve_wedding, session_user,
};

use wc_core::{
    ContentValidator, GuestbookMessage, normalize_target, resolve_visibility,
    validation::content_validator::{MAX_MESSAGE_LENGTH, MAX_NAME_LENGTH},
};
use wc_db::GuestbookRepository;

use axum::{
    Json,
    extract::{Path, State},
};

/// POST /api/guestbook
pub async fn create_message(
    State(state): State<AppState>,
    Json(req): Json<CreateMessageRequest>,
) -> ApiResult<Json<CreateMessageResponse>> {
    validate_message(&req)?;

    let is_public = resolve_visibility(&req.wedding_id, req.is_public);
    let mut message = GuestbookMessage::new(
        normalize_target(&req.wedding_id),
        req.name,
        req.message,
        is_public,
    );
    message.relationship = req.relationship;

    GuestbookRepository::new(state.pool.clone())
        .create(&message)
        .await?;

    log::info!(
        "Guestbook message {} for '{}' (public: {})",
        message.id,
        message.wedding_id,
        message.is_public
    );

    Ok(Json(CreateMessageResponse {
        success: true,
        message: "Guestbook message added successfully".to_string(),
        message_id: message.id.to_string(),
    }))
}

/// POST /api/guestbook/private
///
/// Always private, always on the session user's own wedding.
pub async fn create_private_message(
    State(state): State<AppState>,
    session: SessionId,
    Json(req): Json<CreateMessageRequest>,
) -> ApiResult<Json<CreateMessageResponse>> {
    let session_id = session.or_body(req.session_id.clone());
    let user = session_user(&state.pool, session_id.as_deref()).await?;
    validate_message(&req)?;

    let wedding = owned_wedding(&state.pool, &user).await?;

    let mut message = GuestbookMessage::new(wedding.id.to_string(), req.name, req.message, false);
    message.relationship = req.relationship;

    GuestbookRepository::new(state.pool.clone())
        .create(&message)
        .await?;

    log::info!("Private guestbook message {} for wedding {}", message.id, wedding.id);

    Ok(Json(CreateMessageResponse {
        success: true,
        message: "Private guestbook message added successfully".to_string(),
        message_id: message.id.to_string(),
    }))
}

/// GET /api/guestbook/{wedding_id} - public and private
pub async fn list_messages(
    State(state): State<AppState>,
    Path(wedding_id): Path<String>,
) -> ApiResult<Json<MessageListResponse>> {
    let messages = GuestbookRepository::new(state.pool.clone())
        .find_by_wedding(&wedding_id)
        .await?;

    Ok(Json(messages.into()))
}

/// GET /api/guestbook/public/messages - every public message across weddings
pub async fn list_public_messages(
    State(state): State<AppState>,
) -> ApiResult<Json<MessageListResponse>> {
    let messages = GuestbookRepository::new(state.pool.clone())
        .find_public()
        .await?;

    Ok(Json(messages.into()))
}

/// GET /api/guestbook/private/{wedding_id}
///
/// Requires no session. "Private" only keeps a message off the public
/// feed; anyone holding the wedding ID can read these.
pub async fn list_private_messages(
    State(state): State<AppState>,
    Path(wedding_id): Path<String>,
) -> ApiResult<Json<MessageListResponse>> {
    let messages = GuestbookRepository::new(state.pool.clone())
        .find_private(&wedding_id)
        .await?;

    Ok(Json(messages.into()))
}

/// GET /api/guestbook/shareable/{shareable_id}
pub async fn list_messages_by_shareable_id(
    State(state): State<AppState>,
    Path(shareable_id): Path<String>,
) -> ApiResult<Json<MessageListResponse>> {
    let wedding = resolve_wedding(&state.pool, &shareable_id).await?;
    list_messages(State(state), Path(wedding.id.to_string())).await
}

fn validate_message(req: &CreateMessageRequest) -> ApiResult<()> {
    ContentValidator::validate_required(&req.name, "name", MAX_NAME_LENGTH)?;
    ContentValidator::validate_optional(&req.relationship, "relationship", MAX_NAME_LENGTH)?;
    ContentValidator::validate_required(&req.message, "message", MAX_MESSAGE_LENGTH)?;
    Ok(())
}
