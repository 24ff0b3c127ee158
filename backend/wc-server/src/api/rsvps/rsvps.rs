//! RSVP REST API handlers

use crate::{
    ApiResult, AppState, CreateRsvpRequest, CreateRsvpResponse, RsvpListResponse,
    resolve_wedding,
};

use wc_core::{
    Attendance, ContentValidator, RsvpResponse,
    validation::content_validator::{MAX_MESSAGE_LENGTH, MAX_NAME_LENGTH},
};
use wc_db::RsvpRepository;

use axum::{
    Json,
    extract::{Path, State},
};

/// POST /api/rsvp
pub async fn submit_rsvp(
    State(state): State<AppState>,
    Json(req): Json<CreateRsvpRequest>,
) -> ApiResult<Json<CreateRsvpResponse>> {
    ContentValidator::validate_required(&req.guest_name, "guest_name", MAX_NAME_LENGTH)?;
    ContentValidator::validate_optional(&req.guest_email, "guest_email", MAX_NAME_LENGTH)?;
    ContentValidator::validate_optional(&req.guest_phone, "guest_phone", MAX_NAME_LENGTH)?;
    ContentValidator::validate_optional(
        &req.dietary_restrictions,
        "dietary_restrictions",
        MAX_MESSAGE_LENGTH,
    )?;
    ContentValidator::validate_optional(&req.special_message, "special_message", MAX_MESSAGE_LENGTH)?;
    ContentValidator::validate_guest_count(req.guest_count)?;
    let attendance: Attendance = req.attendance.parse()?;

    let wedding = resolve_wedding(&state.pool, &req.wedding_id).await?;

    let mut rsvp = RsvpResponse::new(wedding.id, req.guest_name, attendance);
    rsvp.guest_email = req.guest_email;
    rsvp.guest_phone = req.guest_phone;
    rsvp.guest_count = req.guest_count;
    rsvp.dietary_restrictions = req.dietary_restrictions;
    rsvp.special_message = req.special_message;

    RsvpRepository::new(state.pool.clone()).create(&rsvp).await?;

    log::info!(
        "RSVP {} for wedding {}: {} x{}",
        rsvp.id,
        wedding.id,
        rsvp.attendance,
        rsvp.guest_count
    );

    Ok(Json(CreateRsvpResponse {
        success: true,
        message: "RSVP submitted successfully".to_string(),
        rsvp_id: rsvp.id.to_string(),
    }))
}

/// GET /api/rsvp/{wedding_id}
pub async fn list_rsvps(
    State(state): State<AppState>,
    Path(wedding_id): Path<String>,
) -> ApiResult<Json<RsvpListResponse>> {
    let wedding = resolve_wedding(&state.pool, &wedding_id).await?;
    let rsvps = RsvpRepository::new(state.pool.clone())
        .find_by_wedding(wedding.id)
        .await?;

    Ok(Json(rsvps.into()))
}

/// GET /api/rsvp/shareable/{shareable_id}
pub async fn list_rsvps_by_shareable_id(
    State(state): State<AppState>,
    Path(shareable_id): Path<String>,
) -> ApiResult<Json<RsvpListResponse>> {
    list_rsvps(State(state), Path(shareable_id)).await
}
