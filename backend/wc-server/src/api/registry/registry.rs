//! Honeymoon fund configuration handlers

use crate::{
    ApiResult, AppState, HoneymoonFundResponse, SessionId, SuccessResponse, owned_wedding,
    resolve_wedding, session_user,
};

use wc_core::HoneymoonFund;
use wc_db::WeddingRepository;

use axum::{
    Json,
    extract::{Path, State},
};

/// PUT /api/wedding/registry?session_id=
///
/// The body is the fund configuration itself; missing fields take defaults.
pub async fn update_honeymoon_fund(
    State(state): State<AppState>,
    SessionId(session_id): SessionId,
    Json(fund): Json<HoneymoonFund>,
) -> ApiResult<Json<SuccessResponse>> {
    let user = session_user(&state.pool, session_id.as_deref()).await?;
    let mut wedding = owned_wedding(&state.pool, &user).await?;

    wedding.content.honeymoon_fund = fund;
    wedding.touch();

    WeddingRepository::new(state.pool.clone())
        .update(&wedding)
        .await?;

    log::info!(
        "Updated honeymoon fund of wedding {} (upi enabled: {})",
        wedding.id,
        wedding.content.honeymoon_fund.accepts_upi()
    );

    Ok(Json(SuccessResponse::new(
        "Honeymoon fund configuration updated successfully",
    )))
}

/// GET /api/wedding/registry/{wedding_id}
pub async fn get_honeymoon_fund(
    State(state): State<AppState>,
    Path(wedding_id): Path<String>,
) -> ApiResult<Json<HoneymoonFundResponse>> {
    let wedding = resolve_wedding(&state.pool, &wedding_id).await?;
    Ok(Json(HoneymoonFundResponse {
        honeymoon_fund: wedding.content.honeymoon_fund,
    }))
}

/// GET /api/wedding/registry/share/{shareable_id}
pub async fn get_shared_honeymoon_fund(
    State(state): State<AppState>,
    Path(shareable_id): Path<String>,
) -> ApiResult<Json<HoneymoonFundResponse>> {
    get_honeymoon_fund(State(state), Path(shareable_id)).await
}
