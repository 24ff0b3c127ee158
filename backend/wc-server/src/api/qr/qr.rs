//! Share QR codes.
//!
//! Nothing is rendered here. The response points at an external QR image
//! service with the wedding's share URL encoded in it.

use crate::{ApiResult, AppState, QrQuery, QrResponse, resolve_wedding};

use wc_core::{HexColor, QrRequest, QrStyle, download_filename, share_url};

use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::Utc;

/// GET /api/wedding/share/{shareable_id}/qr?style=&color=&background=
pub async fn get_share_qr(
    State(state): State<AppState>,
    Path(shareable_id): Path<String>,
    Query(query): Query<QrQuery>,
) -> ApiResult<Json<QrResponse>> {
    let style = match query.style.as_deref() {
        Some(style) => style.parse::<QrStyle>()?,
        None => QrStyle::default(),
    };
    let foreground = match query.color.as_deref() {
        Some(color) => color.parse::<HexColor>()?,
        None => HexColor::black(),
    };
    let background = match query.background.as_deref() {
        Some(color) => color.parse::<HexColor>()?,
        None => HexColor::white(),
    };

    let wedding = resolve_wedding(&state.pool, &shareable_id).await?;
    let link = share_url(
        &state.settings.public_origin,
        Some(&wedding.shareable_id),
        &wedding.id.to_string(),
    );

    let qr_url = QrRequest::new(link.clone())
        .with_style(style)
        .with_colors(foreground, background)
        .url();
    let filename = download_filename(
        style,
        &wedding.content.couple_name_1,
        &wedding.content.couple_name_2,
        Utc::now().timestamp_millis(),
    );

    Ok(Json(QrResponse {
        share_url: link,
        qr_url,
        filename,
    }))
}
