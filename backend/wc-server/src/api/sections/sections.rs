//! Partial updates of individual wedding page sections.
//!
//! Each endpoint touches only the fields it names, leaves the rest of the
//! page alone and answers with the full updated wedding.

use crate::{
    ApiResult, AppState, FaqRequest, GalleryRequest, PartyRequest, ScheduleRequest,
    SectionUpdateResponse, SessionId, StoryRequest, ThemeRequest, owned_wedding, session_user,
};

use wc_core::{
    ContentValidator, Theme, WeddingContent, validation::content_validator::MAX_STORY_LENGTH,
};
use wc_db::WeddingRepository;

use axum::{Json, extract::State};

/// PUT /api/wedding/party
pub async fn update_party(
    State(state): State<AppState>,
    session: SessionId,
    Json(req): Json<PartyRequest>,
) -> ApiResult<Json<SectionUpdateResponse>> {
    let session_id = session.or_body(req.session_id);
    update_section(&state, session_id, "party", |content| {
        if let Some(bridal_party) = req.bridal_party {
            content.sections.bridal_party = bridal_party;
        }
        if let Some(groom_party) = req.groom_party {
            content.sections.groom_party = groom_party;
        }
        if let Some(special_roles) = req.special_roles {
            content.sections.special_roles = special_roles;
        }
        Ok(())
    })
    .await
}

/// PUT /api/wedding/faq
pub async fn update_faq(
    State(state): State<AppState>,
    session: SessionId,
    Json(req): Json<FaqRequest>,
) -> ApiResult<Json<SectionUpdateResponse>> {
    let session_id = session.or_body(req.session_id);
    update_section(&state, session_id, "faq", |content| {
        if let Some(faqs) = req.faqs {
            content.sections.faqs = faqs;
        }
        Ok(())
    })
    .await
}

/// PUT /api/wedding/story
pub async fn update_story(
    State(state): State<AppState>,
    session: SessionId,
    Json(req): Json<StoryRequest>,
) -> ApiResult<Json<SectionUpdateResponse>> {
    let session_id = session.or_body(req.session_id);
    update_section(&state, session_id, "story", |content| {
        if let Some(their_story) = req.their_story {
            ContentValidator::validate_optional(&their_story, "their_story", MAX_STORY_LENGTH)?;
            content.their_story = their_story;
        }
        if let Some(story_timeline) = req.story_timeline {
            content.sections.story_timeline = story_timeline;
        }
        Ok(())
    })
    .await
}

/// PUT /api/wedding/schedule
pub async fn update_schedule(
    State(state): State<AppState>,
    session: SessionId,
    Json(req): Json<ScheduleRequest>,
) -> ApiResult<Json<SectionUpdateResponse>> {
    let session_id = session.or_body(req.session_id);
    update_section(&state, session_id, "schedule", |content| {
        if let Some(schedule_events) = req.schedule_events {
            content.sections.schedule_events = schedule_events;
        }
        Ok(())
    })
    .await
}

/// PUT /api/wedding/gallery
pub async fn update_gallery(
    State(state): State<AppState>,
    session: SessionId,
    Json(req): Json<GalleryRequest>,
) -> ApiResult<Json<SectionUpdateResponse>> {
    let session_id = session.or_body(req.session_id);
    update_section(&state, session_id, "gallery", |content| {
        if let Some(gallery_photos) = req.gallery_photos {
            content.sections.gallery_photos = gallery_photos;
        }
        Ok(())
    })
    .await
}

/// PUT /api/wedding/theme
pub async fn update_theme(
    State(state): State<AppState>,
    session: SessionId,
    Json(req): Json<ThemeRequest>,
) -> ApiResult<Json<SectionUpdateResponse>> {
    let session_id = session.or_body(req.session_id);
    update_section(&state, session_id, "theme", |content| {
        if let Some(theme) = req.theme {
            content.theme = theme.parse::<Theme>()?;
        }
        Ok(())
    })
    .await
}

async fn update_section<F>(
    state: &AppState,
    session_id: Option<String>,
    section: &str,
    apply: F,
) -> ApiResult<Json<SectionUpdateResponse>>
where
    F: FnOnce(&mut WeddingContent) -> ApiResult<()>,
{
    let user = session_user(&state.pool, session_id.as_deref()).await?;
    let mut wedding = owned_wedding(&state.pool, &user).await?;

    apply(&mut wedding.content)?;
    wedding.touch();

    WeddingRepository::new(state.pool.clone())
        .update(&wedding)
        .await?;

    log::info!("Updated {} section of wedding {}", section, wedding.id);

    Ok(Json(SectionUpdateResponse {
        success: true,
        wedding_data: wedding,
    }))
}
