//! Integration tests for wedding page, section, registry and QR handlers
mod common;

use crate::common::{
    create_test_app_state, create_test_owner, create_test_session, create_test_user, send,
};

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_create_wedding_rejects_second_wedding() {
    let state = create_test_app_state().await;
    let owner = create_test_owner(&state.pool, "alice").await;

    let (status, json) = send(
        &state,
        "POST",
        "/api/wedding",
        Some(json!({"session_id": owner.session_id, "couple_name_1": "Ann"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json["error"]["message"],
        "User already has a wedding card. Use update endpoint instead."
    );
}

#[tokio::test]
async fn test_create_wedding_for_user_without_one() {
    let state = create_test_app_state().await;
    let user = create_test_user(&state.pool, "bob").await;
    let session_id = create_test_session(&state.pool, &user).await;

    let (status, json) = send(
        &state,
        "POST",
        "/api/wedding",
        Some(json!({
            "session_id": session_id,
            "couple_name_1": "Bob",
            "couple_name_2": "Alex",
            "theme": "boho"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["couple_name_1"], "Bob");
    assert_eq!(json["theme"], "boho");
    assert_eq!(json["shareable_id"].as_str().unwrap().len(), 8);
}

#[tokio::test]
async fn test_create_wedding_without_session_returns_401() {
    let state = create_test_app_state().await;

    let (status, _) = send(
        &state,
        "POST",
        "/api/wedding",
        Some(json!({"couple_name_1": "Nobody"})),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_update_wedding_keeps_identity_and_share_link() {
    let state = create_test_app_state().await;
    let owner = create_test_owner(&state.pool, "carol").await;

    let (status, json) = send(
        &state,
        "PUT",
        "/api/wedding",
        Some(json!({
            "session_id": owner.session_id,
            "couple_name_1": "Carol",
            "couple_name_2": "Dana",
            "venue_name": "Harbour Hall"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["id"], owner.wedding.id.to_string());
    assert_eq!(json["shareable_id"], owner.wedding.shareable_id);
    assert_eq!(json["venue_name"], "Harbour Hall");
}

#[tokio::test]
async fn test_update_wedding_requires_couple_name() {
    let state = create_test_app_state().await;
    let owner = create_test_owner(&state.pool, "dave").await;

    let (status, json) = send(
        &state,
        "PUT",
        "/api/wedding",
        Some(json!({"session_id": owner.session_id, "couple_name_1": "  "})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["field"], "couple_name_1");
}

#[tokio::test]
async fn test_public_and_shared_views_resolve_either_identifier() {
    let state = create_test_app_state().await;
    let owner = create_test_owner(&state.pool, "erin").await;

    for uri in [
        format!("/api/wedding/public/{}", owner.wedding.id),
        format!("/api/wedding/public/{}", owner.wedding.shareable_id),
        format!("/api/wedding/share/{}", owner.wedding.shareable_id),
    ] {
        let (status, json) = send(&state, "GET", &uri, None).await;

        assert_eq!(status, StatusCode::OK, "{}", uri);
        assert_eq!(json["id"], owner.wedding.id.to_string());
        assert!(json.get("user_id").is_none());
    }

    let (status, _) = send(&state, "GET", "/api/wedding/share/nope1234", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_wedding_by_username_falls_back_to_showcase() {
    let state = create_test_app_state().await;
    create_test_user(&state.pool, "nowedding").await;

    let (status, json) = send(&state, "GET", "/api/wedding/user/nowedding", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["id"], "default");
    assert!(json.get("shareable_id").is_none());

    let (status, json) = send(&state, "GET", "/api/wedding/user/stranger", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["message"], "User not found");
}

#[tokio::test]
async fn test_wedding_section_by_username_echoes_section() {
    let state = create_test_app_state().await;
    let owner = create_test_owner(&state.pool, "frank").await;

    let (status, json) = send(&state, "GET", "/api/wedding/user/frank/story", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["current_section"], "story");
    assert_eq!(json["username"], "frank");
    assert_eq!(json["id"], owner.wedding.id.to_string());
}

#[tokio::test]
async fn test_party_update_only_touches_named_fields() {
    let state = create_test_app_state().await;
    let owner = create_test_owner(&state.pool, "gina").await;

    let (status, json) = send(
        &state,
        "PUT",
        "/api/wedding/party",
        Some(json!({
            "session_id": owner.session_id,
            "bridal_party": [{"name": "Hana", "designation": "Maid of Honor"}]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    let wedding = &json["wedding_data"];
    assert_eq!(wedding["bridal_party"][0]["name"], "Hana");
    assert_eq!(wedding["couple_name_1"], "Sarah");
    assert_eq!(
        wedding["groom_party"].as_array().unwrap().len(),
        owner.wedding.content.sections.groom_party.len()
    );
}

#[tokio::test]
async fn test_faq_and_story_updates_persist() {
    let state = create_test_app_state().await;
    let owner = create_test_owner(&state.pool, "hugo").await;

    let (status, _) = send(
        &state,
        "PUT",
        &format!("/api/wedding/faq?session_id={}", owner.session_id),
        Some(json!({"faqs": [{"question": "Parking?", "answer": "Free on site"}]})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &state,
        "PUT",
        "/api/wedding/story",
        Some(json!({"session_id": owner.session_id, "their_story": "We met twice."})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, json) = send(
        &state,
        "GET",
        &format!("/api/wedding/share/{}", owner.wedding.shareable_id),
        None,
    )
    .await;
    assert_eq!(json["faqs"][0]["question"], "Parking?");
    assert_eq!(json["their_story"], "We met twice.");
}

#[tokio::test]
async fn test_theme_update_rejects_unknown_theme() {
    let state = create_test_app_state().await;
    let owner = create_test_owner(&state.pool, "iris").await;

    let (status, json) = send(
        &state,
        "PUT",
        "/api/wedding/theme",
        Some(json!({"session_id": owner.session_id, "theme": "gothic"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json["error"]["message"],
        "Invalid theme. Must be one of: classic, modern, boho"
    );

    let (status, json) = send(
        &state,
        "PUT",
        "/api/wedding/theme",
        Some(json!({"session_id": owner.session_id, "theme": "modern"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["wedding_data"]["theme"], "modern");
}

#[tokio::test]
async fn test_section_update_without_wedding_returns_404() {
    let state = create_test_app_state().await;
    let user = create_test_user(&state.pool, "jack").await;
    let session_id = create_test_session(&state.pool, &user).await;

    let (status, json) = send(
        &state,
        "PUT",
        "/api/wedding/gallery",
        Some(json!({"session_id": session_id, "gallery_photos": []})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["message"], "Wedding data not found");
}

#[tokio::test]
async fn test_honeymoon_fund_update_and_public_read() {
    let state = create_test_app_state().await;
    let owner = create_test_owner(&state.pool, "kate").await;

    let (status, json) = send(
        &state,
        "PUT",
        &format!("/api/wedding/registry?session_id={}", owner.session_id),
        Some(json!({"upi_id": "kate@upi", "destination": "Bali"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["message"],
        "Honeymoon fund configuration updated successfully"
    );

    let (status, json) = send(
        &state,
        "GET",
        &format!("/api/wedding/registry/share/{}", owner.wedding.shareable_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["honeymoon_fund"]["upi_id"], "kate@upi");
    assert_eq!(json["honeymoon_fund"]["destination"], "Bali");
    assert_eq!(json["honeymoon_fund"]["is_active"], true);

    let (status, _) = send(
        &state,
        "GET",
        &format!("/api/wedding/registry/{}", owner.wedding.id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_share_qr_builds_link_and_filename() {
    let state = create_test_app_state().await;
    let owner = create_test_owner(&state.pool, "liam").await;

    let (status, json) = send(
        &state,
        "GET",
        &format!(
            "/api/wedding/share/{}/qr?style=dots&color=%23AA0000",
            owner.wedding.shareable_id
        ),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["share_url"],
        format!("http://localhost:3000/share/{}", owner.wedding.shareable_id)
    );
    let qr_url = json["qr_url"].as_str().unwrap();
    assert!(qr_url.starts_with("https://qr-code-styling.com/api/create"));
    assert!(qr_url.contains("AA0000"));
    assert!(
        json["filename"]
            .as_str()
            .unwrap()
            .starts_with("wedding-qr-dots-sarah-michael-")
    );
}

#[tokio::test]
async fn test_share_qr_rejects_bad_style_and_color() {
    let state = create_test_app_state().await;
    let owner = create_test_owner(&state.pool, "mona").await;

    let (status, json) = send(
        &state,
        "GET",
        &format!("/api/wedding/share/{}/qr?style=hexagon", owner.wedding.shareable_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["field"], "style");

    let (status, _) = send(
        &state,
        "GET",
        &format!("/api/wedding/share/{}/qr?color=red", owner.wedding.shareable_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_api_route_returns_json_404() {
    let state = create_test_app_state().await;

    let (status, json) = send(&state, "GET", "/api/does-not-exist", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
}
