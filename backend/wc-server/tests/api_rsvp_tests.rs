//! Integration tests for RSVP API handlers
mod common;

use crate::common::{create_test_app_state, create_test_owner, send};

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_submit_rsvp_by_shareable_id_and_list_by_either_id() {
    let state = create_test_app_state().await;
    let owner = create_test_owner(&state.pool, "alice").await;

    let (status, json) = send(
        &state,
        "POST",
        "/api/rsvp",
        Some(json!({
            "wedding_id": owner.wedding.shareable_id,
            "guest_name": "Priya",
            "attendance": "yes",
            "guest_count": 3,
            "dietary_restrictions": "vegetarian"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "RSVP submitted successfully");
    let rsvp_id = json["rsvp_id"].as_str().unwrap().to_string();

    let (status, json) = send(
        &state,
        "GET",
        &format!("/api/rsvp/{}", owner.wedding.id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total_count"], 1);
    assert_eq!(json["rsvps"][0]["id"], rsvp_id);
    assert_eq!(json["rsvps"][0]["guest_count"], 3);
    assert_eq!(json["rsvps"][0]["wedding_id"], owner.wedding.id.to_string());

    let (status, json) = send(
        &state,
        "GET",
        &format!("/api/rsvp/shareable/{}", owner.wedding.shareable_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total_count"], 1);
}

#[tokio::test]
async fn test_submit_rsvp_defaults_guest_count_to_one() {
    let state = create_test_app_state().await;
    let owner = create_test_owner(&state.pool, "bob").await;

    let (status, _) = send(
        &state,
        "POST",
        "/api/rsvp",
        Some(json!({
            "wedding_id": owner.wedding.id.to_string(),
            "guest_name": "Ravi",
            "attendance": "no"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, json) = send(
        &state,
        "GET",
        &format!("/api/rsvp/{}", owner.wedding.id),
        None,
    )
    .await;
    assert_eq!(json["rsvps"][0]["guest_count"], 1);
    assert_eq!(json["rsvps"][0]["attendance"], "no");
}

#[tokio::test]
async fn test_submit_rsvp_validation_errors() {
    let state = create_test_app_state().await;
    let owner = create_test_owner(&state.pool, "carol").await;

    let cases = [
        (json!({"guest_name": "", "attendance": "yes"}), "guest_name"),
        (json!({"guest_name": "Sam", "attendance": "maybe"}), "attendance"),
        (
            json!({"guest_name": "Sam", "attendance": "yes", "guest_count": 0}),
            "guest_count",
        ),
    ];

    for (mut body, field) in cases {
        body["wedding_id"] = json!(owner.wedding.shareable_id);

        let (status, json) = send(&state, "POST", "/api/rsvp", Some(body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", field);
        assert_eq!(json["error"]["field"], field);
    }
}

#[tokio::test]
async fn test_rsvp_for_unknown_wedding_returns_404() {
    let state = create_test_app_state().await;

    let (status, _) = send(
        &state,
        "POST",
        "/api/rsvp",
        Some(json!({"wedding_id": "missing1", "guest_name": "Sam", "attendance": "yes"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&state, "GET", "/api/rsvp/missing1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
