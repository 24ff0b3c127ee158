use crate::{
    HoneymoonFund, SHAREABLE_ID_LENGTH, Theme, Wedding, WeddingContent, generate_shareable_id,
    showcase_content, starter_content,
};

use googletest::prelude::*;
use serde_json::json;
use uuid::Uuid;

#[test]
fn given_new_wedding_when_created_then_has_short_hex_share_id() {
    // Given
    let user_id = Uuid::new_v4();

    // When
    let wedding = Wedding::new(user_id, starter_content());

    // Then
    assert_that!(wedding.user_id, eq(user_id));
    assert_that!(wedding.shareable_id.len(), eq(SHAREABLE_ID_LENGTH));
    assert!(wedding.shareable_id.chars().all(|c| c.is_ascii_hexdigit()));
    assert_that!(wedding.created_at, eq(wedding.updated_at));
}

#[test]
fn given_two_generated_share_ids_then_they_differ() {
    assert_ne!(generate_shareable_id(), generate_shareable_id());
}

#[test]
fn given_existing_wedding_when_content_replaced_then_identity_kept() {
    // Given
    let mut wedding = Wedding::new(Uuid::new_v4(), starter_content());
    let id = wedding.id;
    let shareable_id = wedding.shareable_id.clone();
    let created_at = wedding.created_at;

    // When
    let mut content = WeddingContent {
        couple_name_1: "Priya".to_string(),
        couple_name_2: "Arjun".to_string(),
        ..WeddingContent::default()
    };
    content.theme = Theme::Boho;
    wedding.replace_content(content);

    // Then
    assert_that!(wedding.id, eq(id));
    assert_that!(wedding.shareable_id, eq(&shareable_id));
    assert_that!(wedding.created_at, eq(created_at));
    assert_that!(wedding.content.couple_name_1.as_str(), eq("Priya"));
    assert_that!(wedding.content.theme, eq(Theme::Boho));
}

#[test]
fn given_editor_payload_when_deserialized_then_unknown_item_fields_survive() {
    // Given
    let payload = json!({
        "couple_name_1": "Priya",
        "couple_name_2": "Arjun",
        "theme": "modern",
        "faqs": [{"question": "Dress code?", "answer": "Festive", "id": 7}],
        "registry_items": [{"name": "Toaster", "price": 49.5}],
        "honeymoon_fund": {"upi_id": "priya@upi"}
    });

    // When
    let content: WeddingContent = serde_json::from_value(payload).unwrap();

    // Then
    assert_that!(content.theme, eq(Theme::Modern));
    assert_that!(content.sections.faqs[0].extra["id"], eq(&json!(7)));
    assert_that!(content.sections.registry_items[0].extra["price"], eq(&json!(49.5)));
    assert_that!(content.honeymoon_fund.upi_id.as_str(), eq("priya@upi"));
    assert_that!(
        content.honeymoon_fund.destination,
        eq(&HoneymoonFund::default().destination)
    );

    let round_trip = serde_json::to_value(&content).unwrap();
    assert_that!(round_trip["faqs"][0]["id"], eq(&json!(7)));
}

#[test]
fn given_wedding_when_serialized_then_content_is_flattened() {
    let wedding = Wedding::new(Uuid::new_v4(), starter_content());

    let value = serde_json::to_value(&wedding).unwrap();

    assert_that!(value["couple_name_1"], eq(&json!("Sarah")));
    assert_that!(value["theme"], eq(&json!("classic")));
    assert!(value["story_timeline"].is_array());
    assert!(value.get("content").is_none());
}

#[test]
fn given_showcase_content_then_gallery_is_categorized() {
    let content = showcase_content();

    assert!(content.sections.gallery_photos.is_object());
    assert_that!(content.sections.faqs.len(), eq(4));
}

#[test]
fn given_default_honeymoon_fund_then_upi_not_offered() {
    let mut fund = HoneymoonFund::default();
    assert_that!(fund.accepts_upi(), eq(false));

    fund.upi_id = "couple@okaxis".to_string();
    assert_that!(fund.accepts_upi(), eq(true));

    fund.is_active = false;
    assert_that!(fund.accepts_upi(), eq(false));
}
