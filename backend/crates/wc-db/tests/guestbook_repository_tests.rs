mod common;

use common::create_test_pool;

use wc_core::GuestbookMessage;
use wc_db::GuestbookRepository;

use chrono::Duration;
use googletest::prelude::*;

fn message(wedding_id: &str, name: &str, is_public: bool, offset_secs: i64) -> GuestbookMessage {
    let mut msg = GuestbookMessage::new(
        wedding_id.to_string(),
        name.to_string(),
        format!("Congratulations from {}", name),
        is_public,
    );
    msg.created_at += Duration::seconds(offset_secs);
    msg
}

#[tokio::test]
async fn given_messages_when_listed_by_wedding_then_newest_first() {
    // Given
    let pool = create_test_pool().await;
    let repo = GuestbookRepository::new(pool);
    repo.create(&message("w1", "Old", true, 0)).await.unwrap();
    repo.create(&message("w1", "New", false, 10)).await.unwrap();
    repo.create(&message("w2", "Other", true, 5)).await.unwrap();

    // When
    let messages = repo.find_by_wedding("w1").await.unwrap();

    // Then
    let names: Vec<&str> = messages.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["New", "Old"]);
}

#[tokio::test]
async fn given_mixed_visibility_when_listing_public_then_only_public_across_weddings() {
    // Given
    let pool = create_test_pool().await;
    let repo = GuestbookRepository::new(pool);
    repo.create(&message("public", "Landing", true, 0)).await.unwrap();
    repo.create(&message("w1", "Secret", false, 1)).await.unwrap();
    repo.create(&message("w2", "Open", true, 2)).await.unwrap();

    // When
    let messages = repo.find_public().await.unwrap();

    // Then
    let names: Vec<&str> = messages.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Open", "Landing"]);
    assert!(messages.iter().all(|m| m.is_public));
}

#[tokio::test]
async fn given_mixed_visibility_when_listing_private_then_only_private_for_wedding() {
    // Given
    let pool = create_test_pool().await;
    let repo = GuestbookRepository::new(pool);
    repo.create(&message("w1", "Secret", false, 0)).await.unwrap();
    repo.create(&message("w1", "Open", true, 1)).await.unwrap();
    repo.create(&message("w2", "ElsewhereSecret", false, 2)).await.unwrap();

    // When
    let messages = repo.find_private("w1").await.unwrap();

    // Then
    assert_that!(messages.len(), eq(1));
    assert_that!(messages[0].name, eq("Secret"));
    assert_that!(messages[0].is_public, eq(false));
}
