mod common;

use common::{create_test_card, create_test_pool, create_test_upi, create_test_wedding};

use wc_core::{PaymentMethod, PaymentStatus};
use wc_db::ContributionRepository;

use chrono::{Duration, Utc};
use googletest::prelude::*;

#[tokio::test]
async fn given_no_contributions_when_summarized_then_zero_in_default_currency() {
    // Given
    let pool = create_test_pool().await;
    let wedding = create_test_wedding(&pool, "alice").await;
    let repo = ContributionRepository::new(pool);

    // When
    let summary = repo.summarize_completed(wedding.id).await.unwrap();

    // Then
    assert_that!(summary.total_amount, eq(0.0));
    assert_that!(summary.count, eq(0));
    assert_that!(summary.currency, eq("inr"));
}

#[tokio::test]
async fn given_pending_and_completed_when_summarized_then_only_completed_count() {
    // Given
    let pool = create_test_pool().await;
    let wedding = create_test_wedding(&pool, "alice").await;
    let repo = ContributionRepository::new(pool);

    let mut upi = create_test_upi(wedding.id, 500.0, "UPI-1-abcdefghi");
    upi.created_at -= Duration::seconds(10);
    repo.create(&upi).await.unwrap();
    repo.create(&create_test_upi(wedding.id, 250.5, "UPI-2-abcdefghi"))
        .await
        .unwrap();
    repo.create(&create_test_card(wedding.id, 1000.0, "pi_pending"))
        .await
        .unwrap();

    // When
    let summary = repo.summarize_completed(wedding.id).await.unwrap();
    let completed = repo.find_completed(wedding.id).await.unwrap();

    // Then
    assert_that!(summary.total_amount, eq(750.5));
    assert_that!(summary.count, eq(2));
    assert_that!(summary.currency, eq("inr"));
    assert_that!(completed.len(), eq(2));
    assert_that!(completed[0].provider_reference, eq("UPI-1-abcdefghi"));
    assert!(completed.iter().all(|c| c.payment_method == PaymentMethod::Upi));
}

#[tokio::test]
async fn given_pending_card_when_status_completed_then_counted() {
    // Given
    let pool = create_test_pool().await;
    let wedding = create_test_wedding(&pool, "alice").await;
    let repo = ContributionRepository::new(pool);
    let card = create_test_card(wedding.id, 40.0, "pi_123");
    repo.create(&card).await.unwrap();

    // When
    let found = repo.find_card_by_intent("pi_123").await.unwrap().unwrap();
    let updated = repo
        .update_status(found.id, PaymentStatus::Completed, Utc::now())
        .await
        .unwrap();

    // Then
    assert_that!(updated, eq(true));
    let summary = repo.summarize_completed(wedding.id).await.unwrap();
    assert_that!(summary.total_amount, eq(40.0));
    assert_that!(summary.currency, eq("usd"));
}

#[tokio::test]
async fn given_failed_card_when_summarized_then_not_counted() {
    let pool = create_test_pool().await;
    let wedding = create_test_wedding(&pool, "alice").await;
    let repo = ContributionRepository::new(pool);
    let card = create_test_card(wedding.id, 40.0, "pi_fail");
    repo.create(&card).await.unwrap();

    repo.update_status(card.id, PaymentStatus::Failed, Utc::now())
        .await
        .unwrap();

    assert_that!(repo.summarize_completed(wedding.id).await.unwrap().count, eq(0));
}

#[tokio::test]
async fn given_reused_upi_reference_when_created_then_unique_violation() {
    // Given
    let pool = create_test_pool().await;
    let wedding = create_test_wedding(&pool, "alice").await;
    let repo = ContributionRepository::new(pool);
    repo.create(&create_test_upi(wedding.id, 100.0, "UPI-1-aaaaaaaaa"))
        .await
        .unwrap();

    // When
    let result = repo
        .create(&create_test_upi(wedding.id, 100.0, "UPI-1-aaaaaaaaa"))
        .await;

    // Then
    assert!(result.unwrap_err().is_unique_violation());
    let existing = repo
        .find_by_reference(wedding.id, "UPI-1-aaaaaaaaa")
        .await
        .unwrap();
    assert_that!(existing, some(anything()));
}

#[tokio::test]
async fn given_same_upi_reference_on_different_weddings_then_both_recorded() {
    let pool = create_test_pool().await;
    let first = create_test_wedding(&pool, "alice").await;
    let second = create_test_wedding(&pool, "bob").await;
    let repo = ContributionRepository::new(pool);

    repo.create(&create_test_upi(first.id, 1.0, "UPI-9-zzzzzzzzz"))
        .await
        .unwrap();
    let result = repo
        .create(&create_test_upi(second.id, 1.0, "UPI-9-zzzzzzzzz"))
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn given_unknown_intent_when_found_then_none() {
    let pool = create_test_pool().await;
    let repo = ContributionRepository::new(pool);

    assert_that!(repo.find_card_by_intent("pi_missing").await.unwrap(), none());
}
