use wc_core::{Contribution, User, Wedding, starter_content};
use wc_db::{UserRepository, WeddingRepository};

use sqlx::SqlitePool;
use uuid::Uuid;

/// Inserts a user with a throwaway password hash
pub async fn create_test_user(pool: &SqlitePool, username: &str) -> User {
    let user = User::new(username.to_string(), "hash".to_string());
    UserRepository::new(pool.clone())
        .create(&user)
        .await
        .expect("Failed to create test user");
    user
}

/// Inserts a user owning a starter wedding
pub async fn create_test_wedding(pool: &SqlitePool, username: &str) -> Wedding {
    let user = create_test_user(pool, username).await;
    let wedding = Wedding::new(user.id, starter_content());
    WeddingRepository::new(pool.clone())
        .create(&wedding)
        .await
        .expect("Failed to create test wedding");
    wedding
}

pub fn create_test_upi(wedding_id: Uuid, amount: f64, reference: &str) -> Contribution {
    Contribution::reported_upi(
        wedding_id,
        "Aunt May".to_string(),
        amount,
        "inr".to_string(),
        reference.to_string(),
    )
}

pub fn create_test_card(wedding_id: Uuid, amount: f64, intent_id: &str) -> Contribution {
    Contribution::pending_card(
        wedding_id,
        "Uncle Ben".to_string(),
        amount,
        "usd".to_string(),
        intent_id.to_string(),
    )
}
