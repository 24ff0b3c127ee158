use crate::{ApiError, owned_wedding, resolve_wedding, session_user};

use wc_core::{Session, User, Wedding, starter_content};
use wc_db::{SessionRepository, UserRepository, WeddingRepository, run_migrations};

use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};

async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test pool");

    run_migrations(&pool).await.expect("Failed to run migrations");
    pool
}

async fn create_user(pool: &SqlitePool, username: &str) -> User {
    let user = User::new(username.to_string(), "not-a-real-hash".to_string());
    UserRepository::new(pool.clone())
        .create(&user)
        .await
        .unwrap();
    user
}

#[tokio::test]
async fn test_session_user_requires_session_id() {
    let pool = create_test_pool().await;

    let result = session_user(&pool, None).await;

    match result {
        Err(ApiError::Unauthorized { message, .. }) => assert_eq!(message, "Session ID required"),
        other => panic!("Expected Unauthorized, got {:?}", other.map(|u| u.username)),
    }
}

#[tokio::test]
async fn test_session_user_rejects_unknown_session() {
    let pool = create_test_pool().await;

    let result = session_user(&pool, Some("no-such-session")).await;

    match result {
        Err(ApiError::Unauthorized { message, .. }) => assert_eq!(message, "Invalid session"),
        other => panic!("Expected Unauthorized, got {:?}", other.map(|u| u.username)),
    }
}

#[tokio::test]
async fn test_session_user_resolves_valid_session() {
    let pool = create_test_pool().await;
    let user = create_user(&pool, "alice").await;
    let session = Session::new(user.id);
    SessionRepository::new(pool.clone())
        .create(&session)
        .await
        .unwrap();

    let resolved = session_user(&pool, Some(&session.session_id)).await.unwrap();

    assert_eq!(resolved.id, user.id);
    assert_eq!(resolved.username, "alice");
}

#[tokio::test]
async fn test_owned_wedding_missing_returns_404() {
    let pool = create_test_pool().await;
    let user = create_user(&pool, "bob").await;

    let result = owned_wedding(&pool, &user).await;

    assert!(matches!(result, Err(ApiError::NotFound { .. })));
}

#[tokio::test]
async fn test_resolve_wedding_accepts_either_identifier() {
    let pool = create_test_pool().await;
    let user = create_user(&pool, "carol").await;
    let wedding = Wedding::new(user.id, starter_content());
    WeddingRepository::new(pool.clone())
        .create(&wedding)
        .await
        .unwrap();

    let by_uuid = resolve_wedding(&pool, &wedding.id.to_string()).await.unwrap();
    let by_share = resolve_wedding(&pool, &wedding.shareable_id).await.unwrap();

    assert_eq!(by_uuid.id, wedding.id);
    assert_eq!(by_share.id, wedding.id);
}

#[tokio::test]
async fn test_resolve_wedding_unknown_returns_404() {
    let pool = create_test_pool().await;

    let result = resolve_wedding(&pool, "zzzzzzzz").await;

    assert!(matches!(result, Err(ApiError::NotFound { .. })));
}
