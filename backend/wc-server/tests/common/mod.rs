#![allow(dead_code)]

//! Test infrastructure for wc-server API tests

use wc_core::{Session, User, Wedding, starter_content};
use wc_db::{SessionRepository, UserRepository, WeddingRepository};
use wc_server::payment::{
    NewPaymentIntent, PaymentError, PaymentIntent, PaymentProvider, PaymentResult,
};
use wc_server::{ApiSettings, AppState, build_router};

use std::collections::HashMap;
use std::panic::Location;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use error_location::ErrorLocation;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;

/// Stored for seeded users; never verified by these tests
pub const UNUSED_PASSWORD_HASH: &str = "seeded-without-hashing";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    wc_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing, card payments disabled
pub async fn create_test_app_state() -> AppState {
    AppState::new(create_test_pool().await, ApiSettings::default())
}

/// Create AppState with a fake card provider
pub async fn create_test_app_state_with_provider(provider: Arc<FakeProvider>) -> AppState {
    create_test_app_state()
        .await
        .with_payment_provider(provider)
}

pub async fn create_test_user(pool: &SqlitePool, username: &str) -> User {
    let user = User::new(username.to_string(), UNUSED_PASSWORD_HASH.to_string());
    UserRepository::new(pool.clone())
        .create(&user)
        .await
        .expect("Failed to create test user");
    user
}

pub async fn create_test_session(pool: &SqlitePool, user: &User) -> String {
    let session = Session::new(user.id);
    SessionRepository::new(pool.clone())
        .create(&session)
        .await
        .expect("Failed to create test session");
    session.session_id
}

pub async fn create_test_wedding(pool: &SqlitePool, user: &User) -> Wedding {
    let wedding = Wedding::new(user.id, starter_content());
    WeddingRepository::new(pool.clone())
        .create(&wedding)
        .await
        .expect("Failed to create test wedding");
    wedding
}

/// A user with a starter wedding and a live session
pub struct TestOwner {
    pub user: User,
    pub wedding: Wedding,
    pub session_id: String,
}

pub async fn create_test_owner(pool: &SqlitePool, username: &str) -> TestOwner {
    let user = create_test_user(pool, username).await;
    let wedding = create_test_wedding(pool, &user).await;
    let session_id = create_test_session(pool, &user).await;

    TestOwner {
        user,
        wedding,
        session_id,
    }
}

/// Send one request through a fresh router and decode the JSON reply
pub async fn send(
    state: &AppState,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let app = build_router(state.clone());

    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, json)
}

/// In-memory card provider. Intents are created `requires_payment_method`
/// and report whatever status the test settles them to.
#[derive(Default)]
pub struct FakeProvider {
    intents: Mutex<HashMap<String, PaymentIntent>>,
    reject_with: Mutex<Option<String>>,
}

impl FakeProvider {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Pretend the guest finished (or abandoned) card entry
    pub fn settle(&self, intent_id: &str, status: &str) {
        let mut intents = self.intents.lock().unwrap();
        if let Some(intent) = intents.get_mut(intent_id) {
            intent.status = status.to_string();
            if status == "succeeded" {
                intent.amount_received = intent.amount;
            }
        }
    }

    /// Fail every following create with this provider message
    pub fn reject_next(&self, message: &str) {
        *self.reject_with.lock().unwrap() = Some(message.to_string());
    }

    pub fn created(&self) -> usize {
        self.intents.lock().unwrap().len()
    }
}

#[async_trait]
impl PaymentProvider for FakeProvider {
    fn name(&self) -> &'static str {
        "fake"
    }

    async fn create_intent(&self, intent: &NewPaymentIntent) -> PaymentResult<PaymentIntent> {
        if let Some(message) = self.reject_with.lock().unwrap().clone() {
            return Err(PaymentError::Rejected {
                status: 402,
                message,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let mut intents = self.intents.lock().unwrap();
        let id = format!("pi_fake_{}", intents.len() + 1);
        let created = PaymentIntent {
            id: id.clone(),
            client_secret: Some(format!("{}_secret", id)),
            status: "requires_payment_method".to_string(),
            amount: intent.amount_minor,
            amount_received: 0,
            currency: intent.currency.clone(),
        };
        intents.insert(id, created.clone());
        Ok(created)
    }

    async fn retrieve_intent(&self, intent_id: &str) -> PaymentResult<PaymentIntent> {
        self.intents
            .lock()
            .unwrap()
            .get(intent_id)
            .cloned()
            .ok_or_else(|| PaymentError::IntentNotFound {
                intent_id: intent_id.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
