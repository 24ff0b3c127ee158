//! Account REST API handlers

use crate::{
    ApiError, ApiResult, AppState, AuthResponse, CredentialsRequest, LogoutRequest,
    ProfileResponse, SessionId, SuccessResponse, session_user,
};

use wc_auth::{hash_password, verify_password};
use wc_core::{ContentValidator, Session, User, Wedding, starter_content};
use wc_db::{SessionRepository, UserRepository, WeddingRepository};

use axum::{Json, body::Bytes, extract::State};

const DUPLICATE_USERNAME: &str = "Username already registered";

/// POST /api/auth/register
///
/// Creates the account, a starter wedding page and a session.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> ApiResult<Json<AuthResponse>> {
    ContentValidator::validate_username(&req.username)?;
    if req.password.is_empty() {
        return Err(ApiError::validation("password cannot be empty", "password"));
    }

    let users = UserRepository::new(state.pool.clone());
    if users.find_by_username(&req.username).await?.is_some() {
        return Err(ApiError::bad_request(DUPLICATE_USERNAME));
    }

    let password_hash = spawn_hash(req.password).await?;
    let user = User::new(req.username, password_hash);
    let wedding = Wedding::new(user.id, starter_content());
    let session = Session::new(user.id);

    // Account, starter wedding and session land together or not at all
    let mut tx = state.pool.begin().await?;
    if let Err(e) = UserRepository::insert(&mut *tx, &user).await {
        // Lost a race with a concurrent registration
        if e.is_unique_violation() {
            return Err(ApiError::bad_request(DUPLICATE_USERNAME));
        }
        return Err(e.into());
    }
    WeddingRepository::insert(&mut *tx, &wedding).await?;
    SessionRepository::insert(&mut *tx, &session).await?;
    tx.commit().await?;

    log::info!(
        "Registered user '{}' with starter wedding {} ({})",
        user.username,
        wedding.id,
        wedding.shareable_id
    );

    Ok(Json(AuthResponse {
        session_id: session.session_id,
        user_id: user.id.to_string(),
        username: user.username,
        success: true,
    }))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> ApiResult<Json<AuthResponse>> {
    state.login_limiter.check(&req.username)?;

    let user = UserRepository::new(state.pool.clone())
        .find_by_username(&req.username)
        .await?;

    let verified = match &user {
        Some(user) => spawn_verify(req.password, user.password_hash.clone()).await?,
        None => false,
    };

    let user = match user {
        Some(user) if verified => user,
        _ => {
            log::debug!("Login rejected for '{}'", req.username);
            return Err(ApiError::unauthorized("Incorrect username or password"));
        }
    };

    let session = Session::new(user.id);
    SessionRepository::new(state.pool.clone())
        .create(&session)
        .await?;

    log::info!("User '{}' logged in", user.username);

    Ok(Json(AuthResponse {
        session_id: session.session_id,
        user_id: user.id.to_string(),
        username: user.username,
        success: true,
    }))
}

/// Argon2 is CPU-bound; keep it off the async workers
async fn spawn_hash(password: String) -> ApiResult<String> {
    Ok(tokio::task::spawn_blocking(move || hash_password(&password)).await??)
}

async fn spawn_verify(password: String, password_hash: String) -> ApiResult<bool> {
    Ok(tokio::task::spawn_blocking(move || verify_password(&password, &password_hash)).await??)
}

/// POST /api/auth/logout
///
/// Idempotent; the body is optional.
pub async fn logout(
    State(state): State<AppState>,
    session: SessionId,
    body: Bytes,
) -> ApiResult<Json<SuccessResponse>> {
    let req: LogoutRequest = serde_json::from_slice(&body).unwrap_or_default();

    if let Some(session_id) = session.or_body(req.session_id) {
        let deleted = SessionRepository::new(state.pool.clone())
            .delete(&session_id)
            .await?;
        if deleted {
            log::info!("Session ended");
        }
    }

    Ok(Json(SuccessResponse::new("Logged out")))
}

/// GET /api/profile
pub async fn profile(
    State(state): State<AppState>,
    SessionId(session_id): SessionId,
) -> ApiResult<Json<ProfileResponse>> {
    let user = session_user(&state.pool, session_id.as_deref()).await?;
    Ok(Json(user.into()))
}
