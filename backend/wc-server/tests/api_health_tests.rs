//! Integration tests for health probes and the connectivity endpoint
mod common;

use crate::common::{FakeProvider, create_test_app_state, create_test_app_state_with_provider, send};

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use wc_server::build_router;

async fn get_text(app: axum::Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();

    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_health_reports_components() {
    let state = create_test_app_state().await;

    let (status, json) = send(&state, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["components"]["database"], "operational");
    assert_eq!(json["components"]["payments"], "disabled");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_health_names_payment_provider() {
    let state = create_test_app_state_with_provider(FakeProvider::new()).await;

    let (_, json) = send(&state, "GET", "/health", None).await;

    assert_eq!(json["components"]["payments"], "fake");
}

#[tokio::test]
async fn test_liveness_and_readiness() {
    let state = create_test_app_state().await;

    let (status, body) = get_text(build_router(state.clone()), "/live").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");

    let (status, body) = get_text(build_router(state.clone()), "/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Ready");
}

#[tokio::test]
async fn test_readiness_fails_when_database_is_closed() {
    let state = create_test_app_state().await;
    state.pool.close().await;

    let (status, body) = get_text(build_router(state.clone()), "/ready").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, "Database unavailable");

    let (status, json) = send(&state, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "degraded");
}

#[tokio::test]
async fn test_connectivity_endpoint() {
    let state = create_test_app_state().await;

    let (status, json) = send(&state, "GET", "/api/test", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["message"], "Backend is working");
}

#[tokio::test]
async fn test_static_dir_serves_index_for_client_routes() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<h1>wedding</h1>").unwrap();

    let mut state = create_test_app_state().await;
    let mut settings = (*state.settings).clone();
    settings.static_dir = Some(dir.path().to_path_buf());
    state.settings = std::sync::Arc::new(settings);

    let (status, body) = get_text(build_router(state.clone()), "/share/abcd1234").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("wedding"));

    // API paths never fall through to the UI
    let (status, _) = get_text(build_router(state), "/api/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
