use crate::{SESSION_HEADER, SessionId};

use axum::{body::Body, extract::FromRequestParts, http::Request};

async fn extract(request: Request<Body>) -> SessionId {
    let (mut parts, _body) = request.into_parts();
    SessionId::from_request_parts(&mut parts, &()).await.unwrap()
}

#[tokio::test]
async fn test_extractor_reads_query_parameter() {
    let request = Request::builder()
        .uri("/api/wedding?session_id=abc-123")
        .body(Body::empty())
        .unwrap();

    let session = extract(request).await;

    assert_eq!(session, SessionId(Some("abc-123".to_string())));
}

#[tokio::test]
async fn test_extractor_falls_back_to_header() {
    let request = Request::builder()
        .uri("/api/profile")
        .header(SESSION_HEADER, "from-header")
        .body(Body::empty())
        .unwrap();

    let session = extract(request).await;

    assert_eq!(session.0.as_deref(), Some("from-header"));
}

#[tokio::test]
async fn test_query_parameter_wins_over_header() {
    let request = Request::builder()
        .uri("/api/profile?session_id=from-query")
        .header(SESSION_HEADER, "from-header")
        .body(Body::empty())
        .unwrap();

    let session = extract(request).await;

    assert_eq!(session.0.as_deref(), Some("from-query"));
}

#[tokio::test]
async fn test_blank_values_count_as_missing() {
    let request = Request::builder()
        .uri("/api/profile?session_id=")
        .header(SESSION_HEADER, "   ")
        .body(Body::empty())
        .unwrap();

    let session = extract(request).await;

    assert_eq!(session, SessionId(None));
}

#[tokio::test]
async fn test_extractor_without_session_is_not_rejected() {
    let request = Request::builder()
        .uri("/api/profile")
        .body(Body::empty())
        .unwrap();

    let session = extract(request).await;

    assert!(session.0.is_none());
}

#[test]
fn test_body_session_takes_precedence() {
    let session = SessionId(Some("from-query".to_string()));

    assert_eq!(
        session.or_body(Some("from-body".to_string())).as_deref(),
        Some("from-body")
    );
}

#[test]
fn test_blank_body_session_falls_back_to_request() {
    let session = SessionId(Some("from-query".to_string()));

    assert_eq!(
        session.or_body(Some(String::new())).as_deref(),
        Some("from-query")
    );
}
