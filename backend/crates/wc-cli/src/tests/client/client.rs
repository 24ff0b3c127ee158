use crate::Client;

use std::time::Duration;

fn client(base_url: &str, session_id: Option<&str>) -> Client {
    Client::new(base_url, session_id, Duration::from_secs(5)).unwrap()
}

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = client("http://localhost:8000/", None);
    assert_eq!(client.base_url, "http://localhost:8000");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = client("http://localhost:8000", None);
    assert_eq!(client.base_url, "http://localhost:8000");
}

#[test]
fn test_session_id_stored() {
    let client = client("http://localhost:8000", Some("abc-123"));
    assert_eq!(client.session_id, Some("abc-123".to_string()));
}

#[test]
fn test_session_id_none() {
    let client = client("http://localhost:8000", None);
    assert!(client.session_id.is_none());
}

#[tokio::test]
async fn test_session_required_before_any_request() {
    let client = client("http://127.0.0.1:9", None);

    let err = client.get_wedding().await.unwrap_err();

    assert!(err.to_string().contains("Not logged in"));
    assert!(!err.is_unreachable());
}
