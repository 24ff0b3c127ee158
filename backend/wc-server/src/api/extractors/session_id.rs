//! Session identity for endpoints that take it outside the JSON body

use crate::ApiError;

use std::future::Future;

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

pub const SESSION_HEADER: &str = "X-Session-Id";

/// Session ID from the `session_id` query parameter, else the
/// `X-Session-Id` header. Absent is not an error here; handlers decide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionId(pub Option<String>);

#[derive(Debug, Deserialize)]
struct SessionQuery {
    session_id: Option<String>,
}

impl SessionId {
    /// A session ID sent in the request body takes precedence
    pub fn or_body(self, body_session_id: Option<String>) -> Option<String> {
        non_blank(body_session_id).or(self.0)
    }
}

impl<S> FromRequestParts<S> for SessionId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let from_query = Query::<SessionQuery>::try_from_uri(&parts.uri)
                .ok()
                .and_then(|Query(q)| non_blank(q.session_id));

            if from_query.is_some() {
                return Ok(SessionId(from_query));
            }

            let from_header = parts
                .headers
                .get(SESSION_HEADER)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string);

            Ok(SessionId(non_blank(from_header)))
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
