use crate::{CliClientResult, ClientError};

use std::time::Duration;

use reqwest::{Client as ReqwestClient, Method};
use serde::Serialize;
use serde_json::Value;

/// Header carrying the session for endpoints that do not take a JSON body
pub const SESSION_HEADER: &str = "X-Session-Id";

/// HTTP client for the wc-server REST API
pub struct Client {
    pub base_url: String,
    pub session_id: Option<String>,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8000")
    /// * `session_id` - Session from the last login, sent as `X-Session-Id`
    /// * `timeout` - Whole-request timeout; expiry counts as unreachable
    pub fn new(
        base_url: &str,
        session_id: Option<&str>,
        timeout: Duration,
    ) -> CliClientResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            session_id: session_id.map(String::from),
            client,
        })
    }

    /// Build a request with the session header when logged in
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method, &url);

        if let Some(ref session_id) = self.session_id {
            req = req.header(SESSION_HEADER, session_id);
        }

        req
    }

    #[track_caller]
    fn require_session(&self) -> CliClientResult<&str> {
        self.session_id
            .as_deref()
            .ok_or_else(ClientError::not_logged_in)
    }

    /// Execute request and turn error bodies into [`ClientError::Api`]
    async fn execute(&self, req: reqwest::RequestBuilder) -> CliClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if status.is_success() {
            if bytes.is_empty() {
                return Ok(Value::Null);
            }
            return Ok(serde_json::from_slice(&bytes)?);
        }

        let body: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        let error = body.get("error");
        let code = error
            .and_then(|e| e.get("code"))
            .and_then(|v| v.as_str())
            .unwrap_or("HTTP_ERROR")
            .to_string();
        let message = error
            .and_then(|e| e.get("message"))
            .and_then(|v| v.as_str())
            .map(String::from)
            .unwrap_or_else(|| status.to_string());

        Err(ClientError::api_error(status.as_u16(), code, message))
    }

    // =========================================================================
    // Accounts
    // =========================================================================

    pub async fn register(&self, username: &str, password: &str) -> CliClientResult<Value> {
        self.send_credentials("/api/auth/register", username, password)
            .await
    }

    pub async fn login(&self, username: &str, password: &str) -> CliClientResult<Value> {
        self.send_credentials("/api/auth/login", username, password)
            .await
    }

    async fn send_credentials(
        &self,
        path: &str,
        username: &str,
        password: &str,
    ) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct CredentialsRequest<'a> {
            username: &'a str,
            password: &'a str,
        }

        let body = CredentialsRequest { username, password };
        let req = self.request(Method::POST, path).json(&body);
        self.execute(req).await
    }

    /// End the current session on the server
    pub async fn logout(&self) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct LogoutRequest<'a> {
            session_id: &'a str,
        }

        let session_id = self.require_session()?;
        let req = self
            .request(Method::POST, "/api/auth/logout")
            .json(&LogoutRequest { session_id });
        self.execute(req).await
    }

    pub async fn profile(&self) -> CliClientResult<Value> {
        self.require_session()?;
        let req = self.request(Method::GET, "/api/profile");
        self.execute(req).await
    }

    // =========================================================================
    // Wedding pages
    // =========================================================================

    /// The logged-in user's wedding
    pub async fn get_wedding(&self) -> CliClientResult<Value> {
        self.require_session()?;
        let req = self.request(Method::GET, "/api/wedding");
        self.execute(req).await
    }

    /// Public page by wedding ID or shareable ID
    pub async fn get_public_wedding(&self, id: &str) -> CliClientResult<Value> {
        let req = self.request(Method::GET, &format!("/api/wedding/public/{}", id));
        self.execute(req).await
    }

    pub async fn update_theme(&self, theme: &str) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct ThemeRequest<'a> {
            session_id: &'a str,
            theme: &'a str,
        }

        let session_id = self.require_session()?;
        let req = self
            .request(Method::PUT, "/api/wedding/theme")
            .json(&ThemeRequest { session_id, theme });
        self.execute(req).await
    }

    /// Fetch raw bytes from an absolute URL, such as a rendered QR image
    pub async fn download(&self, url: &str) -> CliClientResult<Vec<u8>> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(ClientError::api_error(
                status.as_u16(),
                "DOWNLOAD_FAILED".to_string(),
                format!("GET {} returned {}", url, status),
            ));
        }

        Ok(response.bytes().await?.to_vec())
    }

    // =========================================================================
    // RSVP
    // =========================================================================

    #[allow(clippy::too_many_arguments)]
    pub async fn submit_rsvp(
        &self,
        wedding_id: &str,
        guest_name: &str,
        guest_email: &str,
        guest_phone: Option<&str>,
        attendance: &str,
        guest_count: u32,
        dietary_restrictions: Option<&str>,
        special_message: Option<&str>,
    ) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct CreateRsvpRequest<'a> {
            wedding_id: &'a str,
            guest_name: &'a str,
            guest_email: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            guest_phone: Option<&'a str>,
            attendance: &'a str,
            guest_count: u32,
            #[serde(skip_serializing_if = "Option::is_none")]
            dietary_restrictions: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            special_message: Option<&'a str>,
        }

        let body = CreateRsvpRequest {
            wedding_id,
            guest_name,
            guest_email,
            guest_phone,
            attendance,
            guest_count,
            dietary_restrictions,
            special_message,
        };

        let req = self.request(Method::POST, "/api/rsvp").json(&body);
        self.execute(req).await
    }

    pub async fn list_rsvps(&self, wedding_id: &str) -> CliClientResult<Value> {
        let req = self.request(Method::GET, &format!("/api/rsvp/{}", wedding_id));
        self.execute(req).await
    }

    // =========================================================================
    // Guestbook
    // =========================================================================

    /// Sign a guestbook. Private messages go to the couple only and need a session.
    pub async fn sign_guestbook(
        &self,
        wedding_id: &str,
        name: &str,
        relationship: Option<&str>,
        message: &str,
        private: bool,
    ) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct CreateMessageRequest<'a> {
            wedding_id: &'a str,
            name: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            relationship: Option<&'a str>,
            message: &'a str,
            is_public: bool,
            #[serde(skip_serializing_if = "Option::is_none")]
            session_id: Option<&'a str>,
        }

        let (path, session_id) = if private {
            ("/api/guestbook/private", Some(self.require_session()?))
        } else {
            ("/api/guestbook", None)
        };

        let body = CreateMessageRequest {
            wedding_id,
            name,
            relationship,
            message,
            is_public: !private,
            session_id,
        };

        let req = self.request(Method::POST, path).json(&body);
        self.execute(req).await
    }

    pub async fn list_guestbook(&self, wedding_id: &str) -> CliClientResult<Value> {
        let req = self.request(Method::GET, &format!("/api/guestbook/{}", wedding_id));
        self.execute(req).await
    }

    // =========================================================================
    // Honeymoon fund
    // =========================================================================

    /// Self-report a completed UPI transfer
    #[allow(clippy::too_many_arguments)]
    pub async fn create_upi_contribution(
        &self,
        wedding_id: &str,
        contributor_name: &str,
        contributor_email: Option<&str>,
        contributor_phone: Option<&str>,
        amount: f64,
        currency: Option<&str>,
        message: Option<&str>,
        upi_reference: &str,
    ) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct ContributionRequest<'a> {
            wedding_id: &'a str,
            contributor_name: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            contributor_email: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            contributor_phone: Option<&'a str>,
            amount: f64,
            #[serde(skip_serializing_if = "Option::is_none")]
            currency: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            message: Option<&'a str>,
            upi_reference: &'a str,
        }

        let body = ContributionRequest {
            wedding_id,
            contributor_name,
            contributor_email,
            contributor_phone,
            amount,
            currency,
            message,
            upi_reference,
        };

        let req = self
            .request(Method::POST, "/api/payment/upi-contribution")
            .json(&body);
        self.execute(req).await
    }

    pub async fn contribution_total(&self, wedding_id: &str) -> CliClientResult<Value> {
        let req = self.request(Method::GET, &format!("/api/payment/total/{}", wedding_id));
        self.execute(req).await
    }
}
