//! Dispatches parsed commands to the server or to the local store.
//!
//! Only account commands can run against the local store. Everything else
//! needs the server, and an unreachable server is reported as an error.

use crate::{
    CliClientResult, Client, ClientError, auth_commands::AuthCommands, commands::Commands,
    contribute_commands::ContributeCommands, guestbook_commands::GuestbookCommands,
    local_session::LocalSession, rsvp_commands::RsvpCommands, wedding_commands::WeddingCommands,
};

use std::path::{Path, PathBuf};

use chrono::Utc;
use serde_json::{Value, json};
use wc_auth::KeyValueStorage;
use wc_core::{
    HexColor, QrRequest, QrStyle, Wedding, download_filename, generate_upi_reference, share_url,
};

/// Where account commands are served from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionMode {
    /// Server only; failures are reported as-is
    Online,
    /// Local demo store only
    Offline,
    /// Server, then the local store if the server cannot be reached
    Fallback,
}

impl ConnectionMode {
    pub fn from_flags(offline: bool, allow_offline_fallback: bool) -> Self {
        if offline {
            Self::Offline
        } else if allow_offline_fallback {
            Self::Fallback
        } else {
            Self::Online
        }
    }
}

pub struct Runner<S: KeyValueStorage> {
    client: Client,
    session: LocalSession<S>,
    mode: ConnectionMode,
    public_origin: String,
}

impl<S: KeyValueStorage> Runner<S> {
    pub fn new(
        client: Client,
        session: LocalSession<S>,
        mode: ConnectionMode,
        public_origin: impl Into<String>,
    ) -> Self {
        Self {
            client,
            session,
            mode,
            public_origin: public_origin.into(),
        }
    }

    pub async fn run(&self, command: Commands) -> CliClientResult<Value> {
        match command {
            Commands::Auth { action } => self.auth(action).await,
            Commands::Wedding { action } => {
                self.require_server("wedding")?;
                self.wedding(action).await
            }
            Commands::Rsvp { action } => {
                self.require_server("rsvp")?;
                self.rsvp(action).await
            }
            Commands::Guestbook { action } => {
                self.require_server("guestbook")?;
                self.guestbook(action).await
            }
            Commands::Contribute { action } => {
                self.require_server("contribute")?;
                self.contribute(action).await
            }
        }
    }

    #[track_caller]
    fn require_server(&self, command: &str) -> CliClientResult<()> {
        if self.mode == ConnectionMode::Offline {
            return Err(ClientError::offline_unsupported(command));
        }
        Ok(())
    }

    // =========================================================================
    // Accounts
    // =========================================================================

    async fn auth(&self, action: AuthCommands) -> CliClientResult<Value> {
        match action {
            AuthCommands::Register { username, password } => {
                self.with_fallback(self.online_login(true, &username, &password), || {
                    self.session.register(&username, &password)
                })
                .await
            }
            AuthCommands::Login { username, password } => {
                self.with_fallback(self.online_login(false, &username, &password), || {
                    self.session.login(&username, &password)
                })
                .await
            }
            AuthCommands::Logout => {
                self.with_fallback(self.online_logout(), || self.session.logout())
                    .await
            }
            AuthCommands::Whoami => {
                self.with_fallback(self.client.profile(), || self.session.whoami())
                    .await
            }
            AuthCommands::Users => {
                eprintln!("Warning: printing unredacted local credentials (debug only)");
                self.session.users()
            }
        }
    }

    async fn online_login(
        &self,
        register: bool,
        username: &str,
        password: &str,
    ) -> CliClientResult<Value> {
        let response = if register {
            self.client.register(username, password).await?
        } else {
            self.client.login(username, password).await?
        };

        if let Some(session_id) = response.get("session_id").and_then(|v| v.as_str()) {
            let username = response
                .get("username")
                .and_then(|v| v.as_str())
                .unwrap_or(username);
            self.session.remember(username, session_id)?;
        }

        Ok(response)
    }

    async fn online_logout(&self) -> CliClientResult<Value> {
        let response = match self.client.session_id {
            Some(_) => self.client.logout().await?,
            None => json!({ "success": true }),
        };

        self.session.forget()?;
        Ok(response)
    }

    /// Run `online` or `offline` per the connection mode. A server that
    /// answered with an error never triggers the fallback.
    async fn with_fallback<F>(
        &self,
        online: F,
        offline: impl FnOnce() -> CliClientResult<Value>,
    ) -> CliClientResult<Value>
    where
        F: Future<Output = CliClientResult<Value>>,
    {
        match self.mode {
            ConnectionMode::Online => online.await,
            ConnectionMode::Offline => {
                eprintln!("Warning: offline mode, using the local demo credential store");
                offline()
            }
            ConnectionMode::Fallback => match online.await {
                Err(e) if e.is_unreachable() => {
                    eprintln!(
                        "Warning: server unreachable, falling back to the local demo credential store ({})",
                        e
                    );
                    offline()
                }
                result => result,
            },
        }
    }

    // =========================================================================
    // Wedding pages
    // =========================================================================

    async fn wedding(&self, action: WeddingCommands) -> CliClientResult<Value> {
        match action {
            WeddingCommands::Get => self.client.get_wedding().await,
            WeddingCommands::Public { id } => self.client.get_public_wedding(&id).await,
            WeddingCommands::Theme { name } => self.client.update_theme(&name).await,
            WeddingCommands::Qr {
                style,
                color,
                background,
                origin,
                out,
            } => {
                self.share_qr(&style, &color, &background, origin.as_deref(), out.as_deref())
                    .await
            }
        }
    }

    /// Build the share link QR for the logged-in user's wedding and
    /// optionally download the image
    async fn share_qr(
        &self,
        style: &str,
        color: &str,
        background: &str,
        origin: Option<&str>,
        out: Option<&str>,
    ) -> CliClientResult<Value> {
        let style: QrStyle = style.parse()?;
        let foreground: HexColor = color.parse()?;
        let background: HexColor = background.parse()?;

        let wedding: Wedding = serde_json::from_value(self.client.get_wedding().await?)?;

        let origin = origin.unwrap_or(&self.public_origin);
        let link = share_url(origin, Some(&wedding.shareable_id), &wedding.id.to_string());
        let qr_url = QrRequest::new(link.clone())
            .with_style(style)
            .with_colors(foreground, background)
            .url();
        let filename = download_filename(
            style,
            &wedding.content.couple_name_1,
            &wedding.content.couple_name_2,
            Utc::now().timestamp_millis(),
        );

        let mut result = json!({
            "share_url": link,
            "qr_url": qr_url,
            "filename": filename,
        });

        if let Some(out) = out {
            let bytes = self.client.download(&qr_url).await?;
            let path = output_path(Path::new(out), &filename);
            tokio::fs::write(&path, &bytes)
                .await
                .map_err(|e| ClientError::io(&path, e))?;

            result["saved_to"] = json!(path.display().to_string());
            result["bytes"] = json!(bytes.len());
        }

        Ok(result)
    }

    // =========================================================================
    // Guests
    // =========================================================================

    async fn rsvp(&self, action: RsvpCommands) -> CliClientResult<Value> {
        match action {
            RsvpCommands::Submit {
                wedding_id,
                name,
                email,
                phone,
                attendance,
                guest_count,
                dietary,
                message,
            } => {
                self.client
                    .submit_rsvp(
                        &wedding_id,
                        &name,
                        &email,
                        phone.as_deref(),
                        &attendance,
                        guest_count,
                        dietary.as_deref(),
                        message.as_deref(),
                    )
                    .await
            }
            RsvpCommands::List { wedding_id } => self.client.list_rsvps(&wedding_id).await,
        }
    }

    async fn guestbook(&self, action: GuestbookCommands) -> CliClientResult<Value> {
        match action {
            GuestbookCommands::Sign {
                wedding_id,
                name,
                relationship,
                message,
                private,
            } => {
                self.client
                    .sign_guestbook(
                        &wedding_id,
                        &name,
                        relationship.as_deref(),
                        &message,
                        private,
                    )
                    .await
            }
            GuestbookCommands::List { wedding_id } => {
                self.client.list_guestbook(&wedding_id).await
            }
        }
    }

    async fn contribute(&self, action: ContributeCommands) -> CliClientResult<Value> {
        match action {
            ContributeCommands::Upi {
                wedding_id,
                name,
                amount,
                currency,
                email,
                phone,
                message,
                reference,
            } => {
                let reference = reference
                    .filter(|r| !r.trim().is_empty())
                    .unwrap_or_else(generate_upi_reference);

                self.client
                    .create_upi_contribution(
                        &wedding_id,
                        &name,
                        email.as_deref(),
                        phone.as_deref(),
                        amount,
                        currency.as_deref(),
                        message.as_deref(),
                        &reference,
                    )
                    .await
            }
            ContributeCommands::Total { wedding_id } => {
                self.client.contribution_total(&wedding_id).await
            }
        }
    }
}

/// A directory target gets the generated filename appended
fn output_path(out: &Path, filename: &str) -> PathBuf {
    if out.is_dir() {
        out.join(filename)
    } else {
        out.to_path_buf()
    }
}
