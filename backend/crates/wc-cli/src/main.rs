//! wedding - Wedding card CLI
//!
//! Talks to the wc-server REST API and keeps the login session in a local
//! storage file. Account commands can also run against a local demo store.
//!
//! # Examples
//!
//! ```bash
//! # Log in and look at your page
//! wedding auth login prasanna password123
//! wedding wedding get --pretty
//!
//! # Download a rounded QR code for the share link
//! wedding wedding qr --style rounded --out ./qr/
//!
//! # Try the demo accounts without a server
//! wedding auth login testuser password123 --offline
//! ```

use wc_cli::{Client, ConnectionMode, LocalSession, Runner, cli::Cli};

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use wc_auth::{CredentialStore, FileStorage};
use wc_config::Config;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load().and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let storage_path = match config.storage_path() {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let session = LocalSession::with_store(CredentialStore::with_scheme(
        FileStorage::new(storage_path),
        config.client.password_scheme,
    ));
    let session_id = match session.session_id() {
        Ok(id) => id,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Explicit flag > WC_SERVER_URL / config.toml > default
    let server_url = cli.server.unwrap_or(config.client.server_url);
    let timeout = Duration::from_secs(config.client.timeout_secs);

    let client = match Client::new(&server_url, session_id.as_deref(), timeout) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mode = ConnectionMode::from_flags(cli.offline, cli.allow_offline_fallback);
    let runner = Runner::new(client, session, mode, config.public.trimmed_origin());

    match runner.run(cli.command).await {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };
            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
