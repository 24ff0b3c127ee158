use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "wedding")]
#[command(about = "Wedding card CLI - manage invitations, RSVPs and gifts")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server URL (default: WC_SERVER_URL or client.server_url from config.toml)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Use the local demo credential store only; never contact the server
    #[arg(long, global = true, conflicts_with = "allow_offline_fallback")]
    pub offline: bool,

    /// Fall back to the local demo credential store if the server is unreachable
    #[arg(long, global = true)]
    pub allow_offline_fallback: bool,
}
