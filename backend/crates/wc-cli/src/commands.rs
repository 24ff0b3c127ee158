use crate::{
    auth_commands::AuthCommands, contribute_commands::ContributeCommands,
    guestbook_commands::GuestbookCommands, rsvp_commands::RsvpCommands,
    wedding_commands::WeddingCommands,
};

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Account and session commands
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },

    /// Wedding page commands
    Wedding {
        #[command(subcommand)]
        action: WeddingCommands,
    },

    /// Guest RSVP commands
    Rsvp {
        #[command(subcommand)]
        action: RsvpCommands,
    },

    /// Guestbook commands
    Guestbook {
        #[command(subcommand)]
        action: GuestbookCommands,
    },

    /// Honeymoon fund contributions
    Contribute {
        #[command(subcommand)]
        action: ContributeCommands,
    },
}
