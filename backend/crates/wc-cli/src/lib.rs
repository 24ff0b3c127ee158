//! wc-cli library
//!
//! Exports the HTTP client, the local session store and the command runner
//! for the `wedding` binary and its tests.

pub mod auth_commands;
pub mod cli;
pub(crate) mod client;
pub mod commands;
pub mod contribute_commands;
pub mod guestbook_commands;
pub mod local_session;
pub mod rsvp_commands;
pub mod runner;
pub mod wedding_commands;

#[cfg(test)]
mod tests;

pub use client::client::SESSION_HEADER;
pub use client::{CliClientResult, Client, ClientError};
pub use local_session::{LocalSession, SESSION_KEY};
pub use runner::{ConnectionMode, Runner};
