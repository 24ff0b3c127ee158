pub mod connection;
pub mod error;
pub mod repositories;

mod row;

pub use connection::database::{connect, run_migrations};
pub use error::{DbError, Result};
pub use repositories::contribution_repository::{ContributionRepository, ContributionSummary};
pub use repositories::guestbook_repository::GuestbookRepository;
pub use repositories::rsvp_repository::RsvpRepository;
pub use repositories::session_repository::SessionRepository;
pub use repositories::user_repository::UserRepository;
pub use repositories::wedding_repository::WeddingRepository;

use sqlx::migrate::Migrator;

/// Embedded schema migrations
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");
