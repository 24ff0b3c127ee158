pub mod auth;
pub mod connectivity;
pub mod error;
pub mod extractors;
pub mod guestbook;
pub mod payments;
pub mod qr;
pub mod registry;
pub mod resolve;
pub mod rsvps;
pub mod sections;
pub mod success_response;
pub mod weddings;
