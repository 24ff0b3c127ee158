pub mod contribution_repository;
pub mod guestbook_repository;
pub mod rsvp_repository;
pub mod session_repository;
pub mod user_repository;
pub mod wedding_repository;
