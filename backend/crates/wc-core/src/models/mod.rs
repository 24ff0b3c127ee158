pub mod attendance;
pub mod contribution;
pub mod faq;
pub mod guestbook_message;
pub mod honeymoon_fund;
pub mod party_member;
pub mod payment_method;
pub mod payment_status;
pub mod registry_item;
pub mod rsvp_response;
pub mod schedule_event;
pub mod session;
pub mod story_milestone;
pub mod theme;
pub mod user;
pub mod wedding;
pub mod wedding_content;
pub mod wedding_sections;
