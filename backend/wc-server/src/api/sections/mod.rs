pub mod faq_request;
pub mod gallery_request;
pub mod party_request;
pub mod schedule_request;
pub mod section_update_response;
pub mod sections;
pub mod story_request;
pub mod theme_request;
