pub mod content;
pub mod error;
pub mod models;
pub mod payment;
pub mod qr;
pub mod validation;

#[cfg(test)]
mod tests;

pub use content::showcase_wedding::{SHOWCASE_WEDDING_ID, showcase_content};
pub use content::starter_wedding::starter_content;
pub use error::{CoreError, Result};
pub use models::attendance::Attendance;
pub use models::contribution::{Contribution, DEFAULT_CURRENCY};
pub use models::faq::Faq;
pub use models::guestbook_message::{
    GuestbookMessage, PUBLIC_GUESTBOOK_ID, normalize_target, resolve_visibility,
};
pub use models::honeymoon_fund::HoneymoonFund;
pub use models::party_member::PartyMember;
pub use models::payment_method::PaymentMethod;
pub use models::payment_status::PaymentStatus;
pub use models::registry_item::RegistryItem;
pub use models::rsvp_response::RsvpResponse;
pub use models::schedule_event::ScheduleEvent;
pub use models::session::Session;
pub use models::story_milestone::StoryMilestone;
pub use models::theme::Theme;
pub use models::user::User;
pub use models::wedding::{SHAREABLE_ID_LENGTH, Wedding, generate_shareable_id};
pub use models::wedding_content::WeddingContent;
pub use models::wedding_sections::WeddingSections;
pub use payment::amount::{
    MAX_AMOUNT, from_minor_units, to_minor_units, validate_amount, validate_currency,
};
pub use payment::upi_reference::{
    generate_upi_reference, is_valid_upi_reference, upi_reference_at,
};
pub use qr::hex_color::HexColor;
pub use qr::qr_request::QrRequest;
pub use qr::qr_style::QrStyle;
pub use qr::share_link::{download_dimensions, download_filename, share_url};
pub use validation::content_validator::ContentValidator;
