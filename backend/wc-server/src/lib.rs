pub mod api;
pub mod app_state;
pub mod demo_accounts;
pub mod error;
pub mod health;
pub mod logger;
pub mod payment;
pub mod routes;
pub mod shutdown_coordinator;
pub mod shutdown_guard;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::{login, logout, profile, register},
        auth_response::AuthResponse,
        credentials_request::CredentialsRequest,
        logout_request::LogoutRequest,
        profile_response::ProfileResponse,
    },
    connectivity::connectivity_check,
    error::ApiError,
    error::Result as ApiResult,
    extractors::session_id::{SESSION_HEADER, SessionId},
    guestbook::{
        create_message_request::CreateMessageRequest,
        create_message_response::CreateMessageResponse,
        guestbook::{
            create_message, create_private_message, list_messages, list_messages_by_shareable_id,
            list_private_messages, list_public_messages,
        },
        message_list_response::MessageListResponse,
    },
    payments::{
        confirm_payment_request::ConfirmPaymentRequest,
        confirm_payment_response::ConfirmPaymentResponse,
        contribution_list_response::ContributionListResponse,
        contribution_request::ContributionRequest,
        contribution_total_response::ContributionTotalResponse,
        create_intent_response::CreateIntentResponse,
        payments::{
            confirm_payment, create_payment_intent, create_upi_contribution,
            get_contribution_total, list_contributions,
        },
        upi_contribution_response::UpiContributionResponse,
    },
    qr::{qr::get_share_qr, qr_query::QrQuery, qr_response::QrResponse},
    registry::{
        honeymoon_fund_response::HoneymoonFundResponse,
        registry::{get_honeymoon_fund, get_shared_honeymoon_fund, update_honeymoon_fund},
    },
    resolve::{owned_wedding, resolve_wedding, session_user},
    rsvps::{
        create_rsvp_request::CreateRsvpRequest,
        create_rsvp_response::CreateRsvpResponse,
        rsvp_list_response::RsvpListResponse,
        rsvps::{list_rsvps, list_rsvps_by_shareable_id, submit_rsvp},
    },
    sections::{
        faq_request::FaqRequest,
        gallery_request::GalleryRequest,
        party_request::PartyRequest,
        schedule_request::ScheduleRequest,
        section_update_response::SectionUpdateResponse,
        sections::{
            update_faq, update_gallery, update_party, update_schedule, update_story, update_theme,
        },
        story_request::StoryRequest,
        theme_request::ThemeRequest,
    },
    success_response::SuccessResponse,
    weddings::{
        public_wedding_dto::PublicWeddingDto,
        wedding_request::WeddingRequest,
        wedding_section_response::WeddingSectionResponse,
        weddings::{
            create_wedding, get_public_wedding, get_shared_wedding, get_wedding,
            get_wedding_by_username, get_wedding_section_by_username, update_wedding,
        },
    },
};

pub use crate::app_state::{ApiSettings, AppState};
pub use crate::demo_accounts::ensure_demo_accounts;
pub use crate::error::{Result as ServerResult, ServerError};
pub use crate::routes::build_router;
pub use crate::shutdown_coordinator::ShutdownCoordinator;
pub use crate::shutdown_guard::ShutdownGuard;
