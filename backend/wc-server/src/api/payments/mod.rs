pub mod confirm_payment_request;
pub mod confirm_payment_response;
pub mod contribution_list_response;
pub mod contribution_request;
pub mod contribution_total_response;
pub mod create_intent_response;
pub mod payments;
pub mod upi_contribution_response;
