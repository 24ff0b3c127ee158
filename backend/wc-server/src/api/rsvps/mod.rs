pub mod create_rsvp_request;
pub mod create_rsvp_response;
pub mod rsvp_list_response;
pub mod rsvps;
