pub mod create_message_request;
pub mod create_message_response;
pub mod guestbook;
pub mod message_list_response;
