pub mod auth;
pub mod auth_response;
pub mod credentials_request;
pub mod logout_request;
pub mod profile_response;
