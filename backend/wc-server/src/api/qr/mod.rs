pub mod qr;
pub mod qr_query;
pub mod qr_response;
