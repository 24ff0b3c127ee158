pub mod hex_color;
pub mod qr_request;
pub mod qr_style;
pub mod share_link;
