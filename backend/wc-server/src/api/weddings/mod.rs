pub mod public_wedding_dto;
pub mod wedding_request;
pub mod wedding_section_response;
pub mod weddings;
