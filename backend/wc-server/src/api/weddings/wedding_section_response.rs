use crate::PublicWeddingDto;

use serde::Serialize;

/// Public wedding tagged with the page section a username URL asked for
#[derive(Debug, Serialize)]
pub struct WeddingSectionResponse {
    #[serde(flatten)]
    pub wedding: PublicWeddingDto,
    pub current_section: String,
    pub username: String,
}
