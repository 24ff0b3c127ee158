use wc_core::Wedding;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SectionUpdateResponse {
    pub success: bool,
    pub wedding_data: Wedding,
}
