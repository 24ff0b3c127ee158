use wc_core::PartyMember;

use serde::Deserialize;

/// Omitted lists are left unchanged
#[derive(Debug, Deserialize)]
pub struct PartyRequest {
    #[serde(default)]
    pub session_id: Option<String>,
    pub bridal_party: Option<Vec<PartyMember>>,
    pub groom_party: Option<Vec<PartyMember>>,
    pub special_roles: Option<Vec<PartyMember>>,
}
