use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Member of the bridal party, groom party or a special role (flower girl, ring bearer)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PartyMember {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub designation: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
