use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One entry of the "our story" timeline
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StoryMilestone {
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Fields the editor sends that we do not interpret
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
