use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One item of the wedding-day schedule
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScheduleEvent {
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub duration: String,
    /// Rendered with emphasis on the schedule page
    #[serde(default)]
    pub highlight: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
