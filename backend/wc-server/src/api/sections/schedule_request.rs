use wc_core::ScheduleEvent;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ScheduleRequest {
    #[serde(default)]
    pub session_id: Option<String>,
    pub schedule_events: Option<Vec<ScheduleEvent>>,
}
