use wc_core::StoryMilestone;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct StoryRequest {
    #[serde(default)]
    pub session_id: Option<String>,
    pub their_story: Option<String>,
    pub story_timeline: Option<Vec<StoryMilestone>>,
}
