use crate::{Faq, PartyMember, RegistryItem, ScheduleEvent, StoryMilestone};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Editable content sections of a wedding page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeddingSections {
    pub story_timeline: Vec<StoryMilestone>,
    pub schedule_events: Vec<ScheduleEvent>,
    /// Either a flat list of photos or a map of category to photo URLs
    pub gallery_photos: Value,
    pub bridal_party: Vec<PartyMember>,
    pub groom_party: Vec<PartyMember>,
    pub special_roles: Vec<PartyMember>,
    pub registry_items: Vec<RegistryItem>,
    pub faqs: Vec<Faq>,
}

impl Default for WeddingSections {
    fn default() -> Self {
        Self {
            story_timeline: Vec::new(),
            schedule_events: Vec::new(),
            gallery_photos: Value::Array(Vec::new()),
            bridal_party: Vec::new(),
            groom_party: Vec::new(),
            special_roles: Vec::new(),
            registry_items: Vec::new(),
            faqs: Vec::new(),
        }
    }
}
