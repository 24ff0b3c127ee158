use crate::{HoneymoonFund, Theme, WeddingSections};

use serde::{Deserialize, Serialize};

/// Everything a couple edits about their wedding page.
/// Identity and timestamps live on [`crate::Wedding`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WeddingContent {
    pub couple_name_1: String,
    pub couple_name_2: String,
    /// Free-form date as entered by the couple (usually YYYY-MM-DD)
    pub wedding_date: String,
    pub venue_name: String,
    pub venue_location: String,
    pub their_story: String,
    pub theme: Theme,
    #[serde(flatten)]
    pub sections: WeddingSections,
    pub honeymoon_fund: HoneymoonFund,
}
