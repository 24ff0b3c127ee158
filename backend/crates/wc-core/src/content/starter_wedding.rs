//! Placeholder content given to a freshly registered account.

use crate::{HoneymoonFund, ScheduleEvent, StoryMilestone, Theme, WeddingContent, WeddingSections};

use serde_json::{Map, Value};

pub fn starter_content() -> WeddingContent {
    WeddingContent {
        couple_name_1: String::from("Sarah"),
        couple_name_2: String::from("Michael"),
        wedding_date: String::from("2025-06-15"),
        venue_name: String::from("Sunset Garden Estate"),
        venue_location: String::from("Sunset Garden Estate • Napa Valley, California"),
        their_story: String::from(
            "We can't wait to celebrate our love story with the people who matter most to us. \
             Join us for an unforgettable evening of joy, laughter, and new beginnings.",
        ),
        theme: Theme::Classic,
        sections: WeddingSections {
            story_timeline: vec![StoryMilestone {
                year: String::from("2019"),
                title: String::from("First Meeting"),
                description: String::from(
                    "We met at a coffee shop in downtown San Francisco on a rainy Tuesday morning.",
                ),
                image: Some(String::from(
                    "https://images.unsplash.com/photo-1511285560929-80b456fea0bc?w=600&h=400&fit=crop",
                )),
                extra: Map::new(),
            }],
            schedule_events: vec![ScheduleEvent {
                time: String::from("2:00 PM"),
                title: String::from("Guests Arrival & Welcome"),
                description: String::from(
                    "Please arrive by 2:00 PM for welcome drinks and mingling.",
                ),
                location: String::from("Sunset Garden Estate - Main Entrance"),
                duration: String::from("30 minutes"),
                highlight: false,
                extra: Map::new(),
            }],
            gallery_photos: Value::Array(Vec::new()),
            ..WeddingSections::default()
        },
        honeymoon_fund: HoneymoonFund::default(),
    }
}
