//! Demo page served for users who have not customized their wedding yet.

use crate::{
    Faq, HoneymoonFund, PartyMember, RegistryItem, ScheduleEvent, StoryMilestone, Theme,
    WeddingContent, WeddingSections,
};

use serde_json::{Map, Value, json};

/// ID reported for the showcase page, which is never persisted
pub const SHOWCASE_WEDDING_ID: &str = "default";

pub fn showcase_content() -> WeddingContent {
    WeddingContent {
        couple_name_1: String::from("Sarah"),
        couple_name_2: String::from("Michael"),
        wedding_date: String::from("2025-06-15"),
        venue_name: String::from("Sunset Garden Estate"),
        venue_location: String::from("Napa Valley, California"),
        their_story: String::from(
            "Our beautiful love story began when we met at a coffee shop in downtown San Francisco...",
        ),
        theme: Theme::Classic,
        sections: WeddingSections {
            story_timeline: vec![
                milestone(
                    "2019",
                    "First Meeting",
                    "We met at Blue Bottle Coffee on a rainy Tuesday morning.",
                    "https://images.unsplash.com/photo-1511988617509-a57c8a288659?w=400",
                ),
                milestone(
                    "2020",
                    "First Date",
                    "Our first official date was a hiking trip to Mount Tamalpais.",
                    "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=400",
                ),
                milestone(
                    "2022",
                    "Moving In Together",
                    "We moved in together in a cozy apartment in the Mission District.",
                    "https://images.unsplash.com/photo-1556909114-f6e7ad7d3136?w=400",
                ),
                milestone(
                    "2024",
                    "The Proposal",
                    "Michael proposed during a sunset walk along the cliffs of Big Sur.",
                    "https://images.unsplash.com/photo-1469371670807-013ccf25f16a?w=400",
                ),
            ],
            schedule_events: vec![
                event(
                    "2:00 PM",
                    "Ceremony",
                    "Join us for our wedding ceremony in the beautiful garden pavilion",
                    "Garden Pavilion",
                    "45 minutes",
                    true,
                ),
                event(
                    "3:00 PM",
                    "Cocktail Hour",
                    "Celebrate with drinks and appetizers on the terrace",
                    "Sunset Terrace",
                    "60 minutes",
                    false,
                ),
                event(
                    "4:30 PM",
                    "Reception",
                    "Dinner, dancing, and celebration in the grand ballroom",
                    "Grand Ballroom",
                    "5 hours",
                    true,
                ),
            ],
            gallery_photos: json!({
                "engagement": [
                    "https://images.unsplash.com/photo-1606216794074-735e91aa2c92?w=500",
                    "https://images.unsplash.com/photo-1583939003579-730e3918a45a?w=500"
                ],
                "travel": [
                    "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=500",
                    "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=500"
                ],
                "family": [
                    "https://images.unsplash.com/photo-1511895426328-dc8714191300?w=500",
                    "https://images.unsplash.com/photo-1515934751635-c81c6bc9a2d8?w=500"
                ]
            }),
            bridal_party: vec![
                member(
                    "Emma Johnson",
                    "Maid of Honor",
                    "Sarah's best friend since college.",
                ),
                member(
                    "Rachel Davis",
                    "Bridesmaid",
                    "Sarah's sister and adventure buddy.",
                ),
            ],
            groom_party: vec![
                member(
                    "David Wilson",
                    "Best Man",
                    "Michael's brother and partner in crime since childhood.",
                ),
                member(
                    "James Miller",
                    "Groomsman",
                    "College best friend and go-to person for serious talks.",
                ),
            ],
            special_roles: vec![
                member(
                    "Grace Thompson",
                    "Flower Girl",
                    "Sarah's niece, in charge of the flower petals.",
                ),
                member(
                    "Oliver Wilson",
                    "Ring Bearer",
                    "Michael's nephew, proudly carrying the rings.",
                ),
            ],
            registry_items: vec![
                gift(
                    "Professional Stand Mixer",
                    "For all our future baking adventures together",
                    "Williams Sonoma",
                    "$299.99",
                ),
                gift(
                    "Luxury Bedding Set",
                    "Soft organic cotton sheets for cozy nights",
                    "West Elm",
                    "$199.99",
                ),
            ],
            faqs: vec![
                faq(
                    "What should I wear?",
                    "We're having a garden ceremony, so we recommend cocktail attire.",
                ),
                faq(
                    "Will there be parking available?",
                    "Yes, there is complimentary valet parking at the venue entrance.",
                ),
                faq(
                    "Can I bring a guest?",
                    "Please check your invitation for guest details.",
                ),
                faq(
                    "Is the venue accessible?",
                    "Yes, Sunset Garden Estate is fully wheelchair accessible.",
                ),
            ],
        },
        honeymoon_fund: HoneymoonFund::default(),
    }
}

fn milestone(year: &str, title: &str, description: &str, image: &str) -> StoryMilestone {
    StoryMilestone {
        year: year.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        image: Some(image.to_string()),
        extra: Map::new(),
    }
}

fn event(
    time: &str,
    title: &str,
    description: &str,
    location: &str,
    duration: &str,
    highlight: bool,
) -> ScheduleEvent {
    ScheduleEvent {
        time: time.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        location: location.to_string(),
        duration: duration.to_string(),
        highlight,
        extra: Map::new(),
    }
}

fn member(name: &str, designation: &str, description: &str) -> PartyMember {
    PartyMember {
        name: name.to_string(),
        designation: designation.to_string(),
        description: description.to_string(),
        photo: None,
        extra: Map::new(),
    }
}

fn gift(name: &str, description: &str, store: &str, price: &str) -> RegistryItem {
    let mut extra = Map::new();
    extra.insert(String::from("price"), Value::String(price.to_string()));
    RegistryItem {
        name: name.to_string(),
        description: description.to_string(),
        store: store.to_string(),
        purchased: false,
        image: None,
        extra,
    }
}

fn faq(question: &str, answer: &str) -> Faq {
    Faq {
        question: question.to_string(),
        answer: answer.to_string(),
        extra: Map::new(),
    }
}
