//! Built-in sample requests used when no deck file is configured.

use super::backend::DeckSource;
use crate::domain::error::Result;
use crate::domain::{Category, Deck, PrayerItem, Submitter};

/// The six sample requests shown in a demo session.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleDeck;

fn named(name: &str) -> Submitter {
    Submitter::Named(name.to_string())
}

fn sample_items() -> Vec<PrayerItem> {
    vec![
        PrayerItem::new(
            1,
            Category::HealthAndHealing,
            "Recovery Prayer",
            "Please pray for my mother who is recovering from surgery. She needs strength and \
             healing during this difficult time. The doctors say she's doing well, but I know \
             the power of prayer can help her heal completely.",
            named("Sarah M."),
        )
        .urgent()
        .aged("2 hours ago"),
        PrayerItem::new(
            2,
            Category::JobOpportunities,
            "Career Guidance",
            "I've been searching for a job for months now. Please pray that God opens the right \
             doors and guides me to the position He has planned for me.",
            named("Michael R."),
        )
        .aged("5 hours ago"),
        PrayerItem::new(
            3,
            Category::SpiritualGrowth,
            "Faith Journey",
            "I'm going through a season of doubt and need prayer for my faith to be \
             strengthened. I want to grow closer to Him but feel distant lately.",
            Submitter::Anonymous,
        )
        .aged("1 day ago"),
        PrayerItem::new(
            4,
            Category::MarriageAndRelationships,
            "Marriage Restoration",
            "My marriage is going through a very difficult time. Please pray for healing, \
             forgiveness, and restoration.",
            named("Jennifer L."),
        )
        .urgent()
        .aged("3 hours ago"),
        PrayerItem::new(
            5,
            Category::FamilyAndChildren,
            "Prodigal Son",
            "Please pray for my teenage son who has walked away from his faith. Pray for his \
             protection and that God would draw him back to Himself.",
            named("Maria G."),
        )
        .aged("6 hours ago"),
        PrayerItem::new(
            6,
            Category::FinancialBreakthrough,
            "Provision Needed",
            "Our family is facing financial hardship after unexpected medical bills. Please \
             pray for provision and wisdom in managing our resources.",
            named("David K."),
        )
        .urgent()
        .aged("4 hours ago"),
    ]
}

impl DeckSource for SampleDeck {
    fn load(&self) -> Result<Deck> {
        Deck::new(sample_items())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_deck_is_valid() {
        let deck = SampleDeck.load().unwrap();
        assert_eq!(deck.len(), 6);
        assert_eq!(deck.iter().filter(|item| item.urgent).count(), 3);
        assert_eq!(deck.item_at(2).unwrap().submitter, Submitter::Anonymous);
    }
}
