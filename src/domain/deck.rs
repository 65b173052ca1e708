//! The ordered, read-only deck of prayer items for one session.

use super::error::{PrayerDeckError, Result};
use super::prayer::PrayerItem;
use std::collections::HashSet;

/// Fixed ordered sequence of prayer items.
///
/// The order and contents never change after construction. Lookups past the
/// end return `None`: a cursor equal to [`Deck::len`] is the expected
/// end-of-deck signal, not a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    items: Vec<PrayerItem>,
}

impl Deck {
    /// Builds a deck from items in presentation order.
    ///
    /// # Errors
    ///
    /// - [`PrayerDeckError::EmptyDeck`] if `items` is empty
    /// - [`PrayerDeckError::DuplicateItem`] if two items share an id
    pub fn new(items: Vec<PrayerItem>) -> Result<Self> {
        if items.is_empty() {
            return Err(PrayerDeckError::EmptyDeck);
        }

        let mut seen = HashSet::with_capacity(items.len());
        if let Some(dup) = items.iter().find(|item| !seen.insert(item.id)) {
            return Err(PrayerDeckError::DuplicateItem(dup.id));
        }

        tracing::debug!(items = items.len(), "deck constructed");
        Ok(Self { items })
    }

    /// Returns the item at `index`, or `None` at or past the end.
    #[must_use]
    pub fn item_at(&self, index: usize) -> Option<&PrayerItem> {
        self.items.get(index)
    }

    /// Total item count, fixed for the session.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false` for a constructed deck.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The active card and the two preview cards behind it.
    ///
    /// ```
    /// # use prayer_deck::storage::{DeckSource, SampleDeck};
    /// let deck = SampleDeck.load().unwrap();
    /// let [top, next, third] = deck.window(deck.len() - 1);
    /// assert!(top.is_some());
    /// assert!(next.is_none() && third.is_none());
    /// ```
    #[must_use]
    pub fn window(&self, cursor: usize) -> [Option<&PrayerItem>; 3] {
        [
            self.item_at(cursor),
            self.item_at(cursor.saturating_add(1)),
            self.item_at(cursor.saturating_add(2)),
        ]
    }

    /// Iterates items in presentation order.
    pub fn iter(&self) -> impl Iterator<Item = &PrayerItem> {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Submitter};

    fn item(id: u32) -> PrayerItem {
        PrayerItem::new(id, Category::Other, format!("t{id}"), "b", Submitter::Anonymous)
    }

    #[test]
    fn rejects_empty_deck() {
        assert!(matches!(Deck::new(vec![]), Err(PrayerDeckError::EmptyDeck)));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = Deck::new(vec![item(1), item(2), item(1)]).unwrap_err();
        assert!(matches!(err, PrayerDeckError::DuplicateItem(1)));
    }

    #[test]
    fn boundary_lookup_is_none() {
        let deck = Deck::new(vec![item(1), item(2)]).unwrap();
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.item_at(1).map(|i| i.id), Some(2));
        assert!(deck.item_at(2).is_none());
        assert!(deck.item_at(usize::MAX).is_none());
    }

    #[test]
    fn window_shows_up_to_three_cards() {
        let deck = Deck::new(vec![item(1), item(2), item(3), item(4)]).unwrap();
        let ids = deck.window(1).map(|slot| slot.map(|i| i.id));
        assert_eq!(ids, [Some(2), Some(3), Some(4)]);

        let ids = deck.window(3).map(|slot| slot.map(|i| i.id));
        assert_eq!(ids, [Some(4), None, None]);

        let ids = deck.window(4).map(|slot| slot.map(|i| i.id));
        assert_eq!(ids, [None, None, None]);
    }
}
