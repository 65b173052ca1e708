//! Deck source abstraction.
//!
//! A session's items are supplied once, at session start, and never change.
//! [`DeckSource`] hides where they come from so the runtime can switch between
//! the built-in sample set and a file without touching session logic.

use crate::domain::error::Result;
use crate::domain::Deck;

/// Something that can produce a validated deck.
///
/// # Implementations
///
/// - [`SampleDeck`](super::SampleDeck): the six built-in sample requests
/// - [`JsonDeckFile`](super::JsonDeckFile): a JSON array of items on disk
///
/// # Examples
///
/// ```
/// use prayer_deck::storage::{DeckSource, SampleDeck};
///
/// let deck = SampleDeck.load()?;
/// assert_eq!(deck.len(), 6);
/// # Ok::<(), prayer_deck::PrayerDeckError>(())
/// ```
pub trait DeckSource {
    /// Loads and validates the deck.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read or decoded, or if its
    /// items do not form a valid deck.
    fn load(&self) -> Result<Deck>;
}
