//! Domain layer for the prayer deck.
//!
//! This module contains the core domain types, independent of any rendering or
//! gesture concerns:
//!
//! - [`error`]: Error types and result aliases
//! - [`prayer`]: The prayer request model (`PrayerItem`, `Category`, `Submitter`)
//! - [`deck`]: The fixed, ordered sequence of items presented in one session
//!
//! # Examples
//!
//! ```
//! use prayer_deck::domain::{Category, Deck, PrayerItem, Result, Submitter};
//!
//! fn one_card_deck() -> Result<Deck> {
//!     Deck::new(vec![PrayerItem::new(
//!         1,
//!         Category::HealthAndHealing,
//!         "Recovery Prayer",
//!         "Please pray for my mother.",
//!         Submitter::Anonymous,
//!     )])
//! }
//! # assert_eq!(one_card_deck().unwrap().len(), 1);
//! ```

pub mod deck;
pub mod error;
pub mod prayer;

pub use deck::Deck;
pub use error::{PrayerDeckError, Result};
pub use prayer::{Category, PrayerItem, Submitter};
