//! Error types for the prayer deck.
//!
//! This module defines the centralized error type [`PrayerDeckError`] and a type alias
//! [`Result`] used throughout the crate. The session core itself has almost no failure
//! modes: gesture input arriving while a transition is in flight is a silent no-op, not
//! an error. Errors come from constructing a deck, validating configuration, and loading
//! deck or config files.

use thiserror::Error;

/// The main error type for prayer deck operations.
///
/// # Examples
///
/// ```
/// use prayer_deck::domain::{Deck, PrayerDeckError};
///
/// let err = Deck::new(vec![]).unwrap_err();
/// assert!(matches!(err, PrayerDeckError::EmptyDeck));
/// ```
#[derive(Debug, Error)]
pub enum PrayerDeckError {
    /// A session was requested over a deck with no items.
    #[error("deck contains no prayer items")]
    EmptyDeck,

    /// Two items in the same deck share an identifier.
    #[error("duplicate prayer item id {0}")]
    DuplicateItem(u32),

    /// Gesture or scheduler parameters are out of range.
    ///
    /// Raised when a screen width is zero or non-finite, a threshold ratio lies
    /// outside `(0, 1]`, or a prayer time is not a valid wall-clock time.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A deck file could not be decoded.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The configuration file could not be read or decoded.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for prayer deck operations.
pub type Result<T> = std::result::Result<T, PrayerDeckError>;
