//! JSON file deck source.
//!
//! The file holds a single JSON array of prayer items in the wire format of
//! [`PrayerItem`]:
//!
//! ```json
//! [
//!   {
//!     "id": 1,
//!     "category": "Health & Healing",
//!     "title": "Recovery Prayer",
//!     "content": "Please pray for my mother...",
//!     "submittedBy": "Sarah M.",
//!     "urgent": true,
//!     "timeAgo": "2 hours ago"
//!   }
//! ]
//! ```

use super::backend::DeckSource;
use crate::domain::error::{PrayerDeckError, Result};
use crate::domain::{Deck, PrayerItem};
use std::path::{Path, PathBuf};

/// Reads a deck from a JSON file each time it is loaded.
#[derive(Debug, Clone)]
pub struct JsonDeckFile {
    path: PathBuf,
}

impl JsonDeckFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Decodes a deck from JSON text.
    ///
    /// # Errors
    ///
    /// [`PrayerDeckError::Parse`] for malformed JSON, or the deck validation
    /// errors of [`Deck::new`].
    pub fn parse(contents: &str) -> Result<Deck> {
        let items: Vec<PrayerItem> = serde_json::from_str(contents)
            .map_err(|e| PrayerDeckError::Parse(format!("invalid deck JSON: {e}")))?;
        Deck::new(items)
    }
}

impl DeckSource for JsonDeckFile {
    fn load(&self) -> Result<Deck> {
        tracing::debug!(path = ?self.path, "loading deck file");

        let contents = std::fs::read_to_string(&self.path)?;
        let deck = Self::parse(&contents)?;

        tracing::debug!(path = ?self.path, items = deck.len(), "deck file loaded");
        Ok(deck)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TWO_ITEMS: &str = r#"[
        {"id": 1, "category": "Other", "title": "a", "content": "x", "submittedBy": "Anonymous"},
        {"id": 2, "category": "Family & Children", "title": "b", "content": "y", "submittedBy": "Maria G.", "urgent": true, "timeAgo": "6 hours ago"}
    ]"#;

    #[test]
    fn loads_items_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TWO_ITEMS.as_bytes()).unwrap();

        let deck = JsonDeckFile::new(file.path()).load().unwrap();
        assert_eq!(deck.len(), 2);
        assert!(deck.item_at(1).unwrap().urgent);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = JsonDeckFile::new(dir.path().join("absent.json")).load().unwrap_err();
        assert!(matches!(err, PrayerDeckError::Io(_)));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = JsonDeckFile::parse("{ not a list").unwrap_err();
        assert!(matches!(err, PrayerDeckError::Parse(_)));
    }

    #[test]
    fn empty_array_is_empty_deck() {
        assert!(matches!(JsonDeckFile::parse("[]"), Err(PrayerDeckError::EmptyDeck)));
    }
}
