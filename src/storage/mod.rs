//! Deck sources.
//!
//! Session progress is never persisted; this layer only supplies the items a
//! session starts with.
//!
//! # Modules
//!
//! - `backend`: The [`DeckSource`] trait
//! - `json`: Deck loaded from a JSON file
//! - `sample`: Built-in sample requests

pub mod backend;
pub mod json;
pub mod sample;

pub use backend::DeckSource;
pub use json::JsonDeckFile;
pub use sample::SampleDeck;
