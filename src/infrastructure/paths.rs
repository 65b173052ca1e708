//! Filesystem locations.
//!
//! The crate writes only trace files. They live in the platform's local data
//! directory (`~/.local/share/prayer-deck` on Linux), falling back to the
//! system temp directory when no home directory is known.

use std::path::{Path, PathBuf};

/// Directory name under the platform data directory.
const APP_DIR: &str = "prayer-deck";

/// Returns the data directory for trace output.
///
/// ```
/// use prayer_deck::infrastructure::get_data_dir;
///
/// assert!(get_data_dir().ends_with("prayer-deck"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR)
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading tilde, and all paths when the home directory is
/// unknown, are returned unchanged.
///
/// ```
/// use prayer_deck::infrastructure::expand_tilde;
/// use std::path::PathBuf;
///
/// assert_eq!(expand_tilde("/absolute/deck.json"), PathBuf::from("/absolute/deck.json"));
/// ```
#[must_use]
pub fn expand_tilde(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    dirs::home_dir().map_or_else(|| path.to_path_buf(), |home| home.join(rest))
}
