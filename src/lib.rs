//! Prayer Deck: a swipeable card deck for guided prayer sessions.
//!
//! A session presents a fixed, ordered deck of prayer requests one card at a
//! time. The user swipes the top card away (either direction) to mark it as
//! prayed for; a short or slow swipe springs the card back instead. The crate
//! provides:
//! - A pure gesture-to-transition mapper (drag offset in, visuals and a
//!   commit/cancel decision out)
//! - A session state machine that advances a cursor, guards against input
//!   during exit animations, and reports completion or early exit
//! - A prayer-time notification scheduler with duplicate suppression
//! - Deck sources (built-in sample deck, JSON files) and a text view model
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Headless driver (main.rs)                          │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Action emission                                  │
//! │  - Session controller                               │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Gesture       │   │ Storage       │   │ Scheduler     │
//! │ (gesture/)    │   │ (storage/)    │   │ (scheduler/)  │
//! │ - Interpolate │   │ - Sample deck │   │ - Prayer times│
//! │ - Visuals     │   │ - JSON decks  │   │ - Time slots  │
//! │ - Decisions   │   │ - Source API  │   │ - Suppression │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, UI & Infrastructure                        │
//! │  - Prayer items and decks (domain/)                 │
//! │  - View model and text rendering (ui/)              │
//! │  - Platform paths (infrastructure/)                 │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing                            │
//! │  - File-based OTLP export                           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Session controller with event/action model
//! - [`domain`]: Prayer items, decks and errors
//! - [`gesture`]: Drag-to-visuals mapping and the swipe decision rule
//! - [`scheduler`]: Prayer-time notifications and slot commitments
//! - [`storage`]: Deck sources
//! - [`ui`]: View model and plain-text rendering
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`observability`]: OpenTelemetry tracing
//!
//! # Configuration
//!
//! Every field is optional:
//!
//! ```toml
//! screen_width = 390.0
//! swipe_threshold_ratio = 0.3
//! commit_velocity = 1200.0
//! deck_file = "~/decks/church.json"
//! commitments = ["7:00 AM", "9:00 PM"]
//! trace_level = "debug"
//!
//! [[prayer_times]]
//! hour = 6
//! minute = 0
//! label = "Morning Prayer"
//! ```
//!
//! # Example
//!
//! ```rust
//! use prayer_deck::storage::DeckSource;
//! use prayer_deck::{handle_event, initialize, Action, Config, Event};
//!
//! let config = Config::default();
//! let mut controller = initialize(&config)?;
//! let items = config.deck_source().load()?.iter().cloned().collect();
//!
//! handle_event(&mut controller, &Event::StartSession { items })?;
//! let (_, actions) = handle_event(&mut controller, &Event::DragEnd { dx: 200.0, velocity_x: 0.0 })?;
//! assert!(matches!(actions[1], Action::CardDismissed { item_id: 1, .. }));
//! # Ok::<(), prayer_deck::PrayerDeckError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod gesture;
pub mod infrastructure;
pub mod scheduler;
pub mod storage;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, Event, SessionController, SessionPhase, SessionSummary};
pub use domain::{Deck, PrayerDeckError, PrayerItem, Result};
pub use gesture::{GestureConfig, SwipeMapper};

use gesture::{DEFAULT_COMMIT_VELOCITY, DEFAULT_SCREEN_WIDTH, DEFAULT_THRESHOLD_RATIO};
use scheduler::{default_prayer_times, NotificationScheduler, PrayerTime, TimeSlot};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use storage::{DeckSource, JsonDeckFile, SampleDeck};

/// Runtime configuration, usually read from a TOML file.
///
/// # Example
///
/// ```rust
/// use prayer_deck::Config;
///
/// let config = Config::from_toml_str(r#"
///     screen_width = 390.0
///     commitments = ["9:00 PM"]
/// "#)?;
/// assert_eq!(config.screen_width, 390.0);
/// assert_eq!(config.swipe_threshold_ratio, 0.3);
/// assert_eq!(config.prayer_times.len(), 4);
/// # Ok::<(), prayer_deck::PrayerDeckError>(())
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logical width of the card area. The swipe threshold and exit distance
    /// scale with it. Default: `400.0`
    pub screen_width: f64,

    /// Fraction of the width a drag must exceed to commit. Default: `0.3`
    pub swipe_threshold_ratio: f64,

    /// Release speed (units per second) that commits regardless of distance.
    /// Default: `1200.0`
    pub commit_velocity: f64,

    /// JSON deck to pray through. `~` is expanded. Uses the built-in sample
    /// deck when unset.
    pub deck_file: Option<PathBuf>,

    /// Daily prayer times that trigger notifications. Default: 06:00, 12:00,
    /// 18:00 and 21:00.
    pub prayer_times: Vec<PrayerTime>,

    /// Hourly slots the user committed to, written `"h:00 AM"`/`"h:00 PM"`.
    pub commitments: Vec<TimeSlot>,

    /// Tracing level for OpenTelemetry spans.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: DEFAULT_SCREEN_WIDTH,
            swipe_threshold_ratio: DEFAULT_THRESHOLD_RATIO,
            commit_velocity: DEFAULT_COMMIT_VELOCITY,
            deck_file: None,
            prayer_times: default_prayer_times(),
            commitments: Vec::new(),
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from TOML text. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// [`PrayerDeckError::Config`] if the text is not valid TOML or a value
    /// has the wrong shape (including unparseable commitment slots).
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| PrayerDeckError::Config(e.to_string()))
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// [`PrayerDeckError::Config`] if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = ?path, "loading configuration");

        let contents = std::fs::read_to_string(path).map_err(|e| {
            PrayerDeckError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&contents)
    }

    /// Mapper parameters from this configuration.
    #[must_use]
    pub const fn gesture_config(&self) -> GestureConfig {
        GestureConfig {
            screen_width: self.screen_width,
            threshold_ratio: self.swipe_threshold_ratio,
            commit_velocity: self.commit_velocity,
        }
    }

    /// Notification scheduler over the configured prayer times plus one
    /// entry per commitment.
    ///
    /// # Errors
    ///
    /// [`PrayerDeckError::InvalidConfig`] if a prayer time is out of range.
    pub fn scheduler(&self) -> Result<NotificationScheduler> {
        let mut scheduler = NotificationScheduler::new(self.prayer_times.clone())?;
        for slot in &self.commitments {
            scheduler.commit(*slot);
        }
        Ok(scheduler)
    }

    /// Where the session's items come from.
    #[must_use]
    pub fn deck_source(&self) -> Box<dyn DeckSource> {
        match &self.deck_file {
            Some(path) => Box::new(JsonDeckFile::new(infrastructure::expand_tilde(path))),
            None => Box::new(SampleDeck),
        }
    }
}

/// Builds a session controller from configuration.
///
/// The controller starts idle; feed it [`Event::StartSession`] to begin.
/// Tracing is installed separately by [`observability::init_tracing`].
///
/// # Errors
///
/// [`PrayerDeckError::InvalidConfig`] if the gesture parameters are out of
/// range (non-positive width or velocity, threshold ratio outside `(0, 1]`).
///
/// # Example
///
/// ```rust
/// use prayer_deck::{initialize, Config};
///
/// let controller = initialize(&Config::default())?;
/// assert!(controller.session().is_none());
///
/// let bad = Config { screen_width: 0.0, ..Default::default() };
/// assert!(initialize(&bad).is_err());
/// # Ok::<(), prayer_deck::PrayerDeckError>(())
/// ```
pub fn initialize(config: &Config) -> Result<SessionController> {
    tracing::debug!(
        screen_width = config.screen_width,
        threshold_ratio = config.swipe_threshold_ratio,
        commit_velocity = config.commit_velocity,
        "initializing prayer deck"
    );

    let mapper = SwipeMapper::new(config.gesture_config())?;
    Ok(SessionController::new(mapper))
}
