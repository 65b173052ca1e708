//! View model for the prayer-session screen.
//!
//! Computed from [`SessionState`] at a given instant and consumed by the
//! renderer. Contains no logic beyond formatting and counting.
//!
//! # Example
//!
//! ```rust
//! use chrono::Utc;
//! use prayer_deck::app::SessionState;
//! use prayer_deck::storage::{DeckSource, SampleDeck};
//! use prayer_deck::ui::SessionViewModel;
//!
//! let state = SessionState::new(SampleDeck.load()?, Utc::now());
//! let vm = SessionViewModel::from_state(&state, Utc::now());
//! assert_eq!(vm.header.subtitle, "0 of 6 prayers lifted up");
//! assert_eq!(vm.cards.len(), 3);
//! # Ok::<(), prayer_deck::PrayerDeckError>(())
//! ```

use crate::app::{SessionPhase, SessionState};
use crate::domain::PrayerItem;
use chrono::{DateTime, Utc};
use serde::Serialize;

const TITLE: &str = "Sacred Prayer Session";

/// Everything the session screen displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionViewModel {
    pub header: HeaderInfo,
    pub progress: ProgressInfo,
    /// Visible cards, top first. At most three.
    pub cards: Vec<CardView>,
    /// Whether the top card currently responds to gestures.
    pub interactive: bool,
    /// Set once the session has finished.
    pub completion: Option<CompletionBanner>,
}

/// Title bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderInfo {
    pub title: String,
    /// e.g. "2 of 6 prayers lifted up".
    pub subtitle: String,
    /// Whole minutes since the session started, rounded.
    pub elapsed_minutes: i64,
}

/// Progress bar and counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressInfo {
    pub prayed: usize,
    pub total: usize,
    pub remaining: usize,
    /// Rounded to the nearest whole percent.
    pub percent: u32,
}

/// One card as drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub id: u32,
    pub category: String,
    pub title: String,
    pub body: String,
    pub byline: String,
    pub urgent: bool,
    pub time_ago: String,
}

impl From<&PrayerItem> for CardView {
    fn from(item: &PrayerItem) -> Self {
        Self {
            id: item.id,
            category: item.category.label().to_string(),
            title: item.title.clone(),
            body: item.body.clone(),
            byline: item.submitter.byline(),
            urgent: item.urgent,
            time_ago: item.time_ago.clone(),
        }
    }
}

/// Closing message once a session has finished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionBanner {
    pub title: String,
    pub message: String,
}

impl SessionViewModel {
    #[must_use]
    pub fn from_state(state: &SessionState, now: DateTime<Utc>) -> Self {
        let total = state.deck().len();
        let prayed = state.prayed_count();
        let summary = state.summary(now);
        let phase = state.phase();

        let cards = state
            .deck()
            .window(state.cursor())
            .into_iter()
            .flatten()
            .map(CardView::from)
            .collect();

        let completion = match phase {
            SessionPhase::Complete => Some(CompletionBanner {
                title: "Prayer Session Complete! 🙏".to_string(),
                message: format!(
                    "You prayed for {} requests in {} minutes. May God bless your faithful \
                     prayers and may His peace be with you.",
                    summary.prayed_count,
                    summary.duration_minutes()
                ),
            }),
            SessionPhase::EndedEarly => Some(CompletionBanner {
                title: "Prayer Session Ended".to_string(),
                message: format!(
                    "You prayed for {} of {} requests in {} minutes.",
                    summary.prayed_count,
                    total,
                    summary.duration_minutes()
                ),
            }),
            SessionPhase::Active(_) | SessionPhase::Transitioning(_) => None,
        };

        Self {
            header: HeaderInfo {
                title: TITLE.to_string(),
                subtitle: format!("{prayed} of {total} prayers lifted up"),
                elapsed_minutes: summary.duration_minutes(),
            },
            progress: ProgressInfo {
                prayed,
                total,
                remaining: state.remaining(),
                percent: percent(prayed, total),
            },
            cards,
            interactive: phase.accepts_gestures(),
            completion,
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn percent(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (part as f64 * 100.0 / total as f64).round() as u32
}
