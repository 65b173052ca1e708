//! Session state: the deck, the cursor and the transition guard.
//!
//! [`SessionState`] is owned by the controller and mutated only through
//! [`SessionState::advance`], [`SessionState::settle`] and
//! [`SessionState::end_early`]. Those three methods keep the invariants:
//!
//! - `0 <= cursor <= deck.len()`
//! - `prayed_count == cursor`
//! - `cursor == deck.len()` exactly when the outcome is `Complete`

use super::modes::{SessionOutcome, SessionPhase};
use crate::domain::{Deck, PrayerItem};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Seconds per minute for the minute-rounded duration shown to users.
const SECONDS_PER_MINUTE: i64 = 60;

/// Result reported when a session finishes, either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub prayed_count: usize,
    pub duration_seconds: i64,
}

impl SessionSummary {
    /// Duration rounded to the nearest whole minute (halves round up).
    ///
    /// ```
    /// use prayer_deck::app::SessionSummary;
    ///
    /// let summary = SessionSummary { prayed_count: 6, duration_seconds: 150 };
    /// assert_eq!(summary.duration_minutes(), 3);
    /// ```
    #[must_use]
    pub const fn duration_minutes(&self) -> i64 {
        (self.duration_seconds + SECONDS_PER_MINUTE / 2).div_euclid(SECONDS_PER_MINUTE)
    }
}

/// Progress of one session through its deck.
#[derive(Debug, Clone)]
pub struct SessionState {
    deck: Deck,
    cursor: usize,
    prayed_count: usize,
    started_at: DateTime<Utc>,
    transition_in_progress: bool,
    outcome: Option<SessionOutcome>,
}

impl SessionState {
    /// Fresh session at the first card.
    #[must_use]
    pub fn new(deck: Deck, started_at: DateTime<Utc>) -> Self {
        Self {
            deck,
            cursor: 0,
            prayed_count: 0,
            started_at,
            transition_in_progress: false,
            outcome: None,
        }
    }

    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub const fn prayed_count(&self) -> usize {
        self.prayed_count
    }

    #[must_use]
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub const fn transition_in_progress(&self) -> bool {
        self.transition_in_progress
    }

    #[must_use]
    pub const fn outcome(&self) -> Option<SessionOutcome> {
        self.outcome
    }

    /// Cards not yet prayed for, including the active one.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.deck.len() - self.cursor
    }

    /// The card currently on top, `None` once the deck is exhausted.
    #[must_use]
    pub fn current_item(&self) -> Option<&PrayerItem> {
        self.deck.item_at(self.cursor)
    }

    #[must_use]
    pub const fn phase(&self) -> SessionPhase {
        match self.outcome {
            Some(SessionOutcome::Complete) => SessionPhase::Complete,
            Some(SessionOutcome::EndedEarly) => SessionPhase::EndedEarly,
            None if self.transition_in_progress => SessionPhase::Transitioning(self.cursor),
            None => SessionPhase::Active(self.cursor),
        }
    }

    /// Whole seconds elapsed since the session started, never negative.
    #[must_use]
    pub fn elapsed_seconds(&self, now: DateTime<Utc>) -> i64 {
        (now - self.started_at).num_seconds().max(0)
    }

    /// Summary of the session as of `now`.
    #[must_use]
    pub fn summary(&self, now: DateTime<Utc>) -> SessionSummary {
        SessionSummary {
            prayed_count: self.prayed_count,
            duration_seconds: self.elapsed_seconds(now),
        }
    }

    /// Moves past the active card.
    ///
    /// Raises the transition guard when another card follows, or marks the
    /// session complete when the deck is exhausted. Returns the new phase.
    /// Has no effect unless the phase is `Active`.
    pub fn advance(&mut self) -> SessionPhase {
        if !self.phase().accepts_gestures() {
            return self.phase();
        }

        self.cursor += 1;
        self.prayed_count += 1;

        if self.cursor == self.deck.len() {
            self.outcome = Some(SessionOutcome::Complete);
        } else {
            self.transition_in_progress = true;
        }

        debug_assert_eq!(self.prayed_count, self.cursor);
        self.phase()
    }

    /// Clears the transition guard. Returns `true` if it was set.
    pub fn settle(&mut self) -> bool {
        if self.outcome.is_some() || !self.transition_in_progress {
            return false;
        }
        self.transition_in_progress = false;
        true
    }

    /// Terminates the session before the deck is exhausted.
    /// Returns `false` if the session had already finished.
    pub fn end_early(&mut self) -> bool {
        if self.outcome.is_some() {
            return false;
        }
        self.transition_in_progress = false;
        self.outcome = Some(SessionOutcome::EndedEarly);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{DeckSource, SampleDeck};
    use chrono::Duration;

    fn state() -> SessionState {
        SessionState::new(SampleDeck.load().unwrap(), Utc::now())
    }

    #[test]
    fn starts_active_at_zero() {
        let s = state();
        assert_eq!(s.phase(), SessionPhase::Active(0));
        assert_eq!(s.prayed_count(), 0);
        assert_eq!(s.remaining(), 6);
    }

    #[test]
    fn advance_raises_guard_until_settled() {
        let mut s = state();
        assert_eq!(s.advance(), SessionPhase::Transitioning(1));
        assert_eq!(s.advance(), SessionPhase::Transitioning(1));
        assert_eq!(s.cursor(), 1);
        assert!(s.settle());
        assert!(!s.settle());
        assert_eq!(s.phase(), SessionPhase::Active(1));
    }

    #[test]
    fn last_advance_completes() {
        let mut s = state();
        for _ in 0..5 {
            s.advance();
            s.settle();
        }
        assert_eq!(s.phase(), SessionPhase::Active(5));
        assert_eq!(s.advance(), SessionPhase::Complete);
        assert_eq!(s.prayed_count(), 6);
        assert!(s.current_item().is_none());
        assert!(!s.end_early());
    }

    #[test]
    fn summary_counts_elapsed_time() {
        let start = Utc::now();
        let mut s = SessionState::new(SampleDeck.load().unwrap(), start);
        s.advance();
        let summary = s.summary(start + Duration::seconds(95));
        assert_eq!(summary.prayed_count, 1);
        assert_eq!(summary.duration_seconds, 95);
        assert_eq!(summary.duration_minutes(), 2);
    }

    #[test]
    fn clock_skew_never_goes_negative() {
        let start = Utc::now();
        let s = SessionState::new(SampleDeck.load().unwrap(), start);
        assert_eq!(s.elapsed_seconds(start - Duration::seconds(30)), 0);
    }
}
