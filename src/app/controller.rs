//! Session controller: applies gesture decisions to session state.
//!
//! The controller owns the active [`SessionState`] and a [`SwipeMapper`]. For
//! each inbound call it asks the mapper for a pure decision, applies the state
//! change itself, and returns the [`Action`]s the screen must perform. The
//! cursor advance is authoritative at release time; the transition guard only
//! holds back the *next* gesture until the view reports that the exit animation
//! has settled.

use super::actions::Action;
use super::clock::{Clock, SystemClock};
use super::modes::SessionPhase;
use super::state::SessionState;
use crate::domain::Deck;
use crate::gesture::{DragSample, GestureDecision, StackVisuals, SwipeMapper};
use crate::ui::SessionViewModel;

/// Sequences one prayer session at a time.
#[derive(Debug)]
pub struct SessionController<C: Clock = SystemClock> {
    mapper: SwipeMapper,
    clock: C,
    session: Option<SessionState>,
}

impl SessionController<SystemClock> {
    /// Controller reading the system clock, with no session yet.
    #[must_use]
    pub fn new(mapper: SwipeMapper) -> Self {
        Self::with_clock(mapper, SystemClock)
    }
}

impl<C: Clock> SessionController<C> {
    #[must_use]
    pub fn with_clock(mapper: SwipeMapper, clock: C) -> Self {
        Self {
            mapper,
            clock,
            session: None,
        }
    }

    #[must_use]
    pub const fn mapper(&self) -> &SwipeMapper {
        &self.mapper
    }

    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// The current or most recently finished session.
    #[must_use]
    pub const fn session(&self) -> Option<&SessionState> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn phase(&self) -> Option<SessionPhase> {
        self.session.as_ref().map(SessionState::phase)
    }

    /// Session state if it currently accepts gestures.
    fn accepting(&mut self) -> Option<&mut SessionState> {
        match self.session.as_mut() {
            Some(state) if state.phase().accepts_gestures() => Some(state),
            Some(state) => {
                tracing::trace!(phase = ?state.phase(), "gesture ignored");
                None
            }
            None => {
                tracing::trace!("gesture ignored, no session");
                None
            }
        }
    }

    /// Begins a session over `deck`, discarding any previous one.
    pub fn start_session(&mut self, deck: Deck) -> Vec<Action> {
        let started_at = self.clock.now();
        tracing::debug!(items = deck.len(), %started_at, "session started");

        self.session = Some(SessionState::new(deck, started_at));
        vec![Action::PrayerStarted, Action::Render(StackVisuals::REST)]
    }

    /// Finger down on the active card.
    pub fn on_drag_start(&mut self) -> Vec<Action> {
        if self.accepting().is_none() {
            return vec![];
        }
        vec![Action::Render(self.mapper.drag_start_visuals())]
    }

    /// Finger moved to offset `(dx, dy)` from where the drag began.
    pub fn on_drag_update(&mut self, dx: f64, dy: f64) -> Vec<Action> {
        if self.accepting().is_none() {
            return vec![];
        }
        vec![Action::Render(self.mapper.drag_visuals(dx, dy))]
    }

    /// Finger lifted at offset `dx` moving at `velocity_x`.
    pub fn on_drag_end(&mut self, dx: f64, velocity_x: f64) -> Vec<Action> {
        let mapper = self.mapper;
        let now = self.clock.now();
        let Some(state) = self.accepting() else {
            return vec![];
        };

        let release = mapper.release(&DragSample::new(dx, 0.0, velocity_x));
        let mut actions = vec![Action::Animate {
            targets: release.targets,
            animation: release.animation,
        }];

        let GestureDecision::Commit(direction) = release.decision else {
            tracing::trace!(dx, velocity_x, cursor = state.cursor(), "drag cancelled");
            return actions;
        };

        let item_id = state.current_item().map_or(0, |item| item.id);
        actions.push(Action::CardDismissed { item_id, direction });

        match state.advance() {
            SessionPhase::Transitioning(cursor) => {
                tracing::debug!(item_id, ?direction, cursor, "card prayed for");
                actions.push(Action::Advanced { cursor });
            }
            SessionPhase::Complete => {
                let summary = state.summary(now);
                tracing::debug!(
                    prayed = summary.prayed_count,
                    seconds = summary.duration_seconds,
                    "session complete"
                );
                actions.push(Action::SessionComplete(summary));
                actions.push(Action::PrayerEnded);
            }
            phase => {
                tracing::debug!(?phase, "advance had no effect");
            }
        }

        actions
    }

    /// The view finished the exit animation; the next card becomes interactive.
    pub fn on_transition_settled(&mut self) -> Vec<Action> {
        let Some(state) = self.session.as_mut() else {
            return vec![];
        };
        if !state.settle() {
            return vec![];
        }
        tracing::trace!(cursor = state.cursor(), "transition settled");
        vec![Action::Render(StackVisuals::REST)]
    }

    /// The user chose to stop before the deck ran out.
    pub fn end_session_early(&mut self) -> Vec<Action> {
        let now = self.clock.now();
        let Some(state) = self.session.as_mut() else {
            return vec![];
        };
        if !state.end_early() {
            return vec![];
        }

        let summary = state.summary(now);
        tracing::debug!(
            prayed = summary.prayed_count,
            seconds = summary.duration_seconds,
            "session ended early"
        );
        vec![Action::SessionEndedEarly(summary), Action::PrayerEnded]
    }

    /// Presentation snapshot of the session as of now.
    #[must_use]
    pub fn view_model(&self) -> Option<SessionViewModel> {
        self.session
            .as_ref()
            .map(|state| SessionViewModel::from_state(state, self.clock.now()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::clock::ManualClock;
    use crate::app::SessionSummary;
    use crate::gesture::Direction;
    use crate::storage::{DeckSource, SampleDeck};
    use chrono::Utc;

    fn controller() -> SessionController<ManualClock> {
        let mapper = SwipeMapper::for_width(400.0).unwrap();
        let mut c = SessionController::with_clock(mapper, ManualClock::new(Utc::now()));
        c.start_session(SampleDeck.load().unwrap());
        c
    }

    fn cursor(c: &SessionController<ManualClock>) -> usize {
        c.session().unwrap().cursor()
    }

    #[test]
    fn idle_controller_ignores_gestures() {
        let mapper = SwipeMapper::for_width(400.0).unwrap();
        let mut c = SessionController::new(mapper);
        assert!(c.on_drag_start().is_empty());
        assert!(c.on_drag_end(300.0, 0.0).is_empty());
        assert!(c.end_session_early().is_empty());
        assert!(c.phase().is_none());
    }

    #[test]
    fn start_announces_prayer() {
        let c = controller();
        assert_eq!(c.phase(), Some(SessionPhase::Active(0)));
    }

    #[test]
    fn drag_update_renders_without_advancing() {
        let mut c = controller();
        let actions = c.on_drag_update(80.0, 10.0);
        assert_eq!(actions.len(), 1);
        assert!(actions[0].is_visual());
        assert_eq!(cursor(&c), 0);
    }

    #[test]
    fn cancel_snaps_back_and_keeps_cursor() {
        let mut c = controller();
        let actions = c.on_drag_end(50.0, 800.0);
        assert_eq!(actions.len(), 1);
        assert!(matches!(
            actions[0],
            Action::Animate { targets, .. } if targets == StackVisuals::REST
        ));
        assert_eq!(c.phase(), Some(SessionPhase::Active(0)));
    }

    #[test]
    fn commit_advances_and_guards() {
        let mut c = controller();
        let actions = c.on_drag_end(-130.0, 0.0);
        assert!(actions.contains(&Action::CardDismissed {
            item_id: 1,
            direction: Direction::Left
        }));
        assert!(actions.contains(&Action::Advanced { cursor: 1 }));
        assert_eq!(c.phase(), Some(SessionPhase::Transitioning(1)));

        assert!(c.on_drag_start().is_empty());
        assert!(c.on_drag_update(300.0, 0.0).is_empty());
        assert!(c.on_drag_end(300.0, 0.0).is_empty());
        assert_eq!(cursor(&c), 1);

        assert_eq!(c.on_transition_settled(), vec![Action::Render(StackVisuals::REST)]);
        assert!(c.on_transition_settled().is_empty());
        assert_eq!(c.phase(), Some(SessionPhase::Active(1)));
    }

    #[test]
    fn settle_reopens_gestures_only_after_a_commit() {
        let mapper = SwipeMapper::for_width(400.0).unwrap();
        let mut idle = SessionController::new(mapper);
        assert!(idle.on_transition_settled().is_empty());

        let mut c = controller();
        assert!(c.on_transition_settled().is_empty());
        assert_eq!(c.phase(), Some(SessionPhase::Active(0)));

        c.on_drag_end(200.0, 0.0);
        assert!(c.session().unwrap().transition_in_progress());
        assert_eq!(c.on_transition_settled(), vec![Action::Render(StackVisuals::REST)]);
        assert!(!c.session().unwrap().transition_in_progress());
        assert_eq!(c.on_drag_update(10.0, 0.0).len(), 1);
    }

    #[test]
    fn final_commit_completes_with_duration() {
        let mut c = controller();
        for _ in 0..5 {
            c.on_drag_end(200.0, 0.0);
            c.on_transition_settled();
        }
        c.clock().advance_secs(240);

        let actions = c.on_drag_end(-200.0, 0.0);
        assert!(actions.contains(&Action::SessionComplete(SessionSummary {
            prayed_count: 6,
            duration_seconds: 240,
        })));
        assert_eq!(actions.last(), Some(&Action::PrayerEnded));
        assert_eq!(c.phase(), Some(SessionPhase::Complete));

        assert!(c.on_drag_end(-200.0, 0.0).is_empty());
        assert!(c.end_session_early().is_empty());
    }

    #[test]
    fn end_early_reports_cursor() {
        let mut c = controller();
        c.on_drag_end(200.0, 0.0);
        c.on_transition_settled();
        c.on_drag_end(0.0, 1500.0);
        c.clock().advance_secs(61);

        let actions = c.end_session_early();
        assert_eq!(
            actions,
            vec![
                Action::SessionEndedEarly(SessionSummary {
                    prayed_count: 2,
                    duration_seconds: 61,
                }),
                Action::PrayerEnded,
            ]
        );
        assert_eq!(c.phase(), Some(SessionPhase::EndedEarly));
        assert!(c.end_session_early().is_empty());
    }
}
