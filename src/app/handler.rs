//! Event dispatch for the presenting screen.
//!
//! The screen translates its own input (touch events, button taps) into
//! [`Event`]s and feeds them to [`handle_event`], which routes each one to the
//! matching [`SessionController`] operation. The returned flag tells the screen
//! whether anything it draws may have changed.
//!
//! # Example
//!
//! ```rust
//! use prayer_deck::app::{handle_event, Event, SessionController};
//! use prayer_deck::gesture::SwipeMapper;
//! use prayer_deck::storage::{DeckSource, SampleDeck};
//!
//! let mut controller = SessionController::new(SwipeMapper::for_width(400.0)?);
//! let items = SampleDeck.load()?.iter().cloned().collect();
//! handle_event(&mut controller, &Event::StartSession { items })?;
//!
//! let (changed, actions) = handle_event(&mut controller, &Event::DragEnd { dx: 50.0, velocity_x: 800.0 })?;
//! assert!(changed);
//! assert_eq!(actions.len(), 1); // snap back
//! # Ok::<(), prayer_deck::PrayerDeckError>(())
//! ```

use super::actions::Action;
use super::clock::Clock;
use super::controller::SessionController;
use crate::domain::error::Result;
use crate::domain::{Deck, PrayerItem};

/// Inbound messages from the screen.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Begin a session over `items`, in presentation order.
    StartSession { items: Vec<PrayerItem> },
    /// Finger down on the active card.
    DragStart,
    /// Finger moved; offsets are relative to the drag origin.
    DragUpdate { dx: f64, dy: f64 },
    /// Finger lifted.
    DragEnd { dx: f64, velocity_x: f64 },
    /// The exit animation of the last committed card finished.
    TransitionSettled,
    /// The user asked to end the session now.
    EndSessionEarly,
}

/// Processes an event and returns `(needs_render, actions)`.
///
/// Gesture events arriving while a transition is in flight, after the session
/// has finished, or before any session started are dropped silently and yield
/// `(false, [])`.
///
/// # Errors
///
/// [`Event::StartSession`] fails with
/// [`PrayerDeckError::EmptyDeck`](crate::PrayerDeckError::EmptyDeck) or
/// [`PrayerDeckError::DuplicateItem`](crate::PrayerDeckError::DuplicateItem)
/// when the items do not form a valid deck. No other event fails.
pub fn handle_event<C: Clock>(
    controller: &mut SessionController<C>,
    event: &Event,
) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = event_name(event)).entered();

    let actions = match event {
        Event::StartSession { items } => {
            let deck = Deck::new(items.clone())?;
            controller.start_session(deck)
        }
        Event::DragStart => controller.on_drag_start(),
        Event::DragUpdate { dx, dy } => controller.on_drag_update(*dx, *dy),
        Event::DragEnd { dx, velocity_x } => controller.on_drag_end(*dx, *velocity_x),
        Event::TransitionSettled => controller.on_transition_settled(),
        Event::EndSessionEarly => controller.end_session_early(),
    };

    Ok((!actions.is_empty(), actions))
}

/// Short event label for spans; drag updates are too frequent to log in full.
const fn event_name(event: &Event) -> &'static str {
    match event {
        Event::StartSession { .. } => "start_session",
        Event::DragStart => "drag_start",
        Event::DragUpdate { .. } => "drag_update",
        Event::DragEnd { .. } => "drag_end",
        Event::TransitionSettled => "transition_settled",
        Event::EndSessionEarly => "end_session_early",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PrayerDeckError;
    use crate::gesture::SwipeMapper;

    #[test]
    fn empty_items_are_rejected() {
        let mut c = SessionController::new(SwipeMapper::for_width(400.0).unwrap());
        let err = handle_event(&mut c, &Event::StartSession { items: vec![] }).unwrap_err();
        assert!(matches!(err, PrayerDeckError::EmptyDeck));
        assert!(c.session().is_none());
    }

    #[test]
    fn suppressed_input_needs_no_render() {
        let mut c = SessionController::new(SwipeMapper::for_width(400.0).unwrap());
        let (changed, actions) =
            handle_event(&mut c, &Event::DragUpdate { dx: 5.0, dy: 0.0 }).unwrap();
        assert!(!changed);
        assert!(actions.is_empty());
    }
}
