//! Outbound messages from the session controller to the presenting screen.
//!
//! The controller never draws or animates anything itself. Every inbound call
//! returns a `Vec<Action>` that the runtime applies in order: render a frame,
//! start an animation, or react to a session milestone.
//!
//! # Example
//!
//! ```rust
//! use prayer_deck::app::Action;
//! use prayer_deck::gesture::StackVisuals;
//!
//! let actions = vec![Action::PrayerStarted, Action::Render(StackVisuals::REST)];
//! assert!(actions[1].is_visual());
//! ```

use super::state::SessionSummary;
use crate::gesture::{Animation, Direction, StackVisuals};
use serde::Serialize;

/// Commands emitted by the controller for the view and the runtime.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Set the stack to these values immediately (per-frame drag feedback).
    Render(StackVisuals),

    /// Animate the stack from its current values to `targets`.
    Animate {
        targets: StackVisuals,
        animation: Animation,
    },

    /// A committed card is leaving the screen.
    ///
    /// Followed by either [`Action::Advanced`] or [`Action::SessionComplete`].
    CardDismissed {
        /// Identifier of the card that was prayed for.
        item_id: u32,
        direction: Direction,
    },

    /// The cursor moved to `cursor`. Gestures stay blocked until the view
    /// reports the exit animation has settled.
    Advanced { cursor: usize },

    /// Every card in the deck was prayed for.
    SessionComplete(SessionSummary),

    /// The user ended the session before the deck ran out.
    SessionEndedEarly(SessionSummary),

    /// A session began; the notification scheduler should stop prompting.
    PrayerStarted,

    /// A session finished; the notification scheduler may prompt again.
    PrayerEnded,
}

impl Action {
    /// Whether this action only changes what is drawn.
    #[must_use]
    pub const fn is_visual(&self) -> bool {
        matches!(self, Self::Render(_) | Self::Animate { .. })
    }
}
