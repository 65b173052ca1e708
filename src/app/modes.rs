//! Session phase types.
//!
//! The controller is a small state machine over a fixed deck:
//!
//! ```text
//!            Commit (cursor+1 < len)
//!   Active(c) ───────────────────────▶ Transitioning(c+1) ──settled──▶ Active(c+1)
//!      │  ▲                                                     
//!      │  └── Cancel (self-loop)                                
//!      │
//!      ├── Commit (cursor+1 == len) ──▶ Complete
//!      └── end early ─────────────────▶ EndedEarly
//! ```
//!
//! `Transitioning` is `Active` with the transition guard raised: gesture input
//! is ignored until the view reports that the exit animation has finished.

use serde::Serialize;

/// Where a session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", content = "cursor", rename_all = "snake_case")]
pub enum SessionPhase {
    /// Accepting gestures on the card at `cursor`.
    Active(usize),
    /// Cursor already advanced to the given index; waiting for the exit
    /// animation to settle before accepting gestures again.
    Transitioning(usize),
    /// Every card was prayed for.
    Complete,
    /// The user ended the session before the deck ran out.
    EndedEarly,
}

impl SessionPhase {
    /// Whether the session can still change.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Complete | Self::EndedEarly)
    }

    /// Whether gesture input is currently accepted.
    #[must_use]
    pub const fn accepts_gestures(self) -> bool {
        matches!(self, Self::Active(_))
    }
}

/// How a session finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionOutcome {
    Complete,
    EndedEarly,
}
