//! Application layer: the prayer-session state machine.
//!
//! This module sits between the presenting screen and the pure gesture and
//! domain layers. Data flows one way:
//!
//! ```text
//! Touch input → Event → handle_event → SessionController ─┬─▶ SwipeMapper (pure decision)
//!                                                         └─▶ SessionState (apply)
//!                                      Vec<Action> ◀──────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Outbound commands for the view and runtime
//! - [`clock`]: Wall-clock abstraction for session timing
//! - [`controller`]: Applies decisions, owns the transition guard
//! - [`handler`]: Event enum and dispatcher
//! - [`modes`]: Session phase types
//! - [`state`]: Session progress and summary

pub mod actions;
pub mod clock;
pub mod controller;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use clock::{Clock, ManualClock, SystemClock};
pub use controller::SessionController;
pub use handler::{handle_event, Event};
pub use modes::{SessionOutcome, SessionPhase};
pub use state::{SessionState, SessionSummary};
