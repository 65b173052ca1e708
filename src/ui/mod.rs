//! Presentation layer: view model and text renderer.
//!
//! ```text
//! SessionState → SessionViewModel::from_state → render_text → String
//! ```
//!
//! Animation of the card stack is driven by [`crate::app::Action`]s, not by
//! this module; here only the static screen content is derived.
//!
//! # Modules
//!
//! - [`viewmodel`]: Header, progress, visible cards, completion banner
//! - [`renderer`]: Plain-text rendering

pub mod renderer;
pub mod viewmodel;

pub use renderer::render_text;
pub use viewmodel::{CardView, CompletionBanner, HeaderInfo, ProgressInfo, SessionViewModel};
