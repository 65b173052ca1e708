//! Gesture layer: from raw drag samples to decisions and visual targets.
//!
//! Nothing in this module mutates session state. The controller in
//! [`crate::app`] asks the mapper for a decision and applies it separately.
//!
//! # Modules
//!
//! - [`interpolate`]: Clamped piecewise-linear interpolation
//! - [`mapper`]: Threshold/velocity decision and drag-driven visuals
//! - [`visuals`]: Visual parameter bundles and animation descriptors

pub mod interpolate;
pub mod mapper;
pub mod visuals;

pub use interpolate::{interpolate, lerp_progress};
pub use mapper::{
    Direction, DragSample, GestureConfig, GestureDecision, Release, SwipeMapper,
    DEFAULT_COMMIT_VELOCITY, DEFAULT_SCREEN_WIDTH, DEFAULT_THRESHOLD_RATIO,
};
pub use visuals::{Animation, CardVisuals, PreviewVisuals, SpringParams, StackVisuals};
