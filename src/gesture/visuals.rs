//! Visual parameter bundles for the three visible cards.
//!
//! The controller emits these as render or animation targets; the view layer
//! applies them. Values are plain numbers so any renderer can consume them.

use serde::Serialize;

/// Transform and opacity of the active (top) card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CardVisuals {
    pub translate_x: f64,
    pub translate_y: f64,
    /// Rotation in degrees, positive is clockwise.
    pub rotation_deg: f64,
    pub scale: f64,
    pub opacity: f64,
}

impl CardVisuals {
    /// Active card at rest.
    pub const REST: Self = Self {
        translate_x: 0.0,
        translate_y: 0.0,
        rotation_deg: 0.0,
        scale: 1.0,
        opacity: 1.0,
    };
}

/// Scale and opacity of a preview card stacked behind the active one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PreviewVisuals {
    pub scale: f64,
    pub opacity: f64,
}

impl PreviewVisuals {
    /// Second card at rest.
    pub const NEXT_REST: Self = Self { scale: 0.94, opacity: 0.7 };

    /// Third card at rest.
    pub const THIRD_REST: Self = Self { scale: 0.88, opacity: 0.5 };

    /// A preview promoted to the front position.
    pub const FRONT: Self = Self { scale: 1.0, opacity: 1.0 };
}

/// Complete visual state of the card stack for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StackVisuals {
    pub active: CardVisuals,
    pub next: PreviewVisuals,
    pub third: PreviewVisuals,
}

impl StackVisuals {
    /// Resting stack: active card centred, previews at their resting ranks.
    pub const REST: Self = Self {
        active: CardVisuals::REST,
        next: PreviewVisuals::NEXT_REST,
        third: PreviewVisuals::THIRD_REST,
    };
}

impl Default for StackVisuals {
    fn default() -> Self {
        Self::REST
    }
}

/// Spring physics for one group of visual parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpringParams {
    pub damping: f64,
    pub stiffness: f64,
}

impl SpringParams {
    /// Stiff spring for position and rotation.
    pub const TRANSFORM: Self = Self {
        damping: 25.0,
        stiffness: 400.0,
    };

    /// Softer spring for scale and opacity.
    pub const FADE: Self = Self {
        damping: 20.0,
        stiffness: 200.0,
    };
}

/// How the view should move from the current values to a target bundle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Animation {
    /// Physics springs, used to snap a cancelled card back. `transform`
    /// drives translation and rotation; `fade` drives scale and opacity of
    /// the active card and both previews.
    Spring {
        transform: SpringParams,
        fade: SpringParams,
    },
    /// Fixed-duration timing curve, used for the exit of a committed card.
    Timing { duration_ms: u64 },
}

impl Animation {
    /// Springs used when a drag is cancelled.
    pub const SNAP_BACK: Self = Self::Spring {
        transform: SpringParams::TRANSFORM,
        fade: SpringParams::FADE,
    };
}
