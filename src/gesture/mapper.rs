//! Gesture-to-transition mapper.
//!
//! Converts a horizontal drag into visual parameters while the finger is down,
//! and into a [`GestureDecision`] plus animation targets on release. The mapper
//! holds only configuration; every method is a pure function of its input, so
//! the controller decides *what* happens and the view decides *how* it looks.
//!
//! # Release rule
//!
//! ```text
//! commit  ⇔  |dx| > threshold  ∨  |velocity_x| > commit_velocity
//! threshold = screen_width × threshold_ratio
//! direction = Right if dx > 0 else Left
//! ```

use super::interpolate::{interpolate, lerp_progress};
use super::visuals::{Animation, CardVisuals, PreviewVisuals, StackVisuals};
use crate::domain::error::{PrayerDeckError, Result};
use serde::{Deserialize, Serialize};

/// Fraction of the screen width a drag must exceed to commit.
pub const DEFAULT_THRESHOLD_RATIO: f64 = 0.3;

/// Release velocity (offset units per second) that commits regardless of distance.
pub const DEFAULT_COMMIT_VELOCITY: f64 = 1200.0;

/// Screen width assumed when none is configured.
pub const DEFAULT_SCREEN_WIDTH: f64 = 400.0;

/// Vertical drag is damped to a cosmetic drift.
const VERTICAL_DAMPING: f64 = 0.1;

/// Rotation reached at a full screen-width drag.
const MAX_DRAG_ROTATION_DEG: f64 = 30.0;

/// Scale of the active card while held.
const LIFT_SCALE: f64 = 1.05;

/// Opacity of the active card at full swipe progress.
const MIN_DRAG_OPACITY: f64 = 0.6;

const EXIT_DISTANCE_FACTOR: f64 = 1.5;
const EXIT_ROTATION_DEG: f64 = 60.0;
const EXIT_SCALE: f64 = 0.7;
const EXIT_DURATION_MS: u64 = 500;

/// Horizontal swipe direction of a committed card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// `-1.0` for left, `1.0` for right.
    #[must_use]
    pub const fn sign(self) -> f64 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

/// Outcome of a drag release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", content = "direction", rename_all = "lowercase")]
pub enum GestureDecision {
    /// Card returns to rest; the session does not advance.
    Cancel,
    /// Card leaves the screen in the given direction; the session advances.
    Commit(Direction),
}

/// Drag sample taken at release. Never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSample {
    pub dx: f64,
    pub dy: f64,
    /// Instantaneous horizontal velocity, in offset units per second.
    pub velocity_x: f64,
}

impl DragSample {
    #[must_use]
    pub const fn new(dx: f64, dy: f64, velocity_x: f64) -> Self {
        Self { dx, dy, velocity_x }
    }
}

/// Decision and animation targets produced at release.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Release {
    pub decision: GestureDecision,
    pub targets: StackVisuals,
    pub animation: Animation,
}

/// Tunable mapper parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Width of the card area in offset units.
    pub screen_width: f64,
    /// Fraction of `screen_width` beyond which a release commits.
    pub threshold_ratio: f64,
    /// Release speed beyond which a release commits.
    pub commit_velocity: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            screen_width: DEFAULT_SCREEN_WIDTH,
            threshold_ratio: DEFAULT_THRESHOLD_RATIO,
            commit_velocity: DEFAULT_COMMIT_VELOCITY,
        }
    }
}

impl GestureConfig {
    /// Default parameters for a given screen width.
    #[must_use]
    pub fn for_width(screen_width: f64) -> Self {
        Self {
            screen_width,
            ..Self::default()
        }
    }
}

/// Pure mapping from drag input to visuals and decisions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeMapper {
    config: GestureConfig,
}

impl SwipeMapper {
    /// Validates the configuration and builds a mapper.
    ///
    /// # Errors
    ///
    /// Returns [`PrayerDeckError::InvalidConfig`] when the screen width is not a
    /// positive finite number, the threshold ratio lies outside `(0, 1]`, or the
    /// commit velocity is not positive.
    pub fn new(config: GestureConfig) -> Result<Self> {
        if !(config.screen_width.is_finite() && config.screen_width > 0.0) {
            return Err(PrayerDeckError::InvalidConfig(format!(
                "screen width must be positive, got {}",
                config.screen_width
            )));
        }
        if !(config.threshold_ratio > 0.0 && config.threshold_ratio <= 1.0) {
            return Err(PrayerDeckError::InvalidConfig(format!(
                "threshold ratio must be in (0, 1], got {}",
                config.threshold_ratio
            )));
        }
        if !(config.commit_velocity.is_finite() && config.commit_velocity > 0.0) {
            return Err(PrayerDeckError::InvalidConfig(format!(
                "commit velocity must be positive, got {}",
                config.commit_velocity
            )));
        }
        Ok(Self { config })
    }

    /// Mapper with default parameters for `screen_width`.
    ///
    /// # Errors
    ///
    /// See [`SwipeMapper::new`].
    pub fn for_width(screen_width: f64) -> Result<Self> {
        Self::new(GestureConfig::for_width(screen_width))
    }

    #[must_use]
    pub const fn config(&self) -> &GestureConfig {
        &self.config
    }

    #[must_use]
    pub fn screen_width(&self) -> f64 {
        self.config.screen_width
    }

    /// Distance a release must exceed to commit.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.config.screen_width * self.config.threshold_ratio
    }

    /// `min(|dx| / threshold, 1)`.
    #[must_use]
    pub fn swipe_progress(&self, dx: f64) -> f64 {
        (dx.abs() / self.threshold()).min(1.0)
    }

    /// Card rotation for a horizontal offset, clamped to ±30°.
    #[must_use]
    pub fn rotation(&self, dx: f64) -> f64 {
        let w = self.config.screen_width;
        interpolate(
            dx,
            &[-w, 0.0, w],
            &[-MAX_DRAG_ROTATION_DEG, 0.0, MAX_DRAG_ROTATION_DEG],
        )
    }

    /// Stack as the finger lands: active card lifted, previews at rest.
    #[must_use]
    pub fn drag_start_visuals(&self) -> StackVisuals {
        StackVisuals {
            active: CardVisuals {
                scale: LIFT_SCALE,
                ..CardVisuals::REST
            },
            ..StackVisuals::REST
        }
    }

    /// Stack for an in-progress drag at offset `(dx, dy)`.
    #[must_use]
    pub fn drag_visuals(&self, dx: f64, dy: f64) -> StackVisuals {
        let progress = self.swipe_progress(dx);

        StackVisuals {
            active: CardVisuals {
                translate_x: dx,
                translate_y: dy * VERTICAL_DAMPING,
                rotation_deg: self.rotation(dx),
                scale: LIFT_SCALE,
                opacity: lerp_progress(progress, 1.0, MIN_DRAG_OPACITY),
            },
            next: PreviewVisuals {
                scale: lerp_progress(
                    progress,
                    PreviewVisuals::NEXT_REST.scale,
                    PreviewVisuals::FRONT.scale,
                ),
                opacity: lerp_progress(
                    progress,
                    PreviewVisuals::NEXT_REST.opacity,
                    PreviewVisuals::FRONT.opacity,
                ),
            },
            third: PreviewVisuals {
                scale: lerp_progress(
                    progress,
                    PreviewVisuals::THIRD_REST.scale,
                    PreviewVisuals::NEXT_REST.scale,
                ),
                opacity: lerp_progress(
                    progress,
                    PreviewVisuals::THIRD_REST.opacity,
                    PreviewVisuals::NEXT_REST.opacity,
                ),
            },
        }
    }

    /// Commit or cancel for a release sample.
    #[must_use]
    pub fn decide(&self, sample: &DragSample) -> GestureDecision {
        let past_threshold = sample.dx.abs() > self.threshold();
        let flung = sample.velocity_x.abs() > self.config.commit_velocity;

        if past_threshold || flung {
            let direction = if sample.dx > 0.0 {
                Direction::Right
            } else {
                Direction::Left
            };
            GestureDecision::Commit(direction)
        } else {
            GestureDecision::Cancel
        }
    }

    /// Exit targets for a card committed in `direction`.
    #[must_use]
    pub fn exit_visuals(&self, direction: Direction) -> StackVisuals {
        let sign = direction.sign();
        StackVisuals {
            active: CardVisuals {
                translate_x: sign * self.config.screen_width * EXIT_DISTANCE_FACTOR,
                translate_y: 0.0,
                rotation_deg: sign * EXIT_ROTATION_DEG,
                scale: EXIT_SCALE,
                opacity: 0.0,
            },
            next: PreviewVisuals::FRONT,
            third: PreviewVisuals::NEXT_REST,
        }
    }

    /// Decision plus the animation the view should run for it.
    #[must_use]
    pub fn release(&self, sample: &DragSample) -> Release {
        let decision = self.decide(sample);
        match decision {
            GestureDecision::Cancel => Release {
                decision,
                targets: StackVisuals::REST,
                animation: Animation::SNAP_BACK,
            },
            GestureDecision::Commit(direction) => Release {
                decision,
                targets: self.exit_visuals(direction),
                animation: Animation::Timing {
                    duration_ms: EXIT_DURATION_MS,
                },
            },
        }
    }
}
