use std::sync::Arc;

/// A callback fired with the newly centered item index.
pub type OnCenteredChange = Arc<dyn Fn(usize) + Send + Sync>;

/// Spring stiffness.
pub const DEFAULT_TENSION: f32 = 390.0;
/// Spring damping.
pub const DEFAULT_FRICTION: f32 = 36.0;
pub const DEFAULT_MASS: f32 = 1.0;
/// Largest integration step (ms); longer frames are clamped to it.
pub const DEFAULT_MAX_STEP_MS: f32 = 16.0;
/// Distance to target (px) below which a settle may end.
pub const DEFAULT_POSITION_EPSILON: f32 = 0.5;
/// Spring velocity below which a settle may end.
pub const DEFAULT_VELOCITY_EPSILON: f32 = 0.01;
/// Frames after which a settle is force-terminated.
pub const DEFAULT_MAX_ITERATIONS: u32 = 800;
/// Release velocity multiplier used to seed the spring.
pub const DEFAULT_RELEASE_VELOCITY_SCALE: f32 = 1.7;
/// Clamp for the seeded spring velocity.
pub const DEFAULT_MAX_RELEASE_VELOCITY: f32 = 0.72;

/// Fraction of overscroll that is actually applied past a boundary.
pub const DEFAULT_RESISTANCE: f32 = 0.16;
/// Extra horizontal scale of the boundary item at full stretch.
pub const DEFAULT_MAX_STRETCH: f32 = 0.075;
/// Raw overscroll (px) at which the stretch reaches its maximum.
pub const DEFAULT_STRETCH_DISTANCE: f32 = 84.0;
/// Per-frame interpolation factor toward the stretch target.
pub const DEFAULT_STRETCH_BLEND: f32 = 0.22;
/// Vertical squash relative to horizontal stretch.
pub const DEFAULT_STRETCH_SQUASH: f32 = 0.18;

/// Release speed (px/ms) above which a swipe always steps one item.
pub const DEFAULT_VELOCITY_THRESHOLD: f32 = 0.06;
/// Minimum speed (px/ms) for a release to have a direction.
pub const DEFAULT_DIRECTION_THRESHOLD: f32 = 0.015;
/// Drag distance (px) above which a swipe always steps one item.
pub const DEFAULT_MIN_DRAG_DISTANCE: f32 = 30.0;
/// Projects release velocity into a look-ahead distance.
pub const DEFAULT_MOMENTUM_MULTIPLIER: f32 = 35.0;
/// Fraction of one item pitch the projected momentum must exceed to force a step.
pub const DEFAULT_MOMENTUM_STEP_FRACTION: f32 = 0.35;
/// Assumed gap between items when estimating the item pitch.
pub const DEFAULT_ITEM_GAP: f32 = 20.0;

pub const DEFAULT_MAX_ROTATION_DEG: f32 = 22.0;
pub const DEFAULT_MIN_SCALE: f32 = 0.82;
pub const DEFAULT_MIN_OPACITY: f32 = 0.7;
pub const DEFAULT_PERSPECTIVE: f32 = 1200.0;

/// Vertical wheel delta to horizontal offset.
pub const DEFAULT_WHEEL_FACTOR: f32 = 0.5;
/// Distance (px) from an item center that triggers the follow-up magnet after a settle.
pub const DEFAULT_SETTLE_RECENTER_EPSILON: f32 = 1.5;
/// Distance (px) from an item center that triggers an idle recenter.
pub const DEFAULT_IDLE_RECENTER_EPSILON: f32 = 3.0;

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpringConfig {
    pub tension: f32,
    pub friction: f32,
    pub mass: f32,
    pub max_step_ms: f32,
    pub position_epsilon: f32,
    pub velocity_epsilon: f32,
    pub max_iterations: u32,
    pub release_velocity_scale: f32,
    pub max_release_velocity: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            tension: DEFAULT_TENSION,
            friction: DEFAULT_FRICTION,
            mass: DEFAULT_MASS,
            max_step_ms: DEFAULT_MAX_STEP_MS,
            position_epsilon: DEFAULT_POSITION_EPSILON,
            velocity_epsilon: DEFAULT_VELOCITY_EPSILON,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            release_velocity_scale: DEFAULT_RELEASE_VELOCITY_SCALE,
            max_release_velocity: DEFAULT_MAX_RELEASE_VELOCITY,
        }
    }
}

impl SpringConfig {
    pub fn with_tension(mut self, tension: f32) -> Self {
        self.tension = tension;
        self
    }

    pub fn with_friction(mut self, friction: f32) -> Self {
        self.friction = friction;
        self
    }

    pub fn with_mass(mut self, mass: f32) -> Self {
        self.mass = mass;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Spring velocity seeded from a release velocity (px/ms).
    pub fn seed_velocity(&self, release_velocity: f32) -> f32 {
        let max = self.max_release_velocity.abs();
        (release_velocity * self.release_velocity_scale).clamp(-max, max)
    }
}

/// Edge resistance and boundary-item stretch.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StretchConfig {
    /// In `(0, 1)`.
    pub resistance: f32,
    pub max_stretch: f32,
    pub stretch_distance: f32,
    pub blend: f32,
    pub squash: f32,
}

impl Default for StretchConfig {
    fn default() -> Self {
        Self {
            resistance: DEFAULT_RESISTANCE,
            max_stretch: DEFAULT_MAX_STRETCH,
            stretch_distance: DEFAULT_STRETCH_DISTANCE,
            blend: DEFAULT_STRETCH_BLEND,
            squash: DEFAULT_STRETCH_SQUASH,
        }
    }
}

impl StretchConfig {
    pub fn with_resistance(mut self, resistance: f32) -> Self {
        self.resistance = resistance;
        self
    }

    pub fn with_max_stretch(mut self, max_stretch: f32) -> Self {
        self.max_stretch = max_stretch;
        self
    }

    pub fn with_blend(mut self, blend: f32) -> Self {
        self.blend = blend;
        self
    }
}

/// Release target selection.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SnapConfig {
    pub velocity_threshold: f32,
    pub direction_threshold: f32,
    pub min_drag_distance: f32,
    pub momentum_multiplier: f32,
    pub momentum_step_fraction: f32,
    pub item_gap: f32,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            velocity_threshold: DEFAULT_VELOCITY_THRESHOLD,
            direction_threshold: DEFAULT_DIRECTION_THRESHOLD,
            min_drag_distance: DEFAULT_MIN_DRAG_DISTANCE,
            momentum_multiplier: DEFAULT_MOMENTUM_MULTIPLIER,
            momentum_step_fraction: DEFAULT_MOMENTUM_STEP_FRACTION,
            item_gap: DEFAULT_ITEM_GAP,
        }
    }
}

impl SnapConfig {
    pub fn with_velocity_threshold(mut self, velocity_threshold: f32) -> Self {
        self.velocity_threshold = velocity_threshold;
        self
    }

    pub fn with_min_drag_distance(mut self, min_drag_distance: f32) -> Self {
        self.min_drag_distance = min_drag_distance;
        self
    }

    pub fn with_momentum_multiplier(mut self, momentum_multiplier: f32) -> Self {
        self.momentum_multiplier = momentum_multiplier;
        self
    }
}

/// Per-item perspective styling.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransformConfig {
    pub max_rotation_deg: f32,
    pub min_scale: f32,
    pub min_opacity: f32,
    pub perspective: f32,
    pub centered_depth: f32,
    pub side_depth: f32,
    /// An item counts as centered when its center is within `width / centered_ratio` of the
    /// viewport center.
    pub centered_ratio: f32,
    pub centered_z_index: i32,
    /// z-index of an item right next to center; decreases to 0 with distance.
    pub side_z_index: i32,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            max_rotation_deg: DEFAULT_MAX_ROTATION_DEG,
            min_scale: DEFAULT_MIN_SCALE,
            min_opacity: DEFAULT_MIN_OPACITY,
            perspective: DEFAULT_PERSPECTIVE,
            centered_depth: 25.0,
            side_depth: -8.0,
            centered_ratio: 2.5,
            centered_z_index: 10,
            side_z_index: 5,
        }
    }
}

impl TransformConfig {
    pub fn with_max_rotation_deg(mut self, max_rotation_deg: f32) -> Self {
        self.max_rotation_deg = max_rotation_deg;
        self
    }

    pub fn with_min_scale(mut self, min_scale: f32) -> Self {
        self.min_scale = min_scale;
        self
    }

    pub fn with_min_opacity(mut self, min_opacity: f32) -> Self {
        self.min_opacity = min_opacity;
        self
    }
}

/// Configuration for [`crate::Carousel`].
///
/// The defaults are tuned constants, not derived from a physical model.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselOptions {
    pub spring: SpringConfig,
    pub stretch: StretchConfig,
    pub snap: SnapConfig,
    pub transform: TransformConfig,
    pub wheel_factor: f32,
    pub settle_recenter_epsilon: f32,
    pub idle_recenter_epsilon: f32,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            spring: SpringConfig::default(),
            stretch: StretchConfig::default(),
            snap: SnapConfig::default(),
            transform: TransformConfig::default(),
            wheel_factor: DEFAULT_WHEEL_FACTOR,
            settle_recenter_epsilon: DEFAULT_SETTLE_RECENTER_EPSILON,
            idle_recenter_epsilon: DEFAULT_IDLE_RECENTER_EPSILON,
        }
    }
}

impl CarouselOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_spring(mut self, spring: SpringConfig) -> Self {
        self.spring = spring;
        self
    }

    pub fn with_stretch(mut self, stretch: StretchConfig) -> Self {
        self.stretch = stretch;
        self
    }

    pub fn with_snap(mut self, snap: SnapConfig) -> Self {
        self.snap = snap;
        self
    }

    pub fn with_transform(mut self, transform: TransformConfig) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_wheel_factor(mut self, wheel_factor: f32) -> Self {
        self.wheel_factor = wheel_factor;
        self
    }

    pub fn with_settle_recenter_epsilon(mut self, epsilon: f32) -> Self {
        self.settle_recenter_epsilon = epsilon;
        self
    }

    pub fn with_idle_recenter_epsilon(mut self, epsilon: f32) -> Self {
        self.idle_recenter_epsilon = epsilon;
        self
    }
}
