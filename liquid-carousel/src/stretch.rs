use crate::StretchConfig;
use crate::transform::smoothstep;

/// Applies edge resistance to an unresisted offset.
///
/// Inside `[0, max_scroll]` the offset passes through; past either bound only
/// `overshoot * resistance` of the excess is kept.
pub fn resist(raw: f32, max_scroll: f32, resistance: f32) -> f32 {
    if raw < 0.0 {
        raw * resistance
    } else if raw > max_scroll {
        max_scroll + (raw - max_scroll) * resistance
    } else {
        raw
    }
}

/// Inverse of [`resist`]: the unresisted offset that resists to `offset`.
///
/// Offsets inside the bounds pass through. With a non-positive resistance the boundary is the
/// only reachable resisted offset, so `offset` is returned as is.
pub fn unresist(offset: f32, max_scroll: f32, resistance: f32) -> f32 {
    if !(resistance > 0.0) {
        return offset;
    }
    if offset < 0.0 {
        offset / resistance
    } else if offset > max_scroll {
        max_scroll + (offset - max_scroll) / resistance
    } else {
        offset
    }
}

/// Signed distance of `raw` past the bounds; zero inside them.
pub fn overshoot(raw: f32, max_scroll: f32) -> f32 {
    if raw < 0.0 {
        raw
    } else if raw > max_scroll {
        raw - max_scroll
    } else {
        0.0
    }
}

const SNAP_EPSILON: f32 = 1e-4;

/// Non-uniform scale applied to a boundary item while it is pulled past the edge.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stretch {
    pub x: f32,
    pub y: f32,
}

impl Default for Stretch {
    fn default() -> Self {
        Self::NONE
    }
}

impl Stretch {
    pub const NONE: Self = Self { x: 1.0, y: 1.0 };

    /// Target stretch for a pull of `pull` px past the edge.
    pub fn for_pull(pull: f32, config: &StretchConfig) -> Self {
        if pull <= 0.0 || config.stretch_distance <= 0.0 {
            return Self::NONE;
        }
        let s = smoothstep(pull / config.stretch_distance) * config.max_stretch;
        Self {
            x: 1.0 + s,
            y: 1.0 - s * config.squash,
        }
    }

    /// Average of both axes. Items are scaled uniformly so round artwork is not distorted.
    pub fn uniform(self) -> f32 {
        (self.x + self.y) / 2.0
    }

    pub fn is_none(self) -> bool {
        self == Self::NONE
    }

    fn blend_toward(&mut self, target: Self, blend: f32) -> bool {
        let k = blend.clamp(0.0, 1.0);
        let mut next = Self {
            x: self.x + (target.x - self.x) * k,
            y: self.y + (target.y - self.y) * k,
        };
        if (target.x - next.x).abs() < SNAP_EPSILON && (target.y - next.y).abs() < SNAP_EPSILON {
            next = target;
        }
        let changed = next != *self;
        *self = next;
        changed
    }
}

/// Smoothed stretch of the first and last item.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct EdgeStretch {
    first: Stretch,
    last: Stretch,
}

impl EdgeStretch {
    /// Blends one frame toward the stretch implied by `overshoot`. Returns `true` on change.
    pub(crate) fn blend(&mut self, overshoot: f32, config: &StretchConfig) -> bool {
        let (first, last) = if overshoot < 0.0 {
            (Stretch::for_pull(-overshoot, config), Stretch::NONE)
        } else if overshoot > 0.0 {
            (Stretch::NONE, Stretch::for_pull(overshoot, config))
        } else {
            (Stretch::NONE, Stretch::NONE)
        };
        let a = self.first.blend_toward(first, config.blend);
        let b = self.last.blend_toward(last, config.blend);
        a || b
    }

    pub(crate) fn reset(&mut self) {
        self.first = Stretch::NONE;
        self.last = Stretch::NONE;
    }

    pub(crate) fn is_resting(&self) -> bool {
        self.first.is_none() && self.last.is_none()
    }

    pub(crate) fn for_index(&self, index: usize, count: usize) -> Stretch {
        if index == 0 && !self.first.is_none() {
            self.first
        } else if index + 1 == count {
            self.last
        } else {
            Stretch::NONE
        }
    }
}
