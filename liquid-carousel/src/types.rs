/// Position and width of one item inside the scroll track, in track coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemBounds {
    /// Distance from the start of the track to the item's left edge.
    pub left: f32,
    pub width: f32,
}

impl ItemBounds {
    pub fn new(left: f32, width: f32) -> Self {
        Self { left, width }
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn center(&self) -> f32 {
        self.left + self.width / 2.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SwipeDirection {
    /// Toward lower indexes (finger moves toward higher screen x).
    Previous,
    /// Toward higher indexes (finger moves toward lower screen x).
    Next,
}

impl SwipeDirection {
    /// Classifies a scroll velocity (px/ms, positive = offset increasing).
    ///
    /// Returns `None` when `|velocity|` does not exceed `threshold`.
    pub fn from_velocity(velocity: f32, threshold: f32) -> Option<Self> {
        if velocity > threshold {
            Some(Self::Next)
        } else if velocity < -threshold {
            Some(Self::Previous)
        } else {
            None
        }
    }

    pub(crate) fn step(self, index: usize, count: usize) -> usize {
        let last = count.saturating_sub(1);
        match self {
            Self::Previous => index.saturating_sub(1),
            Self::Next => index.saturating_add(1).min(last),
        }
    }
}

/// Which device produced a drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputKind {
    Mouse,
    Touch,
}

/// Cursor affordance the host should show over the container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cursor {
    #[default]
    Grab,
    /// A drag is active; hosts usually also disable text selection.
    Grabbing,
}

/// The single active motion driver.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    #[default]
    Idle,
    Dragging,
    Settling,
}

/// Visual state for one item, recomputed from the scroll offset.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemTransform {
    /// Y-axis rotation in degrees. Negative for items left of center.
    pub rotate_y_deg: f32,
    /// Uniform scale, edge stretch included.
    pub scale: f32,
    pub opacity: f32,
    pub z_index: i32,
    /// Depth translation in px.
    pub translate_z: f32,
    /// Perspective distance in px.
    pub perspective: f32,
    pub centered: bool,
    /// `true` when the carousel is idle and the host should ease into this transform instead of
    /// applying it immediately.
    pub transition: bool,
}

impl Default for ItemTransform {
    fn default() -> Self {
        Self {
            rotate_y_deg: 0.0,
            scale: 1.0,
            opacity: 1.0,
            z_index: 0,
            translate_z: 0.0,
            perspective: 0.0,
            centered: false,
            transition: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SnapReason {
    /// Fast or long swipe: one item in the swipe direction.
    Swipe,
    /// Slow release whose projected momentum was large enough to force a step.
    Momentum,
    /// Slow release: nearest item to the projected offset.
    Nearest,
}

/// Outcome of a drag release.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SnapDecision {
    /// Item nearest to the offset at release.
    pub from: usize,
    /// Item the carousel settles on.
    pub index: usize,
    pub reason: SnapReason,
    /// Release velocity in px/ms.
    pub velocity: f32,
}

/// What a call to [`crate::Carousel::advance`] did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub offset: f32,
    pub phase: Phase,
    /// The offset changed during this frame.
    pub moved: bool,
    /// `transforms()` was recomputed during this frame.
    pub restyled: bool,
    /// A settle finished during this frame.
    pub settled: bool,
}
