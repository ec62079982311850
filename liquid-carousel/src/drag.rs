use crate::InputKind;

/// State of one pointer/touch drag, from press to release.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragSession {
    pub kind: InputKind,
    pub start_x: f32,
    pub last_x: f32,
    pub last_time_ms: u64,
    /// Scroll offset when the drag began.
    pub start_offset: f32,
    /// Item centered when the drag began.
    pub start_index: usize,
    /// Scroll velocity of the latest move in px/ms; positive means the offset is increasing.
    pub velocity: f32,
    /// Unresisted distance past the nearest bound; negative before the start.
    pub overshoot: f32,
}

impl DragSession {
    pub fn new(kind: InputKind, x: f32, time_ms: u64, offset: f32, start_index: usize) -> Self {
        Self {
            kind,
            start_x: x,
            last_x: x,
            last_time_ms: time_ms,
            start_offset: offset,
            start_index,
            velocity: 0.0,
            overshoot: 0.0,
        }
    }

    /// Records a move and returns the unresisted offset it implies.
    ///
    /// The velocity estimate is replaced rather than averaged, so the last moves before release
    /// dominate. Elapsed time is floored at 1 ms.
    pub fn update(&mut self, x: f32, time_ms: u64) -> f32 {
        let dt = time_ms.saturating_sub(self.last_time_ms).max(1) as f32;
        self.velocity = -(x - self.last_x) / dt;
        self.last_x = x;
        self.last_time_ms = time_ms;
        self.start_offset + (self.start_x - x)
    }

    pub fn distance_to(&self, end_x: f32) -> f32 {
        (self.start_x - end_x).abs()
    }
}
