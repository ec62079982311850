/// A raw input event forwarded by the host.
///
/// Positions are client x coordinates in px; timestamps are milliseconds on any monotonic
/// clock shared by all events.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputEvent {
    PointerDown { x: f32, time_ms: u64 },
    PointerMove { x: f32, time_ms: u64 },
    PointerUp { x: f32, time_ms: u64 },
    /// The pointer left the container; ends a mouse drag without a release position.
    PointerLeave { time_ms: u64 },
    TouchStart { x: f32, time_ms: u64 },
    TouchMove { x: f32, time_ms: u64 },
    /// `x` comes from the changed touch, when the host has one.
    TouchEnd { x: Option<f32>, time_ms: u64 },
    TouchCancel { time_ms: u64 },
    Wheel { delta_y: f32, time_ms: u64 },
}

impl InputEvent {
    pub fn time_ms(&self) -> u64 {
        match *self {
            Self::PointerDown { time_ms, .. }
            | Self::PointerMove { time_ms, .. }
            | Self::PointerUp { time_ms, .. }
            | Self::PointerLeave { time_ms }
            | Self::TouchStart { time_ms, .. }
            | Self::TouchMove { time_ms, .. }
            | Self::TouchEnd { time_ms, .. }
            | Self::TouchCancel { time_ms }
            | Self::Wheel { time_ms, .. } => time_ms,
        }
    }

    pub fn is_touch(&self) -> bool {
        matches!(
            self,
            Self::TouchStart { .. }
                | Self::TouchMove { .. }
                | Self::TouchEnd { .. }
                | Self::TouchCancel { .. }
        )
    }
}
