/// Delay before retrying an attach that found no items.
pub const DEFAULT_RETRY_DELAY_MS: u64 = 200;
/// Interval of the idle recenter check.
pub const DEFAULT_RECENTER_INTERVAL_MS: u64 = 1_500;
/// Narrowest window (px) that still handles wheel input.
pub const DEFAULT_WHEEL_MIN_WINDOW_WIDTH: f32 = 1_024.0;
/// Largest step handed to the carousel per tick.
pub const DEFAULT_MAX_FRAME_MS: u64 = 16;

/// Configuration for [`crate::Controller`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControllerOptions {
    pub retry_delay_ms: u64,
    /// `0` disables the idle recenter check.
    pub recenter_interval_ms: u64,
    pub wheel_min_window_width: f32,
    pub max_frame_ms: u64,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            retry_delay_ms: DEFAULT_RETRY_DELAY_MS,
            recenter_interval_ms: DEFAULT_RECENTER_INTERVAL_MS,
            wheel_min_window_width: DEFAULT_WHEEL_MIN_WINDOW_WIDTH,
            max_frame_ms: DEFAULT_MAX_FRAME_MS,
        }
    }
}

impl ControllerOptions {
    pub fn with_retry_delay_ms(mut self, retry_delay_ms: u64) -> Self {
        self.retry_delay_ms = retry_delay_ms;
        self
    }

    pub fn with_recenter_interval_ms(mut self, recenter_interval_ms: u64) -> Self {
        self.recenter_interval_ms = recenter_interval_ms;
        self
    }

    pub fn with_wheel_min_window_width(mut self, width: f32) -> Self {
        self.wheel_min_window_width = width;
        self
    }

    pub fn with_max_frame_ms(mut self, max_frame_ms: u64) -> Self {
        self.max_frame_ms = max_frame_ms;
        self
    }
}
