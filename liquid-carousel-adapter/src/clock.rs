/// Turns host frame timestamps into integration steps.
///
/// The first tick after construction or [`FrameClock::reset`] yields one nominal frame;
/// later ticks yield the elapsed time clamped to `max_step_ms`, so a stalled tab or a dropped
/// frame never produces one huge step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameClock {
    last_ms: Option<u64>,
    max_step_ms: u64,
}

impl FrameClock {
    pub fn new(max_step_ms: u64) -> Self {
        Self {
            last_ms: None,
            max_step_ms: max_step_ms.max(1),
        }
    }

    pub fn last_ms(&self) -> Option<u64> {
        self.last_ms
    }

    pub fn max_step_ms(&self) -> u64 {
        self.max_step_ms
    }

    pub fn reset(&mut self) {
        self.last_ms = None;
    }

    /// Records a frame at `now_ms` and returns the step in milliseconds.
    pub fn tick(&mut self, now_ms: u64) -> f32 {
        let elapsed = match self.last_ms {
            Some(last) => now_ms.saturating_sub(last),
            None => self.max_step_ms,
        };
        self.last_ms = Some(now_ms);
        elapsed.min(self.max_step_ms) as f32
    }
}
