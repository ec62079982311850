use crate::SpringConfig;

/// A damped spring pulling a scroll offset toward a target.
///
/// Hosts never integrate this themselves; [`crate::Carousel::advance`] steps it once per frame.
/// It is public so the integrator can be driven and inspected directly.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spring {
    pub position: f32,
    pub velocity: f32,
    pub target: f32,
    /// Steps taken so far.
    pub iterations: u32,
    pub config: SpringConfig,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpringStatus {
    Moving,
    /// Within both epsilons; snapped onto the target.
    Settled,
    /// Hit the iteration cap (or went non-finite); snapped onto the target.
    Exhausted,
}

impl SpringStatus {
    pub fn is_done(self) -> bool {
        !matches!(self, Self::Moving)
    }
}

impl Spring {
    pub fn new(position: f32, target: f32, velocity: f32, config: SpringConfig) -> Self {
        Self {
            position,
            velocity,
            target,
            iterations: 0,
            config,
        }
    }

    /// Moves the target without resetting position, velocity, or the iteration count.
    pub fn retarget(&mut self, target: f32) {
        self.target = target;
    }

    /// Integrates one frame of `dt_ms` milliseconds (clamped to `config.max_step_ms`).
    pub fn step(&mut self, dt_ms: f32) -> SpringStatus {
        let c = &self.config;
        let dt = if dt_ms.is_finite() {
            dt_ms.clamp(0.0, c.max_step_ms.max(0.0)) / 1000.0
        } else {
            0.0
        };
        self.iterations = self.iterations.saturating_add(1);

        let mass = c.mass.max(f32::EPSILON);
        let force = (self.target - self.position) * (c.tension / mass);
        let damping = self.velocity * (c.friction / mass);
        let acceleration = (force - damping) / mass;

        self.velocity += acceleration * dt;
        self.position += self.velocity * dt;

        if !self.position.is_finite() || !self.velocity.is_finite() {
            self.snap();
            return SpringStatus::Exhausted;
        }

        let near = (self.target - self.position).abs() < c.position_epsilon;
        let slow = self.velocity.abs() < c.velocity_epsilon;
        if near && slow {
            self.snap();
            return SpringStatus::Settled;
        }
        if self.iterations >= c.max_iterations {
            self.snap();
            return SpringStatus::Exhausted;
        }
        SpringStatus::Moving
    }

    fn snap(&mut self) {
        self.position = self.target;
        self.velocity = 0.0;
    }
}
