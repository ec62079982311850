use crate::{Geometry, SnapConfig, SnapDecision, SnapReason, SwipeDirection};

/// What the carousel knows at the moment a drag is released.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Release {
    /// Item centered when the drag began.
    pub start_index: usize,
    /// Item nearest to `offset`.
    pub current_index: usize,
    pub offset: f32,
    /// px/ms, positive = offset increasing.
    pub velocity: f32,
    /// Absolute pointer travel since press.
    pub drag_distance: f32,
}

/// Picks the item a released drag settles on.
///
/// A fast or long swipe advances at least one item past the item centered at press time, and
/// never lands behind the item the drag already reached. Slow releases project the offset
/// forward by `velocity * momentum_multiplier` and take the nearest item, unless the projection
/// exceeds a fraction of one item pitch, in which case they step once from the current item.
/// Indexes saturate at both ends.
pub fn select_target<G: Geometry + ?Sized>(
    geometry: &G,
    release: &Release,
    config: &SnapConfig,
) -> SnapDecision {
    let count = geometry.item_count();
    let last = count.saturating_sub(1);
    let current = release.current_index.min(last);
    let decide = |index: usize, reason| SnapDecision {
        from: current,
        index: index.min(last),
        reason,
        velocity: release.velocity,
    };

    let fast = release.velocity.abs() > config.velocity_threshold;
    let long = release.drag_distance > config.min_drag_distance;
    if fast || long {
        let start = release.start_index.min(last);
        let index = match SwipeDirection::from_velocity(release.velocity, config.direction_threshold)
        {
            Some(SwipeDirection::Next) => current.max(SwipeDirection::Next.step(start, count)),
            Some(SwipeDirection::Previous) => {
                current.min(SwipeDirection::Previous.step(start, count))
            }
            None => current,
        };
        return decide(index, SnapReason::Swipe);
    }

    let momentum = release.velocity * config.momentum_multiplier;
    let projected = geometry.clamp_offset(release.offset + momentum);
    let nearest = geometry.nearest_index(projected).unwrap_or(current);

    let pitch = geometry
        .item_bounds(current)
        .map(|b| b.width + config.item_gap)
        .unwrap_or(0.0);
    if pitch > 0.0 && momentum.abs() > pitch * config.momentum_step_fraction {
        let direction = if momentum > 0.0 {
            SwipeDirection::Next
        } else {
            SwipeDirection::Previous
        };
        return decide(direction.step(current, count), SnapReason::Momentum);
    }

    decide(nearest, SnapReason::Nearest)
}
