use std::sync::Arc;

use crate::snap::{self, Release};
use crate::stretch::{self, EdgeStretch};
use crate::transform::item_transform;
use crate::{
    CarouselOptions, CarouselState, CarouselStats, Cursor, DragSession, Frame, Geometry,
    InputKind, ItemTransform, OnCenteredChange, Phase, SnapDecision, Spring, SpringStatus,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SettleSource {
    Release,
    Programmatic,
    Wheel,
    Magnet,
}

#[derive(Clone, Copy, Debug)]
struct Settle {
    spring: Spring,
    source: SettleSource,
}

/// At most one motion driver exists; starting one replaces the other.
#[derive(Clone, Copy, Debug)]
enum Motion {
    Idle,
    Dragging(DragSession),
    Settling(Settle),
}

/// A headless gesture carousel.
///
/// The carousel owns the scroll offset and the per-item transforms. It holds no UI objects:
/// - geometry is read live through the injected [`Geometry`],
/// - input arrives through `pointer_*`/`wheel`/`scroll_to_index`,
/// - time advances only through [`Carousel::advance`], once per frame.
///
/// Pointer moves update the offset immediately but transforms are recomputed at most once per
/// `advance`, so several moves within one frame cost one restyle.
///
/// For listener lifecycle, deferred attach and a frame clock, see `liquid-carousel-adapter`.
#[derive(Clone)]
pub struct Carousel<G> {
    geometry: G,
    options: CarouselOptions,
    offset: f32,
    motion: Motion,
    stretch: EdgeStretch,
    transforms: Vec<ItemTransform>,
    restyle_pending: bool,
    reported: Option<usize>,
    on_centered_change: Option<OnCenteredChange>,
    stats: CarouselStats,
}

impl<G: Geometry> Carousel<G> {
    pub fn new(geometry: G, options: CarouselOptions) -> Self {
        cdebug!(items = geometry.item_count(), "Carousel::new");
        Self {
            geometry,
            options,
            offset: 0.0,
            motion: Motion::Idle,
            stretch: EdgeStretch::default(),
            transforms: Vec::new(),
            restyle_pending: true,
            reported: None,
            on_centered_change: None,
            stats: CarouselStats::default(),
        }
    }

    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    /// Mutable access to the geometry provider.
    ///
    /// Call [`Carousel::rebuild`] after changing the item list through it.
    pub fn geometry_mut(&mut self) -> &mut G {
        &mut self.geometry
    }

    pub fn into_geometry(self) -> G {
        self.geometry
    }

    /// Borrows the geometry mutably alongside the current transforms, so a host can write the
    /// transforms into the same object that provides geometry.
    pub fn split_mut(&mut self) -> (&mut G, &[ItemTransform]) {
        (&mut self.geometry, &self.transforms)
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: CarouselOptions) {
        self.options = options;
        self.restyle_pending = true;
    }

    /// Registers the callback fired when the centered item changes.
    ///
    /// It runs after a drag-end decision and after a settle completes, never once per frame,
    /// and only when the index differs from the last one reported.
    pub fn set_on_centered_change(
        &mut self,
        on_change: Option<impl Fn(usize) + Send + Sync + 'static>,
    ) {
        self.on_centered_change = on_change.map(|f| Arc::new(f) as _);
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn max_scroll(&self) -> f32 {
        self.geometry.max_scroll()
    }

    pub fn phase(&self) -> Phase {
        match self.motion {
            Motion::Idle => Phase::Idle,
            Motion::Dragging(_) => Phase::Dragging,
            Motion::Settling(_) => Phase::Settling,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.motion, Motion::Dragging(_))
    }

    pub fn is_settling(&self) -> bool {
        matches!(self.motion, Motion::Settling(_))
    }

    pub fn cursor(&self) -> Cursor {
        if self.is_dragging() {
            Cursor::Grabbing
        } else {
            Cursor::Grab
        }
    }

    pub fn drag(&self) -> Option<&DragSession> {
        match &self.motion {
            Motion::Dragging(drag) => Some(drag),
            _ => None,
        }
    }

    pub fn spring(&self) -> Option<&Spring> {
        match &self.motion {
            Motion::Settling(settle) => Some(&settle.spring),
            _ => None,
        }
    }

    /// Offset the running settle is heading to.
    pub fn target(&self) -> Option<f32> {
        self.spring().map(|s| s.target)
    }

    /// `true` while another [`Carousel::advance`] would change something.
    pub fn needs_frame(&self) -> bool {
        !matches!(self.motion, Motion::Idle) || !self.stretch.is_resting() || self.restyle_pending
    }

    pub fn transforms(&self) -> &[ItemTransform] {
        &self.transforms
    }

    pub fn stats(&self) -> CarouselStats {
        self.stats
    }

    pub fn state(&self) -> CarouselState {
        CarouselState {
            offset: self.offset,
            phase: self.phase(),
            centered: self.centered_index(),
        }
    }

    /// Restores a previously captured offset. Any motion is cancelled.
    pub fn restore_state(&mut self, state: CarouselState) {
        self.sync_offset(state.offset);
    }

    /// Index of the item whose center is closest to the viewport center, read from live
    /// geometry. `None` with no items or unmeasurable geometry.
    pub fn centered_index(&self) -> Option<usize> {
        self.geometry.nearest_index(self.offset)
    }

    /// Adopts a scroll offset reported by the host (e.g. the container's initial position).
    ///
    /// Cancels any drag or settle.
    pub fn sync_offset(&mut self, offset: f32) {
        if !offset.is_finite() {
            return;
        }
        self.motion = Motion::Idle;
        self.offset = self.geometry.clamp_offset(offset);
        self.restyle_pending = true;
    }

    /// Cancels any drag or settle and clamps the offset back into bounds.
    pub fn stop(&mut self) {
        if matches!(self.motion, Motion::Idle) && self.stretch.is_resting() {
            return;
        }
        self.motion = Motion::Idle;
        self.stretch.reset();
        self.offset = self.geometry.clamp_offset(self.offset);
        self.restyle_pending = true;
    }

    /// Re-acquires geometry after the host rebuilt its item list.
    ///
    /// Returns the new item count. With zero items all motion is cancelled.
    pub fn rebuild(&mut self) -> usize {
        let count = self.geometry.item_count();
        cdebug!(items = count, "Carousel::rebuild");
        self.stretch.reset();
        if count == 0 {
            self.motion = Motion::Idle;
            self.transforms.clear();
            self.reported = None;
            self.restyle_pending = false;
            return 0;
        }
        match &mut self.motion {
            Motion::Settling(settle) => {
                let target = self.geometry.clamp_offset(settle.spring.target);
                settle.spring.retarget(target);
            }
            Motion::Dragging(_) => {}
            Motion::Idle => self.offset = self.geometry.clamp_offset(self.offset),
        }
        self.restyle_pending = true;
        self.restyle();
        count
    }

    /// Starts a drag. Cancels a running settle.
    ///
    /// Returns `false` (and does nothing) when there are no items or geometry is unreadable.
    pub fn pointer_down(&mut self, kind: InputKind, x: f32, time_ms: u64) -> bool {
        if !x.is_finite() || !self.geometry.is_measurable() {
            return false;
        }
        let Some(start_index) = self.centered_index() else {
            return false;
        };
        if self.is_settling() {
            ctrace!(offset = self.offset, "settle interrupted by drag");
        }
        // A press during the spring back from overscroll starts from the unresisted offset,
        // so the next move does not resist the overshoot twice.
        let start_offset = stretch::unresist(
            self.offset,
            self.geometry.max_scroll(),
            self.options.stretch.resistance,
        );
        self.motion = Motion::Dragging(DragSession::new(
            kind,
            x,
            time_ms,
            start_offset,
            start_index,
        ));
        self.restyle_pending = true;
        true
    }

    /// Feeds a pointer position. Returns `false` when no drag is active.
    pub fn pointer_move(&mut self, x: f32, time_ms: u64) -> bool {
        let Motion::Dragging(drag) = &mut self.motion else {
            return false;
        };
        if !x.is_finite() {
            return true;
        }
        let raw = drag.update(x, time_ms);
        let max = self.geometry.max_scroll();
        drag.overshoot = stretch::overshoot(raw, max);
        self.offset = stretch::resist(raw, max, self.options.stretch.resistance);
        self.restyle_pending = true;
        ctrace!(
            x,
            time_ms,
            offset = self.offset,
            velocity = drag.velocity,
            "pointer_move"
        );
        true
    }

    /// Ends a drag and starts settling onto the chosen item.
    ///
    /// `end_x` is the release position if the host has one; otherwise the last move is used.
    /// Returns the decision, or `None` when no drag was active or geometry is unreadable.
    pub fn pointer_up(&mut self, end_x: Option<f32>) -> Option<SnapDecision> {
        let Motion::Dragging(drag) = self.motion else {
            return None;
        };
        self.motion = Motion::Idle;

        let Some(current_index) = self.centered_index() else {
            let target = self.geometry.clamp_offset(self.offset);
            self.start_settle(target, 0.0, SettleSource::Release);
            return None;
        };

        let end_x = end_x.filter(|x| x.is_finite()).unwrap_or(drag.last_x);
        let release = Release {
            start_index: drag.start_index,
            current_index,
            offset: self.offset,
            velocity: drag.velocity,
            drag_distance: drag.distance_to(end_x),
        };
        let decision = snap::select_target(&self.geometry, &release, &self.options.snap);
        let target = self
            .geometry
            .centered_offset(decision.index)
            .unwrap_or(self.offset);
        let target = self.geometry.clamp_offset(target);
        cdebug!(
            from = decision.from,
            to = decision.index,
            reason = ?decision.reason,
            velocity = decision.velocity,
            distance = release.drag_distance,
            "drag released"
        );

        let velocity = self.options.spring.seed_velocity(drag.velocity);
        self.start_settle(target, velocity, SettleSource::Release);
        self.report(decision.index);
        Some(decision)
    }

    /// Ends a drag without a release position (touch cancel, pointer leaving the container).
    pub fn pointer_cancel(&mut self) -> Option<SnapDecision> {
        self.pointer_up(None)
    }

    /// Applies a vertical wheel delta as a horizontal target change, settled by spring.
    ///
    /// Deltas arriving while a wheel settle runs accumulate onto its target. Ignored during a
    /// drag. Returns `true` when consumed.
    pub fn wheel(&mut self, delta_y: f32) -> bool {
        if delta_y == 0.0 || !delta_y.is_finite() || self.is_dragging() {
            return false;
        }
        if self.geometry.item_count() == 0 || !self.geometry.is_measurable() {
            return false;
        }
        let delta = delta_y * self.options.wheel_factor;
        if let Motion::Settling(settle) = &mut self.motion {
            if settle.source == SettleSource::Wheel {
                let target = self.geometry.clamp_offset(settle.spring.target + delta);
                settle.spring.retarget(target);
                return true;
            }
        }
        let target = self.geometry.clamp_offset(self.offset + delta);
        self.start_settle(target, 0.0, SettleSource::Wheel);
        true
    }

    /// Settles onto item `index`, clamped into `[0, count - 1]`.
    ///
    /// Cancels an active drag (its velocity is discarded) or a running settle. Returns the
    /// clamped index, or `None` when there are no items or geometry is unreadable.
    pub fn scroll_to_index(&mut self, index: usize) -> Option<usize> {
        let count = self.geometry.item_count();
        if count == 0 {
            return None;
        }
        if !self.geometry.is_measurable() {
            cwarn!(index, "scroll_to_index: geometry unreadable");
            return None;
        }
        let index = index.min(count - 1);
        let target = self.geometry.centered_offset(index)?;
        if self.is_dragging() {
            cdebug!(index, "drag cancelled by scroll_to_index");
        }
        let target = self.geometry.clamp_offset(target);
        self.start_settle(target, 0.0, SettleSource::Programmatic);
        Some(index)
    }

    /// Snaps immediately onto the nearest item when idle and more than
    /// `options.idle_recenter_epsilon` px away from it. Returns `true` when it moved.
    pub fn recenter(&mut self) -> bool {
        if !matches!(self.motion, Motion::Idle) {
            return false;
        }
        let Some(target) = self.magnet_target(self.options.idle_recenter_epsilon) else {
            return false;
        };
        ctrace!(from = self.offset, to = target, "recenter");
        self.offset = target;
        self.stats.recenters = self.stats.recenters.saturating_add(1);
        self.restyle_pending = true;
        if let Some(index) = self.centered_index() {
            self.report(index);
        }
        true
    }

    /// Advances one frame of `dt_ms` milliseconds.
    ///
    /// Steps a running settle, blends the edge stretch, and recomputes transforms when anything
    /// changed since the last frame.
    pub fn advance(&mut self, dt_ms: f32) -> Frame {
        let mut moved = false;
        let mut finished = None;
        let overshoot = match &mut self.motion {
            Motion::Settling(settle) => {
                let status = settle.spring.step(dt_ms);
                if settle.spring.position != self.offset {
                    self.offset = settle.spring.position;
                    moved = true;
                }
                if status.is_done() {
                    finished = Some((status, settle.source));
                }
                0.0
            }
            Motion::Dragging(drag) => drag.overshoot,
            Motion::Idle => 0.0,
        };

        let settled = finished.is_some();
        if let Some((status, source)) = finished {
            self.motion = Motion::Idle;
            self.finish_settle(status, source);
        }

        if self.stretch.blend(overshoot, &self.options.stretch) || moved || settled {
            self.restyle_pending = true;
        }
        let restyled = self.restyle();

        Frame {
            offset: self.offset,
            phase: self.phase(),
            moved,
            restyled,
            settled,
        }
    }

    fn start_settle(&mut self, target: f32, velocity: f32, source: SettleSource) {
        ctrace!(from = self.offset, to = target, velocity, source = ?source, "start_settle");
        let spring = Spring::new(self.offset, target, velocity, self.options.spring);
        self.motion = Motion::Settling(Settle { spring, source });
        self.restyle_pending = true;
    }

    fn finish_settle(&mut self, status: SpringStatus, source: SettleSource) {
        self.stats.settles = self.stats.settles.saturating_add(1);
        if status == SpringStatus::Exhausted {
            self.stats.exhausted_settles = self.stats.exhausted_settles.saturating_add(1);
            cwarn!(
                offset = self.offset,
                max_iterations = self.options.spring.max_iterations,
                "settle hit the iteration cap; snapped to target"
            );
        }

        if source != SettleSource::Magnet {
            if let Some(target) = self.magnet_target(self.options.settle_recenter_epsilon) {
                self.start_settle(target, 0.0, SettleSource::Magnet);
                return;
            }
        }

        if let Some(index) = self.centered_index() {
            self.report(index);
        }
    }

    /// Clamped centered offset of the nearest item, if farther than `epsilon`.
    fn magnet_target(&self, epsilon: f32) -> Option<f32> {
        let index = self.centered_index()?;
        let target = self.geometry.clamp_offset(self.geometry.centered_offset(index)?);
        ((target - self.offset).abs() > epsilon).then_some(target)
    }

    fn report(&mut self, index: usize) {
        if self.reported == Some(index) {
            return;
        }
        self.reported = Some(index);
        if let Some(cb) = &self.on_centered_change {
            cb(index);
        }
    }

    fn restyle(&mut self) -> bool {
        if !self.restyle_pending || !self.geometry.is_measurable() {
            return false;
        }
        let count = self.geometry.item_count();
        let viewport = self.geometry.viewport_width();
        let transition = matches!(self.motion, Motion::Idle) && self.stretch.is_resting();

        self.transforms.clear();
        for i in 0..count {
            let Some(bounds) = self.geometry.item_bounds(i) else {
                self.transforms.push(ItemTransform::default());
                continue;
            };
            let mut t = item_transform(
                bounds,
                self.offset,
                viewport,
                self.stretch.for_index(i, count),
                &self.options.transform,
            );
            t.transition = transition;
            self.transforms.push(t);
        }
        self.restyle_pending = false;
        true
    }
}

impl<G: core::fmt::Debug> core::fmt::Debug for Carousel<G> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Carousel")
            .field("geometry", &self.geometry)
            .field("options", &self.options)
            .field("offset", &self.offset)
            .field("motion", &self.motion)
            .field("reported", &self.reported)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}
