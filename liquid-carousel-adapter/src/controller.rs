use liquid_carousel::{Carousel, CarouselOptions, Cursor, Geometry, InputKind, Phase};

use crate::{ControllerOptions, FrameClock, InputEvent, ListenerId, Surface};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttachStatus {
    Attached,
    /// No items (or no measurable viewport) yet; `tick` retries at `retry_at_ms`.
    Deferred { retry_at_ms: u64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Attachment {
    Detached,
    Pending { retry_at_ms: u64 },
    Attached { listeners: ListenerId },
}

/// A framework-neutral controller that binds a [`Carousel`] to a host [`Surface`].
///
/// It owns the listener lifecycle and the frame loop. Adapters drive it by calling:
/// - `attach` once the container exists, and `rebuild` after re-rendering its items
/// - `handle` for every forwarded input event
/// - `tick(now_ms)` each frame (or at least while `wants_frame()` is true)
///
/// Offsets, transforms and cursor changes are pushed to the surface as they happen.
#[derive(Clone, Debug)]
pub struct Controller<S> {
    c: Carousel<S>,
    options: ControllerOptions,
    attachment: Attachment,
    clock: FrameClock,
    last_recenter_ms: u64,
    pending_index: Option<usize>,
    applied_offset: Option<f32>,
    applied_cursor: Option<Cursor>,
}

impl<S: Surface> Controller<S> {
    pub fn new(surface: S, options: CarouselOptions) -> Self {
        Self::from_carousel(Carousel::new(surface, options))
    }

    pub fn from_carousel(c: Carousel<S>) -> Self {
        let options = ControllerOptions::default();
        Self {
            c,
            clock: FrameClock::new(options.max_frame_ms),
            options,
            attachment: Attachment::Detached,
            last_recenter_ms: 0,
            pending_index: None,
            applied_offset: None,
            applied_cursor: None,
        }
    }

    pub fn with_options(mut self, options: ControllerOptions) -> Self {
        self.set_options(options);
        self
    }

    pub fn options(&self) -> &ControllerOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: ControllerOptions) {
        self.options = options;
        self.clock = FrameClock::new(options.max_frame_ms);
    }

    pub fn carousel(&self) -> &Carousel<S> {
        &self.c
    }

    pub fn carousel_mut(&mut self) -> &mut Carousel<S> {
        &mut self.c
    }

    pub fn into_carousel(self) -> Carousel<S> {
        self.c
    }

    pub fn surface(&self) -> &S {
        self.c.geometry()
    }

    pub fn surface_mut(&mut self) -> &mut S {
        self.c.geometry_mut()
    }

    pub fn is_attached(&self) -> bool {
        matches!(self.attachment, Attachment::Attached { .. })
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.attachment, Attachment::Pending { .. })
    }

    /// Binds listeners and takes over the surface's scroll offset and item styles.
    ///
    /// Re-attaching first releases the previous listener set. With no items or an unmeasurable
    /// viewport nothing is bound and a retry is scheduled for `tick`.
    pub fn attach(&mut self, now_ms: u64) -> AttachStatus {
        self.release_listeners();

        let surface = self.c.geometry();
        if surface.item_count() == 0 || !surface.is_measurable() {
            let retry_at_ms = now_ms.saturating_add(self.options.retry_delay_ms);
            if surface.item_count() == 0 {
                cdebug!(retry_at_ms, "attach deferred: no items");
            } else {
                cwarn!(
                    retry_at_ms,
                    viewport_width = surface.viewport_width(),
                    "attach deferred: viewport not measurable"
                );
            }
            self.attachment = Attachment::Pending { retry_at_ms };
            return AttachStatus::Deferred { retry_at_ms };
        }

        let initial = surface.scroll_offset();
        let listeners = self.c.geometry_mut().bind_listeners();
        self.attachment = Attachment::Attached { listeners };
        cdebug!(listeners = listeners.0, items = self.c.geometry().item_count(), "attached");

        self.clock.reset();
        self.last_recenter_ms = now_ms;
        self.applied_offset = None;
        self.applied_cursor = None;
        self.c.sync_offset(initial);
        self.c.rebuild();
        if let Some(index) = self.pending_index.take() {
            self.c.scroll_to_index(index);
        }
        self.flush(true);
        AttachStatus::Attached
    }

    /// Unbinds listeners, cancels motion and any pending retry. Safe to call repeatedly.
    pub fn detach(&mut self) {
        if matches!(self.attachment, Attachment::Detached) {
            return;
        }
        self.release_listeners();
        self.attachment = Attachment::Detached;
        self.pending_index = None;
        self.c.stop();
        cdebug!("detached");
    }

    /// Re-acquires items after the host re-rendered them.
    ///
    /// An attached controller whose surface became empty releases its listeners and goes back
    /// to retrying. Returns the item count.
    pub fn rebuild(&mut self, now_ms: u64) -> usize {
        match self.attachment {
            Attachment::Attached { .. } => {
                let count = self.c.rebuild();
                if count == 0 {
                    self.attach(now_ms);
                } else {
                    self.flush(true);
                }
                count
            }
            Attachment::Pending { .. } => {
                self.attach(now_ms);
                self.c.geometry().item_count()
            }
            Attachment::Detached => self.c.rebuild(),
        }
    }

    /// Forwards one input event.
    ///
    /// Returns `true` when the host should suppress the native default action (mouse drags and
    /// consumed wheel events). Touch listeners are passive, so touch events return `false`.
    pub fn handle(&mut self, event: InputEvent) -> bool {
        if !self.is_attached() {
            return false;
        }
        let prevent_default = match event {
            InputEvent::PointerDown { x, time_ms } => {
                self.c.pointer_down(InputKind::Mouse, x, time_ms)
            }
            InputEvent::PointerMove { x, time_ms } => {
                self.drag_kind() == Some(InputKind::Mouse) && self.c.pointer_move(x, time_ms)
            }
            InputEvent::PointerUp { x, .. } => {
                self.release(InputKind::Mouse, Some(x));
                false
            }
            InputEvent::PointerLeave { .. } => {
                self.release(InputKind::Mouse, None);
                false
            }
            InputEvent::TouchStart { x, time_ms } => {
                self.c.pointer_down(InputKind::Touch, x, time_ms);
                false
            }
            InputEvent::TouchMove { x, time_ms } => {
                if self.drag_kind() == Some(InputKind::Touch) {
                    self.c.pointer_move(x, time_ms);
                }
                false
            }
            InputEvent::TouchEnd { x, .. } => {
                self.release(InputKind::Touch, x);
                false
            }
            InputEvent::TouchCancel { .. } => {
                self.release(InputKind::Touch, None);
                false
            }
            InputEvent::Wheel { delta_y, .. } => {
                let wide = self.c.geometry().window_width() >= self.options.wheel_min_window_width;
                wide && self.c.wheel(delta_y)
            }
        };
        if self.c.is_dragging() {
            self.pending_index = None;
        }
        self.flush(false);
        ctrace!(event = ?event, prevent_default, "input");
        prevent_default
    }

    /// Advances one frame.
    ///
    /// Retries a deferred attach when due, steps the carousel, and runs the idle recenter
    /// check. Returns the offset written to the surface, if it changed.
    pub fn tick(&mut self, now_ms: u64) -> Option<f32> {
        match self.attachment {
            Attachment::Detached => return None,
            Attachment::Pending { retry_at_ms } => {
                if now_ms < retry_at_ms {
                    return None;
                }
                if self.attach(now_ms) != AttachStatus::Attached {
                    return None;
                }
            }
            Attachment::Attached { .. } => {}
        }

        if self.c.geometry().is_measurable() {
            if let Some(index) = self.pending_index.take() {
                self.c.scroll_to_index(index);
            }
        }

        let dt = self.clock.tick(now_ms);
        let frame = self.c.advance(dt);
        let mut restyled = frame.restyled;

        if frame.phase != Phase::Idle {
            self.last_recenter_ms = now_ms;
        } else if self.options.recenter_interval_ms > 0
            && now_ms.saturating_sub(self.last_recenter_ms) >= self.options.recenter_interval_ms
        {
            self.last_recenter_ms = now_ms;
            if self.c.recenter() {
                restyled |= self.c.advance(0.0).restyled;
            }
        }

        self.flush(restyled)
    }

    /// Settles onto item `index` (clamped).
    ///
    /// Before the controller is attached the request is remembered and applied on attach; while
    /// the viewport is unmeasurable it is retried on the next `tick` that can measure it.
    pub fn scroll_to_index(&mut self, index: usize) -> Option<usize> {
        if !self.is_attached() {
            self.pending_index = Some(index);
            return None;
        }
        let applied = self.c.scroll_to_index(index);
        if applied.is_none() && self.c.geometry().item_count() > 0 {
            // Viewport unreadable right now; retried by `tick`.
            self.pending_index = Some(index);
        }
        self.flush(false);
        applied
    }

    pub fn centered_index(&self) -> Option<usize> {
        self.c.centered_index()
    }

    pub fn set_on_centered_change(
        &mut self,
        on_change: Option<impl Fn(usize) + Send + Sync + 'static>,
    ) {
        self.c.set_on_centered_change(on_change);
    }

    /// `true` while the host should keep scheduling frames.
    pub fn wants_frame(&self) -> bool {
        self.is_attached() && (self.c.needs_frame() || self.pending_index.is_some())
    }

    /// The next time `tick` has work to do even without frames: a deferred attach retry or the
    /// idle recenter check.
    pub fn next_wakeup_ms(&self) -> Option<u64> {
        match self.attachment {
            Attachment::Detached => None,
            Attachment::Pending { retry_at_ms } => Some(retry_at_ms),
            Attachment::Attached { .. } if self.options.recenter_interval_ms == 0 => None,
            Attachment::Attached { .. } => Some(
                self.last_recenter_ms
                    .saturating_add(self.options.recenter_interval_ms),
            ),
        }
    }

    fn drag_kind(&self) -> Option<InputKind> {
        self.c.drag().map(|d| d.kind)
    }

    fn release(&mut self, kind: InputKind, x: Option<f32>) {
        if self.drag_kind() == Some(kind) {
            self.c.pointer_up(x);
        }
    }

    fn release_listeners(&mut self) {
        if let Attachment::Attached { listeners } = self.attachment {
            self.c.geometry_mut().unbind_listeners(listeners);
            self.attachment = Attachment::Detached;
        }
    }

    fn flush(&mut self, restyled: bool) -> Option<f32> {
        let offset = self.c.offset();
        let cursor = self.c.cursor();
        let (surface, transforms) = self.c.split_mut();

        if self.applied_cursor != Some(cursor) {
            surface.set_cursor(cursor);
            self.applied_cursor = Some(cursor);
        }
        if restyled {
            surface.apply_transforms(transforms);
        }
        if self.applied_offset == Some(offset) {
            return None;
        }
        if !offset.is_finite() {
            cwarn!("refusing to apply a non-finite offset");
            return None;
        }
        surface.set_scroll_offset(offset);
        self.applied_offset = Some(offset);
        Some(offset)
    }
}
