use crate::*;

use liquid_carousel::{
    CarouselOptions, Cursor, Geometry, ItemBounds, ItemTransform, Layout, Phase,
};
use std::sync::{Arc, Mutex};

const ITEM: f32 = 200.0;
const GAP: f32 = 20.0;
const VIEW: f32 = 400.0;
const PITCH: f32 = ITEM + GAP;

/// Records every side effect the controller performs.
#[derive(Clone, Debug)]
struct FakeSurface {
    layout: Layout,
    initial_offset: f32,
    window_width: f32,
    next_listener: u64,
    bound: Vec<ListenerId>,
    unbinds: usize,
    offset: f32,
    offset_writes: usize,
    transform_batches: usize,
    last_transforms: Vec<ItemTransform>,
    cursors: Vec<Cursor>,
}

impl FakeSurface {
    fn new(layout: Layout) -> Self {
        Self {
            layout,
            initial_offset: 0.0,
            window_width: 1_280.0,
            next_listener: 0,
            bound: Vec::new(),
            unbinds: 0,
            offset: 0.0,
            offset_writes: 0,
            transform_batches: 0,
            last_transforms: Vec::new(),
            cursors: Vec::new(),
        }
    }

    fn with_items(count: usize) -> Self {
        Self::new(Layout::uniform(count, ITEM, GAP, VIEW))
    }
}

impl Geometry for FakeSurface {
    fn viewport_width(&self) -> f32 {
        self.layout.viewport_width()
    }

    fn content_width(&self) -> f32 {
        self.layout.content_width()
    }

    fn item_count(&self) -> usize {
        self.layout.item_count()
    }

    fn item_bounds(&self, index: usize) -> Option<ItemBounds> {
        self.layout.item_bounds(index)
    }
}

impl Surface for FakeSurface {
    fn scroll_offset(&self) -> f32 {
        self.initial_offset
    }

    fn bind_listeners(&mut self) -> ListenerId {
        self.next_listener += 1;
        let id = ListenerId(self.next_listener);
        self.bound.push(id);
        id
    }

    fn unbind_listeners(&mut self, id: ListenerId) {
        self.unbinds += 1;
        self.bound.retain(|b| *b != id);
    }

    fn set_scroll_offset(&mut self, offset: f32) {
        self.offset = offset;
        self.offset_writes += 1;
    }

    fn apply_transforms(&mut self, transforms: &[ItemTransform]) {
        self.transform_batches += 1;
        self.last_transforms = transforms.to_vec();
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        self.cursors.push(cursor);
    }

    fn window_width(&self) -> f32 {
        self.window_width
    }
}

fn controller(surface: FakeSurface) -> Controller<FakeSurface> {
    Controller::new(surface, CarouselOptions::default())
}

fn attached_at(index: usize, count: usize) -> Controller<FakeSurface> {
    let mut surface = FakeSurface::with_items(count);
    surface.initial_offset = index as f32 * PITCH;
    let mut c = controller(surface);
    assert_eq!(c.attach(0), AttachStatus::Attached);
    assert_eq!(c.centered_index(), Some(index));
    c
}

/// Ticks every 16 ms from `now_ms` until the controller stops asking for frames.
fn run_frames(c: &mut Controller<FakeSurface>, mut now_ms: u64) -> u64 {
    while c.wants_frame() {
        now_ms += 16;
        c.tick(now_ms);
        assert!(now_ms < 100_000, "controller never came to rest");
    }
    now_ms
}

#[test]
fn attaching_twice_keeps_one_listener_set() {
    let mut c = controller(FakeSurface::with_items(5));
    assert_eq!(c.attach(0), AttachStatus::Attached);
    assert_eq!(c.attach(10), AttachStatus::Attached);

    let s = c.surface();
    assert_eq!(s.bound, vec![ListenerId(2)]);
    assert_eq!(s.unbinds, 1);
    assert_eq!(s.last_transforms.len(), 5);
    assert_eq!(s.transform_batches, 2);

    // Nothing changed: an idle tick writes nothing.
    assert_eq!(c.tick(16), None);
    assert_eq!(c.surface().transform_batches, 2);
}

#[test]
fn attach_defers_until_items_exist() {
    let mut c = controller(FakeSurface::new(Layout::new(VIEW)));
    assert_eq!(
        c.attach(1_000),
        AttachStatus::Deferred { retry_at_ms: 1_200 }
    );
    assert!(c.is_pending());
    assert_eq!(c.next_wakeup_ms(), Some(1_200));
    assert!(c.surface().bound.is_empty());

    // Still empty at the retry: schedule another one.
    assert_eq!(c.tick(1_100), None);
    assert_eq!(c.tick(1_200), None);
    assert!(c.is_pending());
    assert_eq!(c.next_wakeup_ms(), Some(1_400));

    c.surface_mut().layout = Layout::uniform(4, ITEM, GAP, VIEW);
    c.tick(1_399);
    assert!(c.is_pending());
    c.tick(1_400);
    assert!(c.is_attached());
    assert_eq!(c.surface().bound.len(), 1);
    assert_eq!(c.surface().last_transforms.len(), 4);
}

#[test]
fn zero_width_viewport_defers_attach() {
    let mut c = controller(FakeSurface::new(Layout::uniform(4, ITEM, GAP, 0.0)));
    assert!(matches!(c.attach(0), AttachStatus::Deferred { .. }));

    c.surface_mut().layout.set_viewport_width(VIEW);
    c.tick(200);
    assert!(c.is_attached());
}

#[test]
fn detach_is_idempotent_and_stops_motion() {
    let mut c = attached_at(0, 10);
    assert_eq!(c.scroll_to_index(5), Some(5));
    assert!(c.wants_frame());
    c.tick(16);
    c.tick(32);
    assert_eq!(c.carousel().phase(), Phase::Settling);

    c.detach();
    assert!(!c.is_attached());
    assert!(c.surface().bound.is_empty());
    assert_eq!(c.carousel().phase(), Phase::Idle);
    let offset = c.carousel().offset();

    c.detach();
    assert_eq!(c.surface().unbinds, 1);
    assert_eq!(c.tick(48), None);
    assert!(!c.handle(InputEvent::PointerDown {
        x: 100.0,
        time_ms: 50
    }));
    assert_eq!(c.carousel().offset(), offset);
}

#[test]
fn detach_cancels_a_pending_retry() {
    let mut c = controller(FakeSurface::new(Layout::new(VIEW)));
    c.attach(0);
    c.detach();
    assert!(!c.is_pending());
    assert_eq!(c.next_wakeup_ms(), None);

    c.surface_mut().layout = Layout::uniform(3, ITEM, GAP, VIEW);
    c.tick(500);
    assert!(!c.is_attached());
}

#[test]
fn scroll_to_index_before_attach_is_applied_on_attach() {
    let reported = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&reported);

    let mut c = controller(FakeSurface::with_items(10));
    c.set_on_centered_change(Some(move |i| sink.lock().unwrap().push(i)));
    assert_eq!(c.scroll_to_index(3), None);

    c.attach(0);
    assert_eq!(c.carousel().target(), Some(3.0 * PITCH));
    run_frames(&mut c, 0);

    assert_eq!(c.centered_index(), Some(3));
    assert_eq!(c.surface().offset, 3.0 * PITCH);
    assert_eq!(*reported.lock().unwrap(), vec![3]);
}

#[test]
fn mouse_flick_steps_one_item_and_toggles_cursor() {
    let mut c = attached_at(2, 10);
    assert_eq!(c.surface().cursors, vec![Cursor::Grab]);

    assert!(c.handle(InputEvent::PointerDown {
        x: 300.0,
        time_ms: 1_000
    }));
    assert_eq!(c.surface().cursors.last(), Some(&Cursor::Grabbing));

    let batches = c.surface().transform_batches;
    for i in 1..=4u64 {
        let x = 300.0 - 37.5 * i as f32;
        assert!(c.handle(InputEvent::PointerMove {
            x,
            time_ms: 1_000 + 20 * i
        }));
    }
    // Offsets follow every move; transforms wait for the next frame.
    assert_eq!(c.surface().offset, 2.0 * PITCH + 150.0);
    assert_eq!(c.surface().transform_batches, batches);
    c.tick(1_090);
    assert_eq!(c.surface().transform_batches, batches + 1);

    assert!(!c.handle(InputEvent::PointerUp {
        x: 150.0,
        time_ms: 1_095
    }));
    assert_eq!(
        c.surface().cursors,
        vec![Cursor::Grab, Cursor::Grabbing, Cursor::Grab]
    );

    run_frames(&mut c, 1_095);
    assert_eq!(c.centered_index(), Some(3));
    assert_eq!(c.surface().offset, 3.0 * PITCH);
    assert!(c.surface().last_transforms[3].centered);
}

#[test]
fn touch_input_is_passive_and_cancel_settles_back() {
    let mut c = attached_at(2, 10);

    assert!(!c.handle(InputEvent::TouchStart {
        x: 300.0,
        time_ms: 1_000
    }));
    assert!(c.carousel().is_dragging());
    assert!(!c.handle(InputEvent::TouchMove {
        x: 290.0,
        time_ms: 1_500
    }));
    assert_eq!(c.carousel().offset(), 2.0 * PITCH + 10.0);

    // Mouse events do not feed or end a touch drag.
    assert!(!c.handle(InputEvent::PointerMove {
        x: 100.0,
        time_ms: 1_510
    }));
    assert!(!c.handle(InputEvent::PointerUp {
        x: 100.0,
        time_ms: 1_520
    }));
    assert!(c.carousel().is_dragging());
    assert_eq!(c.carousel().offset(), 2.0 * PITCH + 10.0);

    assert!(!c.handle(InputEvent::TouchCancel { time_ms: 1_600 }));
    assert!(c.carousel().is_settling());
    run_frames(&mut c, 1_600);
    assert_eq!(c.centered_index(), Some(2));
    assert_eq!(c.surface().offset, 2.0 * PITCH);
}

#[test]
fn pointer_leave_ends_a_mouse_drag() {
    let mut c = attached_at(4, 10);
    c.handle(InputEvent::PointerDown {
        x: 200.0,
        time_ms: 0,
    });
    c.handle(InputEvent::PointerMove {
        x: 195.0,
        time_ms: 400,
    });
    c.handle(InputEvent::PointerLeave { time_ms: 500 });
    assert!(!c.carousel().is_dragging());
    run_frames(&mut c, 500);
    assert_eq!(c.centered_index(), Some(4));
}

#[test]
fn wheel_is_only_handled_on_wide_windows() {
    let mut c = attached_at(0, 10);
    c.surface_mut().window_width = 800.0;
    assert!(!c.handle(InputEvent::Wheel {
        delta_y: 100.0,
        time_ms: 0
    }));
    assert!(!c.carousel().is_settling());

    c.surface_mut().window_width = DEFAULT_WHEEL_MIN_WINDOW_WIDTH;
    assert!(c.handle(InputEvent::Wheel {
        delta_y: 100.0,
        time_ms: 0
    }));
    assert_eq!(c.carousel().target(), Some(50.0));

    c.set_options(ControllerOptions::default().with_wheel_min_window_width(2_000.0));
    assert!(!c.handle(InputEvent::Wheel {
        delta_y: 100.0,
        time_ms: 10
    }));
    assert_eq!(c.carousel().target(), Some(50.0));
}

#[test]
fn idle_recenter_runs_on_its_interval() {
    let mut surface = FakeSurface::with_items(10);
    surface.initial_offset = 2.0 * PITCH + 10.0;
    let mut c = controller(surface);
    c.attach(0);
    assert_eq!(c.next_wakeup_ms(), Some(DEFAULT_RECENTER_INTERVAL_MS));

    assert_eq!(c.tick(16), None);
    assert_eq!(c.tick(1_499), None);
    assert_eq!(c.surface().offset, 2.0 * PITCH + 10.0);

    assert_eq!(c.tick(1_500), Some(2.0 * PITCH));
    assert_eq!(c.carousel().stats().recenters, 1);
    assert_eq!(c.next_wakeup_ms(), Some(3_000));
}

#[test]
fn idle_recenter_ignores_small_offsets_and_can_be_disabled() {
    let mut surface = FakeSurface::with_items(10);
    surface.initial_offset = 2.0 * PITCH + 2.0;
    let mut c = controller(surface);
    c.attach(0);
    assert_eq!(c.tick(1_500), None);
    assert_eq!(c.carousel().stats().recenters, 0);

    let mut surface = FakeSurface::with_items(10);
    surface.initial_offset = 2.0 * PITCH + 10.0;
    let mut c =
        controller(surface).with_options(ControllerOptions::default().with_recenter_interval_ms(0));
    c.attach(0);
    assert_eq!(c.next_wakeup_ms(), None);
    assert_eq!(c.tick(10_000), None);
    assert_eq!(c.carousel().stats().recenters, 0);
}

#[test]
fn rebuild_to_empty_goes_back_to_retrying() {
    let mut c = attached_at(1, 5);
    c.surface_mut().layout.clear();
    assert_eq!(c.rebuild(100), 0);
    assert!(c.is_pending());
    assert!(c.surface().bound.is_empty());
    assert_eq!(c.next_wakeup_ms(), Some(300));

    c.surface_mut().layout = Layout::uniform(3, ITEM, GAP, VIEW);
    assert_eq!(c.rebuild(150), 3);
    assert!(c.is_attached());
    assert_eq!(c.surface().bound.len(), 1);
    assert_eq!(c.surface().last_transforms.len(), 3);
}

#[test]
fn rebuild_while_attached_restyles_new_items() {
    let mut c = attached_at(0, 3);
    let batches = c.surface().transform_batches;
    c.surface_mut().layout.push(ITEM);
    assert_eq!(c.rebuild(10), 4);
    assert_eq!(c.surface().transform_batches, batches + 1);
    assert_eq!(c.surface().last_transforms.len(), 4);
    assert_eq!(c.surface().bound.len(), 1);
}

#[test]
fn frame_clock_clamps_steps() {
    let mut clock = FrameClock::new(16);
    assert_eq!(clock.tick(1_000), 16.0);
    assert_eq!(clock.tick(1_008), 8.0);
    assert_eq!(clock.tick(5_000), 16.0);
    assert_eq!(clock.tick(4_000), 0.0);
    assert_eq!(clock.last_ms(), Some(4_000));

    clock.reset();
    assert_eq!(clock.last_ms(), None);
    assert_eq!(FrameClock::new(0).max_step_ms(), 1);
}

#[test]
fn input_event_helpers() {
    let e = InputEvent::TouchEnd {
        x: None,
        time_ms: 42,
    };
    assert!(e.is_touch());
    assert_eq!(e.time_ms(), 42);
    assert!(
        !InputEvent::Wheel {
            delta_y: 1.0,
            time_ms: 0
        }
        .is_touch()
    );
}

#[test]
fn scroll_to_index_waits_for_a_measurable_viewport() {
    let mut c = attached_at(0, 10);
    c.surface_mut().layout.set_viewport_width(0.0);
    assert_eq!(c.scroll_to_index(7), None);
    assert!(c.wants_frame());

    // Still unreadable: the request is kept, not applied.
    c.tick(16);
    assert!(!c.carousel().is_settling());
    assert!(c.wants_frame());

    c.surface_mut().layout.set_viewport_width(VIEW);
    run_frames(&mut c, 16);
    assert_eq!(c.centered_index(), Some(7));
    assert_eq!(c.surface().offset, 7.0 * PITCH);
}

#[test]
fn a_new_drag_drops_a_deferred_scroll_request() {
    let mut c = attached_at(2, 10);
    c.surface_mut().layout.set_viewport_width(0.0);
    c.scroll_to_index(7);
    c.surface_mut().layout.set_viewport_width(VIEW);

    assert!(!c.handle(InputEvent::TouchStart {
        x: 300.0,
        time_ms: 100
    }));
    c.tick(116);
    assert!(c.carousel().is_dragging());
    c.handle(InputEvent::TouchEnd {
        x: Some(300.0),
        time_ms: 600,
    });
    run_frames(&mut c, 600);
    assert_eq!(c.centered_index(), Some(2));
}
