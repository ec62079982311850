use liquid_carousel::{CarouselOptions, Cursor, Geometry, ItemBounds, ItemTransform, Layout};
use liquid_carousel_adapter::{Controller, InputEvent, ListenerId, Surface};

/// A pretend scroll container that prints what a real host would apply.
struct PrintSurface {
    layout: Layout,
    next_listener: u64,
}

impl Geometry for PrintSurface {
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

impl Surface for PrintSurface {
    fn scroll_offset(&self) -> f32 {
        0.0
    }

    fn bind_listeners(&mut self) -> ListenerId {
        self.next_listener += 1;
        println!("bind listeners #{}", self.next_listener);
        ListenerId(self.next_listener)
    }

    fn unbind_listeners(&mut self, id: ListenerId) {
        println!("unbind listeners #{}", id.0);
    }

    fn set_scroll_offset(&mut self, _offset: f32) {}

    fn apply_transforms(&mut self, transforms: &[ItemTransform]) {
        if let Some((i, t)) = transforms.iter().enumerate().find(|(_, t)| t.centered) {
            println!(
                "  centered card {i}: scale={:.3} opacity={:.3} rotateY={:.1}deg",
                t.scale, t.opacity, t.rotate_y_deg
            );
        }
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        println!("cursor: {cursor:?}");
    }
}

fn main() {
    // Example: a host whose items arrive after the first attach attempt.
    //
    // An adapter would:
    // - call attach() when the container mounts, and tick(now_ms) from its frame loop
    // - forward raw input through handle(), honoring its prevent-default answer
    // - call detach() when the container unmounts
    let surface = PrintSurface {
        layout: Layout::new(400.0),
        next_listener: 0,
    };
    let mut c = Controller::new(surface, CarouselOptions::default());
    c.set_on_centered_change(Some(|i| println!("centered -> {i}")));

    println!("attach: {:?}", c.attach(0));
    c.surface_mut().layout = Layout::uniform(8, 240.0, 20.0, 400.0);

    let mut now_ms = 0u64;
    while !c.is_attached() {
        now_ms += 16;
        c.tick(now_ms);
    }
    println!("attached at t={now_ms}");

    // A quick mouse flick to the left.
    let t0 = now_ms + 100;
    c.handle(InputEvent::PointerDown { x: 320.0, time_ms: t0 });
    for i in 1..=4u64 {
        let x = 320.0 - 45.0 * i as f32;
        let prevent = c.handle(InputEvent::PointerMove { x, time_ms: t0 + 16 * i });
        println!("move x={x} prevent_default={prevent}");
    }
    c.handle(InputEvent::PointerUp { x: 140.0, time_ms: t0 + 70 });

    now_ms = t0 + 70;
    while c.wants_frame() {
        now_ms += 16;
        if let Some(off) = c.tick(now_ms) {
            if now_ms.is_multiple_of(80) {
                println!("t={now_ms} off={off:.2}");
            }
        }
    }

    println!(
        "done: offset={} centered={:?}",
        c.carousel().offset(),
        c.centered_index()
    );
    c.detach();
}
