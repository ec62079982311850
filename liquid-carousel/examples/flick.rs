// Example: a simulated flick, released and settled frame by frame.
use liquid_carousel::{Carousel, CarouselOptions, Geometry, InputKind, Layout};

fn main() {
    // 10 cards of 280px with a 20px gap in a 360px viewport.
    let layout = Layout::uniform(10, 280.0, 20.0, 360.0);
    let mut c = Carousel::new(layout, CarouselOptions::default());
    c.set_on_centered_change(Some(|i| println!("centered -> {i}")));

    let start = c.geometry().centered_offset(2).unwrap_or(0.0);
    c.sync_offset(start);

    // Finger moves 160px to the left in 64ms.
    c.pointer_down(InputKind::Touch, 300.0, 0);
    for (i, t) in [16u64, 32, 48, 64].into_iter().enumerate() {
        c.pointer_move(300.0 - 40.0 * (i + 1) as f32, t);
        c.advance(16.0);
    }
    let decision = c.pointer_up(None);
    println!("release: {decision:?}");

    let mut frame = 0u32;
    while c.needs_frame() {
        let f = c.advance(16.0);
        frame += 1;
        if frame % 5 == 0 || f.settled {
            println!(
                "frame={frame} offset={:.2} phase={:?} settled={}",
                f.offset, f.phase, f.settled
            );
        }
    }

    println!(
        "done: offset={} centered={:?} stats={:?}",
        c.offset(),
        c.centered_index(),
        c.stats()
    );
}
