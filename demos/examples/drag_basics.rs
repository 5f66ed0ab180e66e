// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag basics.
//!
//! Drive two sessions over a headless engine, one by mouse and one by touch,
//! and watch the offset accumulate. The consumer positions the element itself.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p understory_drag_demos --example drag_basics`

use kurbo::{Point, Rect, Size};
use understory_drag::{DragEngine, DragHost, DragOptions, InputEvent};
use understory_drag_demos::{SimPage, document, init_logging, press};

const CARD: u32 = 1;

fn main() {
    init_logging();

    let mut page = SimPage::new(Size::new(800.0, 600.0));
    page.insert(CARD, Rect::new(20.0, 20.0, 220.0, 120.0));

    let mut drag = DragEngine::headless(page, DragOptions::default());
    drag.bind_target(CARD);
    if let Err(err) = drag.attach() {
        tracing::error!(%err, "cannot mount drag engine");
        return;
    }

    println!("Mouse session: (10, 10) -> (40, 70)");
    press(&mut drag, CARD, InputEvent::mouse_down(Point::new(10.0, 10.0)));
    println!("  aria: {:?}", drag.accessibility_props().attributes().collect::<Vec<_>>());
    document(&mut drag, InputEvent::mouse_move(Point::new(25.0, 40.0)));
    println!("  mid-drag: {:?}", drag.state());
    document(&mut drag, InputEvent::mouse_up(Point::new(40.0, 70.0)));
    println!("  committed: {:?}", drag.baseline());

    // Late events after release have nowhere to go.
    let late = document(&mut drag, InputEvent::mouse_move(Point::new(400.0, 400.0)));
    println!("  late move delivered: {}", late.is_some());

    println!("Touch session: (5, 5) -> (15, 5)");
    press(&mut drag, CARD, InputEvent::touch_start(Point::new(5.0, 5.0)));
    document(&mut drag, InputEvent::touch_end(Point::new(15.0, 5.0)));

    let offset = drag.render(|view| {
        println!(
            "  render: target={:?} dragging={} offset={:?}",
            view.target, view.state.dragging, view.state.offset
        );
        view.state.offset
    });
    drag.host_mut().translate(CARD, offset);
    println!("  card now at {:?}", drag.host().bounding_rect(CARD));
}
