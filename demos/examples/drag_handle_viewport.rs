// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Handle + viewport clamping with engine-controlled style.
//!
//! A dialog is dragged by its title bar. The engine writes cursor,
//! will-change, and transform styles itself, and keeps the dialog inside
//! the window.
//!
//! Run:
//! - `cargo run -p understory_drag_demos --example drag_handle_viewport`

use kurbo::{Point, Rect, Size};
use understory_drag::{DragEngine, DragHost, DragOptions, InputEvent};
use understory_drag_demos::{CssStyles, SimPage, document, init_logging, press};

const DIALOG: u32 = 1;
const TITLE_BAR: u32 = 2;

fn main() {
    init_logging();

    let mut page = SimPage::new(Size::new(300.0, 200.0));
    page.insert(DIALOG, Rect::new(50.0, 40.0, 150.0, 100.0));
    page.insert(TITLE_BAR, Rect::new(50.0, 40.0, 150.0, 55.0));

    let options = DragOptions::default()
        .with_control_style(true)
        .with_viewport(true);
    let mut drag = DragEngine::new(page, CssStyles::default(), options);
    drag.bind_target(DIALOG);
    drag.bind_handle(Some(TITLE_BAR));
    if let Err(err) = drag.attach() {
        tracing::error!(%err, "cannot mount drag engine");
        return;
    }
    print_styles(&drag);

    println!("Pressing the dialog body does nothing:");
    println!("  {:?}", press(&mut drag, DIALOG, InputEvent::mouse_down(Point::new(100.0, 80.0))));

    println!("Dragging the title bar far to the right:");
    press(&mut drag, TITLE_BAR, InputEvent::mouse_down(Point::new(60.0, 45.0)));
    println!("  limits: {:?}", drag.limits());
    document(&mut drag, InputEvent::mouse_move(Point::new(560.0, 45.0)));
    print_styles(&drag);
    document(&mut drag, InputEvent::mouse_up(Point::new(560.0, 45.0)));
    print_styles(&drag);

    // The transform moved the dialog; reflect that in layout before the next session.
    let offset = drag.offset();
    drag.host_mut().translate(DIALOG, offset);
    drag.host_mut().translate(TITLE_BAR, offset);
    println!("  dialog at {:?}", drag.host().bounding_rect(DIALOG));

    println!("Dragging up and to the left past the corner:");
    press(&mut drag, TITLE_BAR, InputEvent::touch_start(Point::new(210.0, 45.0)));
    document(&mut drag, InputEvent::touch_move(Point::new(-400.0, -400.0)));
    document(&mut drag, InputEvent::touch_end(Point::new(-400.0, -400.0)));
    print_styles(&drag);
    println!("  committed offset {:?}", drag.baseline());

    drag.detach();
    println!("After detach:");
    print_styles(&drag);
}

fn print_styles(drag: &DragEngine<SimPage, CssStyles>) {
    let css = drag.renderer();
    println!("  dialog    style=\"{}\"", css.attribute(DIALOG));
    println!("  title bar style=\"{}\"", css.attribute(TITLE_BAR));
}
