// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input unification: map mouse and touch payloads onto one pointer position.
//!
//! Hosts deliver either a mouse-style event, which carries client coordinates
//! directly, or a touch-style event, which nests coordinates in touch lists.
//! [`pointer_position`] is the only place coordinates are read, and it applies
//! one fixed fallback order:
//!
//! - Start / move: first active touch, then the event's own client coordinates.
//! - End: first changed touch, then first active touch, then the event's own
//!   client coordinates.
//!
//! Non-finite coordinates are treated as absent, so a malformed event yields
//! `None` instead of poisoning the offset.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_drag::input::{InputEvent, TouchInput, TouchKind, pointer_position};
//!
//! // A touch end carries the lifted finger in `changed_touches` only.
//! let end = InputEvent::Touch(
//!     TouchInput::new(TouchKind::End).with_changed_touches([Point::new(40.0, 70.0)]),
//! );
//! assert_eq!(pointer_position(&end), Some(Point::new(40.0, 70.0)));
//! ```

use kurbo::Point;
use smallvec::SmallVec;

/// Where an event sits in a drag session.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Mouse down / touch start.
    Start,
    /// Mouse move / touch move.
    Move,
    /// Mouse up / touch end / touch cancel.
    End,
}

/// Mouse buttons, numbered like DOM `MouseEvent.button`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Usually the left button.
    #[default]
    Primary,
    /// Usually the wheel button.
    Auxiliary,
    /// Usually the right button.
    Secondary,
    /// Any other button.
    Other(u16),
}

impl MouseButton {
    /// Maps a DOM-style button index.
    #[must_use]
    pub const fn from_index(index: u16) -> Self {
        match index {
            0 => Self::Primary,
            1 => Self::Auxiliary,
            2 => Self::Secondary,
            n => Self::Other(n),
        }
    }
}

/// Kind of a mouse event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MouseKind {
    /// Button pressed.
    Down,
    /// Pointer moved.
    Move,
    /// Button released.
    Up,
}

/// A mouse-style event: coordinates live on the event itself.
#[derive(Clone, Debug, PartialEq)]
pub struct MouseInput {
    /// What happened.
    pub kind: MouseKind,
    /// Which button changed state (meaningful for down/up).
    pub button: MouseButton,
    /// Client coordinates, if the host could supply them.
    pub client: Option<Point>,
}

impl MouseInput {
    /// A primary-button event at `client`.
    #[must_use]
    pub const fn new(kind: MouseKind, client: Point) -> Self {
        Self {
            kind,
            button: MouseButton::Primary,
            client: Some(client),
        }
    }

    /// Replaces the button.
    #[must_use]
    pub const fn with_button(mut self, button: MouseButton) -> Self {
        self.button = button;
        self
    }
}

/// Kind of a touch event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TouchKind {
    /// First contact.
    Start,
    /// Contact moved.
    Move,
    /// Contact lifted.
    End,
    /// Contact cancelled by the system.
    Cancel,
}

/// Touch point list; a single finger is the common case.
pub type TouchList = SmallVec<[Point; 2]>;

/// A touch-style event: coordinates are nested in touch lists.
#[derive(Clone, Debug, PartialEq)]
pub struct TouchInput {
    /// What happened.
    pub kind: TouchKind,
    /// Touches still on the surface.
    pub touches: TouchList,
    /// Touches that changed in this event.
    pub changed_touches: TouchList,
    /// Coordinates carried by the event itself, if any.
    pub client: Option<Point>,
}

impl TouchInput {
    /// An event of `kind` with empty touch lists.
    #[must_use]
    pub fn new(kind: TouchKind) -> Self {
        Self {
            kind,
            touches: TouchList::new(),
            changed_touches: TouchList::new(),
            client: None,
        }
    }

    /// Replaces the active touch list.
    #[must_use]
    pub fn with_touches(mut self, touches: impl IntoIterator<Item = Point>) -> Self {
        self.touches = touches.into_iter().collect();
        self
    }

    /// Replaces the changed touch list.
    #[must_use]
    pub fn with_changed_touches(mut self, touches: impl IntoIterator<Item = Point>) -> Self {
        self.changed_touches = touches.into_iter().collect();
        self
    }

    /// Sets the event's own client coordinates.
    #[must_use]
    pub fn with_client(mut self, client: Point) -> Self {
        self.client = Some(client);
        self
    }
}

/// Any input event the engine understands.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// Mouse-style payload.
    Mouse(MouseInput),
    /// Touch-style payload.
    Touch(TouchInput),
}

impl InputEvent {
    /// Primary-button mouse down at `at`.
    #[must_use]
    pub const fn mouse_down(at: Point) -> Self {
        Self::Mouse(MouseInput::new(MouseKind::Down, at))
    }

    /// Mouse move to `at`.
    #[must_use]
    pub const fn mouse_move(at: Point) -> Self {
        Self::Mouse(MouseInput::new(MouseKind::Move, at))
    }

    /// Primary-button mouse up at `at`.
    #[must_use]
    pub const fn mouse_up(at: Point) -> Self {
        Self::Mouse(MouseInput::new(MouseKind::Up, at))
    }

    /// Single-finger touch start at `at`.
    #[must_use]
    pub fn touch_start(at: Point) -> Self {
        Self::Touch(
            TouchInput::new(TouchKind::Start)
                .with_touches([at])
                .with_changed_touches([at]),
        )
    }

    /// Single-finger touch move to `at`.
    #[must_use]
    pub fn touch_move(at: Point) -> Self {
        Self::Touch(
            TouchInput::new(TouchKind::Move)
                .with_touches([at])
                .with_changed_touches([at]),
        )
    }

    /// Single-finger lift at `at`; the lifted touch is only in the changed list.
    #[must_use]
    pub fn touch_end(at: Point) -> Self {
        Self::Touch(TouchInput::new(TouchKind::End).with_changed_touches([at]))
    }

    /// The session phase this event belongs to.
    #[must_use]
    pub fn phase(&self) -> Phase {
        match self {
            Self::Mouse(m) => match m.kind {
                MouseKind::Down => Phase::Start,
                MouseKind::Move => Phase::Move,
                MouseKind::Up => Phase::End,
            },
            Self::Touch(t) => match t.kind {
                TouchKind::Start => Phase::Start,
                TouchKind::Move => Phase::Move,
                TouchKind::End | TouchKind::Cancel => Phase::End,
            },
        }
    }

    /// Returns `true` if this event may open a session.
    ///
    /// Touch starts always qualify; mouse downs only for the primary button.
    #[must_use]
    pub fn can_start(&self) -> bool {
        match self {
            Self::Mouse(m) => m.kind == MouseKind::Down && m.button == MouseButton::Primary,
            Self::Touch(t) => t.kind == TouchKind::Start,
        }
    }
}

/// Reads the canonical pointer position from any input event.
///
/// Returns `None` when no finite coordinate can be found anywhere in the
/// fallback chain.
#[must_use]
pub fn pointer_position(event: &InputEvent) -> Option<Point> {
    match event {
        InputEvent::Mouse(m) => m.client.filter(is_finite),
        InputEvent::Touch(t) => {
            let changed = match event.phase() {
                Phase::End => t.changed_touches.first().copied(),
                Phase::Start | Phase::Move => None,
            };
            changed
                .or_else(|| t.touches.first().copied())
                .or(t.client)
                .filter(is_finite)
        }
    }
}

fn is_finite(p: &Point) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Point = Point::new(1.0, 2.0);
    const B: Point = Point::new(3.0, 4.0);
    const C: Point = Point::new(5.0, 6.0);

    #[test]
    fn mouse_reads_client() {
        assert_eq!(pointer_position(&InputEvent::mouse_move(A)), Some(A));
        let bare = InputEvent::Mouse(MouseInput {
            kind: MouseKind::Down,
            button: MouseButton::Primary,
            client: None,
        });
        assert_eq!(pointer_position(&bare), None);
    }

    #[test]
    fn start_and_move_prefer_first_active_touch() {
        for kind in [TouchKind::Start, TouchKind::Move] {
            let ev = InputEvent::Touch(
                TouchInput::new(kind)
                    .with_touches([A, C])
                    .with_changed_touches([B])
                    .with_client(C),
            );
            assert_eq!(pointer_position(&ev), Some(A), "{kind:?}");
        }
    }

    #[test]
    fn end_prefers_first_changed_touch() {
        let ev = InputEvent::Touch(
            TouchInput::new(TouchKind::End)
                .with_touches([A])
                .with_changed_touches([B])
                .with_client(C),
        );
        assert_eq!(pointer_position(&ev), Some(B));
    }

    #[test]
    fn end_falls_back_to_active_then_client() {
        let ev = InputEvent::Touch(
            TouchInput::new(TouchKind::End)
                .with_touches([A])
                .with_client(C),
        );
        assert_eq!(pointer_position(&ev), Some(A));

        let ev = InputEvent::Touch(TouchInput::new(TouchKind::Cancel).with_client(C));
        assert_eq!(pointer_position(&ev), Some(C));
    }

    #[test]
    fn empty_touch_event_has_no_position() {
        for kind in [TouchKind::Start, TouchKind::Move, TouchKind::End] {
            let ev = InputEvent::Touch(TouchInput::new(kind));
            assert_eq!(pointer_position(&ev), None, "{kind:?}");
        }
    }

    #[test]
    fn non_finite_coordinates_are_rejected() {
        assert_eq!(
            pointer_position(&InputEvent::mouse_move(Point::new(f64::NAN, 0.0))),
            None
        );
        assert_eq!(
            pointer_position(&InputEvent::touch_move(Point::new(0.0, f64::INFINITY))),
            None
        );
    }

    #[test]
    fn phases_and_start_eligibility() {
        assert_eq!(InputEvent::mouse_down(A).phase(), Phase::Start);
        assert_eq!(InputEvent::touch_move(A).phase(), Phase::Move);
        assert_eq!(InputEvent::mouse_up(A).phase(), Phase::End);
        assert_eq!(
            InputEvent::Touch(TouchInput::new(TouchKind::Cancel)).phase(),
            Phase::End
        );

        assert!(InputEvent::mouse_down(A).can_start());
        assert!(InputEvent::touch_start(A).can_start());
        assert!(!InputEvent::mouse_move(A).can_start());
        let right = InputEvent::Mouse(
            MouseInput::new(MouseKind::Down, A).with_button(MouseButton::Secondary),
        );
        assert!(!right.can_start());
    }

    #[test]
    fn button_indices_follow_dom_numbering() {
        assert_eq!(MouseButton::from_index(0), MouseButton::Primary);
        assert_eq!(MouseButton::from_index(1), MouseButton::Auxiliary);
        assert_eq!(MouseButton::from_index(2), MouseButton::Secondary);
        assert_eq!(MouseButton::from_index(4), MouseButton::Other(4));
    }
}
