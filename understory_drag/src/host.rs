// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capabilities the engine needs from its environment.
//!
//! The engine never touches a real document. Instead it drives two small
//! traits:
//!
//! - [`DragHost`]: listener registration and geometry queries. Required.
//! - [`RendererHook`]: presentation side effects. Only invoked when
//!   [`DragOptions::control_style`](crate::DragOptions::control_style) is on;
//!   `()` is a no-op implementation for hosts that render the offset themselves.
//!
//! Listener registration is bookkeeping on the host side: once the engine
//! calls [`DragHost::listen_document`], the host is expected to forward
//! document-level move/end events to
//! [`DragEngine::on_document_event`](crate::DragEngine::on_document_event)
//! until [`DragHost::unlisten_document`] is called.

use core::fmt::Debug;

use kurbo::{Rect, Size, Vec2};

use crate::style::{Cursor, WillChange};

/// Environment a [`DragEngine`](crate::DragEngine) is mounted in.
pub trait DragHost {
    /// Identifies an element. Typically an index, id, or cheap handle.
    type Element: Copy + Eq + Debug;

    /// Start forwarding mouse-down and touch-start on `element` to
    /// [`DragEngine::on_element_event`](crate::DragEngine::on_element_event).
    fn listen_start(&mut self, element: Self::Element);

    /// Stop forwarding start events from `element`.
    fn unlisten_start(&mut self, element: Self::Element);

    /// Start forwarding document-level move and end events to
    /// [`DragEngine::on_document_event`](crate::DragEngine::on_document_event).
    ///
    /// Move listeners should be passive; the engine never cancels them.
    fn listen_document(&mut self);

    /// Stop forwarding document-level move and end events.
    fn unlisten_document(&mut self);

    /// Current bounding box of `element` in client coordinates.
    fn bounding_rect(&self, element: Self::Element) -> Rect;

    /// Inner size of the window.
    fn viewport_size(&self) -> Size;
}

/// Optional presentation side effects.
pub trait RendererHook<E> {
    /// Sets or clears the `will-change` hint on `element`.
    fn set_will_change(&mut self, element: E, hint: Option<WillChange>);

    /// Sets or clears the cursor on `element`.
    fn set_cursor(&mut self, element: E, cursor: Option<Cursor>);

    /// Displays `element` translated by `offset` pixels.
    fn set_transform(&mut self, element: E, offset: Vec2);
}

impl<E> RendererHook<E> for () {
    fn set_will_change(&mut self, _: E, _: Option<WillChange>) {}

    fn set_cursor(&mut self, _: E, _: Option<Cursor>) {}

    fn set_transform(&mut self, _: E, _: Vec2) {}
}

impl<E, R: RendererHook<E> + ?Sized> RendererHook<E> for &mut R {
    fn set_will_change(&mut self, element: E, hint: Option<WillChange>) {
        (**self).set_will_change(element, hint);
    }

    fn set_cursor(&mut self, element: E, cursor: Option<Cursor>) {
        (**self).set_cursor(element, cursor);
    }

    fn set_transform(&mut self, element: E, offset: Vec2) {
        (**self).set_transform(element, offset);
    }
}
