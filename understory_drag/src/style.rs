// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style vocabulary for engines that control their element's presentation.
//!
//! These values are handed to a [`RendererHook`](crate::host::RendererHook)
//! only when [`DragOptions::control_style`](crate::DragOptions::control_style)
//! is enabled. The CSS spellings are provided for hosts that forward them to a
//! style attribute.

use alloc::string::String;
use core::fmt;

use kurbo::Vec2;

/// Cursor shown over the element that starts a drag.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Cursor {
    /// Draggable, not currently dragging.
    Grab,
    /// A drag session is active.
    Grabbing,
}

impl Cursor {
    /// Cursor for the given dragging state.
    #[must_use]
    pub const fn for_dragging(dragging: bool) -> Self {
        if dragging { Self::Grabbing } else { Self::Grab }
    }

    /// CSS `cursor` value.
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Grab => "grab",
            Self::Grabbing => "grabbing",
        }
    }
}

/// Hint that a property is about to change, so the renderer can prepare for it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum WillChange {
    /// The element's transform changes on every move.
    Transform,
}

impl WillChange {
    /// CSS `will-change` value.
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Transform => "transform",
        }
    }
}

/// Pixel translation that displays a drag offset.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Translate(pub Vec2);

impl Translate {
    /// CSS `transform` value, e.g. `translate(30px, 60px)`.
    #[must_use]
    pub fn to_css(self) -> String {
        alloc::format!("{self}")
    }
}

impl fmt::Display for Translate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "translate({}px, {}px)", self.0.x, self.0.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_follows_dragging_state() {
        assert_eq!(Cursor::for_dragging(false), Cursor::Grab);
        assert_eq!(Cursor::for_dragging(true), Cursor::Grabbing);
        assert_eq!(Cursor::Grab.as_css(), "grab");
        assert_eq!(Cursor::Grabbing.as_css(), "grabbing");
    }

    #[test]
    fn translate_formats_pixels() {
        assert_eq!(Translate(Vec2::new(30.0, 60.0)).to_css(), "translate(30px, 60px)");
        assert_eq!(Translate(Vec2::new(-1.5, 0.0)).to_css(), "translate(-1.5px, 0px)");
        assert_eq!(WillChange::Transform.as_css(), "transform");
    }
}
