// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Accessibility attributes reflecting drag state.

/// Attribute name used to expose the grabbed state.
pub const ARIA_GRABBED: &str = "aria-grabbed";

/// Accessibility properties for the dragged element.
///
/// `grabbed` is `Some(true)` during a session and `None` otherwise: the
/// attribute is absent while idle rather than set to `false`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct AccessibilityProps {
    /// Grabbed state, if it should be exposed.
    pub grabbed: Option<bool>,
}

impl AccessibilityProps {
    /// Props for the given dragging state.
    #[must_use]
    pub const fn for_dragging(dragging: bool) -> Self {
        Self {
            grabbed: if dragging { Some(true) } else { None },
        }
    }

    /// Attribute name/value pairs to set on the element.
    ///
    /// Attributes not yielded should be removed.
    pub fn attributes(&self) -> impl Iterator<Item = (&'static str, &'static str)> {
        self.grabbed
            .map(|g| (ARIA_GRABBED, if g { "true" } else { "false" }))
            .into_iter()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn idle_exposes_nothing() {
        let props = AccessibilityProps::for_dragging(false);
        assert_eq!(props.grabbed, None);
        assert_eq!(props.attributes().count(), 0);
    }

    #[test]
    fn dragging_exposes_grabbed() {
        let props = AccessibilityProps::for_dragging(true);
        assert_eq!(props.grabbed, Some(true));
        assert_eq!(
            props.attributes().collect::<Vec<_>>(),
            [("aria-grabbed", "true")]
        );
    }
}
