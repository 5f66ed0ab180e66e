// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Offset clamping: keep a dragged element's bounding box inside the viewport.
//!
//! Clamping is expressed in *offset space*: [`Limits`] bound the total offset
//! applied to the element, not its raw screen position. Limits are computed
//! once, at session start, from the element's current bounding box, the
//! viewport size, and the offset already committed by earlier sessions.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Rect, Size, Vec2};
//! use understory_drag::clamp::{Limits, clamp_offset};
//!
//! // A 100×40 element at (50, 10) in a 300×200 window, never dragged before.
//! let bounds = Rect::new(50.0, 10.0, 150.0, 50.0);
//! let limits = Limits::for_viewport(bounds, Size::new(300.0, 200.0), Vec2::ZERO);
//! assert_eq!(limits.max_x, 150.0);
//!
//! // Dragging far to the right stops at the window edge.
//! let clamped = clamp_offset(Vec2::new(500.0, 0.0), Some(&limits));
//! assert_eq!(clamped, Vec2::new(150.0, 0.0));
//!
//! // Without limits the candidate passes through unchanged.
//! assert_eq!(clamp_offset(Vec2::new(500.0, 0.0), None), Vec2::new(500.0, 0.0));
//! ```

use kurbo::{Rect, Size, Vec2};

/// Bounds on the total drag offset.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Limits {
    /// Smallest allowed horizontal offset.
    pub min_x: f64,
    /// Largest allowed horizontal offset.
    pub max_x: f64,
    /// Smallest allowed vertical offset.
    pub min_y: f64,
    /// Largest allowed vertical offset.
    pub max_y: f64,
}

impl Limits {
    /// Creates limits from explicit bounds.
    #[must_use]
    pub const fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Computes the offset bounds that keep `bounds` inside a viewport of `viewport` size.
    ///
    /// `bounds` is the element's bounding box as currently laid out, which
    /// already includes `baseline`. Adding `baseline` back converts the
    /// screen-space room on each side into bounds on the total offset.
    ///
    /// When the element is larger than the viewport along an axis, the
    /// minimum ends up above the maximum; [`clamp_offset`] then pins that
    /// axis to the maximum.
    #[must_use]
    pub fn for_viewport(bounds: Rect, viewport: Size, baseline: Vec2) -> Self {
        let left = bounds.x0;
        let top = bounds.y0;
        Self {
            min_x: -left + baseline.x,
            max_x: viewport.width - bounds.width() - left + baseline.x,
            min_y: -top + baseline.y,
            max_y: viewport.height - bounds.height() - top + baseline.y,
        }
    }

    /// Returns `true` if `offset` already satisfies these limits.
    #[must_use]
    pub fn contains(&self, offset: Vec2) -> bool {
        (self.min_x..=self.max_x).contains(&offset.x)
            && (self.min_y..=self.max_y).contains(&offset.y)
    }

    /// Returns `true` if either axis has `min > max`, as when the element is
    /// larger than the viewport.
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }
}

/// Clamps a candidate offset into `limits`, or returns it unchanged when there are none.
///
/// Each axis is computed as `min(max(v, lo), hi)`. Unlike [`f64::clamp`] this
/// never panics, even if `lo > hi`.
#[must_use]
pub fn clamp_offset(candidate: Vec2, limits: Option<&Limits>) -> Vec2 {
    let Some(l) = limits else {
        return candidate;
    };
    let clamped = Vec2::new(
        candidate.x.max(l.min_x).min(l.max_x),
        candidate.y.max(l.min_y).min(l.max_y),
    );
    debug_assert!(
        l.is_inverted() || l.contains(clamped),
        "clamped offset {clamped:?} escaped {l:?}"
    );
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits() -> Limits {
        Limits::new(-10.0, 20.0, -5.0, 40.0)
    }

    #[test]
    fn no_limits_is_identity() {
        for v in [
            Vec2::ZERO,
            Vec2::new(-1e9, 1e9),
            Vec2::new(0.25, -7.5),
        ] {
            assert_eq!(clamp_offset(v, None), v);
        }
    }

    #[test]
    fn inside_limits_is_unchanged() {
        let l = limits();
        for v in [
            Vec2::new(-10.0, -5.0),
            Vec2::new(20.0, 40.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(3.5, 12.25),
        ] {
            assert!(l.contains(v), "{v:?} should be within {l:?}");
            assert_eq!(clamp_offset(v, Some(&l)), v);
        }
    }

    #[test]
    fn outside_limits_lands_on_the_nearest_edge() {
        let l = limits();
        assert_eq!(clamp_offset(Vec2::new(-100.0, 0.0), Some(&l)), Vec2::new(-10.0, 0.0));
        assert_eq!(clamp_offset(Vec2::new(100.0, 0.0), Some(&l)), Vec2::new(20.0, 0.0));
        assert_eq!(clamp_offset(Vec2::new(0.0, -100.0), Some(&l)), Vec2::new(0.0, -5.0));
        assert_eq!(clamp_offset(Vec2::new(0.0, 100.0), Some(&l)), Vec2::new(0.0, 40.0));
        assert_eq!(
            clamp_offset(Vec2::new(1e6, -1e6), Some(&l)),
            Vec2::new(20.0, -5.0)
        );
    }

    #[test]
    fn result_always_within_limits() {
        let l = limits();
        let mut v = -60.0;
        while v <= 60.0 {
            let out = clamp_offset(Vec2::new(v, -v), Some(&l));
            assert!(l.contains(out), "{out:?} escaped {l:?}");
            v += 2.5;
        }
    }

    #[test]
    fn inverted_limits_pin_to_max() {
        // Element wider than the viewport.
        let l = Limits::new(10.0, -10.0, 0.0, 0.0);
        assert!(l.is_inverted(), "min_x > max_x should count as inverted");
        assert!(!limits().is_inverted(), "ordered limits are not inverted");
        assert_eq!(clamp_offset(Vec2::new(0.0, 0.0), Some(&l)).x, -10.0);
        assert_eq!(clamp_offset(Vec2::new(50.0, 0.0), Some(&l)).x, -10.0);
        assert_eq!(clamp_offset(Vec2::new(-50.0, 0.0), Some(&l)).x, -10.0);
    }

    #[test]
    fn viewport_limits_from_bounding_box() {
        let bounds = Rect::new(50.0, 20.0, 150.0, 60.0);
        let l = Limits::for_viewport(bounds, Size::new(300.0, 200.0), Vec2::ZERO);
        assert_eq!(l, Limits::new(-50.0, 150.0, -20.0, 140.0));
        // The box itself sits at offset zero, so zero must be admissible.
        assert!(l.contains(Vec2::ZERO), "{l:?} should admit the current position");
    }

    #[test]
    fn viewport_limits_account_for_baseline() {
        // Already moved by (30, 10): the box on screen reflects it, and the
        // bounds on the *total* offset shift back by the same amount.
        let bounds = Rect::new(80.0, 30.0, 180.0, 70.0);
        let l = Limits::for_viewport(bounds, Size::new(300.0, 200.0), Vec2::new(30.0, 10.0));
        assert_eq!(l, Limits::new(-50.0, 150.0, -20.0, 140.0));
    }
}
