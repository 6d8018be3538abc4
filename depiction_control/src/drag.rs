// Copyright 2025 the Depiction Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan drag tracking: turn a captured pointer's positions into pan deltas.
//!
//! ## Usage
//!
//! 1) Call [`PanDrag::press`] when the pointer is pressed and captured.
//! 2) On each move, call [`PanDrag::advance`] to get the displacement since
//!    the previous position; feed it to [`depiction_view::Viewport::move_by`].
//! 3) Call [`PanDrag::release`] when the pointer is released; it reports the
//!    total displacement of the gesture.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use depiction_control::drag::PanDrag;
//!
//! let mut drag = PanDrag::default();
//! drag.press(Point::new(10.0, 20.0));
//! assert!(drag.is_active());
//!
//! assert_eq!(drag.advance(Point::new(15.0, 25.0)), Some(Vec2::new(5.0, 5.0)));
//! assert_eq!(drag.advance(Point::new(12.0, 25.0)), Some(Vec2::new(-3.0, 0.0)));
//!
//! assert_eq!(drag.release(Point::new(12.0, 30.0)), Some(Vec2::new(2.0, 10.0)));
//! assert!(!drag.is_active());
//! ```

use kurbo::{Point, Vec2};

/// Tracks one pan gesture of a captured pointer.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PanDrag {
    pressed_at: Option<Point>,
    last: Option<Point>,
}

impl PanDrag {
    /// Starts a gesture at `position`, discarding any gesture in progress.
    pub fn press(&mut self, position: Point) {
        self.pressed_at = Some(position);
        self.last = Some(position);
    }

    /// Records a new pointer position and returns the displacement since the
    /// previous one, or `None` when no gesture is active.
    pub fn advance(&mut self, position: Point) -> Option<Vec2> {
        if !self.is_active() {
            return None;
        }
        let last = self.last.replace(position)?;
        Some(position - last)
    }

    /// Returns the displacement from the press position to `position`.
    #[must_use]
    pub fn total_offset(&self, position: Point) -> Option<Vec2> {
        self.pressed_at.map(|pressed_at| position - pressed_at)
    }

    /// Ends the gesture, returning its total displacement if one was active.
    pub fn release(&mut self, position: Point) -> Option<Vec2> {
        let total = self.total_offset(position);
        *self = Self::default();
        total
    }

    /// Abandons the gesture without reporting it, e.g. when the image changes.
    pub fn cancel(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` between a press and its release.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.pressed_at.is_some()
    }
}
