// Copyright 2025 the Depiction Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure clamping rules for the render rectangle.
//!
//! Every write of a render location in [`crate::Viewport`] goes through
//! [`clamp_render_location`], so a rendered image can never leave the canvas
//! entirely, and a canvas can never be left mostly empty by an image that is
//! larger than it.

use kurbo::{Point, Size};

/// Clamps a desired top-left render location against the canvas.
///
/// Per axis:
/// - When the render extent is at least the canvas extent, the location is
///   kept in `[-(render - canvas / 2), canvas / 2]`: the image edge may be
///   dragged up to the middle of the canvas, but no further.
/// - Otherwise the image center is kept inside the canvas, which means the
///   location is kept in `[-render / 2, canvas - render / 2]`.
///
/// The function is idempotent.
#[must_use]
pub fn clamp_render_location(desired: Point, render_size: Size, canvas_size: Size) -> Point {
    Point::new(
        clamp_axis(desired.x, render_size.width, canvas_size.width),
        clamp_axis(desired.y, render_size.height, canvas_size.height),
    )
}

fn clamp_axis(desired: f64, render: f64, canvas: f64) -> f64 {
    let (min, max) = if render >= canvas {
        (-(render - canvas / 2.0), canvas / 2.0)
    } else {
        (-render / 2.0, canvas - render / 2.0)
    };
    // `max`/`min` rather than `clamp`: a NaN bound must not panic.
    desired.max(min).min(max)
}

/// Clamps one axis of a location against the hard canvas edges.
///
/// An image smaller than the canvas is kept fully inside it; an image at
/// least as large as the canvas is kept covering it completely.
pub(crate) fn clamp_axis_to_edges(location: f64, render: f64, canvas: f64) -> f64 {
    let (min, max) = if render < canvas {
        (0.0, canvas - render)
    } else {
        (canvas - render, 0.0)
    };
    location.max(min).min(max)
}
