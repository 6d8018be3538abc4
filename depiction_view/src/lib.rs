// Copyright 2025 the Depiction Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Depiction View: the geometry behind an interactive image viewer.
//!
//! This crate provides a small, headless model of a source image drawn
//! inside a fixed-size canvas. It focuses on:
//! - Render state: zoom percentage, render location, render size.
//! - Commands: pan, anchored zoom, fit/fill, center, revert.
//! - Coordinate conversion between canvas space and source-image space.
//! - Clamping, so the image can never escape the canvas.
//!
//! It does **not** decode, own, or draw pixels. Callers are expected to:
//! - Decode the image themselves and pass its extent to [`Viewport::new`].
//! - Read [`Viewport::render_rect`] when painting and draw the image there.
//! - Repaint whenever a command returns `true`.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use depiction_view::Viewport;
//!
//! // 800x600 canvas showing a 1600x400 image.
//! let mut view = Viewport::new(Size::new(800.0, 600.0), Size::new(1600.0, 400.0)).unwrap();
//!
//! // Fit the whole image into the canvas.
//! assert!(view.fit_or_fill(false, false));
//! assert_eq!(view.render_size(), Size::new(800.0, 200.0));
//!
//! // Zoom in on the pixel under the pointer; it stays under the pointer.
//! let pointer = Point::new(200.0, 300.0);
//! let before = view.point_to_source_image_space(pointer);
//! view.zoom_about(pointer, 75.0);
//! let after = view.point_to_source_image_space(pointer);
//! assert!((before.x - after.x).abs() < 1e-9);
//! assert!((before.y - after.y).abs() < 1e-9);
//! ```
//!
//! ## Zoom limits
//!
//! Zooms that would go past the limits are ignored rather than reported as
//! errors, because input devices produce long runs of out-of-range requests:
//!
//! ```rust
//! use kurbo::Size;
//! use depiction_view::Viewport;
//!
//! // A 60x80 image is already below the 64 unit floor.
//! let mut view = Viewport::new(Size::new(800.0, 600.0), Size::new(60.0, 80.0)).unwrap();
//! assert!(!view.zoom_to(50.0));
//! assert_eq!(view.zoom_percentage(), 100.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod clamp;
mod error;
mod limits;
mod viewport;

pub use clamp::clamp_render_location;
pub use error::ViewportError;
pub use limits::{DEFAULT_MAX_ZOOM_PERCENTAGE, DEFAULT_MIN_RENDER_EXTENT, ZoomLimits};
pub use viewport::{Viewport, ViewportDebugInfo};
