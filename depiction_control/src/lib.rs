// Copyright 2025 the Depiction Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Depiction Control: a headless image viewer control.
//!
//! This crate glues host input to a [`depiction_view::Viewport`]. It does not
//! know about any UI toolkit: the host forwards raw pointer, wheel,
//! double-tap and resize events, and repaints when notified.
//!
//! - [`DepictionControl`]: owns the viewport of the loaded image and maps
//!   gestures to viewport commands.
//! - [`drag`]: pan gesture tracking for a captured pointer.
//! - [`ControlOptions`] / [`SizeMode`]: which gestures are enabled, and how a
//!   freshly loaded image is sized.
//!
//! ## Usage
//!
//! ```rust
//! use core::cell::Cell;
//!
//! use kurbo::{Point, Rect, Size};
//! use depiction_control::{ControlError, DepictionControl, SizeMode};
//!
//! let redraws = Cell::new(0);
//! let mut control = DepictionControl::new(Size::new(800.0, 600.0), || {
//!     redraws.set(redraws.get() + 1);
//! });
//!
//! // Nothing to map before an image is loaded.
//! assert_eq!(
//!     control.point_to_source_image_space(Point::ZERO),
//!     Err(ControlError::NoImageBound)
//! );
//!
//! // Load a decoded 100x100 image, center it, then fit it.
//! control.load_image(Size::new(100.0, 100.0)).unwrap();
//! control.center().unwrap();
//! control.set_size_mode(SizeMode::Fit);
//! assert_eq!(control.render_rect().unwrap(), Rect::new(100.0, 0.0, 700.0, 600.0));
//!
//! // Drag it to the right.
//! control.pointer_down(Point::new(400.0, 300.0));
//! control.pointer_move(Point::new(450.0, 300.0));
//! control.pointer_up(Point::new(450.0, 300.0));
//! assert_eq!(control.render_rect().unwrap().x0, 150.0);
//! assert!(redraws.get() >= 3);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod control;
pub mod drag;
mod error;
mod options;

pub use control::{DepictionControl, RedrawSink};
pub use error::ControlError;
pub use options::{ControlOptions, DEFAULT_WHEEL_ZOOM_STEP, SizeMode};
