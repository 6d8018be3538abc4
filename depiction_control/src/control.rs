// Copyright 2025 the Depiction Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use depiction_view::{Viewport, ZoomLimits};
use kurbo::{Point, Rect, Size};

use crate::drag::PanDrag;
use crate::error::ControlError;
use crate::options::{ControlOptions, SizeMode};

/// Receives "state changed, please repaint" notifications.
///
/// The control never waits for the repaint; hosts are expected to schedule
/// and coalesce repaints in their own render loop.
pub trait RedrawSink {
    /// Called after any command changed what should be on screen.
    fn request_redraw(&mut self);
}

impl<F: FnMut()> RedrawSink for F {
    fn request_redraw(&mut self) {
        self();
    }
}

/// Headless image control: owns the viewport of the loaded image and turns
/// host input into viewport commands.
///
/// The host owns the real canvas. It forwards pointer, wheel, double-tap and
/// resize events here, repaints when the [`RedrawSink`] is notified, and
/// reads [`DepictionControl::render_rect`] to know where to draw.
///
/// Input events that arrive before an image is loaded are ignored.
/// Programmatic commands and geometry queries report
/// [`ControlError::NoImageBound`] instead.
pub struct DepictionControl<S> {
    canvas_size: Size,
    viewport: Option<Viewport>,
    options: ControlOptions,
    size_mode: SizeMode,
    limits: ZoomLimits,
    drag: PanDrag,
    sink: S,
}

impl<S: RedrawSink> DepictionControl<S> {
    /// Creates a control for a canvas of `canvas_size` with no image loaded.
    #[must_use]
    pub fn new(canvas_size: Size, sink: S) -> Self {
        Self {
            canvas_size,
            viewport: None,
            options: ControlOptions::default(),
            size_mode: SizeMode::default(),
            limits: ZoomLimits::default(),
            drag: PanDrag::default(),
            sink,
        }
    }

    /// Replaces the input options, builder style.
    #[must_use]
    pub fn with_options(mut self, options: ControlOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the input options.
    #[must_use]
    pub fn options(&self) -> ControlOptions {
        self.options
    }

    /// Replaces the input options.
    pub fn set_options(&mut self, options: ControlOptions) {
        self.options = options;
    }

    /// Sets the zoom limits used by the current and all future viewports.
    pub fn set_limits(&mut self, limits: ZoomLimits) {
        self.limits = limits.sanitized();
        if let Some(viewport) = self.viewport.as_mut() {
            viewport.set_limits(self.limits);
        }
    }

    /// Returns the canvas extent last reported by the host.
    #[must_use]
    pub fn canvas_size(&self) -> Size {
        self.canvas_size
    }

    /// Returns the current size mode.
    #[must_use]
    pub fn size_mode(&self) -> SizeMode {
        self.size_mode
    }

    /// Returns `true` once an image is loaded.
    #[must_use]
    pub fn has_image(&self) -> bool {
        self.viewport.is_some()
    }

    /// Returns the redraw sink.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Binds a newly decoded image of `source_size`, replacing any previous one.
    ///
    /// The current [`SizeMode`] is applied to the new image and a redraw is
    /// requested. A pan in progress is abandoned.
    ///
    /// # Errors
    ///
    /// Returns [`ControlError::Viewport`] when the image extent is invalid; the
    /// previously loaded image, if any, stays bound.
    pub fn load_image(&mut self, source_size: Size) -> Result<(), ControlError> {
        let viewport = Viewport::new(self.canvas_size, source_size)?.with_limits(self.limits);
        log::debug!("bound {}x{} image", source_size.width, source_size.height);
        self.drag.cancel();
        let viewport = self.viewport.insert(viewport);
        apply_size_mode(viewport, self.size_mode, &self.options);
        self.sink.request_redraw();
        Ok(())
    }

    /// Drops the loaded image. Returns `false` when none was loaded.
    pub fn unload_image(&mut self) -> bool {
        self.drag.cancel();
        if self.viewport.take().is_none() {
            return false;
        }
        self.sink.request_redraw();
        true
    }

    /// Records a new canvas extent after the host was resized.
    ///
    /// The location is re-clamped against the new canvas. Size modes that
    /// follow the canvas ([`SizeMode::follows_canvas`]) are then re-applied, so
    /// a fitted image stays fitted. [`SizeMode::Native`] keeps the current pan
    /// and zoom.
    pub fn resize(&mut self, canvas_size: Size) {
        self.canvas_size = canvas_size;
        let mode = self.size_mode;
        let options = self.options;
        self.run(|viewport| {
            let resized = viewport.set_canvas_size(canvas_size);
            if resized && mode.follows_canvas() {
                apply_size_mode(viewport, mode, &options)
            } else {
                resized
            }
        });
    }

    /// Pointer pressed on the canvas: starts a pan gesture.
    pub fn pointer_down(&mut self, position: Point) {
        if self.viewport.is_none() {
            return;
        }
        log::debug!("pan gesture started at {position:?}");
        self.drag.press(position);
    }

    /// Pointer moved: pans the image while a gesture is active.
    pub fn pointer_move(&mut self, position: Point) {
        let Some(delta) = self.drag.advance(position) else {
            return;
        };
        if self.options.allow_panning {
            self.run(|viewport| viewport.move_by(delta));
        }
    }

    /// Pointer released: ends the pan gesture.
    ///
    /// Requests a redraw whenever an image is loaded, even if no gesture was
    /// active.
    pub fn pointer_up(&mut self, position: Point) {
        if let Some(total) = self.drag.release(position) {
            log::debug!("pan gesture ended after {total:?}");
        }
        if self.viewport.is_some() {
            self.sink.request_redraw();
        }
    }

    /// Wheel input at `position`: zooms in for positive `delta`, out for
    /// negative `delta`, keeping the pixel under the pointer in place.
    pub fn wheel(&mut self, delta: f64, position: Point) {
        if !self.options.allow_wheel_zoom || delta == 0.0 || delta.is_nan() {
            return;
        }
        let factor = self.options.wheel_factor(delta);
        self.run(|viewport| viewport.zoom_about(position, viewport.zoom_percentage() * factor));
    }

    /// Double-tap at `position`: cycles between size modes.
    ///
    /// - From [`SizeMode::Fit`], fills the canvas anchored at the tap.
    /// - Otherwise, at 100% zoom, fits the image.
    /// - Otherwise zooms to 100% anchored at the tap, centering the image if
    ///   it is then smaller than the canvas on both axes.
    pub fn double_tap(&mut self, position: Point) {
        if !self.options.allow_double_tap_zoom {
            return;
        }
        let Some(viewport) = self.viewport.as_mut() else {
            return;
        };
        let next = if self.size_mode == SizeMode::Fit {
            SizeMode::Fill
        } else if viewport.zoom_percentage() == 100.0 {
            SizeMode::Fit
        } else {
            SizeMode::Native
        };
        log::debug!("double tap: {:?} -> {next:?}", self.size_mode);
        self.size_mode = next;

        let redraw = match next {
            SizeMode::Fill => viewport.fit_or_fill_about(position, true, false),
            SizeMode::Fit => viewport.fit_or_fill(false, self.options.cap_fit_at_native),
            SizeMode::Center => viewport.center(),
            SizeMode::Native => {
                let zoomed = viewport.zoom_about(position, 100.0);
                let render = viewport.render_size();
                let canvas = viewport.canvas_size();
                if render.width < canvas.width && render.height < canvas.height {
                    viewport.center()
                } else {
                    zoomed
                }
            }
        };
        if redraw {
            self.sink.request_redraw();
        }
    }

    /// Switches size mode and applies it to the loaded image, if any.
    ///
    /// [`SizeMode::Native`] reverts the view, [`SizeMode::Fit`] fits (capped
    /// per [`ControlOptions::cap_fit_at_native`]), [`SizeMode::Fill`] fills and
    /// [`SizeMode::Center`] centers at the current zoom.
    pub fn set_size_mode(&mut self, mode: SizeMode) {
        self.size_mode = mode;
        let options = self.options;
        self.run(|viewport| apply_size_mode(viewport, mode, &options));
    }

    /// Runs a programmatic viewport command and forwards its redraw request.
    ///
    /// Returns what the command returned.
    ///
    /// # Errors
    ///
    /// Returns [`ControlError::NoImageBound`] when no image is loaded.
    pub fn command(
        &mut self,
        command: impl FnOnce(&mut Viewport) -> bool,
    ) -> Result<bool, ControlError> {
        self.run(command).ok_or(ControlError::NoImageBound)
    }

    /// Zooms to `target_percentage` about the canvas center.
    ///
    /// # Errors
    ///
    /// Returns [`ControlError::NoImageBound`] when no image is loaded.
    pub fn zoom_to(&mut self, target_percentage: f64) -> Result<bool, ControlError> {
        self.command(|viewport| viewport.zoom_to(target_percentage))
    }

    /// Centers the image on the canvas.
    ///
    /// # Errors
    ///
    /// Returns [`ControlError::NoImageBound`] when no image is loaded.
    pub fn center(&mut self) -> Result<bool, ControlError> {
        self.command(Viewport::center)
    }

    /// Resets the image to native size at the canvas origin.
    ///
    /// # Errors
    ///
    /// Returns [`ControlError::NoImageBound`] when no image is loaded.
    pub fn revert(&mut self) -> Result<bool, ControlError> {
        self.command(Viewport::revert)
    }

    /// Returns the viewport of the loaded image.
    ///
    /// # Errors
    ///
    /// Returns [`ControlError::NoImageBound`] when no image is loaded.
    pub fn viewport(&self) -> Result<&Viewport, ControlError> {
        self.viewport.as_ref().ok_or(ControlError::NoImageBound)
    }

    /// Returns the current zoom percentage.
    ///
    /// # Errors
    ///
    /// Returns [`ControlError::NoImageBound`] when no image is loaded.
    pub fn zoom_percentage(&self) -> Result<f64, ControlError> {
        self.viewport().map(Viewport::zoom_percentage)
    }

    /// Returns the destination rectangle to draw the image into.
    ///
    /// # Errors
    ///
    /// Returns [`ControlError::NoImageBound`] when no image is loaded.
    pub fn render_rect(&self) -> Result<Rect, ControlError> {
        self.viewport().map(Viewport::render_rect)
    }

    /// Maps a canvas point, such as the pointer position, into source-image
    /// space.
    ///
    /// # Errors
    ///
    /// Returns [`ControlError::NoImageBound`] when no image is loaded.
    pub fn point_to_source_image_space(
        &self,
        point_on_canvas: Point,
    ) -> Result<Point, ControlError> {
        self.viewport()
            .map(|viewport| viewport.point_to_source_image_space(point_on_canvas))
    }

    /// Runs `command` on the viewport, if any, and notifies the sink when it
    /// asks for a redraw.
    fn run(&mut self, command: impl FnOnce(&mut Viewport) -> bool) -> Option<bool> {
        let viewport = self.viewport.as_mut()?;
        let redraw = command(viewport);
        if redraw {
            self.sink.request_redraw();
        }
        Some(redraw)
    }
}

impl<S> fmt::Debug for DepictionControl<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DepictionControl")
            .field("canvas_size", &self.canvas_size)
            .field("viewport", &self.viewport)
            .field("options", &self.options)
            .field("size_mode", &self.size_mode)
            .field("limits", &self.limits)
            .field("drag", &self.drag)
            .finish_non_exhaustive()
    }
}

fn apply_size_mode(viewport: &mut Viewport, mode: SizeMode, options: &ControlOptions) -> bool {
    match mode {
        SizeMode::Native => viewport.revert(),
        SizeMode::Fit => viewport.fit_or_fill(false, options.cap_fit_at_native),
        SizeMode::Fill => viewport.fit_or_fill(true, false),
        SizeMode::Center => viewport.center(),
    }
}
