// Copyright 2025 the Depiction Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};

use crate::clamp::{clamp_axis_to_edges, clamp_render_location};
use crate::error::ViewportError;
use crate::limits::ZoomLimits;

/// Geometry of one source image displayed inside one canvas.
///
/// `Viewport` tracks where, and how large, the source image is drawn in canvas
/// space. It can be used to:
/// - Pan the image, zoom it around an anchor point, and fit or fill it into
///   the canvas.
/// - Convert points between canvas space and source-image space.
/// - Build the destination rectangle a paint routine draws the image into.
///
/// Every command returns `true` when it requests a redraw and bumps
/// [`Viewport::revision`]. Commands that are rejected (see
/// [`Viewport::zoom_about`]) return `false` and leave the state untouched.
#[derive(Clone, Debug)]
pub struct Viewport {
    canvas_size: Size,
    source_size: Size,
    zoom_percentage: f64,
    render_location: Point,
    limits: ZoomLimits,
    revision: u64,
}

impl Viewport {
    /// Binds a viewport to a canvas and a source image.
    ///
    /// - Initial zoom is 100% (one source pixel per canvas unit).
    /// - Initial render location is the canvas origin.
    /// - Zoom limits are [`ZoomLimits::default`].
    ///
    /// Negative or non-finite canvas extents are treated as zero.
    ///
    /// # Errors
    ///
    /// Returns [`ViewportError::InvalidSourceSize`] unless both source extents
    /// are finite and strictly positive.
    pub fn new(canvas_size: Size, source_size: Size) -> Result<Self, ViewportError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(source_size.width) || !valid(source_size.height) {
            return Err(ViewportError::InvalidSourceSize(source_size));
        }
        let canvas_size = sanitize_canvas_size(canvas_size);
        Ok(Self {
            canvas_size,
            source_size,
            zoom_percentage: 100.0,
            render_location: clamp_render_location(Point::ORIGIN, source_size, canvas_size),
            limits: ZoomLimits::default(),
            revision: 0,
        })
    }

    /// Replaces the zoom limits, builder style.
    #[must_use]
    pub fn with_limits(mut self, limits: ZoomLimits) -> Self {
        self.set_limits(limits);
        self
    }

    /// Replaces the zoom limits.
    ///
    /// Invalid fields fall back to their defaults, see [`ZoomLimits::sanitized`].
    /// The current geometry is not changed.
    pub fn set_limits(&mut self, limits: ZoomLimits) {
        self.limits = limits.sanitized();
    }

    /// Returns the zoom limits.
    #[must_use]
    pub fn limits(&self) -> ZoomLimits {
        self.limits
    }

    /// Returns the canvas extent.
    #[must_use]
    pub fn canvas_size(&self) -> Size {
        self.canvas_size
    }

    /// Returns the source image extent.
    #[must_use]
    pub fn source_size(&self) -> Size {
        self.source_size
    }

    /// Returns the current zoom, in percent of native source resolution.
    #[must_use]
    pub fn zoom_percentage(&self) -> f64 {
        self.zoom_percentage
    }

    /// Returns the top-left corner of the render rectangle in canvas space.
    #[must_use]
    pub fn render_location(&self) -> Point {
        self.render_location
    }

    /// Returns the size of the render rectangle in canvas space.
    ///
    /// This is always `source_size * zoom_percentage / 100`.
    #[must_use]
    pub fn render_size(&self) -> Size {
        self.source_size * (self.zoom_percentage / 100.0)
    }

    /// Returns the render rectangle: where the image is drawn on the canvas.
    #[must_use]
    pub fn render_rect(&self) -> Rect {
        Rect::from_origin_size(self.render_location, self.render_size())
    }

    /// Returns the full source image rectangle in source-image space.
    #[must_use]
    pub fn source_rect(&self) -> Rect {
        Rect::from_origin_size(Point::ORIGIN, self.source_size)
    }

    /// Returns the center of the canvas.
    #[must_use]
    pub fn canvas_center(&self) -> Point {
        Point::new(self.canvas_size.width / 2.0, self.canvas_size.height / 2.0)
    }

    /// Returns a counter that increases every time a command requests a redraw.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Clamps `desired` against the canvas using the current render size.
    ///
    /// See [`crate::clamp_render_location`].
    #[must_use]
    pub fn clamp_render_location(&self, desired: Point) -> Point {
        clamp_render_location(desired, self.render_size(), self.canvas_size)
    }

    /// Updates the canvas extent after the host was resized.
    ///
    /// The render location is re-clamped against the new canvas. Returns
    /// `false` when the extent did not change.
    pub fn set_canvas_size(&mut self, canvas_size: Size) -> bool {
        let canvas_size = sanitize_canvas_size(canvas_size);
        if self.canvas_size == canvas_size {
            return false;
        }
        self.canvas_size = canvas_size;
        self.render_location = self.clamp_render_location(self.render_location);
        self.commit("set_canvas_size")
    }

    /// Pans the image by a displacement in canvas space.
    ///
    /// Any displacement is accepted; the resulting location is clamped.
    pub fn move_by(&mut self, displacement: Vec2) -> bool {
        self.render_location = self.clamp_render_location(self.render_location + displacement);
        self.commit("move")
    }

    /// Pans the image by the distance between two pointer positions.
    pub fn move_between(&mut self, previous: Point, current: Point) -> bool {
        self.move_by(current - previous)
    }

    /// Resets to 100% zoom with the image at the canvas origin.
    pub fn revert(&mut self) -> bool {
        self.zoom_percentage = 100.0;
        self.render_location = self.clamp_render_location(Point::ORIGIN);
        self.commit("revert")
    }

    /// Centers the render rectangle on the canvas.
    pub fn center(&mut self) -> bool {
        let half = self.render_size().to_vec2() / 2.0;
        self.render_location = self.clamp_render_location(self.canvas_center() - half);
        self.commit("center")
    }

    /// Zooms to `target_percentage`, anchored at the canvas center.
    ///
    /// See [`Viewport::zoom_about`].
    pub fn zoom_to(&mut self, target_percentage: f64) -> bool {
        self.zoom_about(self.canvas_center(), target_percentage)
    }

    /// Zooms to `target_percentage`, keeping the image pixel under
    /// `fixed_point` at the same canvas position.
    ///
    /// The zoom is silently rejected, returning `false`, when:
    /// - `target_percentage` is not a finite positive number,
    /// - it does not increase the zoom and either render extent is already at
    ///   or below [`ZoomLimits::min_render_extent`],
    /// - it increases the zoom to [`ZoomLimits::max_percentage`] or above.
    ///
    /// The anchor holds exactly unless the resulting location has to be
    /// clamped.
    pub fn zoom_about(&mut self, fixed_point: Point, target_percentage: f64) -> bool {
        if !target_percentage.is_finite() || target_percentage <= 0.0 {
            log::debug!("zoom to {target_percentage}% rejected: not a positive percentage");
            return false;
        }

        let current = self.zoom_percentage;
        let zooming_in = target_percentage > current;
        let render_size = self.render_size();
        let floor = self.limits.min_render_extent;
        if !zooming_in && (render_size.width <= floor || render_size.height <= floor) {
            log::debug!(
                "zoom to {target_percentage}% rejected: render size {render_size:?} is at the {floor} floor"
            );
            return false;
        }
        if zooming_in && target_percentage >= self.limits.max_percentage {
            log::debug!(
                "zoom to {target_percentage}% rejected: ceiling is {}%",
                self.limits.max_percentage
            );
            return false;
        }

        let new_render_size = self.source_size * (target_percentage / 100.0);
        // Offset of the anchor inside the current render rectangle.
        let fixed_in_render = fixed_point - self.render_location;
        let relative_scale = 1.0 - (current - target_percentage) / current;
        let delta = fixed_in_render * relative_scale - fixed_in_render;
        self.render_location = clamp_render_location(
            self.render_location - delta,
            new_render_size,
            self.canvas_size,
        );
        self.zoom_percentage = target_percentage;
        self.commit("zoom")
    }

    /// Fits or fills the image into the canvas, anchored at the canvas center.
    ///
    /// See [`Viewport::fit_or_fill_about`].
    pub fn fit_or_fill(&mut self, allow_overflow: bool, cap_at_native: bool) -> bool {
        self.fit_or_fill_about(self.canvas_center(), allow_overflow, cap_at_native)
    }

    /// Scales the image so it fits inside the canvas or fills it.
    ///
    /// - `allow_overflow == false` (fit): the smaller per-axis scale wins, so
    ///   the whole image is visible.
    /// - `allow_overflow == true` (fill): the larger per-axis scale wins, so
    ///   the canvas is fully covered and the image may overflow.
    /// - `cap_at_native` never scales the image past 100%.
    ///
    /// After zooming about `fixed_point`, the limiting axis (the one that now
    /// matches the canvas exactly) is centered. The other axis keeps the
    /// position the anchored zoom gave it, pushed back inside the canvas edges
    /// (fit) or out to cover them (fill). When both axes limit, or the scale
    /// was capped, both axes are centered.
    pub fn fit_or_fill_about(
        &mut self,
        fixed_point: Point,
        allow_overflow: bool,
        cap_at_native: bool,
    ) -> bool {
        let width_factor = self.canvas_size.width / self.source_size.width;
        let height_factor = self.canvas_size.height / self.source_size.height;

        let (width_limits, height_limits) = if allow_overflow {
            (width_factor > height_factor, height_factor > width_factor)
        } else {
            (width_factor < height_factor, height_factor < width_factor)
        };
        let mut factor = if width_limits {
            width_factor
        } else {
            height_factor
        };
        let capped = cap_at_native && factor > 1.0;
        if capped {
            factor = 1.0;
        }

        if !self.zoom_about(fixed_point, factor * 100.0) {
            log::debug!("fit_or_fill kept zoom at {}%", self.zoom_percentage);
        }

        let render_size = self.render_size();
        let anchored = self.render_location;
        let centered = self.canvas_center() - render_size.to_vec2() / 2.0;
        let x = if capped || !height_limits {
            centered.x
        } else {
            clamp_axis_to_edges(anchored.x, render_size.width, self.canvas_size.width)
        };
        let y = if capped || !width_limits {
            centered.y
        } else {
            clamp_axis_to_edges(anchored.y, render_size.height, self.canvas_size.height)
        };
        self.render_location = self.clamp_render_location(Point::new(x, y));
        self.commit("fit_or_fill")
    }

    /// Maps a canvas point to the matching point of the unscaled source image.
    #[must_use]
    pub fn point_to_source_image_space(&self, point_on_canvas: Point) -> Point {
        let scale = self.scale_factors();
        let offset = point_on_canvas - self.render_location;
        Point::new(offset.x / scale.x, offset.y / scale.y)
    }

    /// Maps a source-image point to where it is currently drawn on the canvas.
    #[must_use]
    pub fn point_to_canvas_space(&self, point_in_source: Point) -> Point {
        let scale = self.scale_factors();
        self.render_location + Vec2::new(point_in_source.x * scale.x, point_in_source.y * scale.y)
    }

    /// Returns the part of the source image visible through the canvas.
    ///
    /// The rectangle is in source-image space and has zero area when no part
    /// of the image is on the canvas.
    #[must_use]
    pub fn visible_source_rect(&self) -> Rect {
        let top_left = self.point_to_source_image_space(Point::ORIGIN);
        let bottom_right = self.point_to_source_image_space(Point::new(
            self.canvas_size.width,
            self.canvas_size.height,
        ));
        let source = self.source_rect();
        let visible = Rect::from_points(top_left, bottom_right).intersect(source);
        if visible.width() > 0.0 && visible.height() > 0.0 {
            visible
        } else {
            Rect::from_origin_size(visible.origin(), Size::ZERO)
        }
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            canvas_size: self.canvas_size,
            source_size: self.source_size,
            zoom_percentage: self.zoom_percentage,
            render_rect: self.render_rect(),
            visible_source_rect: self.visible_source_rect(),
            limits: self.limits,
            revision: self.revision,
        }
    }

    /// Per-axis ratio between render size and source size.
    fn scale_factors(&self) -> Vec2 {
        let render = self.render_size();
        Vec2::new(
            render.width / self.source_size.width,
            render.height / self.source_size.height,
        )
    }

    fn commit(&mut self, command: &'static str) -> bool {
        self.revision = self.revision.wrapping_add(1);
        log::trace!(
            "{command}: zoom {}%, render rect {:?}",
            self.zoom_percentage,
            self.render_rect()
        );
        true
    }
}

fn sanitize_canvas_size(size: Size) -> Size {
    let sanitize = |v: f64| if v.is_finite() { v.max(0.0) } else { 0.0 };
    Size::new(sanitize(size.width), sanitize(size.height))
}

/// Debug snapshot of a [`Viewport`] state.
#[derive(Clone, Copy, Debug)]
pub struct ViewportDebugInfo {
    /// Canvas extent.
    pub canvas_size: Size,
    /// Source image extent.
    pub source_size: Size,
    /// Current zoom in percent.
    pub zoom_percentage: f64,
    /// Where the image is drawn, in canvas space.
    pub render_rect: Rect,
    /// Visible part of the image, in source-image space.
    pub visible_source_rect: Rect,
    /// Active zoom limits.
    pub limits: ZoomLimits,
    /// Redraw revision counter.
    pub revision: u64,
}
