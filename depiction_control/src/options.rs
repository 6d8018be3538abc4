// Copyright 2025 the Depiction Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Default relative zoom change per wheel notch.
pub const DEFAULT_WHEEL_ZOOM_STEP: f64 = 0.1;

/// Which input gestures a [`crate::DepictionControl`] reacts to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlOptions {
    /// Zoom around the pointer on wheel input.
    pub allow_wheel_zoom: bool,
    /// Pan the image while the pointer is pressed and moved.
    pub allow_panning: bool,
    /// Cycle size modes on double-tap.
    pub allow_double_tap_zoom: bool,
    /// Relative zoom change per wheel notch, in `(0, 1)`.
    ///
    /// Wheeling up multiplies the zoom by `1 + step`, wheeling down by
    /// `1 - step`. Out-of-range values fall back to
    /// [`DEFAULT_WHEEL_ZOOM_STEP`].
    pub wheel_zoom_step: f64,
    /// Never upscale past native resolution in [`SizeMode::Fit`].
    pub cap_fit_at_native: bool,
}

impl ControlOptions {
    pub(crate) fn wheel_factor(&self, delta: f64) -> f64 {
        let step = if self.wheel_zoom_step > 0.0 && self.wheel_zoom_step < 1.0 {
            self.wheel_zoom_step
        } else {
            DEFAULT_WHEEL_ZOOM_STEP
        };
        if delta > 0.0 { 1.0 + step } else { 1.0 - step }
    }
}

impl Default for ControlOptions {
    fn default() -> Self {
        Self {
            allow_wheel_zoom: true,
            allow_panning: true,
            allow_double_tap_zoom: true,
            wheel_zoom_step: DEFAULT_WHEEL_ZOOM_STEP,
            cap_fit_at_native: false,
        }
    }
}

/// How a loaded image is sized against the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SizeMode {
    /// Native resolution at the canvas origin.
    #[default]
    Native,
    /// Scaled so the whole image is visible.
    Fit,
    /// Scaled so the image covers the whole canvas.
    Fill,
    /// Current zoom kept, centered on the canvas.
    Center,
}

impl SizeMode {
    /// Returns `true` for modes that depend on the canvas extent and are
    /// re-applied when the canvas is resized.
    #[must_use]
    pub fn follows_canvas(self) -> bool {
        !matches!(self, Self::Native)
    }
}
