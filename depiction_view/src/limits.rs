// Copyright 2025 the Depiction Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Default zoom ceiling, in percent of native source resolution.
pub const DEFAULT_MAX_ZOOM_PERCENTAGE: f64 = 7500.0;

/// Default render-size floor, in canvas units, below which zooming out stops.
pub const DEFAULT_MIN_RENDER_EXTENT: f64 = 64.0;

/// Bounds applied by [`crate::Viewport::zoom_about`].
///
/// Both bounds only reject zooms that move *further* past them: a viewport
/// that is already beyond the ceiling can still zoom out, and one that is
/// already below the floor can still zoom in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomLimits {
    /// Increasing zooms to this percentage or above are rejected.
    pub max_percentage: f64,
    /// Decreasing zooms are rejected while either render extent is at or
    /// below this many canvas units.
    pub min_render_extent: f64,
}

impl ZoomLimits {
    /// Returns a copy where invalid fields are replaced by their defaults.
    ///
    /// The ceiling must be finite and positive; the floor must be finite and
    /// non-negative.
    #[must_use]
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        Self {
            max_percentage: if self.max_percentage.is_finite() && self.max_percentage > 0.0 {
                self.max_percentage
            } else {
                defaults.max_percentage
            },
            min_render_extent: if self.min_render_extent.is_finite()
                && self.min_render_extent >= 0.0
            {
                self.min_render_extent
            } else {
                defaults.min_render_extent
            },
        }
    }
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            max_percentage: DEFAULT_MAX_ZOOM_PERCENTAGE,
            min_render_extent: DEFAULT_MIN_RENDER_EXTENT,
        }
    }
}
