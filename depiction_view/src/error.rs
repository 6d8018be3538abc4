// Copyright 2025 the Depiction Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::Size;

/// Error returned when a [`crate::Viewport`] cannot be bound to a source image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewportError {
    /// The source image extent is empty, negative, or not finite.
    ///
    /// Mapping into source-image space divides by the source extent, so both
    /// axes must be strictly positive.
    InvalidSourceSize(Size),
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSourceSize(size) => write!(
                f,
                "source image size {}x{} must be finite and strictly positive",
                size.width, size.height
            ),
        }
    }
}

impl core::error::Error for ViewportError {}
