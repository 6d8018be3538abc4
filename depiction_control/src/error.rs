// Copyright 2025 the Depiction Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use depiction_view::ViewportError;

/// Error returned by [`crate::DepictionControl`] commands and queries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ControlError {
    /// The command or query needs image geometry, but no image is loaded.
    NoImageBound,
    /// A viewport could not be bound to the loaded image.
    Viewport(ViewportError),
}

impl fmt::Display for ControlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoImageBound => f.write_str("no source image is bound to the control"),
            Self::Viewport(_) => f.write_str("failed to bind the source image"),
        }
    }
}

impl core::error::Error for ControlError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::NoImageBound => None,
            Self::Viewport(err) => Some(err),
        }
    }
}

impl From<ViewportError> for ControlError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}
