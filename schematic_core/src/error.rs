// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: error types
//!
//! Generators fail fast: every check runs before any point is produced, so an
//! error never comes with partial geometry.

use thiserror::Error;

/// Reasons a generator refuses its inputs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A `start >= end` pair, e.g. the angular sector or the radial span.
    #[error("invalid range for `{name}`: start {start} must be less than end {end}")]
    InvalidRange {
        name: &'static str,
        start: f32,
        end: f32,
    },

    /// The connector endpoints coincide, so there is no direction to offset along.
    #[error("degenerate geometry: zero-length connector")]
    ZeroLength,

    /// A spacing parameter that must be strictly positive.
    #[error("degenerate geometry: `{name}` must be > 0, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    /// Anything else outside its domain (NaN, out of [0, 1], ...).
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f32,
        reason: &'static str,
    },
}

impl GeometryError {
    /// Zero-length connectors and non-positive spacings.
    pub fn is_degenerate(&self) -> bool {
        matches!(
            self,
            GeometryError::ZeroLength | GeometryError::NonPositive { .. }
        )
    }
}

/// Crate level error for loading and rendering figures.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("figure JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("image encoding error: {0}")]
    Image(#[from] image::ImageError),

    /// The target buffer cannot hold `height` rows of `stride` bytes.
    #[error("pixel buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    /// The raster size is over the supported maximum or overflows `usize`.
    #[error("raster size {width}x{height} is too large")]
    RasterTooLarge { width: usize, height: usize },

    /// A raster dimension is zero.
    #[error("raster size {width}x{height} is empty")]
    EmptyRaster { width: usize, height: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Reject NaN and infinities with a named error.
pub(crate) fn ensure_finite(name: &'static str, value: f32) -> std::result::Result<(), GeometryError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(GeometryError::InvalidParameter {
            name,
            value,
            reason: "must be finite",
        })
    }
}

/// Reject zero, negative and non-finite spacings.
pub(crate) fn ensure_positive(name: &'static str, value: f32) -> std::result::Result<(), GeometryError> {
    ensure_finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(GeometryError::NonPositive { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_parameter() {
        let e = GeometryError::InvalidRange {
            name: "angle",
            start: 1.0,
            end: 0.5,
        };
        assert_eq!(
            e.to_string(),
            "invalid range for `angle`: start 1 must be less than end 0.5"
        );
        let e = ensure_positive("pitch", 0.0).unwrap_err();
        assert_eq!(e.to_string(), "degenerate geometry: `pitch` must be > 0, got 0");
        assert!(e.is_degenerate());
    }

    #[test]
    fn nan_is_not_degenerate_but_invalid() {
        let e = ensure_positive("w", f32::NAN).unwrap_err();
        assert!(matches!(e, GeometryError::InvalidParameter { name: "w", .. }));
        assert!(!e.is_degenerate());
    }
}
