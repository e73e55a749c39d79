// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: zig-zag connector
//!
//! A straight lead-in, a central zig-zag region and a straight lead-out,
//! drawn between two points like a spring symbol.

use super::MAX_POINTS;
use crate::error::{ensure_finite, ensure_positive, GeometryError};
use crate::types::{Polyline, Vec2};
use log::debug;
use serde::{Deserialize, Serialize};

/// Points sampled on each straight portion, both ends included.
pub const STRAIGHT_SAMPLES: usize = 5;

/// Shape of the zig-zag region.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ZigzagParams {
    /// Distance between successive peaks along the baseline
    pub pitch: f32,
    /// Fraction of the connector length, centred, that carries the zig-zag
    pub fraction_zigzag: f32,
    /// Perpendicular displacement of the peaks
    pub amplitude: f32,
}

impl Default for ZigzagParams {
    fn default() -> Self {
        Self {
            pitch: 0.1,
            fraction_zigzag: 0.5,
            amplitude: 0.1,
        }
    }
}

impl ZigzagParams {
    pub fn validate(&self) -> Result<(), GeometryError> {
        ensure_positive("pitch", self.pitch)?;
        ensure_finite("fraction_zigzag", self.fraction_zigzag)?;
        if !(0.0..=1.0).contains(&self.fraction_zigzag) {
            return Err(GeometryError::InvalidParameter {
                name: "fraction_zigzag",
                value: self.fraction_zigzag,
                reason: "must lie in [0, 1]",
            });
        }
        ensure_finite("amplitude", self.amplitude)
    }
}

/// Number of half-cycles fitting in `zigzag_length`, never less than one.
pub fn half_cycles(zigzag_length: f32, pitch: f32) -> usize {
    let n = (zigzag_length / pitch).floor();
    if n >= 1.0 {
        n as usize
    } else {
        1
    }
}

/// Sign of the peak at zig-zag index `i`: 0 on even indices, then +, -, +, ...
fn peak_sign(i: usize) -> f32 {
    if i % 2 == 0 {
        0.0
    } else if (i / 2) % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}

/// Build the connector polyline from `start` to `end`.
///
/// The first point is `start` and the last is `end`, exactly. Coinciding
/// endpoints give [`GeometryError::ZeroLength`].
pub fn zigzag(start: Vec2, end: Vec2, params: &ZigzagParams) -> Result<Polyline, GeometryError> {
    params.validate()?;
    for (name, p) in [("start", start), ("end", end)] {
        ensure_finite(name, p.x)?;
        ensure_finite(name, p.y)?;
    }

    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let total = dx.hypot(dy);
    if total == 0.0 {
        return Err(GeometryError::ZeroLength);
    }
    if !total.is_finite() {
        return Err(GeometryError::InvalidParameter {
            name: "end",
            value: total,
            reason: "connector length overflows",
        });
    }
    let normal = Vec2::new(-dy / total, dx / total);

    let straight = (1.0 - params.fraction_zigzag) / 2.0;
    let zig_start = Vec2::lerp(start, end, straight);
    let zig_end = Vec2::lerp(start, end, 1.0 - straight);

    let n_half = half_cycles(zig_start.distance(zig_end), params.pitch);
    if n_half > MAX_POINTS - 2 * STRAIGHT_SAMPLES {
        return Err(GeometryError::InvalidParameter {
            name: "pitch",
            value: params.pitch,
            reason: "too fine for the connector length",
        });
    }
    debug!("zigzag: length {total}, {n_half} half-cycles");

    let mut line = Polyline::with_capacity(2 * (STRAIGHT_SAMPLES - 1) + n_half + 1);
    let step = 1.0 / (STRAIGHT_SAMPLES - 1) as f32;

    // lead-in without its last point, which the zig-zag region starts on
    for i in 0..STRAIGHT_SAMPLES - 1 {
        line.push(Vec2::lerp(start, zig_start, i as f32 * step));
    }

    for i in 0..=n_half {
        let base = Vec2::lerp(zig_start, zig_end, i as f32 / n_half as f32);
        let offset = params.amplitude * peak_sign(i);
        line.push(Vec2::new(
            base.x + offset * normal.x,
            base.y + offset * normal.y,
        ));
    }

    // lead-out without its first point
    for i in 1..STRAIGHT_SAMPLES {
        line.push(Vec2::lerp(zig_end, end, i as f32 * step));
    }

    Ok(line)
}
