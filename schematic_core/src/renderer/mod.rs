// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: drawing surfaces
//!
//! Generators only need a surface that strokes an ordered list of points. The
//! [`Canvas`] trait is that seam; [`RasterCanvas`] rasterizes on the CPU and
//! [`RecordingCanvas`] keeps the strokes for inspection.

pub mod cpu;
pub use cpu::{draw_stroke, to_image, RasterCanvas, Viewport, MAX_RASTER_SIDE};

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
pub mod wasm;

use crate::error::GeometryError;
use crate::geometry::{lattice, zigzag, LatticeParams, ZigzagParams};
use crate::types::{Bounds, Polyline, StrokeStyle, Vec2};

/// A 2D surface that renders connected strokes.
pub trait Canvas {
    /// Draw `points` as one connected stroke.
    fn stroke_polyline(&mut self, points: &[Vec2], style: &StrokeStyle);
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    fn stroke_polyline(&mut self, points: &[Vec2], style: &StrokeStyle) {
        (**self).stroke_polyline(points, style);
    }
}

/// One polyline with its appearance.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub line: Polyline,
    pub style: StrokeStyle,
}

impl Stroke {
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(&self.line.points)
    }
}

/// Canvas that records strokes instead of drawing them.
#[derive(Debug, Default, Clone)]
pub struct RecordingCanvas {
    pub strokes: Vec<Stroke>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.strokes
            .iter()
            .filter_map(Stroke::bounds)
            .reduce(Bounds::union)
    }

    /// Replay every recorded stroke onto another canvas.
    pub fn replay<C: Canvas + ?Sized>(&self, target: &mut C) {
        for s in &self.strokes {
            target.stroke_polyline(&s.line.points, &s.style);
        }
    }
}

impl Canvas for RecordingCanvas {
    fn stroke_polyline(&mut self, points: &[Vec2], style: &StrokeStyle) {
        self.strokes.push(Stroke {
            line: Polyline::from(points.to_vec()),
            style: *style,
        });
    }
}

/// Generate a zig-zag connector and stroke it onto `canvas`.
///
/// Nothing is drawn when the parameters are rejected.
pub fn draw_zigzag<C: Canvas + ?Sized>(
    canvas: &mut C,
    start: Vec2,
    end: Vec2,
    params: &ZigzagParams,
    style: &StrokeStyle,
) -> Result<(), GeometryError> {
    let line = zigzag(start, end, params)?;
    canvas.stroke_polyline(&line.points, style);
    Ok(())
}

/// Generate a lattice cross-section and stroke every arc and strut onto `canvas`.
///
/// Nothing is drawn when the parameters are rejected.
pub fn draw_lattice<C: Canvas + ?Sized>(
    canvas: &mut C,
    params: &LatticeParams,
    style: &StrokeStyle,
) -> Result<(), GeometryError> {
    let lat = lattice(params)?;
    for line in lat.polylines() {
        canvas.stroke_polyline(&line.points, style);
    }
    Ok(())
}
