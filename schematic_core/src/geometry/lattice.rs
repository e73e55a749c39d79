// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: radial lattice cross-section
//!
//! Concentric rings split into cells by radial struts. The strut spacing is
//! chosen per ring so that the arc width at the ring's mean radius stays close
//! to a target physical width, rather than using one fixed angular step.

use super::MAX_POINTS;
use crate::error::{ensure_finite, ensure_positive, GeometryError};
use crate::types::{Bounds, Polyline, Vec2};
use log::debug;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::f32::consts::TAU;

/// Points per arc, both sector ends included.
pub const ARC_SAMPLES: usize = 300;

/// Points of a ring without struts: two arcs and two boundary lines.
const RING_POINTS: usize = 2 * ARC_SAMPLES + 4;

/// Lattice dimensions. Lengths share one unit, angles are radians.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LatticeParams {
    /// Inner radius
    pub r_in: f32,
    /// Outer radius
    pub r_out: f32,
    /// Radial spacing between rings (ring thickness)
    pub h: f32,
    /// Target arc width of a cell, measured at the ring's mean radius
    pub w: f32,
    #[serde(default)]
    pub angle_start: f32,
    #[serde(default = "full_turn")]
    pub angle_end: f32,
}

fn full_turn() -> f32 {
    TAU
}

impl LatticeParams {
    /// Full annulus between `r_in` and `r_out`.
    pub fn annulus(r_in: f32, r_out: f32, h: f32, w: f32) -> Self {
        Self {
            r_in,
            r_out,
            h,
            w,
            angle_start: 0.0,
            angle_end: TAU,
        }
    }

    /// Restrict to the sector `[angle_start, angle_end)`.
    pub fn sector(mut self, angle_start: f32, angle_end: f32) -> Self {
        self.angle_start = angle_start;
        self.angle_end = angle_end;
        self
    }

    pub fn sector_width(&self) -> f32 {
        self.angle_end - self.angle_start
    }

    pub fn validate(&self) -> Result<(), GeometryError> {
        ensure_finite("angle_start", self.angle_start)?;
        ensure_finite("angle_end", self.angle_end)?;
        if self.angle_start >= self.angle_end {
            return Err(GeometryError::InvalidRange {
                name: "angle",
                start: self.angle_start,
                end: self.angle_end,
            });
        }
        ensure_positive("w", self.w)?;
        check_radii(self.r_in, self.r_out, self.h)
    }
}

fn check_radii(r_in: f32, r_out: f32, h: f32) -> Result<(), GeometryError> {
    ensure_finite("r_in", r_in)?;
    ensure_finite("r_out", r_out)?;
    if r_in < 0.0 {
        return Err(GeometryError::InvalidParameter {
            name: "r_in",
            value: r_in,
            reason: "must not be negative",
        });
    }
    if r_in >= r_out {
        return Err(GeometryError::InvalidRange {
            name: "radius",
            start: r_in,
            end: r_out,
        });
    }
    ensure_positive("h", h)
}

/// Annulus between two consecutive ring radii.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    pub inner: f32,
    pub outer: f32,
}

impl Ring {
    /// Mean radius, where the arc width is measured.
    pub fn mid(&self) -> f32 {
        0.5 * (self.inner + self.outer)
    }

    pub fn thickness(&self) -> f32 {
        self.outer - self.inner
    }
}

/// Ring boundary radii `r_in, r_in + h, ...`, ending on exactly `r_out`.
///
/// A remainder shorter than `h` becomes a thinner last ring.
pub fn ring_radii(r_in: f32, r_out: f32, h: f32) -> Result<Vec<f32>, GeometryError> {
    check_radii(r_in, r_out, h)?;
    let tol = f32::EPSILON * 4.0 * r_out.abs().max(1.0);
    // below this, neighbouring radii can round onto the same value
    if h <= 2.0 * tol {
        return Err(GeometryError::InvalidParameter {
            name: "h",
            value: h,
            reason: "below the float resolution of the radii",
        });
    }
    let span = r_out - r_in;
    let full = (span / h).floor();
    if full >= (MAX_POINTS / RING_POINTS) as f32 {
        return Err(GeometryError::InvalidParameter {
            name: "h",
            value: h,
            reason: "too many rings for the radial span",
        });
    }
    let full = full as usize;
    let mut radii: Vec<f32> = (0..=full).map(|i| r_in + i as f32 * h).collect();

    // a last multiple of `h` within rounding of `r_out` is snapped onto it
    match radii.last_mut() {
        Some(last) if (r_out - *last).abs() <= tol => *last = r_out,
        _ => radii.push(r_out),
    }
    if radii.len() == 1 {
        radii.insert(0, r_in);
    }
    Ok(radii)
}

/// Number of struts in `ring` so the cell arc width at its mean radius is about `w`.
pub fn strut_count(ring: &Ring, sector_width: f32, w: f32) -> usize {
    let dtheta = w / ring.mid();
    (sector_width / dtheta).floor().max(0.0) as usize
}

/// Points `lattice` would produce for these radii, saturating on overflow.
fn point_count(radii: &[f32], sector_width: f32, w: f32) -> usize {
    radii
        .windows(2)
        .map(|pair| {
            let ring = Ring {
                inner: pair[0],
                outer: pair[1],
            };
            strut_count(&ring, sector_width, w)
                .saturating_mul(2)
                .saturating_add(RING_POINTS)
        })
        .fold(0, usize::saturating_add)
}

/// Arc of `radius` from `angle_start` to `angle_end`, `samples` points inclusive.
pub fn arc(radius: f32, angle_start: f32, angle_end: f32, samples: usize) -> Polyline {
    let mut line = Polyline::with_capacity(samples);
    let last = samples.saturating_sub(1).max(1) as f32;
    for i in 0..samples {
        let t = i as f32 / last;
        let angle = angle_start * (1.0 - t) + angle_end * t;
        line.push(Vec2::polar(radius, angle));
    }
    line
}

/// Straight line from radius `r1` to `r2` along `angle`.
pub fn radial_line(r1: f32, r2: f32, angle: f32) -> Polyline {
    Polyline::from(vec![Vec2::polar(r1, angle), Vec2::polar(r2, angle)])
}

/// Drawable parts of one ring.
#[derive(Debug, Clone)]
pub struct LatticeRing {
    pub ring: Ring,
    pub inner_arc: Polyline,
    pub outer_arc: Polyline,
    /// Struts at `angle_start + k * sector / n`, `k` in `0..n`
    pub struts: Vec<Polyline>,
    /// Radial lines closing the sector at `angle_start` and `angle_end`
    pub boundaries: [Polyline; 2],
}

impl LatticeRing {
    /// Every polyline of the ring: arcs, struts, then the sector boundaries.
    pub fn polylines(&self) -> impl Iterator<Item = &Polyline> {
        [&self.inner_arc, &self.outer_arc]
            .into_iter()
            .chain(self.struts.iter())
            .chain(self.boundaries.iter())
    }
}

/// Complete lattice cross-section.
#[derive(Debug, Clone)]
pub struct Lattice {
    pub params: LatticeParams,
    pub rings: Vec<LatticeRing>,
}

impl Lattice {
    pub fn polylines(&self) -> impl Iterator<Item = &Polyline> {
        self.rings.iter().flat_map(LatticeRing::polylines)
    }

    /// Ring boundary radii, innermost first.
    pub fn radii(&self) -> SmallVec<[f32; 16]> {
        let mut radii: SmallVec<[f32; 16]> = self.rings.iter().map(|r| r.ring.inner).collect();
        if let Some(last) = self.rings.last() {
            radii.push(last.ring.outer);
        }
        radii
    }

    pub fn strut_total(&self) -> usize {
        self.rings.iter().map(|r| r.struts.len()).sum()
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.polylines()
            .filter_map(|l| Bounds::from_points(&l.points))
            .reduce(Bounds::union)
    }
}

/// Generate the lattice arcs, struts and sector boundaries.
pub fn lattice(params: &LatticeParams) -> Result<Lattice, GeometryError> {
    params.validate()?;
    let radii = ring_radii(params.r_in, params.r_out, params.h)?;
    let sector = params.sector_width();
    let (a0, a1) = (params.angle_start, params.angle_end);
    let points = point_count(&radii, sector, params.w);
    if points > MAX_POINTS {
        return Err(GeometryError::InvalidParameter {
            name: "w",
            value: params.w,
            reason: "too many struts for the lattice",
        });
    }
    debug!(
        "lattice: {} rings between {} and {}, {points} points",
        radii.len() - 1,
        params.r_in,
        params.r_out
    );

    let rings = radii
        .windows(2)
        .map(|pair| {
            let ring = Ring {
                inner: pair[0],
                outer: pair[1],
            };
            let n_arc = strut_count(&ring, sector, params.w);
            debug!("lattice: ring r_mid {} has {n_arc} struts", ring.mid());
            let struts = (0..n_arc)
                .map(|k| {
                    let angle = a0 + sector * k as f32 / n_arc as f32;
                    radial_line(ring.inner, ring.outer, angle)
                })
                .collect();
            LatticeRing {
                ring,
                inner_arc: arc(ring.inner, a0, a1, ARC_SAMPLES),
                outer_arc: arc(ring.outer, a0, a1, ARC_SAMPLES),
                struts,
                boundaries: [
                    radial_line(ring.inner, ring.outer, a0),
                    radial_line(ring.inner, ring.outer, a1),
                ],
            }
        })
        .collect();

    Ok(Lattice {
        params: *params,
        rings,
    })
}
