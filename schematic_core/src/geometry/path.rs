// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: stroke path representation

use crate::types::{Polyline, Vec2};
use smallvec::SmallVec;

/// A line segment represented by two end points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    /// Start point of the segment
    pub from: Vec2,
    /// End point of the segment
    pub to: Vec2,
}

impl LineSegment {
    pub fn length(&self) -> f32 {
        self.from.distance(self.to)
    }
}

/// Basic path drawing commands.
#[derive(Debug, Clone, PartialEq)]
pub enum PathSeg {
    /// Move to absolute position.
    MoveTo(Vec2),
    /// Line to absolute position.
    LineTo(Vec2),
}

/// A sequence of [`PathSeg`] items forming a vector path.
#[derive(Debug, Default, Clone)]
pub struct Path {
    /// Ordered list of path segments
    pub segments: Vec<PathSeg>,
}

impl Path {
    /// Create a new empty path.
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Open sub-path through `points`, optionally mapping each point first.
    pub fn from_points<F>(points: &[Vec2], mut map: F) -> Self
    where
        F: FnMut(Vec2) -> Vec2,
    {
        let mut path = Path {
            segments: Vec::with_capacity(points.len()),
        };
        let mut it = points.iter();
        if let Some(&p) = it.next() {
            path.move_to(map(p));
        }
        for &p in it {
            path.line_to(map(p));
        }
        path
    }

    /// Append a move command.
    pub fn move_to(&mut self, p: Vec2) {
        self.segments.push(PathSeg::MoveTo(p));
    }

    /// Append a line command.
    pub fn line_to(&mut self, p: Vec2) {
        self.segments.push(PathSeg::LineTo(p));
    }

    /// Flatten the path into line segments.
    ///
    /// A `LineTo` with no preceding `MoveTo` starts from the origin.
    pub fn flatten(&self) -> SmallVec<[LineSegment; 32]> {
        let mut result: SmallVec<[LineSegment; 32]> = SmallVec::new();
        let mut current = Vec2::default();
        for seg in &self.segments {
            match *seg {
                PathSeg::MoveTo(p) => current = p,
                PathSeg::LineTo(p) => {
                    result.push(LineSegment {
                        from: current,
                        to: p,
                    });
                    current = p;
                }
            }
        }
        result
    }
}

impl From<&Polyline> for Path {
    fn from(line: &Polyline) -> Self {
        Path::from_points(&line.points, |p| p)
    }
}
