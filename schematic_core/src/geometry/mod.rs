// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: geometry generators and path primitives

pub mod lattice;
mod path;
pub mod zigzag;

pub use lattice::{lattice, Lattice, LatticeParams, LatticeRing, Ring};
pub use path::{LineSegment, Path, PathSeg};
pub use zigzag::{zigzag, ZigzagParams};

/// Upper bound on the total number of points one generator call may produce.
///
/// Checked from the parameters alone, before any polyline is allocated.
pub const MAX_POINTS: usize = 1 << 23;
