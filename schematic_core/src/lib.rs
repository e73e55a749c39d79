// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: schematic core library
//!
//! Generators for schematic cross-section drawings: a zig-zag spring-like
//! connector between two points and a radial lattice heat-exchanger section.
//! Both produce plain polylines and stroke them onto any
//! [`Canvas`](renderer::Canvas).

pub mod error;
pub mod figure;
pub mod geometry;
pub mod loader;
pub mod renderer;
pub mod types;

pub use error::{Error, GeometryError, Result};
pub use figure::{Figure, Item};
