// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
use schematic_core::geometry::lattice::{ring_radii, strut_count, Ring};
use schematic_core::geometry::{lattice, LatticeParams};
use schematic_core::renderer::{draw_lattice, RecordingCanvas};
use schematic_core::types::StrokeStyle;
use std::f32::consts::{FRAC_PI_3, TAU};

#[test]
fn strut_count_follows_mean_radius() {
    let params = LatticeParams::annulus(0.05, 0.09, 0.008, 0.01).sector(0.0, FRAC_PI_3);
    let lat = lattice(&params).unwrap();
    assert_eq!(lat.rings.len(), 5);
    for ring in &lat.rings {
        let expect = (params.sector_width() * ring.ring.mid() / params.w).floor() as usize;
        let n = ring.struts.len();
        assert!(n.abs_diff(expect) <= 1, "r_mid {}: {n} vs {expect}", ring.ring.mid());
        assert_eq!(n, strut_count(&ring.ring, params.sector_width(), params.w));
    }
    let counts: Vec<usize> = lat.rings.iter().map(|r| r.struts.len()).collect();
    assert!(counts.windows(2).all(|w| w[0] <= w[1]), "{counts:?}");
}

#[test]
fn arc_width_close_to_target() {
    let w = 0.2;
    let ring = Ring {
        inner: 3.0,
        outer: 3.4,
    };
    let n = strut_count(&ring, TAU, w);
    let actual = TAU * ring.mid() / n as f32;
    // flooring only ever widens the cells, by less than one cell's share
    assert!(actual >= w);
    assert!(actual < w * (1.0 + 1.0 / (n as f32 - 1.0)));
}

#[test]
fn full_annulus_radii() {
    let radii = ring_radii(1.0, 2.0, 0.3).unwrap();
    assert_eq!(radii.len(), 5);
    assert_eq!(radii[4], 2.0);

    let params = LatticeParams::annulus(1.0, 2.0, 0.3, 0.3);
    let lat = lattice(&params).unwrap();
    assert_eq!(lat.rings.len(), 4);
    assert!((lat.rings[3].ring.thickness() - 0.1).abs() < 1e-5);
    let b = lat.bounds().unwrap();
    assert!((b.max.x - 2.0).abs() < 1e-5);
    assert!((b.min.y + 2.0).abs() < 1e-3);
}

#[test]
fn canvas_receives_rings_in_order() {
    let params = LatticeParams::annulus(1.0, 1.6, 0.3, 0.25).sector(0.0, 1.0);
    let mut canvas = RecordingCanvas::new();
    draw_lattice(&mut canvas, &params, &StrokeStyle::default()).unwrap();
    // first stroke is the inner arc of the innermost ring
    let first = canvas.strokes[0].line.first().unwrap();
    assert_eq!(first.x, 1.0);
    assert_eq!(first.y, 0.0);
    let lat = lattice(&params).unwrap();
    let total: usize = lat.rings.iter().map(|r| 4 + r.struts.len()).sum();
    assert_eq!(canvas.strokes.len(), total);
}
