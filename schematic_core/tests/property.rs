// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
use proptest::prelude::*;
use schematic_core::geometry::lattice::{ring_radii, ARC_SAMPLES};
use schematic_core::geometry::zigzag::{half_cycles, STRAIGHT_SAMPLES};
use schematic_core::geometry::{lattice, zigzag};
use schematic_core::GeometryError;

proptest! {
    #[test]
    fn zigzag_endpoints_are_exact(
        (start, end) in testutil::endpoints_strategy(),
        params in testutil::zigzag_params_strategy(),
    ) {
        let line = zigzag(start, end, &params).unwrap();
        prop_assert_eq!(line.first(), Some(start));
        prop_assert_eq!(line.last(), Some(end));
    }

    #[test]
    fn zigzag_point_count(
        (start, end) in testutil::endpoints_strategy(),
        params in testutil::zigzag_params_strategy(),
    ) {
        let line = zigzag(start, end, &params).unwrap();
        let straight = (1.0 - params.fraction_zigzag) / 2.0;
        let a = schematic_core::types::Vec2::lerp(start, end, straight);
        let b = schematic_core::types::Vec2::lerp(start, end, 1.0 - straight);
        let n_half = half_cycles(a.distance(b), params.pitch);
        prop_assert!(n_half >= 1);
        prop_assert_eq!(line.len(), 2 * (STRAIGHT_SAMPLES - 1) + n_half + 1);
    }

    #[test]
    fn zigzag_even_points_stay_on_baseline(
        (start, end) in testutil::endpoints_strategy(),
        params in testutil::zigzag_params_strategy(),
    ) {
        let line = zigzag(start, end, &params).unwrap();
        let d = (end.x - start.x, end.y - start.y);
        let len = d.0.hypot(d.1);
        let zig = &line.points[STRAIGHT_SAMPLES - 1..line.len() - (STRAIGHT_SAMPLES - 1)];
        for (i, p) in zig.iter().enumerate() {
            // signed distance from the start->end line
            let off = ((p.x - start.x) * -d.1 + (p.y - start.y) * d.0) / len;
            let scale = 1e-3 * (1.0 + start.x.abs().max(start.y.abs()).max(len));
            let expect = match i % 4 {
                1 => params.amplitude,
                3 => -params.amplitude,
                _ => 0.0,
            };
            prop_assert!((off - expect).abs() <= scale, "i={} off={} expect={}", i, off, expect);
        }
    }

    #[test]
    fn last_ring_ends_on_outer_radius(params in testutil::lattice_params_strategy()) {
        let radii = ring_radii(params.r_in, params.r_out, params.h).unwrap();
        prop_assert_eq!(radii[0], params.r_in);
        prop_assert_eq!(*radii.last().unwrap(), params.r_out);
        prop_assert!(radii.windows(2).all(|w| w[0] < w[1]));
        let full = ((params.r_out - params.r_in) / params.h).floor() as usize;
        prop_assert!(radii.len() == full + 1 || radii.len() == full + 2);
    }

    #[test]
    fn fine_spacing_never_repeats_a_radius(
        r_in in 0.0f32..1000.0f32,
        span in 1e-4f32..1.0f32,
        h in 1e-7f32..1e-2f32,
    ) {
        // rejected or strictly increasing, never a zero-thickness ring
        if let Ok(radii) = ring_radii(r_in, r_in + span, h) {
            prop_assert!(radii.windows(2).all(|w| w[0] < w[1]), "{:?}", radii);
        }
    }

    #[test]
    fn lattice_arcs_have_fixed_resolution(params in testutil::lattice_params_strategy()) {
        let lat = lattice(&params).unwrap();
        for ring in &lat.rings {
            prop_assert_eq!(ring.inner_arc.len(), ARC_SAMPLES);
            prop_assert_eq!(ring.outer_arc.len(), ARC_SAMPLES);
            prop_assert!(ring.struts.iter().all(|s| s.len() == 2));
        }
    }

    #[test]
    fn inverted_sector_always_rejected(
        params in testutil::lattice_params_strategy(),
        back in 0.0f32..3.0f32,
    ) {
        let flipped = params.sector(params.angle_start, params.angle_start - back);
        let is_range = matches!(
            lattice(&flipped),
            Err(GeometryError::InvalidRange { name: "angle", .. })
        );
        prop_assert!(is_range);
    }
}
