//! Property tests for the rasterizer and gauge mapping.
//!
//! Run: cargo test --test raster_properties_test

#![allow(clippy::unwrap_used)]

use std::collections::HashSet;

use proptest::prelude::*;

use dashboard_raster::gauge::{arc_vertices, draw_arc, needle_angle, GaugeDomain};
use dashboard_raster::geometry::Pixel;
use dashboard_raster::raster::{
    draw_circle, draw_filled_disk, draw_line, draw_partial_circle, DdaLine, Octants,
};

fn line(x1: i32, y1: i32, x2: i32, y2: i32) -> Vec<Pixel> {
    let mut out = Vec::new();
    draw_line(&mut out, f64::from(x1), f64::from(y1), f64::from(x2), f64::from(y2));
    out
}

fn circle(r: i32, x0: i32, y0: i32) -> Vec<Pixel> {
    let mut out = Vec::new();
    draw_circle(&mut out, r, x0, y0);
    out
}

// ============================================================================
// Worked examples
// ============================================================================

#[test]
fn line_worked_example() {
    let pts = line(0, 0, 4, 2);
    assert_eq!(pts.len(), 5);
    assert_eq!(pts.first(), Some(&Pixel::new(0, 0)));
    assert_eq!(pts.last(), Some(&Pixel::new(4, 2)));
}

#[test]
fn circle_worked_example() {
    let pts: HashSet<Pixel> = circle(5, 0, 0).into_iter().collect();
    for p in [(5, 0), (0, 5), (-5, 0), (0, -5)] {
        assert!(pts.contains(&Pixel::from(p)), "missing {p:?}");
    }
}

#[test]
fn zero_radius_is_center() {
    assert_eq!(circle(0, 7, -3), vec![Pixel::new(7, -3)]);
}

#[test]
fn needle_angle_worked_example() {
    let d = GaugeDomain::new(0.0, 230.0).unwrap();
    assert_eq!(needle_angle(0.0, &d), 225.0);
    assert_eq!(needle_angle(230.0, &d), -45.0);
    assert_eq!(needle_angle(-10.0, &d), 225.0);
    assert_eq!(needle_angle(1e9, &d), -45.0);
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_line_endpoints(
        x1 in -500i32..500,
        y1 in -500i32..500,
        x2 in -500i32..500,
        y2 in -500i32..500
    ) {
        let pts = line(x1, y1, x2, y2);
        prop_assert_eq!(pts.first(), Some(&Pixel::new(x1, y1)));
        prop_assert_eq!(pts.last(), Some(&Pixel::new(x2, y2)));

        let steps = (x2 - x1).abs().max((y2 - y1).abs()) as usize;
        prop_assert_eq!(pts.len(), steps + 1);
    }

    #[test]
    fn prop_line_is_connected(
        x1 in -200i32..200,
        y1 in -200i32..200,
        x2 in -200i32..200,
        y2 in -200i32..200
    ) {
        let pts = line(x1, y1, x2, y2);
        for w in pts.windows(2) {
            prop_assert!((w[1].x - w[0].x).abs() <= 1);
            prop_assert!((w[1].y - w[0].y).abs() <= 1);
        }
    }

    #[test]
    fn prop_axis_lines_constant(a in -300i32..300, b in -300i32..300, c in -300i32..300) {
        prop_assert!(line(a, c, b, c).iter().all(|p| p.y == c));
        prop_assert!(line(c, a, c, b).iter().all(|p| p.x == c));
    }

    #[test]
    fn prop_fractional_line_ends_at_end(
        x1 in -100.0f64..100.0, y1 in -100.0f64..100.0,
        x2 in -100.0f64..100.0, y2 in -100.0f64..100.0,
    ) {
        let pts: Vec<Pixel> = DdaLine::new(x1, y1, x2, y2).collect();
        prop_assert_eq!(pts.last(), Some(&Pixel::new(x2.round() as i32, y2.round() as i32)));
    }

    #[test]
    fn prop_circle_near_radius(r in 1i32..300, x0 in -100i32..100, y0 in -100i32..100) {
        for p in circle(r, x0, y0) {
            let d = f64::from(p.x - x0).hypot(f64::from(p.y - y0));
            prop_assert!((d - f64::from(r)).abs() <= 1.0, "{:?} at distance {}", p, d);
        }
    }

    #[test]
    fn prop_circle_symmetric(r in 0i32..200) {
        let pts: HashSet<Pixel> = circle(r, 0, 0).into_iter().collect();
        for p in &pts {
            let (x, y) = (p.x, p.y);
            for q in [(x, y), (y, x), (y, -x), (x, -y), (-x, -y), (-y, -x), (-y, x), (-x, y)] {
                prop_assert!(pts.contains(&Pixel::from(q)), "{:?} missing reflection {:?}", p, q);
            }
        }
    }

    #[test]
    fn prop_filled_disk_has_every_ring(r in 0i32..120, x0 in -50i32..50, y0 in -50i32..50) {
        let mut out: Vec<Pixel> = Vec::new();
        draw_filled_disk(&mut out, r, x0, y0, 1);
        let pts: HashSet<Pixel> = out.into_iter().collect();
        for k in 0..=r {
            for p in circle(k, x0, y0) {
                prop_assert!(pts.contains(&p), "ring {} point {:?} missing", k, p);
            }
        }
    }

    #[test]
    fn prop_filled_disk_any_stride_keeps_edge_and_core(r in 1i32..200, stride in 1u32..40) {
        let mut out: Vec<Pixel> = Vec::new();
        draw_filled_disk(&mut out, r, 0, 0, stride);
        prop_assert!(out.contains(&Pixel::new(r, 0)));
        prop_assert!(out.contains(&Pixel::new(1, 0)));
        prop_assert!(out.contains(&Pixel::new(0, 0)));
    }

    #[test]
    fn prop_partial_masks_are_subsets(r in 1i32..150, bits in 0u8..=255) {
        let all: HashSet<Pixel> = circle(r, 0, 0).into_iter().collect();
        let mut part: Vec<Pixel> = Vec::new();
        draw_partial_circle(&mut part, r, 0, 0, Octants::from_bits_truncate(bits));
        prop_assert!(part.iter().all(|p| all.contains(p)));
    }

    #[test]
    fn prop_top_half_non_negative(r in 1i32..150) {
        let mut out: Vec<Pixel> = Vec::new();
        draw_partial_circle(&mut out, r, 0, 0, Octants::TOP);
        prop_assert!(out.iter().all(|p| p.y >= 0));
        prop_assert!(out.contains(&Pixel::new(0, r)));
    }

    #[test]
    fn prop_needle_angle_in_sweep(min in -1e3f64..1e3, span in 1e-3f64..1e3, v in -1e4f64..1e4) {
        let d = GaugeDomain::new(min, min + span).unwrap();
        let a = needle_angle(v, &d);
        prop_assert!((-45.0..=225.0).contains(&a));
    }

    #[test]
    fn prop_needle_angle_monotone(v1 in 0.0f64..230.0, v2 in 0.0f64..230.0) {
        let d = GaugeDomain::new(0.0, 230.0).unwrap();
        if v1 <= v2 {
            prop_assert!(needle_angle(v1, &d) >= needle_angle(v2, &d));
        }
    }

    #[test]
    fn prop_arc_vertices_on_circle(
        r in 1.0f64..400.0,
        start in -360.0f64..360.0,
        end in -360.0f64..360.0,
        n in 0usize..64
    ) {
        let c = dashboard_raster::geometry::Point::new(10.0, -20.0);
        let v = arc_vertices(c, r, start, end, n);
        prop_assert_eq!(v.len(), n.max(1) + 1);
        for p in v {
            prop_assert!((p.distance(c) - r).abs() < 1e-9 * r.max(1.0));
        }
    }

    #[test]
    fn prop_arc_pixels_near_radius(r in 20.0f64..300.0) {
        let mut out: Vec<Pixel> = Vec::new();
        draw_arc(&mut out, dashboard_raster::geometry::Point::ORIGIN, r, 225.0, -45.0, 20);
        // Chord sagitta for 13.5° at r = 300 is about 2.1 px.
        let slack = r * (1.0 - (13.5f64.to_radians() / 2.0).cos()) + 1.0;
        for p in out {
            let d = f64::from(p.x).hypot(f64::from(p.y));
            prop_assert!(d <= r + 1.0 && d >= r - slack, "{:?} at {}", p, d);
        }
    }
}
