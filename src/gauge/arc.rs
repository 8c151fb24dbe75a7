//! Polyline approximation of circular arcs.

use crate::geometry::Point;
use crate::raster::{draw_line_between, PixelSink};

/// Default number of straight segments per arc.
pub const ARC_SEGMENTS: usize = 20;

/// The `segments + 1` vertices of an arc from `start_deg` to `end_deg`.
///
/// The angle is interpolated linearly, so vertices are evenly spaced along
/// the arc. `segments == 0` is treated as one segment.
#[must_use]
pub fn arc_vertices(
    center: Point,
    radius: f64,
    start_deg: f64,
    end_deg: f64,
    segments: usize,
) -> Vec<Point> {
    let n = segments.max(1);
    let span = end_deg - start_deg;
    (0..=n)
        .map(|i| {
            let t = i as f64 / n as f64;
            Point::polar(center, radius, start_deg + span * t)
        })
        .collect()
}

/// Draw an arc as `segments` DDA lines between consecutive vertices.
///
/// More segments give a smoother curve at proportional cost; the result is
/// an approximation, not an exact circle.
pub fn draw_arc<S: PixelSink + ?Sized>(
    sink: &mut S,
    center: Point,
    radius: f64,
    start_deg: f64,
    end_deg: f64,
    segments: usize,
) {
    let vertices = arc_vertices(center, radius, start_deg, end_deg, segments);
    for pair in vertices.windows(2) {
        draw_line_between(sink, pair[0], pair[1]);
    }
}
