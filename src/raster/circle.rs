//! Midpoint circle rasterization and the shapes derived from it.

use super::sink::PixelSink;
use bitflags::bitflags;

bitflags! {
    /// Selection of the eight symmetric reflections of a midpoint circle.
    ///
    /// Each flag names the compass octant its reflection covers, for the
    /// first-octant step `(x, y)` with `0 <= x <= y`:
    ///
    /// | flag  | offset     |
    /// |-------|------------|
    /// | `NNE` | `( x,  y)` |
    /// | `ENE` | `( y,  x)` |
    /// | `ESE` | `( y, -x)` |
    /// | `SSE` | `( x, -y)` |
    /// | `SSW` | `(-x, -y)` |
    /// | `WSW` | `(-y, -x)` |
    /// | `WNW` | `(-y,  x)` |
    /// | `NNW` | `(-x,  y)` |
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Octants: u8 {
        /// `(x, y)`
        const NNE = 1 << 0;
        /// `(y, x)`
        const ENE = 1 << 1;
        /// `(y, -x)`
        const ESE = 1 << 2;
        /// `(x, -y)`
        const SSE = 1 << 3;
        /// `(-x, -y)`
        const SSW = 1 << 4;
        /// `(-y, -x)`
        const WSW = 1 << 5;
        /// `(-y, x)`
        const WNW = 1 << 6;
        /// `(-x, y)`
        const NNW = 1 << 7;

        /// Upper half (non-negative y offsets).
        const TOP = Self::NNE.bits() | Self::ENE.bits() | Self::WNW.bits() | Self::NNW.bits();
        /// Lower half.
        const BOTTOM = Self::ESE.bits() | Self::SSE.bits() | Self::SSW.bits() | Self::WSW.bits();
        /// Right half (non-negative x offsets).
        const RIGHT = Self::NNE.bits() | Self::ENE.bits() | Self::ESE.bits() | Self::SSE.bits();
        /// Left half.
        const LEFT = Self::SSW.bits() | Self::WSW.bits() | Self::WNW.bits() | Self::NNW.bits();
        /// Everything except the two octants around straight down.
        const THREE_QUARTER = Self::TOP.bits() | Self::ESE.bits() | Self::WSW.bits();
        /// Full circle.
        const ALL = 0xff;
    }
}

impl Default for Octants {
    fn default() -> Self {
        Self::ALL
    }
}

/// Iterator over the first-octant steps `(x, y)` of a midpoint circle.
///
/// Starts at `(0, r)` and ends where the octant meets the 45° diagonal.
/// Purely integer: each step is one decision-parameter update. A negative
/// radius yields nothing.
#[derive(Debug, Clone)]
pub struct MidpointCircle {
    x: i32,
    y: i32,
    d: i32,
    started: bool,
    done: bool,
}

impl MidpointCircle {
    /// Steps for a circle of `radius`.
    #[must_use]
    pub const fn new(radius: i32) -> Self {
        Self {
            x: 0,
            y: radius,
            d: 1 - radius,
            started: false,
            done: radius < 0,
        }
    }
}

impl Iterator for MidpointCircle {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<(i32, i32)> {
        if self.done {
            return None;
        }

        if !self.started {
            self.started = true;
            return Some((self.x, self.y));
        }

        if self.x >= self.y {
            self.done = true;
            return None;
        }

        if self.d < 0 {
            self.d += 2 * self.x + 3;
        } else {
            self.d += 2 * (self.x - self.y) + 5;
            self.y -= 1;
        }
        self.x += 1;

        Some((self.x, self.y))
    }
}

/// Emit the reflections of `(x, y)` selected by `mask`, offset by the center.
#[inline]
fn plot_octants<S: PixelSink + ?Sized>(
    sink: &mut S,
    x0: i32,
    y0: i32,
    x: i32,
    y: i32,
    mask: Octants,
) {
    let reflections = [
        (Octants::NNE, x, y),
        (Octants::ENE, y, x),
        (Octants::ESE, y, -x),
        (Octants::SSE, x, -y),
        (Octants::SSW, -x, -y),
        (Octants::WSW, -y, -x),
        (Octants::WNW, -y, x),
        (Octants::NNW, -x, y),
    ];

    for (octant, dx, dy) in reflections {
        if mask.contains(octant) {
            sink.plot(x0 + dx, y0 + dy);
        }
    }
}

/// Draw a circle outline using the midpoint algorithm.
///
/// # Arguments
///
/// * `sink` - Receiver of the emitted pixels
/// * `radius` - Circle radius in pixels; 0 emits the center only, negative emits nothing
/// * `x0`, `y0` - Center coordinates
pub fn draw_circle<S: PixelSink + ?Sized>(sink: &mut S, radius: i32, x0: i32, y0: i32) {
    draw_partial_circle(sink, radius, x0, y0, Octants::ALL);
}

/// Draw only the reflections of a midpoint circle selected by `mask`.
///
/// Radius 0 emits the center once if any octant is selected.
pub fn draw_partial_circle<S: PixelSink + ?Sized>(
    sink: &mut S,
    radius: i32,
    x0: i32,
    y0: i32,
    mask: Octants,
) {
    if radius < 0 || mask.is_empty() {
        return;
    }
    if radius == 0 {
        sink.plot(x0, y0);
        return;
    }

    for (x, y) in MidpointCircle::new(radius) {
        plot_octants(sink, x0, y0, x, y, mask);
    }
}

/// Radii of the concentric rings filling a disk, outermost first.
///
/// Steps down from `radius` by `stride` (0 is treated as 1) and always ends
/// with radius 1 and radius 0 so the core is never left empty.
#[must_use]
pub fn disk_radii(radius: i32, stride: u32) -> Vec<i32> {
    if radius < 0 {
        return Vec::new();
    }

    let stride = stride.max(1) as usize;
    let mut radii: Vec<i32> = (2..=radius).rev().step_by(stride).collect();
    if radius >= 1 {
        radii.push(1);
    }
    radii.push(0);
    radii
}

/// Stride giving roughly `layers` rings for a disk of `radius`.
#[must_use]
pub fn stride_for_layers(radius: i32, layers: u32) -> u32 {
    if layers == 0 || radius <= 0 {
        return 1;
    }
    (radius.unsigned_abs() / layers).max(1)
}

/// Fill a disk with concentric midpoint circles.
///
/// `stride` 1 covers every integer radius; larger strides trade density for
/// speed. See [`disk_radii`].
pub fn draw_filled_disk<S: PixelSink + ?Sized>(
    sink: &mut S,
    radius: i32,
    x0: i32,
    y0: i32,
    stride: u32,
) {
    draw_filled_partial_disk(sink, radius, x0, y0, stride, Octants::ALL);
}

/// [`draw_filled_disk`] restricted to the octants in `mask`.
pub fn draw_filled_partial_disk<S: PixelSink + ?Sized>(
    sink: &mut S,
    radius: i32,
    x0: i32,
    y0: i32,
    stride: u32,
    mask: Octants,
) {
    for r in disk_radii(radius, stride) {
        draw_partial_circle(sink, r, x0, y0, mask);
    }
}

/// Draw `thickness` concentric partial circles from `radius` inward.
///
/// Rings that would have a negative radius are skipped.
pub fn draw_ring<S: PixelSink + ?Sized>(
    sink: &mut S,
    radius: i32,
    thickness: u32,
    x0: i32,
    y0: i32,
    mask: Octants,
) {
    let inner = radius.saturating_sub(thickness as i32) + 1;
    for r in (inner.max(0)..=radius).rev() {
        draw_partial_circle(sink, r, x0, y0, mask);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Pixel;
    use std::collections::HashSet;

    fn circle(radius: i32, x0: i32, y0: i32) -> Vec<Pixel> {
        let mut out = Vec::new();
        draw_circle(&mut out, radius, x0, y0);
        out
    }

    #[test]
    fn test_cardinal_points() {
        let pts: HashSet<_> = circle(5, 0, 0).into_iter().collect();
        for p in [(5, 0), (0, 5), (-5, 0), (0, -5)] {
            assert!(pts.contains(&Pixel::from(p)), "missing {p:?}");
        }
    }

    #[test]
    fn test_first_octant_steps_radius_5() {
        let steps: Vec<_> = MidpointCircle::new(5).collect();
        assert_eq!(steps, vec![(0, 5), (1, 5), (2, 5), (3, 4), (4, 3)]);
    }

    #[test]
    fn test_zero_radius_single_point() {
        assert_eq!(circle(0, 4, -2), vec![Pixel::new(4, -2)]);
    }

    #[test]
    fn test_negative_radius_emits_nothing() {
        assert!(circle(-3, 0, 0).is_empty());
        assert_eq!(MidpointCircle::new(-1).count(), 0);
    }

    #[test]
    fn test_center_offset_applied() {
        let pts = circle(3, 100, 200);
        assert!(pts.iter().all(|p| (p.x - 100).abs() <= 3 && (p.y - 200).abs() <= 3));
        assert!(pts.contains(&Pixel::new(103, 200)));
    }

    #[test]
    fn test_top_mask_only_non_negative_y() {
        let mut out = Vec::new();
        draw_partial_circle(&mut out, 12, 0, 0, Octants::TOP);
        assert!(!out.is_empty());
        assert!(out.iter().all(|p| p.y >= 0));
    }

    #[test]
    fn test_left_right_partition_full_circle() {
        let mut left = Vec::new();
        let mut right = Vec::new();
        draw_partial_circle(&mut left, 9, 0, 0, Octants::LEFT);
        draw_partial_circle(&mut right, 9, 0, 0, Octants::RIGHT);
        assert!(left.iter().all(|p| p.x <= 0));
        assert!(right.iter().all(|p| p.x >= 0));
        assert_eq!(left.len() + right.len(), circle(9, 0, 0).len());
    }

    #[test]
    fn test_three_quarter_skips_bottom_center() {
        let mut out = Vec::new();
        draw_partial_circle(&mut out, 10, 0, 0, Octants::THREE_QUARTER);
        assert!(!out.contains(&Pixel::new(0, -10)));
        assert!(out.contains(&Pixel::new(0, 10)));
        assert!(out.contains(&Pixel::new(-10, 0)));
    }

    #[test]
    fn test_empty_mask_emits_nothing() {
        let mut out = Vec::new();
        draw_partial_circle(&mut out, 0, 0, 0, Octants::empty());
        draw_partial_circle(&mut out, 6, 0, 0, Octants::empty());
        assert!(out.is_empty());
    }

    #[test]
    fn test_disk_radii() {
        assert_eq!(disk_radii(4, 1), vec![4, 3, 2, 1, 0]);
        assert_eq!(disk_radii(10, 3), vec![10, 7, 4, 1, 0]);
        assert_eq!(disk_radii(10, 0), disk_radii(10, 1));
        assert_eq!(disk_radii(1, 5), vec![1, 0]);
        assert_eq!(disk_radii(0, 5), vec![0]);
        assert!(disk_radii(-2, 1).is_empty());
    }

    #[test]
    fn test_stride_for_layers() {
        assert_eq!(stride_for_layers(350, 40), 8);
        assert_eq!(stride_for_layers(20, 40), 1);
        assert_eq!(stride_for_layers(20, 0), 1);
    }

    #[test]
    fn test_filled_disk_contains_center_and_edge() {
        let mut out = Vec::new();
        draw_filled_disk(&mut out, 9, 50, 50, 4);
        let set: HashSet<_> = out.into_iter().collect();
        assert!(set.contains(&Pixel::new(50, 50)));
        assert!(set.contains(&Pixel::new(59, 50)));
        assert!(set.contains(&Pixel::new(50, 41)));
    }

    #[test]
    fn test_ring_thickness() {
        let mut ring = Vec::new();
        draw_ring(&mut ring, 20, 3, 0, 0, Octants::ALL);
        let radii: HashSet<i32> = ring
            .iter()
            .map(|p| (f64::from(p.x * p.x + p.y * p.y)).sqrt().round() as i32)
            .collect();
        assert!(radii.contains(&20));
        assert!(radii.contains(&18));
        assert!(!radii.contains(&17));
    }

    #[test]
    fn test_ring_clamps_at_zero() {
        let mut ring = Vec::new();
        draw_ring(&mut ring, 1, 10, 0, 0, Octants::ALL);
        assert!(ring.contains(&Pixel::new(0, 0)));
    }
}
