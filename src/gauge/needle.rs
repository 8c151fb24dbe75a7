//! Gauge needles.

use super::domain::GaugeDomain;
use crate::color::Rgba;
use crate::geometry::Point;
use crate::raster::{draw_line_between, Pen, Surface};
use serde::{Deserialize, Serialize};

/// Layers of a needle, drawn back to front.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NeedleStyle {
    /// Drop shadow, drawn offset by `shadow_offset`.
    pub shadow: Option<Pen>,
    /// Shadow displacement in pixels (x, y).
    pub shadow_offset: (f64, f64),
    /// Main needle body.
    pub body: Pen,
    /// Bright overlay from the pivot along part of the needle.
    pub highlight: Option<Pen>,
    /// Fraction of the needle length covered by the highlight.
    pub highlight_fraction: f64,
}

impl Default for NeedleStyle {
    fn default() -> Self {
        Self {
            shadow: Some(Pen::sized(Rgba::from_unit(0.12, 0.08, 0.08), 4)),
            shadow_offset: (1.0, -1.0),
            body: Pen::sized(Rgba::from_unit(0.85, 0.25, 0.0), 3),
            highlight: Some(Pen::sized(Rgba::YELLOW, 1)),
            highlight_fraction: 0.7,
        }
    }
}

impl NeedleStyle {
    /// A single-line needle with no shadow or highlight.
    #[must_use]
    pub fn plain(body: Pen) -> Self {
        Self {
            shadow: None,
            highlight: None,
            body,
            ..Self::default()
        }
    }
}

/// Tip of a needle of `length` pivoting at `center` for `value`.
#[must_use]
pub fn needle_tip(center: Point, length: f64, value: f64, domain: &GaugeDomain) -> Point {
    Point::polar(center, length, domain.angle_for(value))
}

/// Draw a needle for `value` and return its tip.
///
/// The value is clamped to `domain` first. Layers are drawn shadow, body,
/// highlight; the surface's pen is restored afterwards.
pub fn draw_needle<S: Surface + ?Sized>(
    surface: &mut S,
    center: Point,
    length: f64,
    value: f64,
    domain: &GaugeDomain,
    style: &NeedleStyle,
) -> Point {
    let saved = surface.pen();
    let tip = needle_tip(center, length, value, domain);

    if let Some(pen) = style.shadow {
        let (dx, dy) = style.shadow_offset;
        surface.set_pen(pen);
        draw_line_between(surface, center.offset(dx, dy), tip.offset(dx, dy));
    }

    surface.set_pen(style.body);
    draw_line_between(surface, center, tip);

    if let Some(pen) = style.highlight {
        surface.set_pen(pen);
        draw_line_between(surface, center, center.lerp(tip, style.highlight_fraction));
    }

    surface.set_pen(saved);
    tip
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Pixel;
    use crate::raster::PixelRecorder;
    use approx::assert_abs_diff_eq;

    fn domain() -> GaugeDomain {
        GaugeDomain::new(0.0, 100.0).unwrap()
    }

    #[test]
    fn test_tip_direction_at_ends() {
        let c = Point::new(50.0, 50.0);
        let lo = needle_tip(c, 40.0, 0.0, &domain());
        let hi = needle_tip(c, 40.0, 100.0, &domain());
        assert_abs_diff_eq!(c.angle_to(lo), -135.0, epsilon = 1e-9);
        assert_abs_diff_eq!(c.angle_to(hi), -45.0, epsilon = 1e-9);
    }

    #[test]
    fn test_layers_use_their_pens() {
        let style = NeedleStyle::default();
        let mut rec = PixelRecorder::new();
        let before = Pen::new(Rgba::BLUE);
        rec.set_pen(before);

        let tip = draw_needle(&mut rec, Point::new(0.0, 0.0), 30.0, 50.0, &domain(), &style);

        // Midpoint of the domain points straight up.
        assert_abs_diff_eq!(tip.x, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(tip.y, 30.0, epsilon = 1e-9);

        let body: Vec<Pixel> = rec.pixels_with(style.body.color).collect();
        assert_eq!(body.first(), Some(&Pixel::new(0, 0)));
        assert_eq!(body.last(), Some(&Pixel::new(0, 30)));

        let shadow: Vec<Pixel> = rec.pixels_with(style.shadow.unwrap().color).collect();
        assert_eq!(shadow.first(), Some(&Pixel::new(1, -1)));

        let highlight: Vec<Pixel> = rec.pixels_with(Rgba::YELLOW).collect();
        assert_eq!(highlight.last(), Some(&Pixel::new(0, 21)));

        assert_eq!(rec.pen(), before);
    }

    #[test]
    fn test_plain_style_single_layer() {
        let mut rec = PixelRecorder::new();
        draw_needle(
            &mut rec,
            Point::ORIGIN,
            10.0,
            -50.0,
            &domain(),
            &NeedleStyle::plain(Pen::new(Rgba::RED)),
        );
        assert!(rec.strokes().iter().all(|s| s.pen.color == Rgba::RED));
        // Clamped to the minimum: lower-left.
        assert_eq!(rec.strokes().last().map(|s| s.pixel), Some(Pixel::new(-7, -7)));
    }
}
