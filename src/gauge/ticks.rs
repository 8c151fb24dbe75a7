//! Radial tick marks and their scale labels.

use super::domain::GaugeDomain;
use crate::color::Rgba;
use crate::geometry::Point;
use crate::label::{format_value, TextPlacement};
use crate::raster::{draw_line_between, Pen, Surface};
use serde::{Deserialize, Serialize};

/// Slack allowed past the domain end when stepping tick values.
const TICK_EPSILON: f64 = 1e-6;

/// One family of ticks (major or minor) on a dial.
///
/// Radii are given as insets from the dial radius so the same spec works
/// for any gauge size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickSpec {
    /// Distance between consecutive tick values.
    pub step: f64,
    /// First tick value relative to the domain minimum.
    #[serde(default)]
    pub offset: f64,
    /// Inset of the tick's outer end.
    pub outer_inset: f64,
    /// Inset of the tick's inner end.
    pub inner_inset: f64,
    /// Pen size for the stroke.
    #[serde(default = "default_tick_pen")]
    pub pen_size: u32,
    /// Inset of the value label, or `None` for unlabeled ticks.
    #[serde(default)]
    pub label_inset: Option<f64>,
}

fn default_tick_pen() -> u32 {
    1
}

impl TickSpec {
    /// Unlabeled ticks every `step` between the two insets.
    #[must_use]
    pub const fn new(step: f64, outer_inset: f64, inner_inset: f64) -> Self {
        Self {
            step,
            offset: 0.0,
            outer_inset,
            inner_inset,
            pen_size: 1,
            label_inset: None,
        }
    }

    /// Start ticks `offset` above the domain minimum.
    #[must_use]
    pub const fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Stroke ticks with a `size` pen.
    #[must_use]
    pub const fn with_pen_size(mut self, size: u32) -> Self {
        self.pen_size = size;
        self
    }

    /// Place value labels `inset` pixels inside the dial edge.
    #[must_use]
    pub const fn with_labels(mut self, inset: f64) -> Self {
        self.label_inset = Some(inset);
        self
    }
}

/// Most ticks one family can put on a dial.
pub const MAX_TICKS: usize = 1000;

/// Values `min + offset, min + offset + step, ...` up to `max`.
///
/// Steps toward `max` for reversed domains. A non-positive or non-finite
/// step yields no values. At most [`MAX_TICKS`] values are returned.
#[must_use]
pub fn tick_values(domain: &GaugeDomain, step: f64, offset: f64) -> Vec<f64> {
    if !(step.is_finite() && step > 0.0) {
        return Vec::new();
    }
    let (min, max) = (domain.min(), domain.max());
    let dir = if max >= min { 1.0 } else { -1.0 };
    let span = (max - min).abs();

    // Index range with `offset + i * step` inside [0, span], with slack.
    let first = ((-TICK_EPSILON - offset) / step).ceil().max(0.0);
    let last = ((span + TICK_EPSILON - offset) / step).floor();
    if !(last >= first) {
        return Vec::new();
    }
    let count = ((last - first) as usize).saturating_add(1).min(MAX_TICKS);

    (0..count).map(|k| min + dir * (offset + (first + k as f64) * step)).collect()
}

/// Draw a single tick for `value` between the two radii.
pub fn draw_tick<S: Surface + ?Sized>(
    surface: &mut S,
    center: Point,
    outer: f64,
    inner: f64,
    value: f64,
    domain: &GaugeDomain,
) {
    let angle = domain.angle_for(value);
    draw_line_between(
        surface,
        Point::polar(center, outer, angle),
        Point::polar(center, inner, angle),
    );
}

/// Draw every tick of `spec` on a dial of `radius` and return label placements.
///
/// `pen_for` picks the color per value, so ticks inside a warning zone can be
/// recolored. The surface pen is restored afterwards.
pub fn draw_ticks<S, F>(
    surface: &mut S,
    center: Point,
    radius: f64,
    domain: &GaugeDomain,
    spec: &TickSpec,
    pen_for: F,
    label_color: Rgba,
) -> Vec<TextPlacement>
where
    S: Surface + ?Sized,
    F: Fn(f64) -> Rgba,
{
    let saved = surface.pen();
    let mut labels = Vec::new();

    for value in tick_values(domain, spec.step, spec.offset) {
        surface.set_pen(Pen::sized(pen_for(value), spec.pen_size));
        draw_tick(
            surface,
            center,
            radius - spec.outer_inset,
            radius - spec.inner_inset,
            value,
            domain,
        );

        if let Some(inset) = spec.label_inset {
            let at = Point::polar(center, radius - inset, domain.angle_for(value));
            labels.push(TextPlacement::centered(format_value(value), at, label_color));
        }
    }

    surface.set_pen(saved);
    labels
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::PixelRecorder;

    #[test]
    fn test_tick_values_include_max() {
        let d = GaugeDomain::new(0.0, 100.0).unwrap();
        assert_eq!(tick_values(&d, 25.0, 0.0), vec![0.0, 25.0, 50.0, 75.0, 100.0]);
    }

    #[test]
    fn test_tick_values_stop_short_of_max() {
        let d = GaugeDomain::new(0.0, 230.0).unwrap();
        let majors = tick_values(&d, 20.0, 0.0);
        assert_eq!(majors.len(), 12);
        assert_eq!(majors.last(), Some(&220.0));

        let minors = tick_values(&d, 20.0, 10.0);
        assert_eq!(minors.first(), Some(&10.0));
        assert_eq!(minors.last(), Some(&230.0));
    }

    #[test]
    fn test_tick_values_float_slack() {
        let d = GaugeDomain::new(0.0, 0.3).unwrap();
        assert_eq!(tick_values(&d, 0.1, 0.0).len(), 4);
    }

    #[test]
    fn test_tick_values_bad_step() {
        let d = GaugeDomain::new(0.0, 8.0).unwrap();
        assert!(tick_values(&d, 0.0, 0.0).is_empty());
        assert!(tick_values(&d, -1.0, 0.0).is_empty());
        assert!(tick_values(&d, f64::NAN, 0.0).is_empty());
    }

    #[test]
    fn test_tick_values_negative_offset() {
        let d = GaugeDomain::new(0.0, 10.0).unwrap();
        assert_eq!(tick_values(&d, 5.0, -5.0), vec![0.0, 5.0, 10.0]);
        assert!(tick_values(&d, 5.0, 20.0).is_empty());
    }

    #[test]
    fn test_tick_values_capped() {
        let d = GaugeDomain::new(0.0, 230.0).unwrap();
        let values = tick_values(&d, 1e-9, 0.0);
        assert_eq!(values.len(), MAX_TICKS);
        assert_eq!(values[0], 0.0);
    }

    #[test]
    fn test_tick_values_reversed() {
        let d = GaugeDomain::new(8.0, 0.0).unwrap();
        assert_eq!(tick_values(&d, 4.0, 0.0), vec![8.0, 4.0, 0.0]);
    }

    #[test]
    fn test_draw_ticks_labels_and_colors() {
        let d = GaugeDomain::new(0.0, 8.0).unwrap();
        let spec = TickSpec::new(1.0, 15.0, 25.0).with_pen_size(2).with_labels(40.0);
        let mut rec = PixelRecorder::new();

        let labels = draw_ticks(
            &mut rec,
            Point::new(100.0, 100.0),
            80.0,
            &d,
            &spec,
            |v| if v >= 7.0 { Rgba::RED } else { Rgba::WHITE },
            Rgba::GREEN,
        );

        assert_eq!(labels.len(), 9);
        assert_eq!(labels[0].text, "0");
        assert_eq!(labels[8].text, "8");
        assert!(labels.iter().all(|l| l.color == Rgba::GREEN));
        // Label radius is 80 - 40.
        let dist = labels[4].position.distance(Point::new(100.0, 100.0));
        assert!((dist - 40.0).abs() < 1e-9);

        assert!(rec.pixels_with(Rgba::RED).count() > 0);
        assert!(rec.strokes().iter().all(|s| s.pen.size == 2));
        assert_eq!(rec.pen(), Pen::default());
    }

    #[test]
    fn test_top_tick_is_vertical() {
        let d = GaugeDomain::new(0.0, 2.0).unwrap();
        let mut rec = PixelRecorder::new();
        draw_tick(&mut rec, Point::ORIGIN, 50.0, 40.0, 1.0, &d);
        assert!(rec.pixels().all(|p| p.x == 0 && (40..=50).contains(&p.y)));
        assert_eq!(rec.len(), 11);
    }
}
