//! Dashboard pieces that are not dials: frame, digital read-outs, warning
//! light and turn-signal arrows.
//!
//! Each widget sets its own pens and restores the caller's pen when done,
//! except [`draw_dashboard_frame`], which draws with the current pen.

use crate::color::Rgba;
use crate::geometry::Point;
use crate::label::TextPlacement;
use crate::raster::{
    draw_circle, draw_filled_disk, draw_filled_partial_disk, draw_line, draw_ring,
    stride_for_layers, Octants, Pen, Surface,
};
use serde::{Deserialize, Serialize};

/// Draw the upper half of a `thickness`-ring frame centered at `(cx, cy)`.
pub fn draw_dashboard_frame<S: Surface + ?Sized>(
    surface: &mut S,
    cx: i32,
    cy: i32,
    radius: i32,
    thickness: u32,
) {
    draw_ring(surface, radius, thickness, cx, cy, Octants::TOP);
}

/// Fill the upper half disk at `(cx, cy)` with about `layers` concentric
/// half circles in the current pen. Sparse layers leave gaps on purpose.
pub fn draw_dashboard_backdrop<S: Surface + ?Sized>(
    surface: &mut S,
    cx: i32,
    cy: i32,
    radius: i32,
    layers: u32,
) {
    let stride = stride_for_layers(radius, layers);
    draw_filled_partial_disk(surface, radius, cx, cy, stride, Octants::TOP);
}

/// Colors of a digital read-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayPalette {
    /// Outer border.
    pub outer: Rgba,
    /// Inset border.
    pub inner: Rgba,
    /// Value text.
    pub value: Rgba,
    /// Unit text.
    pub unit: Rgba,
}

impl Default for DisplayPalette {
    fn default() -> Self {
        Self {
            outer: Rgba::from_unit(0.42, 0.40, 0.35),
            inner: Rgba::from_unit(0.25, 0.30, 0.65),
            value: Rgba::from_unit(0.15, 0.30, 0.35),
            unit: Rgba::from_unit(0.50, 0.85, 0.90),
        }
    }
}

fn draw_box<S: Surface + ?Sized>(surface: &mut S, x0: i32, y0: i32, x1: i32, y1: i32) {
    let (x0, y0, x1, y1) = (f64::from(x0), f64::from(y0), f64::from(x1), f64::from(y1));
    draw_line(surface, x0, y0, x1, y0);
    draw_line(surface, x1, y0, x1, y1);
    draw_line(surface, x1, y1, x0, y1);
    draw_line(surface, x0, y1, x0, y0);
}

/// Draw a bordered read-out box at `(x, y)` (bottom-left) of `w`×`h`.
///
/// Returns the value placement (truncated to an integer) and the unit
/// placement, both vertically centered in the box.
pub fn draw_digital_display<S: Surface + ?Sized>(
    surface: &mut S,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    value: f64,
    unit: &str,
    palette: &DisplayPalette,
) -> Vec<TextPlacement> {
    let saved = surface.pen();

    surface.set_pen(Pen::sized(palette.outer, 3));
    draw_box(surface, x, y, x + w, y + h);
    surface.set_pen(Pen::sized(palette.inner, 2));
    draw_box(surface, x + 2, y + 2, x + w - 2, y + h - 2);

    surface.set_pen(saved);

    let baseline = f64::from(y + h / 2 - 8);
    vec![
        TextPlacement::new(
            format!("{}", value.trunc() as i64),
            Point::new(f64::from(x + 15), baseline),
            palette.value,
        ),
        TextPlacement::new(unit, Point::new(f64::from(x + w - 40), baseline), palette.unit),
    ]
}

/// Draw a round warning light.
///
/// When lit: a dimmed glow disk three pixels wider, the light itself, and a
/// white highlight up-left of center. When dark: a single gray disk. Both
/// get an outline circle.
pub fn draw_indicator_light<S: Surface + ?Sized>(
    surface: &mut S,
    cx: i32,
    cy: i32,
    radius: i32,
    on: bool,
    color: Rgba,
) {
    let saved = surface.pen();

    if on {
        surface.set_pen(Pen::new(color.scaled(0.4)));
        draw_filled_disk(surface, radius + 3, cx, cy, 1);
        surface.set_pen(Pen::new(color));
        draw_filled_disk(surface, radius, cx, cy, 1);
        surface.set_pen(Pen::new(Rgba::WHITE));
        draw_filled_disk(surface, radius / 3, cx - 2, cy + 2, 1);
    } else {
        surface.set_pen(Pen::new(Rgba::from_unit(0.15, 0.15, 0.15)));
        draw_filled_disk(surface, radius, cx, cy, 1);
    }

    let outline = if on {
        Rgba::from_unit(0.5, 0.5, 0.5)
    } else {
        Rgba::from_unit(0.18, 0.18, 0.20)
    };
    surface.set_pen(Pen::sized(outline, 2));
    draw_circle(surface, radius, cx, cy);

    surface.set_pen(saved);
}

/// Which way a turn arrow points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnDirection {
    /// Arrow head on the left.
    Left,
    /// Arrow head on the right.
    Right,
}

/// Three strokes of an arrow whose bounding box starts at `(x, y)`, grown by
/// `pad` pixels in every direction.
fn arrow_strokes(x: f64, y: f64, direction: TurnDirection, pad: f64) -> [(f64, f64, f64, f64); 3] {
    match direction {
        TurnDirection::Left => [
            (x + 20.0 + pad, y - pad, x - pad, y + 10.0),
            (x - pad, y + 10.0, x + 20.0 + pad, y + 20.0 + pad),
            (x - pad, y + 10.0, x + 30.0 + pad, y + 10.0),
        ],
        TurnDirection::Right => [
            (x + pad, y - pad, x + 20.0 + pad, y + 10.0),
            (x + 20.0 + pad, y + 10.0, x + pad, y + 20.0 + pad),
            (x + 20.0 + pad, y + 10.0, x - 10.0 + pad, y + 10.0),
        ],
    }
}

/// Draw a turn-signal arrow anchored at `(x, y)`.
///
/// Lit arrows are bright and thick with a thin outline offset by two
/// pixels; unlit arrows are dark and thin.
pub fn draw_turn_arrow<S: Surface + ?Sized>(
    surface: &mut S,
    x: i32,
    y: i32,
    direction: TurnDirection,
    on: bool,
) {
    let saved = surface.pen();
    let (x, y) = (f64::from(x), f64::from(y));

    let pen = if on {
        Pen::sized(Rgba::from_unit(0.90, 0.15, 0.15), 4)
    } else {
        Pen::sized(Rgba::from_unit(0.15, 0.08, 0.08), 2)
    };
    surface.set_pen(pen);
    for (x1, y1, x2, y2) in arrow_strokes(x, y, direction, 0.0) {
        draw_line(surface, x1, y1, x2, y2);
    }

    if on {
        surface.set_pen(Pen::new(Rgba::from_unit(0.70, 0.65, 0.15)));
        for (x1, y1, x2, y2) in arrow_strokes(x, y, direction, 2.0) {
            draw_line(surface, x1, y1, x2, y2);
        }
    }

    surface.set_pen(saved);
}
