//! Text placements reported by the composer.
//!
//! Glyph rendering is left to the caller; gauges and widgets only say what
//! text goes where, in dashboard coordinates.

use crate::color::Rgba;
use crate::geometry::Point;

/// Horizontal alignment of a text placement relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    /// Text starts at the anchor.
    #[default]
    Left,
    /// Text is centered on the anchor.
    Center,
}

/// A piece of text to draw at a position.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPlacement {
    /// Text content.
    pub text: String,
    /// Anchor in dashboard coordinates (baseline, y up).
    pub position: Point,
    /// Alignment relative to `position`.
    pub align: TextAlign,
    /// Text color.
    pub color: Rgba,
}

impl TextPlacement {
    /// Left-aligned placement.
    #[must_use]
    pub fn new(text: impl Into<String>, position: Point, color: Rgba) -> Self {
        Self {
            text: text.into(),
            position,
            align: TextAlign::Left,
            color,
        }
    }

    /// Centered placement.
    #[must_use]
    pub fn centered(text: impl Into<String>, position: Point, color: Rgba) -> Self {
        Self {
            align: TextAlign::Center,
            ..Self::new(text, position, color)
        }
    }
}

/// Format a scale value: whole numbers without decimals, others with one.
#[must_use]
pub fn format_value(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{}", value.round() as i64)
    } else {
        format!("{value:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(200.0), "200");
        assert_eq!(format_value(-0.0), "0");
        assert_eq!(format_value(7.5), "7.5");
    }

    #[test]
    fn test_centered() {
        let t = TextPlacement::centered("40", Point::new(1.0, 2.0), Rgba::WHITE);
        assert_eq!(t.align, TextAlign::Center);
        assert_eq!(t.text, "40");
    }
}
