//! Point-emission sinks and pen state.
//!
//! Rasterizers only ever call [`PixelSink::plot`]. Compositions that switch
//! colors mid-shape (layered needles, lit indicators) need a [`Surface`],
//! which adds the caller-owned [`Pen`].

use crate::color::Rgba;
use crate::geometry::Pixel;
use serde::{Deserialize, Serialize};

/// Receiver of rasterized pixels.
pub trait PixelSink {
    /// Emit one pixel.
    fn plot(&mut self, x: i32, y: i32);
}

impl PixelSink for Vec<Pixel> {
    fn plot(&mut self, x: i32, y: i32) {
        self.push(Pixel::new(x, y));
    }
}

impl<S: PixelSink + ?Sized> PixelSink for &mut S {
    fn plot(&mut self, x: i32, y: i32) {
        (**self).plot(x, y);
    }
}

/// Largest square a pen stamps; bigger sizes are clamped when drawn.
pub const MAX_PEN_SIZE: u32 = 32;

/// Drawing state: color and point size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pen {
    /// Color of emitted pixels.
    pub color: Rgba,
    /// Edge length of the square stamped per emitted pixel.
    #[serde(default = "default_pen_size")]
    pub size: u32,
}

fn default_pen_size() -> u32 {
    1
}

impl Pen {
    /// One-pixel pen.
    #[must_use]
    pub const fn new(color: Rgba) -> Self {
        Self { color, size: 1 }
    }

    /// Pen stamping `size`×`size` squares.
    #[must_use]
    pub const fn sized(color: Rgba, size: u32) -> Self {
        Self { color, size }
    }

    /// Same pen with another size.
    #[must_use]
    pub const fn with_size(self, size: u32) -> Self {
        Self::sized(self.color, size)
    }
}

impl Default for Pen {
    fn default() -> Self {
        Self::new(Rgba::WHITE)
    }
}

/// A sink that also holds pen state set by the caller.
pub trait Surface: PixelSink {
    /// Replace the current pen.
    fn set_pen(&mut self, pen: Pen);

    /// Current pen.
    fn pen(&self) -> Pen;
}

/// One recorded emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stroke {
    /// Pen active when the pixel was emitted.
    pub pen: Pen,
    /// Emitted pixel.
    pub pixel: Pixel,
}

/// [`Surface`] that records every emission in order, for inspection.
#[derive(Debug, Clone, Default)]
pub struct PixelRecorder {
    pen: Pen,
    strokes: Vec<Stroke>,
}

impl PixelRecorder {
    /// Empty recorder with the default pen.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded emissions.
    #[must_use]
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Emitted pixels regardless of pen.
    pub fn pixels(&self) -> impl Iterator<Item = Pixel> + '_ {
        self.strokes.iter().map(|s| s.pixel)
    }

    /// Pixels emitted while the pen had `color`.
    pub fn pixels_with(&self, color: Rgba) -> impl Iterator<Item = Pixel> + '_ {
        self.strokes
            .iter()
            .filter(move |s| s.pen.color == color)
            .map(|s| s.pixel)
    }

    /// Number of emissions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    /// True if nothing was emitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Forget recorded emissions, keeping the pen.
    pub fn clear(&mut self) {
        self.strokes.clear();
    }
}

impl PixelSink for PixelRecorder {
    fn plot(&mut self, x: i32, y: i32) {
        self.strokes.push(Stroke {
            pen: self.pen,
            pixel: Pixel::new(x, y),
        });
    }
}

impl Surface for PixelRecorder {
    fn set_pen(&mut self, pen: Pen) {
        self.pen = pen;
    }

    fn pen(&self) -> Pen {
        self.pen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_sink_collects_in_order() {
        let mut out: Vec<Pixel> = Vec::new();
        out.plot(1, 2);
        out.plot(-3, 4);
        assert_eq!(out, vec![Pixel::new(1, 2), Pixel::new(-3, 4)]);
    }

    #[test]
    fn test_recorder_tracks_pen() {
        let mut rec = PixelRecorder::new();
        rec.set_pen(Pen::new(Rgba::RED));
        rec.plot(0, 0);
        rec.set_pen(Pen::sized(Rgba::BLUE, 3));
        rec.plot(1, 1);

        assert_eq!(rec.len(), 2);
        assert_eq!(rec.pixels_with(Rgba::RED).collect::<Vec<_>>(), vec![Pixel::new(0, 0)]);
        assert_eq!(rec.strokes()[1].pen.size, 3);

        rec.clear();
        assert!(rec.is_empty());
        assert_eq!(rec.pen().color, Rgba::BLUE);
    }

    #[test]
    fn test_sink_through_reference() {
        fn emit<S: PixelSink>(mut sink: S) {
            sink.plot(9, 9);
        }
        let mut out: Vec<Pixel> = Vec::new();
        emit(&mut out);
        assert_eq!(out, vec![Pixel::new(9, 9)]);
    }
}
