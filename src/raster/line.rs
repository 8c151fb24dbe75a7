//! DDA line rasterization.

use super::sink::PixelSink;
use crate::geometry::{Line, Pixel, Point};

/// Iterator over the pixels of a line, start to end inclusive.
///
/// Steps equally along the dominant axis, so consecutive pixels never skip a
/// column (or row) and move at most one step on the minor axis.
#[derive(Debug, Clone)]
pub struct DdaLine {
    start: Point,
    end: Point,
    x_increment: f64,
    y_increment: f64,
    samples: usize,
    index: usize,
}

impl DdaLine {
    /// Prepare a line from `(x1, y1)` to `(x2, y2)`.
    ///
    /// A zero-length line yields exactly one pixel.
    #[must_use]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        let dx = x2 - x1;
        let dy = y2 - y1;
        let steps = dx.abs().max(dy.abs());

        let (x_increment, y_increment, samples) = if steps == 0.0 {
            (0.0, 0.0, 1)
        } else {
            // Fractional spans round up so the end point is still the last sample.
            let n = steps.ceil();
            (dx / n, dy / n, (n as usize).saturating_add(1))
        };

        Self {
            start: Point::new(x1, y1),
            end: Point::new(x2, y2),
            x_increment,
            y_increment,
            samples,
            index: 0,
        }
    }

    /// Number of pixels this line emits in total.
    #[must_use]
    pub const fn sample_count(&self) -> usize {
        self.samples
    }
}

impl Iterator for DdaLine {
    type Item = Pixel;

    fn next(&mut self) -> Option<Pixel> {
        if self.index >= self.samples {
            return None;
        }

        let i = self.index;
        self.index += 1;

        let p = if i + 1 == self.samples {
            self.end
        } else {
            let t = i as f64;
            Point::new(
                self.start.x + self.x_increment * t,
                self.start.y + self.y_increment * t,
            )
        };

        Some(Pixel::new(p.x.round() as i32, p.y.round() as i32))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.samples - self.index;
        (left, Some(left))
    }
}

impl ExactSizeIterator for DdaLine {}

impl Line {
    /// Rasterize this segment.
    #[must_use]
    pub fn rasterize(&self) -> DdaLine {
        DdaLine::new(self.start.x, self.start.y, self.end.x, self.end.y)
    }
}

/// Draw a line from `(x1, y1)` to `(x2, y2)` using the DDA algorithm.
///
/// # Arguments
///
/// * `sink` - Receiver of the emitted pixels
/// * `x1`, `y1` - Start coordinates
/// * `x2`, `y2` - End coordinates
pub fn draw_line<S: PixelSink + ?Sized>(sink: &mut S, x1: f64, y1: f64, x2: f64, y2: f64) {
    for p in DdaLine::new(x1, y1, x2, y2) {
        sink.plot(p.x, p.y);
    }
}

/// [`draw_line`] taking points.
pub fn draw_line_between<S: PixelSink + ?Sized>(sink: &mut S, from: Point, to: Point) {
    draw_line(sink, from.x, from.y, to.x, to.y);
}
