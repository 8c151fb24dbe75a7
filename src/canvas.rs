//! Pen-carrying drawing surface over a [`Framebuffer`].
//!
//! Dashboard coordinates put the origin at the bottom-left corner with +y
//! up, so gauge angles read like a clock face (225° is lower-left). The
//! canvas flips rows on the way into the framebuffer.

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::raster::{Pen, PixelSink, Surface, MAX_PEN_SIZE};

/// A [`Surface`] that stamps pen-sized squares into a framebuffer.
#[derive(Debug)]
pub struct Canvas<'a> {
    fb: &'a mut Framebuffer,
    pen: Pen,
}

impl<'a> Canvas<'a> {
    /// Wrap a framebuffer with a default one-pixel white pen.
    pub fn new(fb: &'a mut Framebuffer) -> Self {
        Self {
            fb,
            pen: Pen::default(),
        }
    }

    /// Canvas width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.fb.width()
    }

    /// Canvas height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.fb.height()
    }

    /// The underlying framebuffer.
    #[must_use]
    pub fn framebuffer(&self) -> &Framebuffer {
        &*self.fb
    }

    /// Clear everything to `color`.
    pub fn clear(&mut self, color: Rgba) {
        self.fb.clear(color);
    }

    /// Fill the axis-aligned rectangle spanning `x..x+w`, `y..y+h` (y up).
    pub fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Rgba) {
        let top = self.row_of(i64::from(y) + i64::from(h) - 1);
        self.fb.fill_rect(i64::from(x), top, w, h, color);
    }

    /// Color at dashboard coordinate `(x, y)`, if inside.
    #[must_use]
    pub fn color_at(&self, x: i32, y: i32) -> Option<Rgba> {
        let row = self.row_of(i64::from(y));
        if !self.fb.contains(i64::from(x), row) {
            return None;
        }
        self.fb.get_pixel(x as u32, row as u32)
    }

    fn row_of(&self, y: i64) -> i64 {
        i64::from(self.fb.height()) - 1 - y
    }
}

impl PixelSink for Canvas<'_> {
    fn plot(&mut self, x: i32, y: i32) {
        let size = i64::from(self.pen.size.clamp(1, MAX_PEN_SIZE));
        // Square centered on the pixel, biased toward +x/+y for even sizes.
        let lo = -(size - 1) / 2;
        let hi = lo + size;
        let color = self.pen.color;

        for dy in lo..hi {
            let row = self.row_of(i64::from(y) + dy);
            for dx in lo..hi {
                let col = i64::from(x) + dx;
                if self.fb.contains(col, row) {
                    self.fb.set_pixel(col as u32, row as u32, color);
                }
            }
        }
    }
}

impl Surface for Canvas<'_> {
    fn set_pen(&mut self, pen: Pen) {
        self.pen = pen;
    }

    fn pen(&self) -> Pen {
        self.pen
    }
}
