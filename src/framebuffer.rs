//! RGBA pixel buffer the dashboard is rasterized into.
//!
//! Storage is row-major with row 0 at the top, the layout PNG expects.
//! Coordinate flipping for the bottom-left dashboard origin happens in
//! [`crate::canvas::Canvas`], not here.

use crate::color::Rgba;
use crate::error::{Error, Result};

/// Bytes per RGBA pixel.
const BYTES_PER_PIXEL: usize = 4;

/// Owned RGBA framebuffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// Tightly packed `[R, G, B, A]` pixels, row-major.
    pixels: Vec<u8>,
}

impl Framebuffer {
    /// Create a new framebuffer cleared to transparent black.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use dashboard_raster::framebuffer::Framebuffer;
    ///
    /// let fb = Framebuffer::new(1500, 1000).unwrap();
    /// assert_eq!(fb.width(), 1500);
    /// assert_eq!(fb.height(), 1000);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let size = (width as usize) * (height as usize) * BYTES_PER_PIXEL;
        Ok(Self {
            width,
            height,
            pixels: vec![0; size],
        })
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get the total number of pixels.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Raw pixel bytes, rows top to bottom.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Whether `(x, y)` is inside the buffer.
    #[must_use]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < i64::from(self.width) && y < i64::from(self.height)
    }

    /// Clear the framebuffer to a solid color.
    pub fn clear(&mut self, color: Rgba) {
        let rgba = color.to_array();
        for chunk in self.pixels.chunks_exact_mut(BYTES_PER_PIXEL) {
            chunk.copy_from_slice(&rgba);
        }
    }

    /// Fill a rectangular region with a solid color.
    ///
    /// The rectangle is clipped to the framebuffer; negative origins are allowed.
    pub fn fill_rect(&mut self, x: i64, y: i64, w: u32, h: u32, color: Rgba) {
        let x1 = x.clamp(0, i64::from(self.width));
        let y1 = y.clamp(0, i64::from(self.height));
        let x2 = (x + i64::from(w)).clamp(0, i64::from(self.width));
        let y2 = (y + i64::from(h)).clamp(0, i64::from(self.height));

        if x1 >= x2 || y1 >= y2 {
            return;
        }

        let rgba = color.to_array();
        let row_bytes = (self.width as usize) * BYTES_PER_PIXEL;
        for row_y in y1 as usize..y2 as usize {
            let start = row_y * row_bytes + (x1 as usize) * BYTES_PER_PIXEL;
            let end = row_y * row_bytes + (x2 as usize) * BYTES_PER_PIXEL;
            for chunk in self.pixels[start..end].chunks_exact_mut(BYTES_PER_PIXEL) {
                chunk.copy_from_slice(&rgba);
            }
        }
    }

    /// Get the color at a specific pixel coordinate.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let idx = self.pixel_index(x, y);
        let mut rgba = [0u8; BYTES_PER_PIXEL];
        rgba.copy_from_slice(&self.pixels[idx..idx + BYTES_PER_PIXEL]);
        Some(Rgba::from_array(rgba))
    }

    /// Set the color at a specific pixel coordinate.
    ///
    /// Does nothing if the coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }

        let idx = self.pixel_index(x, y);
        self.pixels[idx..idx + BYTES_PER_PIXEL].copy_from_slice(&color.to_array());
    }

    /// Number of pixels exactly equal to `color`.
    #[must_use]
    pub fn count_color(&self, color: Rgba) -> usize {
        let rgba = color.to_array();
        self.pixels
            .chunks_exact(BYTES_PER_PIXEL)
            .filter(|chunk| *chunk == rgba)
            .count()
    }

    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * BYTES_PER_PIXEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_framebuffer() {
        let fb = Framebuffer::new(100, 50).unwrap();
        assert_eq!(fb.width(), 100);
        assert_eq!(fb.height(), 50);
        assert_eq!(fb.pixel_count(), 5000);
        assert_eq!(fb.pixels().len(), 20_000);
        assert_eq!(fb.count_color(Rgba::TRANSPARENT), 5000);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(Framebuffer::new(0, 100).is_err());
        assert!(Framebuffer::new(100, 0).is_err());
        assert!(matches!(
            Framebuffer::new(0, 0),
            Err(Error::InvalidDimensions { width: 0, height: 0 })
        ));
    }

    #[test]
    fn test_clear() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.clear(Rgba::RED);
        assert_eq!(fb.count_color(Rgba::RED), 100);
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut fb = Framebuffer::new(20, 20).unwrap();
        fb.clear(Rgba::WHITE);
        fb.fill_rect(-5, 15, 10, 10, Rgba::BLUE);

        assert_eq!(fb.count_color(Rgba::BLUE), 5 * 5);
        assert_eq!(fb.get_pixel(0, 19), Some(Rgba::BLUE));
        assert_eq!(fb.get_pixel(5, 19), Some(Rgba::WHITE));
    }

    #[test]
    fn test_fill_rect_fully_outside() {
        let mut fb = Framebuffer::new(20, 20).unwrap();
        fb.fill_rect(30, 30, 5, 5, Rgba::BLUE);
        assert_eq!(fb.count_color(Rgba::BLUE), 0);
    }

    #[test]
    fn test_set_get_pixel() {
        let mut fb = Framebuffer::new(10, 10).unwrap();

        fb.set_pixel(5, 5, Rgba::BLUE);
        assert_eq!(fb.get_pixel(5, 5), Some(Rgba::BLUE));

        // Out of bounds
        fb.set_pixel(10, 0, Rgba::BLUE);
        assert_eq!(fb.get_pixel(100, 100), None);
        assert_eq!(fb.count_color(Rgba::BLUE), 1);
    }

    #[test]
    fn test_contains() {
        let fb = Framebuffer::new(4, 3).unwrap();
        assert!(fb.contains(0, 0));
        assert!(fb.contains(3, 2));
        assert!(!fb.contains(4, 0));
        assert!(!fb.contains(-1, 1));
    }
}
