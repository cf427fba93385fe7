//! # The drawing canvas
//!
//! A [Canvas] owns the pixel buffer for one render. It starts white at
//! the configured dimensions and may grow taller before drawing. The
//! width never changes and the height never shrinks; draw calls always
//! go through the canvas itself, so there is no separate surface handle
//! that could go stale after a resize.

use image::{Rgb, RgbImage};

use crate::font::TypeFace;

const WHITE: Rgb<u8> = Rgb([0xFF, 0xFF, 0xFF]);

/// A white-background pixel buffer that text is drawn onto
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// Create a white canvas with the given dimensions
    pub fn new(width: u32, height: u32) -> Self {
        Canvas {
            image: RgbImage::from_pixel(width, height, WHITE),
        }
    }

    /// The width in pixels, constant for the lifetime of the canvas
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// The current height in pixels
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Grow the canvas to `height` pixels, keeping the width
    ///
    /// Existing content is carried over, rows below it start white.
    /// A `height` at or below the current height is a no-op, the
    /// canvas never shrinks.
    pub fn grow_to(&mut self, height: u32) {
        if height <= self.image.height() {
            return;
        }
        let mut grown = RgbImage::from_pixel(self.image.width(), height, WHITE);
        for (x, y, pixel) in self.image.enumerate_pixels() {
            grown.put_pixel(x, y, *pixel);
        }
        self.image = grown;
    }

    /// Draw one line of text in black, top edge at `y`, left edge at `x`
    ///
    /// Glyph coverage is blended onto the existing pixels; parts that
    /// fall outside the canvas are clipped.
    pub fn draw_line(&mut self, face: &TypeFace, text: &str, x: u32, y: u32) {
        let baseline = y as f32 + face.ascent();
        let mut pen = x as f32;
        for c in text.chars() {
            let (metrics, coverage) = face.rasterize(c);
            let left = (pen + metrics.xmin as f32).round() as i64;
            let top = (baseline - (metrics.height as i32 + metrics.ymin) as f32).round() as i64;
            self.blend_glyph(left, top, metrics.width, &coverage);
            pen += metrics.advance_width;
        }
    }

    fn blend_glyph(&mut self, left: i64, top: i64, glyph_width: usize, coverage: &[u8]) {
        if glyph_width == 0 {
            return;
        }
        let width = i64::from(self.image.width());
        let height = i64::from(self.image.height());
        for (row, line) in coverage.chunks_exact(glyph_width).enumerate() {
            let py = top + row as i64;
            if py < 0 || py >= height {
                continue;
            }
            for (col, &cov) in line.iter().enumerate() {
                if cov == 0 {
                    continue;
                }
                let px = left + col as i64;
                if px < 0 || px >= width {
                    continue;
                }
                let pixel = self.image.get_pixel_mut(px as u32, py as u32);
                for channel in pixel.0.iter_mut() {
                    // blend towards black by coverage
                    *channel = (u32::from(*channel) * (255 - u32::from(cov)) / 255) as u8;
                }
            }
        }
    }

    /// Take the finished image out of the canvas
    pub fn into_image(self) -> RgbImage {
        self.image
    }
}
