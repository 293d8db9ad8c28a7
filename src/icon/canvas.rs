//! Owned RGBA drawing surface.
//!
//! A pixel is covered by a shape when its center `(x + 0.5, y + 0.5)` lies
//! inside it. Fills are opaque replacements with no anti-aliasing, so the
//! same layout always yields the same bytes.

use image::{Rgba, RgbaImage};

use super::layout::Rect;

/// A square canvas, fully transparent on creation.
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    pub fn new(edge: u32) -> Self {
        Self {
            image: RgbaImage::from_pixel(edge, edge, Rgba([0, 0, 0, 0])),
        }
    }

    pub fn edge(&self) -> u32 {
        self.image.width()
    }

    /// Fill a rounded rectangle. Portions outside the canvas are clipped.
    pub fn fill_rounded_rect(&mut self, rect: &Rect, color: Rgba<u8>) {
        if rect.is_empty() {
            return;
        }

        let edge = self.edge();
        let x_start = rect.x0.max(0.0).floor() as u32;
        let y_start = rect.y0.max(0.0).floor() as u32;
        let x_end = (rect.x1.max(0.0).ceil() as u32).min(edge);
        let y_end = (rect.y1.max(0.0).ceil() as u32).min(edge);

        for y in y_start..y_end {
            for x in x_start..x_end {
                if rect.contains(x as f32 + 0.5, y as f32 + 0.5) {
                    self.image.put_pixel(x, y, color);
                }
            }
        }
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}
