//! # Calculator Icon
//!
//! Hand-drawn calculator glyph: dark red rounded background, white body,
//! light gray display and a 4×3 keypad.

use image::RgbaImage;

use super::{Canvas, CalculatorLayout, IconRenderer, IconSpec, Palette};
use crate::error::IconError;

/// Draws the calculator glyph directly onto a canvas.
#[derive(Debug, Clone, Default)]
pub struct CalculatorIcon {
    palette: Palette,
}

impl CalculatorIcon {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }
}

impl IconRenderer for CalculatorIcon {
    fn name(&self) -> &'static str {
        "calculator"
    }

    fn render_spec(&self, spec: IconSpec) -> Result<RgbaImage, IconError> {
        let layout = CalculatorLayout::for_edge(spec.edge());
        let mut canvas = Canvas::new(spec.edge());

        for (part, rect) in layout.shapes() {
            canvas.fill_rounded_rect(rect, self.palette.color(part));
        }

        Ok(canvas.into_image())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::{Part, REQUIRED_SIZES};
    use image::Rgba;

    fn center_of(rect: &crate::icon::Rect) -> (u32, u32) {
        (
            ((rect.x0 + rect.x1) / 2.0) as u32,
            ((rect.y0 + rect.y1) / 2.0) as u32,
        )
    }

    #[test]
    fn test_required_sizes_dimensions() {
        let renderer = CalculatorIcon::default();
        for size in REQUIRED_SIZES {
            let image = renderer.render(size as i64).unwrap();
            assert_eq!(image.dimensions(), (size, size));
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let renderer = CalculatorIcon::default();
        let a = renderer.render(144).unwrap();
        let b = renderer.render(144).unwrap();
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn test_invalid_edges() {
        let renderer = CalculatorIcon::default();
        assert!(matches!(renderer.render(0), Err(IconError::InvalidInput(_))));
        assert!(matches!(renderer.render(-1), Err(IconError::InvalidInput(_))));
        assert!(matches!(
            renderer.render(i64::from(u32::MAX)),
            Err(IconError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_single_pixel_icon() {
        let image = CalculatorIcon::default().render(1).unwrap();
        assert_eq!(image.dimensions(), (1, 1));
    }

    #[test]
    fn test_small_edges_do_not_panic() {
        let renderer = CalculatorIcon::default();
        for edge in 1..=16 {
            let image = renderer.render(edge).unwrap();
            assert_eq!(image.width() as i64, edge);
        }
    }

    #[test]
    fn test_part_colors_land_where_expected() {
        let renderer = CalculatorIcon::default();
        let image = renderer.render(512).unwrap();
        let layout = CalculatorLayout::for_edge(512);
        let palette = Palette::default();

        // Outside the rounded background
        assert_eq!(image.get_pixel(0, 0).0[3], 0);
        // Background ring between canvas edge and body
        assert_eq!(*image.get_pixel(256, 20), palette.color(Part::Background));

        let (dx, dy) = center_of(&layout.display);
        assert_eq!(*image.get_pixel(dx, dy), palette.color(Part::Display));

        for button in &layout.buttons {
            let (bx, by) = center_of(button);
            assert_eq!(*image.get_pixel(bx, by), palette.color(Part::Button));
        }

        // Body shows between the last keypad row and the bottom inset
        let last = layout.buttons.last().unwrap();
        let gap_y = ((last.y1 + layout.body.y1) / 2.0) as u32;
        assert_eq!(*image.get_pixel(256, gap_y), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn test_custom_palette() {
        let palette = Palette {
            background: [0, 0, 255],
            ..Palette::default()
        };
        let image = CalculatorIcon::new(palette).render(96).unwrap();
        assert_eq!(*image.get_pixel(48, 4), Rgba([0, 0, 255, 255]));
    }
}
