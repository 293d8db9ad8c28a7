//! # Icon Rendering
//!
//! Renderers that turn an edge length into a square RGBA icon. Every
//! strategy sits behind the [`IconRenderer`] trait so the batch driver and
//! the CLI never care whether pixels were drawn by hand or rasterized from
//! an SVG document.
//!
//! ## Usage
//!
//! ```
//! use calcicon::icon::{CalculatorIcon, IconRenderer, Palette};
//!
//! let renderer = CalculatorIcon::new(Palette::default());
//! let image = renderer.render(192)?;
//! assert_eq!(image.dimensions(), (192, 192));
//! # Ok::<(), calcicon::IconError>(())
//! ```

pub mod calculator;
pub mod canvas;
pub mod layout;
pub mod svg;

pub use calculator::CalculatorIcon;
pub use canvas::Canvas;
pub use layout::{CalculatorLayout, Part, Rect};
pub use svg::SvgIcon;

use image::{Rgba, RgbaImage};

use crate::error::IconError;

/// Edge lengths a PWA manifest needs, in pixels.
pub const REQUIRED_SIZES: [u32; 8] = [72, 96, 128, 144, 152, 192, 384, 512];

/// A validated icon request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSpec {
    edge: u32,
}

impl IconSpec {
    /// Largest edge a canvas is allocated for (1 GiB of RGBA).
    pub const MAX_EDGE: u32 = 16384;

    /// Validate an edge length. Zero, negative and values above
    /// [`Self::MAX_EDGE`] are rejected.
    pub fn new(edge: i64) -> Result<Self, IconError> {
        if edge <= 0 {
            return Err(IconError::InvalidInput(format!(
                "edge length must be positive, got {}",
                edge
            )));
        }
        match u32::try_from(edge) {
            Ok(edge) if edge <= Self::MAX_EDGE => Ok(Self { edge }),
            _ => Err(IconError::InvalidInput(format!(
                "edge length {} exceeds the maximum of {}",
                edge,
                Self::MAX_EDGE
            ))),
        }
    }

    /// Edge length in pixels.
    pub fn edge(&self) -> u32 {
        self.edge
    }
}

/// Fill colors for the calculator glyph (RGB, always drawn opaque).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Rounded background square (`#8B0000`)
    pub background: [u8; 3],
    /// Calculator body panel (`#FFFFFF`)
    pub body: [u8; 3],
    /// Display strip (`#E0E0E0`)
    pub display: [u8; 3],
    /// Keypad buttons (`#8B0000`)
    pub button: [u8; 3],
}

impl Palette {
    pub const DARK_RED: [u8; 3] = [139, 0, 0];
    pub const WHITE: [u8; 3] = [255, 255, 255];
    pub const LIGHT_GRAY: [u8; 3] = [224, 224, 224];
    pub const PALE_GRAY: [u8; 3] = [240, 240, 240];

    /// Logo colors: the icon palette with a paler `#F0F0F0` display.
    pub fn logo() -> Self {
        Self {
            display: Self::PALE_GRAY,
            ..Self::default()
        }
    }

    /// Opaque fill color for a part of the glyph.
    pub fn color(&self, part: Part) -> Rgba<u8> {
        let [r, g, b] = match part {
            Part::Background => self.background,
            Part::Body => self.body,
            Part::Display => self.display,
            Part::Button => self.button,
        };
        Rgba([r, g, b, 255])
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Self::DARK_RED,
            body: Self::WHITE,
            display: Self::LIGHT_GRAY,
            button: Self::DARK_RED,
        }
    }
}

/// A strategy that produces a square icon for a given edge length.
pub trait IconRenderer: Send + Sync {
    /// Strategy name (lowercase, e.g., "calculator").
    fn name(&self) -> &'static str;

    /// Render a validated request into an `edge × edge` RGBA image.
    fn render_spec(&self, spec: IconSpec) -> Result<RgbaImage, IconError>;

    /// Render an icon of `edge × edge` pixels.
    ///
    /// Fails with [`IconError::InvalidInput`] when `edge <= 0`.
    fn render(&self, edge: i64) -> Result<RgbaImage, IconError> {
        self.render_spec(IconSpec::new(edge)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_rejects_non_positive() {
        assert!(matches!(IconSpec::new(0), Err(IconError::InvalidInput(_))));
        assert!(matches!(IconSpec::new(-1), Err(IconError::InvalidInput(_))));
    }

    #[test]
    fn test_edge_rejects_oversized() {
        let too_big = i64::from(u32::MAX) + 1;
        assert!(matches!(
            IconSpec::new(too_big),
            Err(IconError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_edge_rejects_unallocatable() {
        let max = i64::from(IconSpec::MAX_EDGE);
        assert_eq!(IconSpec::new(max).unwrap().edge(), IconSpec::MAX_EDGE);
        assert!(matches!(
            IconSpec::new(max + 1),
            Err(IconError::InvalidInput(_))
        ));
        assert!(matches!(
            IconSpec::new(i64::from(u32::MAX)),
            Err(IconError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_edge_accepts_one() {
        assert_eq!(IconSpec::new(1).unwrap().edge(), 1);
    }

    #[test]
    fn test_default_palette_colors() {
        let palette = Palette::default();
        assert_eq!(palette.color(Part::Background), Rgba([139, 0, 0, 255]));
        assert_eq!(palette.color(Part::Body), Rgba([255, 255, 255, 255]));
        assert_eq!(palette.color(Part::Display), Rgba([224, 224, 224, 255]));
        assert_eq!(palette.color(Part::Button), Rgba([139, 0, 0, 255]));
    }

    #[test]
    fn test_logo_palette_only_changes_display() {
        let logo = Palette::logo();
        assert_eq!(logo.color(Part::Display), Rgba([240, 240, 240, 255]));
        assert_eq!(
            Palette { display: Palette::LIGHT_GRAY, ..logo },
            Palette::default()
        );
    }

    #[test]
    fn test_required_sizes() {
        assert_eq!(REQUIRED_SIZES, [72, 96, 128, 144, 152, 192, 384, 512]);
    }
}
