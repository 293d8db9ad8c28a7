//! # SVG Icon
//!
//! Rasterizes an SVG document with `resvg`, scaling its view box to the
//! requested edge length. Parse failures surface as
//! [`IconError::Dependency`].

use std::path::Path;

use image::{Rgba, RgbaImage};
use resvg::{tiny_skia, usvg};

use super::{IconRenderer, IconSpec};
use crate::error::IconError;

/// Calculator glyph shipped with the crate, drawn at 512×512.
pub const BUILTIN_SVG: &str = include_str!("../../assets/icon.svg");

/// Renders icons from SVG source bytes.
///
/// The document is validated once on construction and re-parsed per render,
/// so each render owns its tree.
#[derive(Debug, Clone)]
pub struct SvgIcon {
    data: Vec<u8>,
}

impl SvgIcon {
    /// Validate and wrap SVG source bytes.
    pub fn from_data(data: impl Into<Vec<u8>>) -> Result<Self, IconError> {
        let data = data.into();
        parse(&data)?;
        Ok(Self { data })
    }

    /// Read an SVG file from disk.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, IconError> {
        let data = std::fs::read(path.as_ref())?;
        Self::from_data(data)
    }

    /// The embedded calculator SVG.
    pub fn builtin() -> Result<Self, IconError> {
        Self::from_data(BUILTIN_SVG.as_bytes())
    }
}

fn parse(data: &[u8]) -> Result<usvg::Tree, IconError> {
    usvg::Tree::from_data(data, &usvg::Options::default())
        .map_err(|e| IconError::Dependency(format!("Failed to parse SVG: {}", e)))
}

impl IconRenderer for SvgIcon {
    fn name(&self) -> &'static str {
        "svg"
    }

    fn render_spec(&self, spec: IconSpec) -> Result<RgbaImage, IconError> {
        let edge = spec.edge();
        let tree = parse(&self.data)?;

        let mut pixmap = tiny_skia::Pixmap::new(edge, edge).ok_or_else(|| {
            IconError::Dependency(format!("Failed to allocate {}x{} pixmap", edge, edge))
        })?;

        let size = tree.size();
        let transform = tiny_skia::Transform::from_scale(
            edge as f32 / size.width(),
            edge as f32 / size.height(),
        );
        resvg::render(&tree, transform, &mut pixmap.as_mut());

        // tiny-skia stores premultiplied alpha; PNG wants straight alpha.
        let mut image = RgbaImage::new(edge, edge);
        for (dst, src) in image.pixels_mut().zip(pixmap.pixels()) {
            let c = src.demultiply();
            *dst = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
        }

        Ok(image)
    }
}
