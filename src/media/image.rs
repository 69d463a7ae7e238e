// SPDX-License-Identifier: MPL-2.0
//! Image decoding: bitmaps through `image`, SVGs through resvg.

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use resvg::usvg;
use std::path::Path;

/// Upper bound on the longest side of a rasterized SVG.
pub const MAX_SVG_DIMENSION: u32 = 2048;

#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let handle = image::Handle::from_rgba(width, height, pixels);
        Self {
            handle,
            width,
            height,
        }
    }

    /// Width over height, or 1.0 for a degenerate image.
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}

/// Returns true if `bytes` look like SVG markup.
#[must_use]
pub fn is_svg(bytes: &[u8]) -> bool {
    let head = &bytes[..bytes.len().min(512)];
    let text = String::from_utf8_lossy(head);
    let text = text.trim_start_matches('\u{feff}').trim_start();
    text.starts_with("<svg") || (text.starts_with("<?xml") && text.contains("<svg"))
}

/// Rasterizes SVG markup, scaling so the longest side fits [`MAX_SVG_DIMENSION`].
///
/// # Errors
///
/// Returns [`Error::Svg`] if parsing fails or the document has no area.
pub fn rasterize_svg(data: &[u8]) -> Result<ImageData> {
    let tree = usvg::Tree::from_data(data, &usvg::Options::default())
        .map_err(|e| Error::Svg(e.to_string()))?;

    let size = tree.size().to_int_size();
    if size.width() == 0 || size.height() == 0 {
        return Err(Error::Svg("SVG has empty dimensions".into()));
    }

    let longest = size.width().max(size.height());
    let scale = if longest > MAX_SVG_DIMENSION {
        MAX_SVG_DIMENSION as f32 / longest as f32
    } else {
        1.0
    };
    let width = ((size.width() as f32 * scale).round() as u32).max(1);
    let height = ((size.height() as f32 * scale).round() as u32).max(1);

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| Error::Svg("Failed to allocate SVG pixmap".into()))?;

    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    Ok(ImageData::from_rgba(width, height, pixmap.take()))
}

/// Decodes a bitmap (PNG, JPEG, GIF, WebP, BMP) into RGBA.
///
/// # Errors
///
/// Returns [`Error::Image`] if the format is unknown or the data is corrupt.
pub fn decode_bitmap(data: &[u8]) -> Result<ImageData> {
    let img = image_rs::load_from_memory(data)?;
    let (width, height) = img.dimensions();
    Ok(ImageData::from_rgba(width, height, img.to_rgba8().into_vec()))
}

/// Decodes any supported image, sniffing SVG markup first.
pub fn decode(data: &[u8]) -> Result<ImageData> {
    if is_svg(data) {
        rasterize_svg(data)
    } else {
        decode_bitmap(data)
    }
}

/// Reads and decodes an image file.
pub fn load_file(path: &Path) -> Result<ImageData> {
    let bytes = std::fs::read(path)?;
    decode(&bytes)
}
