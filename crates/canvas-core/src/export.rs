//! Export assembly: a standalone copy of the whole virtual canvas, encoded as PNG.

use crate::buffer::{Pixel, PixelBuffer, VirtualCanvas, BACKGROUND};
use crate::constants::EXPORT_FILE_PREFIX;
use crate::error::ExportError;
use image::{ImageFormat, RgbaImage};
use std::io::Cursor;

/// Full-length still of the composition, `width x L`, independent of the live canvas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportImage {
    buffer: PixelBuffer,
}

impl ExportImage {
    /// Background-filled output with every canvas row copied verbatim.
    pub fn from_canvas(canvas: &VirtualCanvas) -> Self {
        let mut buffer = PixelBuffer::new(canvas.width(), canvas.length(), BACKGROUND);
        buffer.copy_rows_from(canvas.buffer(), 0, 0, canvas.length());
        Self { buffer }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    #[inline]
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn encode_png(&self) -> Result<Vec<u8>, ExportError> {
        let (width, height) = (self.width(), self.height());
        let bytes: Vec<u8> = self
            .buffer
            .pixels()
            .iter()
            .flat_map(|p| p.to_rgba())
            .collect();
        let image = RgbaImage::from_raw(width, height, bytes)
            .ok_or(ExportError::SizeMismatch { width, height })?;
        let mut out = Cursor::new(Vec::new());
        image.write_to(&mut out, ImageFormat::Png)?;
        Ok(out.into_inner())
    }

    pub fn decode_png(bytes: &[u8]) -> Result<Self, ExportError> {
        let image = image::load_from_memory_with_format(bytes, ImageFormat::Png)?.into_rgba8();
        let (width, height) = image.dimensions();
        let pixels = image.pixels().map(|p| Pixel::from_rgba(p.0)).collect();
        let buffer = PixelBuffer::from_pixels(width, height, pixels)
            .ok_or(ExportError::SizeMismatch { width, height })?;
        Ok(Self { buffer })
    }
}

/// `scroll-canvas-<unix millis>.png`
pub fn export_file_name(unix_millis: u64) -> String {
    format!("{EXPORT_FILE_PREFIX}-{unix_millis}.png")
}
