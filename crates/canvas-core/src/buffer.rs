//! Pixel storage shared by the virtual canvas and the display surface.
//!
//! Pixels are packed RGBA in little-endian order, so a `&[Pixel]` reinterpreted
//! as bytes is exactly the `R, G, B, A` layout expected by Canvas2D `ImageData`,
//! by an `Rgba8` GPU texture and by the PNG encoder.

use crate::constants::{BACKGROUND_RGBA, FOREGROUND_RGBA};

#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Pixel(pub u32);

impl Pixel {
    #[inline]
    pub const fn from_rgba(rgba: [u8; 4]) -> Self {
        Self(u32::from_le_bytes(rgba))
    }

    #[inline]
    pub const fn to_rgba(self) -> [u8; 4] {
        self.0.to_le_bytes()
    }
}

pub const BACKGROUND: Pixel = Pixel::from_rgba(BACKGROUND_RGBA);
pub const FOREGROUND: Pixel = Pixel::from_rgba(FOREGROUND_RGBA);

/// Half-open integer rectangle `[x0, x1) x [y0, y1)`; may extend past a buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelRect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl PixelRect {
    /// Pixels whose centers fall inside the continuous rectangle
    /// `[left, right) x [top, bottom)`. Hard edged, no coverage weighting.
    pub fn covering(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        let edge = |v: f32| (v - 0.5).ceil() as i32;
        Self {
            x0: edge(left),
            y0: edge(top),
            x1: edge(right),
            y1: edge(bottom),
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        (self.x1 - self.x0).max(0)
    }

    #[inline]
    pub fn height(&self) -> i32 {
        (self.y1 - self.y0).max(0)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x0 && x < self.x1 && y >= self.y0 && y < self.y1
    }
}

/// A plain row-major RGBA pixel buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

/// The display-side buffer the compositor draws the visible window into.
pub type Surface = PixelBuffer;

impl PixelBuffer {
    pub fn new(width: u32, height: u32, fill: Pixel) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; width as usize * height as usize],
        }
    }

    /// Wrap existing pixels; `None` when the length does not match `width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Pixel>) -> Option<Self> {
        (pixels.len() == width as usize * height as usize).then_some(Self {
            width,
            height,
            pixels,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y as usize * self.width as usize + x as usize])
    }

    #[inline]
    pub fn row(&self, y: u32) -> &[Pixel] {
        let w = self.width as usize;
        let start = y as usize * w;
        &self.pixels[start..start + w]
    }

    pub fn fill(&mut self, pixel: Pixel) {
        self.pixels.fill(pixel);
    }

    /// Reallocate to a new size, discarding content.
    pub fn reset(&mut self, width: u32, height: u32, fill: Pixel) {
        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels.resize(width as usize * height as usize, fill);
    }

    /// Fill the part of `rect` that lies inside the buffer; the rest is dropped.
    pub fn fill_rect(&mut self, rect: PixelRect, pixel: Pixel) {
        let x0 = rect.x0.clamp(0, self.width as i32) as usize;
        let x1 = rect.x1.clamp(0, self.width as i32) as usize;
        let y0 = rect.y0.clamp(0, self.height as i32) as usize;
        let y1 = rect.y1.clamp(0, self.height as i32) as usize;
        if x0 >= x1 || y0 >= y1 {
            return;
        }
        let w = self.width as usize;
        for y in y0..y1 {
            self.pixels[y * w + x0..y * w + x1].fill(pixel);
        }
    }

    /// Copy `rows` rows starting at `src_y` in `src` to `dst_y` here.
    ///
    /// Only the columns both buffers have are copied; rows falling outside
    /// either buffer are skipped.
    pub fn copy_rows_from(&mut self, src: &PixelBuffer, src_y: u32, dst_y: u32, rows: u32) {
        let cols = self.width.min(src.width) as usize;
        if cols == 0 {
            return;
        }
        let dw = self.width as usize;
        for r in 0..rows {
            let (sy, dy) = (src_y + r, dst_y + r);
            if sy >= src.height || dy >= self.height {
                break;
            }
            let d = dy as usize * dw;
            self.pixels[d..d + cols].copy_from_slice(&src.row(sy)[..cols]);
        }
    }

    pub fn is_uniform(&self, pixel: Pixel) -> bool {
        self.pixels.iter().all(|p| *p == pixel)
    }
}

/// The persistent full-length drawing. Width is the display width, height is
/// the canvas length `L`. All brush writes land here and nowhere else.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VirtualCanvas {
    buffer: PixelBuffer,
}

impl VirtualCanvas {
    pub fn new(width: u32, length: u32) -> Self {
        Self {
            buffer: PixelBuffer::new(width, length, BACKGROUND),
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    #[inline]
    pub fn length(&self) -> u32 {
        self.buffer.height()
    }

    #[inline]
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Pixel> {
        self.buffer.get(x, y)
    }

    /// Overwrite with the foreground color; last write wins.
    #[inline]
    pub fn paint_rect(&mut self, rect: PixelRect) {
        self.buffer.fill_rect(rect, FOREGROUND);
    }

    pub fn paint_row(&mut self, y: u32) {
        if y >= self.length() {
            return;
        }
        let rect = PixelRect {
            x0: 0,
            y0: y as i32,
            x1: self.width() as i32,
            y1: y as i32 + 1,
        };
        self.buffer.fill_rect(rect, FOREGROUND);
    }

    pub fn clear(&mut self) {
        self.buffer.fill(BACKGROUND);
    }

    pub fn is_blank(&self) -> bool {
        self.buffer.is_uniform(BACKGROUND)
    }
}
