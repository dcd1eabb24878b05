//! Brush stamping into the virtual canvas.
//!
//! Every write is a hard-edged foreground rectangle. Point and segment stamps
//! are drawn at their already-wrapped virtual coordinate and simply clip at
//! the buffer edges; seamless looping comes from how the compositor reads the
//! buffer back, not from splitting stamps.

use crate::buffer::{PixelRect, VirtualCanvas};
use crate::constants::{BAND_HALF_THICKNESS, BRUSH_ASPECT_RATIO};
use crate::mapper::CoordinateMapper;
use glam::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BrushSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl BrushSize {
    pub const ALL: [BrushSize; 3] = [BrushSize::Small, BrushSize::Medium, BrushSize::Large];

    /// Footprint width in pixels.
    #[inline]
    pub const fn width(self) -> u32 {
        match self {
            BrushSize::Small => 10,
            BrushSize::Medium => 205,
            BrushSize::Large => 400,
        }
    }

    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            BrushSize::Small => "small",
            BrushSize::Medium => "medium",
            BrushSize::Large => "large",
        }
    }
}

/// A sized brush bound to one canvas length.
#[derive(Clone, Copy, Debug)]
pub struct Brush {
    size: BrushSize,
    mapper: CoordinateMapper,
}

impl Brush {
    pub fn new(size: BrushSize, mapper: CoordinateMapper) -> Self {
        Self { size, mapper }
    }

    #[inline]
    pub fn size(&self) -> BrushSize {
        self.size
    }

    /// `(width, height)` with the fixed 8:1 aspect.
    #[inline]
    pub fn footprint(&self) -> Vec2 {
        let w = self.size.width() as f32;
        Vec2::new(w, w / BRUSH_ASPECT_RATIO)
    }

    pub fn footprint_rect(&self, center: Vec2) -> PixelRect {
        let half = self.footprint() * 0.5;
        PixelRect::covering(
            center.x - half.x,
            center.y - half.y,
            center.x + half.x,
            center.y + half.y,
        )
    }

    pub fn stamp_point(&self, canvas: &mut VirtualCanvas, center: Vec2) {
        canvas.paint_rect(self.footprint_rect(center));
    }

    /// Number of intervals used to resample a segment of `distance` pixels.
    ///
    /// Spacing is at most half the footprint height (and never below one pixel)
    /// so consecutive stamps overlap.
    #[inline]
    pub fn segment_steps(&self, distance: f32) -> u32 {
        let spacing = (self.footprint().y * 0.5).max(1.0);
        ((distance / spacing).ceil() as u32).max(1)
    }

    /// Stamp along the straight line `from -> to` in virtual space.
    ///
    /// The line takes the shorter way around the loop seam, and each sample is
    /// wrapped back into `[0, L)` before stamping. Returns the number of stamps.
    pub fn stamp_segment(&self, canvas: &mut VirtualCanvas, from: Vec2, to: Vec2) -> u32 {
        let delta = Vec2::new(to.x - from.x, self.mapper.loop_delta(from.y, to.y));
        let steps = self.segment_steps(delta.length());
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let p = from + delta * t;
            self.stamp_point(canvas, Vec2::new(p.x, self.mapper.wrap_y(p.y)));
        }
        steps + 1
    }
}

/// Full-width band covering `[min(y0, y1) - 2, max(y0, y1) + 2)` in virtual rows.
///
/// Like segments, the band spans the shorter way around the seam; rows that
/// fall outside `[0, L)` are wrapped individually.
pub fn stamp_band(canvas: &mut VirtualCanvas, mapper: &CoordinateMapper, y_start: f32, y_end: f32) {
    let y_end = y_start + mapper.loop_delta(y_start, y_end);
    let lo = y_start.min(y_end) - BAND_HALF_THICKNESS;
    let hi = y_start.max(y_end) + BAND_HALF_THICKNESS;
    let rows = PixelRect::covering(0.0, lo, 0.0, hi);
    let len = mapper.length() as i32;
    for row in rows.y0..rows.y1.min(rows.y0 + len) {
        canvas.paint_row(row.rem_euclid(len) as u32);
    }
}
