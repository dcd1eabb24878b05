//! Viewport compositing: copies the visible window of the virtual canvas onto
//! the display surface.
//!
//! When the window straddles the loop boundary the copy is split in two: the
//! tail `[offset, L)` fills the top of the surface and the head `[0, rest)`
//! fills the remainder below it, so the start of the composition scrolls into
//! view seamlessly after its end.

use crate::buffer::{Pixel, PixelRect, Surface, VirtualCanvas, BACKGROUND};
use crate::constants::CURSOR_PREVIEW_RGBA;
use glam::Vec2;
use smallvec::SmallVec;

const CURSOR_PREVIEW: Pixel = Pixel::from_rgba(CURSOR_PREVIEW_RGBA);

/// One row-range copy from the virtual canvas to the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Blit {
    pub src_y: u32,
    pub dst_y: u32,
    pub rows: u32,
}

pub fn plan_blits(offset: u32, length: u32, viewport_height: u32) -> SmallVec<[Blit; 2]> {
    let mut plan = SmallVec::new();
    if length == 0 || viewport_height == 0 {
        return plan;
    }
    let offset = offset % length;
    let available = length - offset;
    if available >= viewport_height {
        plan.push(Blit {
            src_y: offset,
            dst_y: 0,
            rows: viewport_height,
        });
    } else {
        plan.push(Blit {
            src_y: offset,
            dst_y: 0,
            rows: available,
        });
        plan.push(Blit {
            src_y: 0,
            dst_y: available,
            rows: (viewport_height - available).min(length),
        });
    }
    plan
}

/// Clear `surface` to the background and blit the window starting at `offset`.
///
/// Pure with respect to `(canvas, offset)`: the same inputs always produce the
/// same surface bytes.
pub fn compose(canvas: &VirtualCanvas, offset: u32, surface: &mut Surface) {
    surface.fill(BACKGROUND);
    for blit in plan_blits(offset, canvas.length(), surface.height()) {
        surface.copy_rows_from(canvas.buffer(), blit.src_y, blit.dst_y, blit.rows);
    }
}

/// One-pixel outline of a brush footprint, drawn on the surface only.
pub fn draw_cursor_preview(surface: &mut Surface, center: Vec2, footprint: Vec2) {
    let half = footprint * 0.5;
    let r = PixelRect::covering(
        center.x - half.x,
        center.y - half.y,
        center.x + half.x,
        center.y + half.y,
    );
    if r.is_empty() {
        return;
    }
    let edges = [
        PixelRect { y1: r.y0 + 1, ..r },
        PixelRect { y0: r.y1 - 1, ..r },
        PixelRect { x1: r.x0 + 1, ..r },
        PixelRect { x0: r.x1 - 1, ..r },
    ];
    for edge in edges {
        surface.fill_rect(edge, CURSOR_PREVIEW);
    }
}
