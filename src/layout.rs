use crate::constants::{
    VIEWPORT_ASPECT_H, VIEWPORT_ASPECT_W, VIEWPORT_MAX_WIDTH, VIEWPORT_WIDTH_FRACTION,
};

/// Drawing viewport for a window `inner_width` CSS pixels wide.
#[inline]
pub fn viewport_size(inner_width: f64) -> (u32, u32) {
    let width = (inner_width * VIEWPORT_WIDTH_FRACTION)
        .min(VIEWPORT_MAX_WIDTH)
        .floor()
        .max(1.0) as u32;
    let height = (width * VIEWPORT_ASPECT_H / VIEWPORT_ASPECT_W).max(1);
    (width, height)
}

/// Client coordinates to backing-store pixels of an element at `rect`.
#[inline]
pub fn client_to_canvas(
    client: (f64, f64),
    rect_origin: (f64, f64),
    rect_size: (f64, f64),
    backing: (u32, u32),
) -> (f32, f32) {
    let (w, h) = rect_size;
    if w <= 0.0 || h <= 0.0 {
        return (0.0, 0.0);
    }
    let sx = (client.0 - rect_origin.0) / w * backing.0 as f64;
    let sy = (client.1 - rect_origin.1) / h * backing.1 as f64;
    (sx as f32, sy as f32)
}
