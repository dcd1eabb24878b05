use glam::Vec2;

/// Maps screen-space points onto the looping virtual canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CoordinateMapper {
    length: u32,
}

impl CoordinateMapper {
    pub fn new(length: u32) -> Self {
        debug_assert!(length > 0, "canvas length must be positive");
        Self {
            length: length.max(1),
        }
    }

    #[inline]
    pub fn length(&self) -> u32 {
        self.length
    }

    /// True modulo into `[0, L)`; never negative, never `L`.
    #[inline]
    pub fn wrap_y(&self, y: f32) -> f32 {
        let len = self.length as f32;
        let wrapped = y.rem_euclid(len);
        // rem_euclid can round up to exactly `len` for tiny negative inputs
        if wrapped >= len {
            0.0
        } else {
            wrapped
        }
    }

    /// `(x, (y + offset) mod L)`.
    #[inline]
    pub fn to_virtual(&self, screen: Vec2, offset: u32) -> Vec2 {
        Vec2::new(screen.x, self.wrap_y(screen.y + offset as f32))
    }

    /// Signed shortest distance from `from_y` to `to_y` around the loop seam.
    #[inline]
    pub fn loop_delta(&self, from_y: f32, to_y: f32) -> f32 {
        let len = self.length as f32;
        let mut dy = to_y - from_y;
        if dy > len * 0.5 {
            dy -= len;
        } else if dy < -len * 0.5 {
            dy += len;
        }
        dy
    }
}
