//! User-facing configuration consumed by the session.
//!
//! Values arrive as settings-panel tokens (`"medium"`, `"205"`, a typed canvas
//! length) and are parsed here; none of them may change while recording.

use crate::brush::BrushSize;
use crate::constants::{DEFAULT_CANVAS_LENGTH, MAX_CANVAS_LENGTH, MIN_CANVAS_LENGTH};
use crate::error::ConfigError;
use crate::scroll::ScrollSpeed;
use std::fmt;
use std::str::FromStr;

/// Height of the virtual canvas, always within `[2000, 10000]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanvasLength(u32);

impl CanvasLength {
    pub const MIN: CanvasLength = CanvasLength(MIN_CANVAS_LENGTH);
    pub const MAX: CanvasLength = CanvasLength(MAX_CANVAS_LENGTH);

    /// `None` when out of range.
    pub fn new(value: u32) -> Option<Self> {
        (MIN_CANVAS_LENGTH..=MAX_CANVAS_LENGTH)
            .contains(&value)
            .then_some(Self(value))
    }

    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(MIN_CANVAS_LENGTH as i64, MAX_CANVAS_LENGTH as i64) as u32)
    }

    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }

    /// While typing: only an in-range integer is taken, anything else is ignored.
    pub fn accept_live(text: &str) -> Option<Self> {
        let value = parse_leading_int(text)?;
        u32::try_from(value).ok().and_then(Self::new)
    }

    /// On commit (blur): non-numeric or too small becomes the minimum, too
    /// large becomes the maximum.
    pub fn clamp_input(text: &str) -> Self {
        parse_leading_int(text).map_or(Self::MIN, Self::clamped)
    }

    pub fn nudged(self, delta: i32) -> Self {
        Self::clamped(self.0 as i64 + delta as i64)
    }
}

impl Default for CanvasLength {
    fn default() -> Self {
        Self(DEFAULT_CANVAS_LENGTH)
    }
}

impl fmt::Display for CanvasLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CanvasLength {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_leading_int(s)
            .map(Self::clamped)
            .ok_or_else(|| ConfigError::CanvasLength(s.to_string()))
    }
}

impl FromStr for BrushSize {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase();
        BrushSize::ALL
            .into_iter()
            .find(|b| token == b.name() || token == b.width().to_string())
            .ok_or_else(|| ConfigError::BrushSize(s.to_string()))
    }
}

impl FromStr for ScrollSpeed {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase();
        ScrollSpeed::ALL
            .into_iter()
            .find(|v| token == v.name() || token == v.per_tick().to_string())
            .ok_or_else(|| ConfigError::ScrollSpeed(s.to_string()))
    }
}

/// Integer prefix of `text` (after leading whitespace), e.g. `"4500px"` -> 4500.
fn parse_leading_int(text: &str) -> Option<i64> {
    let t = text.trim_start();
    let (sign, digits) = match t.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, t.strip_prefix('+').unwrap_or(t)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    // saturate absurdly long inputs; they clamp to the max anyway
    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(sign * magnitude)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Settings {
    pub brush_size: BrushSize,
    pub scroll_speed: ScrollSpeed,
    pub canvas_length: CanvasLength,
}
