use std::time::Duration;

// Shared engine tuning constants used by both web and native frontends.

// Canvas length (virtual buffer height, in pixels)
pub const MIN_CANVAS_LENGTH: u32 = 2000;
pub const MAX_CANVAS_LENGTH: u32 = 10000;
pub const DEFAULT_CANVAS_LENGTH: u32 = 5000;
pub const CANVAS_LENGTH_STEP: i32 = 100; // keyboard nudge while idle

// Brush footprint
pub const BRUSH_ASPECT_RATIO: f32 = 8.0; // width : height
pub const BAND_HALF_THICKNESS: f32 = 2.0; // rows painted above and below each band sample

// Pointer-move commits are admitted at most this often (~120 per second)
pub const POINTER_THROTTLE: Duration = Duration::from_millis(8);

// Colors, RGBA
pub const BACKGROUND_RGBA: [u8; 4] = [0xFF, 0xFF, 0xFF, 0xFF]; // white paper
pub const FOREGROUND_RGBA: [u8; 4] = [0x00, 0x00, 0x00, 0xFF]; // black ink
pub const CURSOR_PREVIEW_RGBA: [u8; 4] = [0x66, 0x66, 0x66, 0xFF];

// Export naming
pub const EXPORT_FILE_PREFIX: &str = "scroll-canvas";
