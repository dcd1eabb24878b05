// Web front-end layout and DOM wiring constants.

// Element ids expected in index.html
pub const CANVAS_ID: &str = "app-canvas";
pub const RECORD_BUTTON_ID: &str = "record-btn";
pub const RECORD_LABEL_ID: &str = "record-label";
pub const RECORD_PROGRESS_ID: &str = "record-progress";
pub const FULL_PAINT_INDICATOR_ID: &str = "full-paint-indicator";
pub const BRUSH_SIZE_ID: &str = "brush-size";
pub const SCROLL_SPEED_ID: &str = "scroll-speed";
pub const CANVAS_LENGTH_ID: &str = "canvas-length";
pub const CLEAR_BUTTON_ID: &str = "clear-btn";
pub const EXPORT_BUTTON_ID: &str = "export-btn";

// Class toggled on the record button while recording
pub const RECORDING_CLASS: &str = "recording";
pub const HIDDEN_CLASS: &str = "hidden";

// Viewport: a share of the window width, capped, with a fixed 17:8 aspect
pub const VIEWPORT_WIDTH_FRACTION: f64 = 0.9;
pub const VIEWPORT_MAX_WIDTH: f64 = 1200.0;
pub const VIEWPORT_ASPECT_W: u32 = 17;
pub const VIEWPORT_ASPECT_H: u32 = 8;

pub const START_LABEL: &str = "Start Recording (Space)";
pub const STOP_LABEL: &str = "Stop Recording (Space)";
