use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown brush size {0:?} (expected small, medium, large, 10, 205 or 400)")]
    BrushSize(String),
    #[error("unknown scroll speed {0:?} (expected slow, medium, fast, 1, 2 or 4)")]
    ScrollSpeed(String),
    #[error("canvas length {0:?} is not a number")]
    CanvasLength(String),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("pixel data does not match a {width}x{height} image")]
    SizeMismatch { width: u32, height: u32 },
    #[error("png codec error: {0}")]
    Png(#[from] image::ImageError),
}
