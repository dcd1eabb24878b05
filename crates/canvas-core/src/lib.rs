//! Platform-free engine for the scrolling loop canvas: the virtual canvas
//! buffer, coordinate mapping, brush stamping, the scroll/loop controller,
//! viewport compositing, the recording session and PNG export.

pub mod brush;
pub mod buffer;
pub mod compositor;
pub mod constants;
pub mod error;
pub mod export;
pub mod mapper;
pub mod scroll;
pub mod session;
pub mod settings;

pub use brush::*;
pub use buffer::*;
pub use compositor::*;
pub use constants::*;
pub use error::*;
pub use export::*;
pub use mapper::*;
pub use scroll::*;
pub use session::*;
pub use settings::*;

pub use glam::Vec2;
