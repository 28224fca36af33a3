pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod session;

pub use error::{ClipError, PolygonRole, Result};
pub use operations::clip::{clip, clip_components, Clip, ClipConfig, ClipOutput, WindingPolicy};
pub use session::{Color, InputMode, Renderer, Session};
