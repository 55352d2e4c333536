//! Software rasterization backend.

pub(crate) mod framebuffer;
pub(crate) mod rasterizer;
mod renderer;

pub use framebuffer::FrameBuffer;
pub use rasterizer::{fill_triangle, ScreenTriangle};
pub use renderer::SoftwareRenderer;
