//! Pixel-level rendering: buffers, 2D primitives and triangle rasterization.

pub mod framebuffer;
pub mod rasterizer;
pub mod renderer;

pub use framebuffer::FrameBuffer;
pub use rasterizer::{barycentric_weights, PixelShader, ScanlineRasterizer, Triangle};
pub use renderer::Renderer;
