//! A CPU-based software-rendered 3D graphics engine.
//!
//! Meshes go through a fixed pipeline every frame: transform into camera
//! space, back-face culling, clipping against the view frustum, perspective
//! projection, then scanline rasterization with a depth buffer and
//! perspective-correct texturing. Nothing touches the GPU; SDL2 (behind the
//! `window` feature) is only used to put the finished frame on screen.
//!
//! # Quick Start
//!
//! ```ignore
//! use softrast::prelude::*;
//!
//! let mut engine = Engine::new(800, 600);
//! let cube = engine.load_cube_mesh();
//! engine.mesh_mut(cube).unwrap().transform_mut().set_translation_xyz(0.0, 0.0, 5.0);
//! engine.update();
//! engine.render();
//! let pixels: &[u8] = engine.frame_buffer();
//! ```

// Public API - exposed to library consumers
pub mod camera;
pub mod clipper;
pub mod colors;
pub mod engine;
pub mod light;
pub mod math;
pub mod mesh;
pub mod pipeline;
pub mod projection;
pub mod texture;
pub mod transform;
#[cfg(feature = "window")]
pub mod window;

// Internal modules - used within the crate only
pub(crate) mod render;

// Re-export commonly needed types at crate root for convenience
pub use camera::Camera;
pub use engine::{Engine, RenderMode};
pub use light::DirectionalLight;
pub use mesh::{Face, LoadError, Mesh};
pub use pipeline::{CullMode, PipelineStats, RenderSettings};
pub use projection::Projection;
pub use render::Triangle;
pub use texture::Texture;
pub use transform::Transform;

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use softrast::prelude::*;
/// ```
pub mod prelude {
    // Camera
    pub use crate::camera::Camera;

    // Engine
    pub use crate::engine::{Engine, RenderMode};
    pub use crate::pipeline::{CullMode, PipelineStats, RenderSettings};

    // Scene
    pub use crate::light::DirectionalLight;
    pub use crate::mesh::{Face, LoadError, Mesh};
    pub use crate::texture::Texture;

    // Projection
    pub use crate::projection::Projection;

    // Transform
    pub use crate::transform::Transform;

    // Math
    pub use crate::math::mat4::Mat4;
    pub use crate::math::vec2::Vec2;
    pub use crate::math::vec3::Vec3;
    pub use crate::math::vec4::Vec4;

    // Window & Input
    #[cfg(feature = "window")]
    pub use crate::window::{
        FrameLimiter, Key, Window, WindowEvent, WINDOW_HEIGHT, WINDOW_WIDTH,
    };
}

/// Module exposing internals for benchmarking. Not part of the stable API.
pub mod bench {
    pub use crate::render::{barycentric_weights, FrameBuffer, ScanlineRasterizer, Triangle};
}
