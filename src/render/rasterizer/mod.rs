//! Triangle rasterization.
//!
//! [`ScanlineRasterizer`] scan-converts screen-space [`Triangle`]s into a
//! [`FrameBuffer`](super::framebuffer::FrameBuffer); the per-pixel colour
//! comes from a [`PixelShader`].

mod scanline;
mod shader;

pub use scanline::ScanlineRasterizer;
pub use shader::{FlatShader, PixelShader, TextureShader};

use std::rc::Rc;

use crate::math::{vec2::Vec2, vec3::Vec3, vec4::Vec4};
use crate::texture::Texture;

/// A triangle ready for rasterization in screen space.
///
/// `points` hold screen x/y, the post-divide z and the original clip-space
/// `w` (camera-space depth).
#[derive(Clone, Debug, PartialEq)]
pub struct Triangle {
    pub points: [Vec4; 3],
    pub texcoords: [Vec2; 3],
    pub color: u32, // Lit face colour, used by the flat fill
    pub texture: Option<Rc<Texture>>,
}

impl Triangle {
    pub fn new(
        points: [Vec4; 3],
        texcoords: [Vec2; 3],
        color: u32,
        texture: Option<Rc<Texture>>,
    ) -> Self {
        Self {
            points,
            texcoords,
            color,
            texture,
        }
    }
}

/// Twice the signed area of triangle ABC.
#[inline]
pub fn signed_area(a: Vec2, b: Vec2, c: Vec2) -> f32 {
    (c - a).cross(b - a)
}

/// Barycentric weights (alpha, beta, gamma) of `p` with respect to ABC.
///
/// Each weight is the signed area of the sub-triangle opposite its vertex
/// divided by the area of ABC, so `p = alpha*A + beta*B + gamma*C` and the
/// weights sum to 1. The triangle must not be degenerate.
#[inline]
pub fn barycentric_weights(a: Vec2, b: Vec2, c: Vec2, p: Vec2) -> Vec3 {
    let area = signed_area(a, b, c);

    let alpha = (c - p).cross(b - p) / area;
    let beta = (c - a).cross(p - a) / area;
    let gamma = 1.0 - alpha - beta;

    Vec3::new(alpha, beta, gamma)
}
