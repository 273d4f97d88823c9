//! Pixel shaders for triangle rasterization.
//!
//! This module provides a trait-based abstraction for per-pixel shading computations,
//! similar to how GPUs separate the fixed-function rasterizer from programmable
//! fragment/pixel shaders.
//!
//! # Architecture
//!
//! The rasterizer handles:
//! - Span traversal
//! - Barycentric coordinate calculation
//! - Interpolating 1/w and the depth test
//!
//! The shader handles:
//! - Attribute interpolation (UVs)
//! - Texture sampling
//! - Final color computation

use crate::math::{vec2::Vec2, vec3::Vec3, vec4::Vec4};
use crate::texture::Texture;

/// Trait for per-pixel shading computations.
///
/// The rasterizer calls `shade()` for each pixel that passes the depth test,
/// providing the barycentric coordinates and the interpolated `1/w`.
///
/// # Barycentric Coordinates
///
/// The `lambda` parameter contains three weights (λ₀, λ₁, λ₂) in x, y, z that:
/// - Sum to 1.0 for any point inside the triangle
/// - Represent the "influence" of each vertex on the current pixel
pub trait PixelShader {
    /// Compute the color for a pixel.
    ///
    /// # Arguments
    /// * `lambda` - Screen-space barycentric coordinates
    /// * `reciprocal_w` - `λ₀/w₀ + λ₁/w₁ + λ₂/w₂` at this pixel
    fn shade(&self, lambda: Vec3, reciprocal_w: f32) -> u32;
}

/// Flat shader - returns a constant color for all pixels.
///
/// Used for flat shading where the entire triangle has a single color
/// computed from the face normal.
pub struct FlatShader {
    color: u32,
}

impl FlatShader {
    pub fn new(color: u32) -> Self {
        Self { color }
    }
}

impl PixelShader for FlatShader {
    #[inline]
    fn shade(&self, _lambda: Vec3, _reciprocal_w: f32) -> u32 {
        self.color
    }
}

/// Texture shader - samples the texture at perspective-correct UVs.
///
/// UVs are divided by their vertex's `w` up front; per pixel the weighted
/// sum is divided by the interpolated `1/w` to undo the perspective
/// distortion of screen-space interpolation. V is flipped (`1 - v`) before
/// sampling because OBJ UVs start at the bottom while texture rows start
/// at the top.
pub struct TextureShader<'a> {
    texture: &'a Texture,
    uvs_over_w: [Vec2; 3],
}

impl<'a> TextureShader<'a> {
    pub fn new(texture: &'a Texture, uvs: [Vec2; 3], points: &[Vec4; 3]) -> Self {
        Self {
            texture,
            uvs_over_w: [
                uvs[0] * (1.0 / points[0].w),
                uvs[1] * (1.0 / points[1].w),
                uvs[2] * (1.0 / points[2].w),
            ],
        }
    }

    /// Perspective-correct UV at the given weights.
    #[inline]
    fn interpolate_uv(&self, lambda: Vec3, reciprocal_w: f32) -> Vec2 {
        let uv = self.uvs_over_w[0] * lambda.x
            + self.uvs_over_w[1] * lambda.y
            + self.uvs_over_w[2] * lambda.z;
        uv * (1.0 / reciprocal_w)
    }
}

impl PixelShader for TextureShader<'_> {
    #[inline]
    fn shade(&self, lambda: Vec3, reciprocal_w: f32) -> u32 {
        let uv = self.interpolate_uv(lambda, reciprocal_w);
        self.texture.sample(uv.x, 1.0 - uv.y)
    }
}
