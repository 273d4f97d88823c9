//! Scanline-based triangle rasterization.
//!
//! This module implements triangle rasterization using the classic scanline algorithm
//! with flat-top/flat-bottom triangle decomposition.
//!
//! # Algorithm Overview
//!
//! The scanline algorithm processes triangles one horizontal line at a time:
//!
//! 1. **Sort vertices** by Y coordinate (top to bottom in screen space)
//! 2. **Decompose** the triangle into a flat-bottom and a flat-top half
//! 3. **Rasterize** each scanline by computing left/right edge intersections
//!
//! # Triangle Decomposition
//!
//! ```text
//!        v0                   v0
//!        /\                   /\
//!       /  \                 /  \
//!      /    \       =>      /----\<- split at v1.y
//!     /      \             v1   split
//!    /________\             \    /
//!   v1        v2             \  /
//!                             \/
//!                             v2
//!
//!   General triangle      Flat-bottom (top) + Flat-top (bottom)
//! ```
//!
//! A half whose height is zero is skipped, which also avoids dividing by a
//! zero dy.
//!
//! # Inverse Slope Method
//!
//! For each scanline, we track the X position along the left and right edges
//! using "inverse slopes":
//!
//! ```text
//! inv_slope = dx / dy = (x_end - x_start) / (y_end - y_start)
//! ```
//!
//! # Per-pixel work
//!
//! Each covered pixel gets barycentric weights against the original,
//! unsorted vertices. `1/w` is interpolated with those weights; the pixel's
//! depth is `1 - 1/w` and must beat the depth buffer before the shader runs.
//!
//! # References
//!
//! - Foley, van Dam et al., "Computer Graphics: Principles and Practice"
//! - Abrash, Michael, "Graphics Programming Black Book"

use super::shader::{FlatShader, PixelShader, TextureShader};
use super::{barycentric_weights, signed_area, Triangle};
use crate::math::{vec2::Vec2, vec4::Vec4};
use crate::render::framebuffer::FrameBuffer;

/// Scanline-based triangle rasterizer.
///
/// Vertex x and y are truncated to whole pixels before scanning. Spans are
/// half-open: a span from `x_start` to `x_end` covers `x_start..x_end`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScanlineRasterizer;

/// Integer screen position of a vertex.
#[derive(Debug, Clone, Copy)]
struct ScreenPoint {
    x: i32,
    y: i32,
}

impl ScreenPoint {
    fn from_vertex(v: &Vec4) -> Self {
        Self {
            x: v.x as i32,
            y: v.y as i32,
        }
    }

    fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }
}

/// Everything the per-pixel loop needs, shared by both triangle halves.
struct PixelContext<'s, S: PixelShader> {
    corners: [Vec2; 3],
    reciprocal_w: [f32; 3],
    shader: &'s S,
}

impl<S: PixelShader> PixelContext<'_, S> {
    #[inline]
    fn draw_pixel(&self, x: i32, y: i32, buffer: &mut FrameBuffer) {
        let [a, b, c] = self.corners;
        let lambda = barycentric_weights(a, b, c, Vec2::new(x as f32, y as f32));

        let reciprocal_w = lambda.x * self.reciprocal_w[0]
            + lambda.y * self.reciprocal_w[1]
            + lambda.z * self.reciprocal_w[2];
        let depth = 1.0 - reciprocal_w;

        if buffer.passes_depth_test(x, y, depth) {
            let color = self.shader.shade(lambda, reciprocal_w);
            buffer.set_pixel_with_depth(x, y, depth, color);
        }
    }

    #[inline]
    fn draw_span(&self, y: i32, x_start: f32, x_end: f32, buffer: &mut FrameBuffer) {
        let (mut x_start, mut x_end) = (x_start as i32, x_end as i32);
        if x_end < x_start {
            std::mem::swap(&mut x_start, &mut x_end);
        }
        for x in x_start..x_end {
            self.draw_pixel(x, y, buffer);
        }
    }
}

impl ScanlineRasterizer {
    /// Creates a new scanline rasterizer instance.
    pub fn new() -> Self {
        Self
    }

    /// Fills a triangle with its flat colour, depth-tested.
    pub fn fill_triangle(&self, triangle: &Triangle, buffer: &mut FrameBuffer) {
        let shader = FlatShader::new(triangle.color);
        Self::rasterize(&triangle.points, &shader, buffer);
    }

    /// Fills a triangle with perspective-correct texture samples, depth-tested.
    ///
    /// Triangles without a texture are filled with their flat colour instead.
    pub fn texture_triangle(&self, triangle: &Triangle, buffer: &mut FrameBuffer) {
        match triangle.texture.as_deref() {
            Some(texture) => {
                let shader = TextureShader::new(texture, triangle.texcoords, &triangle.points);
                Self::rasterize(&triangle.points, &shader, buffer);
            }
            None => self.fill_triangle(triangle, buffer),
        }
    }

    /// Sorts three vertices by Y coordinate (ascending: top to bottom in screen space).
    ///
    /// Uses a simple 3-element bubble sort which is optimal for this small size.
    /// After sorting: `v0.y <= v1.y <= v2.y`
    fn sort_vertices(v0: &mut ScreenPoint, v1: &mut ScreenPoint, v2: &mut ScreenPoint) {
        if v1.y < v0.y {
            std::mem::swap(v0, v1);
        }
        if v2.y < v1.y {
            std::mem::swap(v1, v2);
        }
        if v1.y < v0.y {
            std::mem::swap(v0, v1);
        }
    }

    fn rasterize<S: PixelShader>(points: &[Vec4; 3], shader: &S, buffer: &mut FrameBuffer) {
        let original = points.map(|p| ScreenPoint::from_vertex(&p));
        let corners = original.map(ScreenPoint::to_vec2);

        // Zero-area triangles have no interior and no valid barycentrics.
        if signed_area(corners[0], corners[1], corners[2]) == 0.0 {
            return;
        }

        let ctx = PixelContext {
            corners,
            reciprocal_w: points.map(|p| 1.0 / p.w),
            shader,
        };

        let [mut v0, mut v1, mut v2] = original;
        Self::sort_vertices(&mut v0, &mut v1, &mut v2);

        Self::fill_flat_bottom(v0, v1, v2, &ctx, buffer);
        Self::fill_flat_top(v0, v1, v2, &ctx, buffer);
    }

    /// Scans the upper half, from the top vertex down to the middle vertex's row.
    ///
    /// ```text
    ///        v0 (top)
    ///        /\
    ///       /  \
    ///      /____\ <- v1.y
    /// ```
    fn fill_flat_bottom<S: PixelShader>(
        v0: ScreenPoint,
        v1: ScreenPoint,
        v2: ScreenPoint,
        ctx: &PixelContext<'_, S>,
        buffer: &mut FrameBuffer,
    ) {
        if v1.y == v0.y {
            return;
        }

        let inv_slope_1 = (v1.x - v0.x) as f32 / (v1.y - v0.y) as f32; // Edge v0 -> v1
        let inv_slope_2 = (v2.x - v0.x) as f32 / (v2.y - v0.y) as f32; // Edge v0 -> v2

        for y in v0.y..=v1.y {
            let x_start = v1.x as f32 + (y - v1.y) as f32 * inv_slope_1;
            let x_end = v0.x as f32 + (y - v0.y) as f32 * inv_slope_2;
            ctx.draw_span(y, x_start, x_end, buffer);
        }
    }

    /// Scans the lower half, from the middle vertex's row down to the bottom vertex.
    ///
    /// ```text
    ///   v1.y -> \‾‾‾‾/
    ///            \  /
    ///             \/
    ///             v2 (bottom)
    /// ```
    fn fill_flat_top<S: PixelShader>(
        v0: ScreenPoint,
        v1: ScreenPoint,
        v2: ScreenPoint,
        ctx: &PixelContext<'_, S>,
        buffer: &mut FrameBuffer,
    ) {
        if v2.y == v1.y {
            return;
        }

        let inv_slope_1 = (v2.x - v1.x) as f32 / (v2.y - v1.y) as f32; // Edge v1 -> v2
        let inv_slope_2 = (v2.x - v0.x) as f32 / (v2.y - v0.y) as f32; // Edge v0 -> v2

        for y in v1.y..=v2.y {
            let x_start = v1.x as f32 + (y - v1.y) as f32 * inv_slope_1;
            let x_end = v0.x as f32 + (y - v0.y) as f32 * inv_slope_2;
            ctx.draw_span(y, x_start, x_end, buffer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec2::Vec2;
    use crate::texture::Texture;
    use std::rc::Rc;

    const RED: u32 = 0xFFFF_0000;
    const BLUE: u32 = 0xFF00_00FF;

    struct Target {
        color: Vec<u32>,
        depth: Vec<f32>,
        width: u32,
        height: u32,
    }

    impl Target {
        fn new(width: u32, height: u32) -> Self {
            let size = (width * height) as usize;
            Self {
                color: vec![0; size],
                depth: vec![1.0; size],
                width,
                height,
            }
        }

        fn framebuffer(&mut self) -> FrameBuffer<'_> {
            FrameBuffer::new(&mut self.color, &mut self.depth, self.width, self.height)
        }

        fn pixel(&self, x: u32, y: u32) -> u32 {
            self.color[(y * self.width + x) as usize]
        }

        fn covered(&self) -> usize {
            self.color.iter().filter(|&&c| c != 0).count()
        }
    }

    fn triangle(xy: [(f32, f32); 3], w: f32, color: u32) -> Triangle {
        Triangle::new(
            xy.map(|(x, y)| Vec4::new(x, y, 0.5, w)),
            [Vec2::ZERO; 3],
            color,
            None,
        )
    }

    #[test]
    fn fills_interior_of_general_triangle() {
        let mut target = Target::new(32, 32);
        let tri = triangle([(4.0, 2.0), (28.0, 12.0), (8.0, 26.0)], 5.0, RED);
        ScanlineRasterizer::new().fill_triangle(&tri, &mut target.framebuffer());

        assert_eq!(target.pixel(12, 12), RED);
        assert_eq!(target.pixel(1, 1), 0);
        assert_eq!(target.pixel(30, 30), 0);
        assert!(target.covered() > 100);
    }

    #[test]
    fn writes_depth_from_reciprocal_w() {
        let mut target = Target::new(16, 16);
        let tri = triangle([(0.0, 0.0), (15.0, 0.0), (0.0, 15.0)], 4.0, RED);
        ScanlineRasterizer::new().fill_triangle(&tri, &mut target.framebuffer());

        let depth = target.depth[(3 * 16 + 3) as usize];
        approx::assert_relative_eq!(depth, 0.75, epsilon = 1e-5);
    }

    #[test]
    fn zero_height_triangle_draws_nothing() {
        let mut target = Target::new(16, 16);
        let tri = triangle([(1.0, 5.0), (8.0, 5.0), (14.0, 5.0)], 2.0, RED);
        ScanlineRasterizer::new().fill_triangle(&tri, &mut target.framebuffer());
        assert_eq!(target.covered(), 0);
    }

    #[test]
    fn flat_top_triangle_is_filled() {
        let mut target = Target::new(20, 20);
        let tri = triangle([(2.0, 2.0), (18.0, 2.0), (10.0, 18.0)], 3.0, RED);
        ScanlineRasterizer::new().fill_triangle(&tri, &mut target.framebuffer());
        assert_eq!(target.pixel(10, 8), RED);
    }

    #[test]
    fn pixels_outside_viewport_are_dropped() {
        let mut target = Target::new(8, 8);
        let tri = triangle([(-20.0, -20.0), (30.0, -5.0), (-5.0, 30.0)], 2.0, RED);
        ScanlineRasterizer::new().fill_triangle(&tri, &mut target.framebuffer());
        assert_eq!(target.pixel(0, 0), RED);
    }

    #[test]
    fn closer_triangle_wins_regardless_of_draw_order() {
        let near = triangle([(0.0, 0.0), (30.0, 2.0), (4.0, 30.0)], 2.0, RED);
        let far = triangle([(2.0, 1.0), (31.0, 6.0), (1.0, 28.0)], 8.0, BLUE);
        let rasterizer = ScanlineRasterizer::new();

        let mut near_first = Target::new(32, 32);
        rasterizer.fill_triangle(&near, &mut near_first.framebuffer());
        rasterizer.fill_triangle(&far, &mut near_first.framebuffer());

        let mut far_first = Target::new(32, 32);
        rasterizer.fill_triangle(&far, &mut far_first.framebuffer());
        rasterizer.fill_triangle(&near, &mut far_first.framebuffer());

        assert_eq!(near_first.pixel(8, 8), RED);
        assert_eq!(near_first.color, far_first.color);
    }

    #[test]
    fn untextured_triangle_falls_back_to_flat_color() {
        let mut target = Target::new(16, 16);
        let tri = triangle([(0.0, 0.0), (15.0, 0.0), (0.0, 15.0)], 2.0, BLUE);
        ScanlineRasterizer::new().texture_triangle(&tri, &mut target.framebuffer());
        assert_eq!(target.pixel(3, 3), BLUE);
    }

    #[test]
    fn textured_triangle_samples_texture() {
        let texture = Rc::new(Texture::from_pixels(vec![RED; 4], 2, 2));
        let mut tri = triangle([(0.0, 0.0), (15.0, 0.0), (0.0, 15.0)], 2.0, BLUE);
        tri.texcoords = [Vec2::new(0.0, 1.0), Vec2::new(1.0, 1.0), Vec2::new(0.0, 0.0)];
        tri.texture = Some(texture);

        let mut target = Target::new(16, 16);
        ScanlineRasterizer::new().texture_triangle(&tri, &mut target.framebuffer());
        assert_eq!(target.pixel(3, 3), RED);
        assert!(!target.color.contains(&BLUE));
    }
}
