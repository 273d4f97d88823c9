//! Low-level rendering primitives.
//!
//! Provides the [`Renderer`] struct which owns the color and depth buffers
//! and implements basic drawing operations like lines, rectangles, and
//! wireframes.

use super::framebuffer::FrameBuffer;
use super::rasterizer::Triangle;
use crate::colors;

/// Side length of the square drawn over each vertex in the vertex render modes.
pub const VERTEX_MARKER_SIZE: i32 = 6;

pub struct Renderer {
    color_buffer: Vec<u32>,
    depth_buffer: Vec<f32>,
    width: u32,
    height: u32,
}

impl Renderer {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        Self {
            color_buffer: vec![colors::BACKGROUND; size],
            depth_buffer: vec![1.0; size], // 1.0 = farthest (1 - 1/w as w -> infinity)
            width,
            height,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        let size = (width * height) as usize;
        self.color_buffer = vec![colors::BACKGROUND; size];
        self.depth_buffer = vec![1.0; size];
        self.width = width;
        self.height = height;
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self, color: u32) {
        self.color_buffer.fill(color);
    }

    /// Clear the depth buffer to prepare for a new frame.
    /// Sets all depths to 1.0 (farthest).
    #[inline]
    pub fn clear_depth(&mut self) {
        self.depth_buffer.fill(1.0);
    }

    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            let index = (y as u32 * self.width + x as u32) as usize;
            self.color_buffer[index] = color;
        }
    }

    /// Draws a single dot every `spacing` pixels along both axes.
    pub fn draw_grid(&mut self, spacing: usize, color: u32) {
        for y in (0..self.height as i32).step_by(spacing) {
            for x in (0..self.width as i32).step_by(spacing) {
                self.set_pixel(x, y, color);
            }
        }
    }

    #[inline]
    pub fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: u32) {
        for dy in 0..height {
            for dx in 0..width {
                self.set_pixel(x + dx, y + dy, color);
            }
        }
    }

    /// Draws a `VERTEX_MARKER_SIZE` square centred on (x, y).
    pub fn draw_vertex_marker(&mut self, x: i32, y: i32, color: u32) {
        let half = VERTEX_MARKER_SIZE / 2;
        self.draw_rect(
            x - half,
            y - half,
            VERTEX_MARKER_SIZE,
            VERTEX_MARKER_SIZE,
            color,
        );
    }

    /// Outlines a screen-space triangle. Edges ignore the depth buffer.
    pub fn draw_triangle_wireframe(&mut self, triangle: &Triangle, color: u32) {
        let [p0, p1, p2] = triangle.points;

        self.draw_line(p0.x as i32, p0.y as i32, p1.x as i32, p1.y as i32, color);
        self.draw_line(p1.x as i32, p1.y as i32, p2.x as i32, p2.y as i32, color);
        self.draw_line(p2.x as i32, p2.y as i32, p0.x as i32, p0.y as i32, color);
    }

    /// Draws a line with the DDA algorithm, both endpoints included.
    ///
    /// Steps one pixel at a time along the longer axis and advances the
    /// other axis by the matching fraction, rounding to the nearest pixel.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
        let dx = x1 - x0;
        let dy = y1 - y0;

        let side_length = dx.abs().max(dy.abs());
        if side_length == 0 {
            self.set_pixel(x0, y0, color);
            return;
        }

        let x_increment = dx as f32 / side_length as f32;
        let y_increment = dy as f32 / side_length as f32;
        let mut current_x = x0 as f32;
        let mut current_y = y0 as f32;

        for _ in 0..=side_length {
            self.set_pixel(current_x.round() as i32, current_y.round() as i32, color);
            current_x += x_increment;
            current_y += y_increment;
        }
    }

    /// The color buffer as raw ARGB8888 bytes for presentation.
    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: u32 has no padding and a stricter alignment than u8, and the
        // returned slice borrows `self`, so it cannot outlive the buffer.
        unsafe {
            std::slice::from_raw_parts(
                self.color_buffer.as_ptr() as *const u8,
                self.color_buffer.len() * 4,
            )
        }
    }

    pub fn color_buffer(&self) -> &[u32] {
        &self.color_buffer
    }

    pub fn depth_buffer(&self) -> &[f32] {
        &self.depth_buffer
    }

    /// Get a mutable FrameBuffer view into the color and depth buffers.
    pub fn as_framebuffer(&mut self) -> FrameBuffer<'_> {
        FrameBuffer::new(
            &mut self.color_buffer,
            &mut self.depth_buffer,
            self.width,
            self.height,
        )
    }
}
