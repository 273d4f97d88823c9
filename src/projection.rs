//! Perspective projection parameters and the projector stage.
//!
//! The [`Projection`] struct is the single source of truth for all perspective
//! projection parameters (FOV, aspect ratio, near/far planes). It generates
//! the projection matrix and the camera-space [`Frustum`] used for clipping.
//! [`project_to_screen`] maps a clipped camera-space vertex to the viewport.

use crate::clipper::Frustum;
use crate::math::{mat4::Mat4, vec3::Vec3, vec4::Vec4};

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Vertical field of view in radians.
    fov_y: f32,
    /// Aspect ratio (width / height).
    aspect_ratio: f32,
    /// Near clipping plane distance.
    z_near: f32,
    /// Far clipping plane distance.
    z_far: f32,
}

impl Projection {
    /// Creates a new projection with the given parameters.
    ///
    /// # Arguments
    /// * `fov_y` - Vertical field of view in radians
    /// * `aspect_ratio` - Width divided by height
    /// * `z_near` - Near clipping plane distance (must be > 0)
    /// * `z_far` - Far clipping plane distance (must be > z_near)
    pub fn new(fov_y: f32, aspect_ratio: f32, z_near: f32, z_far: f32) -> Self {
        debug_assert!(z_near > 0.0 && z_far > z_near, "invalid clip distances");
        Self {
            fov_y,
            aspect_ratio,
            z_near,
            z_far,
        }
    }

    /// Creates a projection from degrees instead of radians.
    pub fn from_degrees(fov_y_degrees: f32, aspect_ratio: f32, z_near: f32, z_far: f32) -> Self {
        Self::new(fov_y_degrees.to_radians(), aspect_ratio, z_near, z_far)
    }

    /// 60 degree vertical FOV, near 0.1, far 100, for a viewport of the given size.
    pub fn for_viewport(width: u32, height: u32) -> Self {
        Self::from_degrees(60.0, width as f32 / height as f32, 0.1, 100.0)
    }

    /// Returns the vertical field of view in radians.
    pub fn fov_y(&self) -> f32 {
        self.fov_y
    }

    /// Returns the horizontal field of view in radians.
    ///
    /// Computed from the vertical FOV and aspect ratio:
    /// `tan(fov_x / 2) = aspect * tan(fov_y / 2)`.
    pub fn fov_x(&self) -> f32 {
        2.0 * (self.aspect_ratio * (self.fov_y / 2.0).tan()).atan()
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    pub fn z_near(&self) -> f32 {
        self.z_near
    }

    pub fn z_far(&self) -> f32 {
        self.z_far
    }

    /// Updates the aspect ratio (typically called on window resize).
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.aspect_ratio = aspect_ratio;
    }

    /// Generates the perspective projection matrix.
    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective(self.fov_y, self.aspect_ratio, self.z_near, self.z_far)
    }

    /// Builds the camera-space frustum planes for clipping.
    pub fn frustum(&self) -> Frustum {
        Frustum::new(self.fov_x(), self.fov_y, self.z_near, self.z_far)
    }
}

/// Maps a camera-space vertex to screen space.
///
/// Applies the projection matrix and the perspective divide, then scales
/// to the viewport, flips Y (screen Y grows downward) and moves the origin
/// to the viewport centre. The returned `w` is the undivided clip-space `w`,
/// i.e. the camera-space depth.
///
/// The vertex must have passed near-plane clipping, so `w` is never zero.
pub fn project_to_screen(projection_matrix: &Mat4, vertex: Vec3, width: u32, height: u32) -> Vec4 {
    let half_width = width as f32 / 2.0;
    let half_height = height as f32 / 2.0;

    let mut projected = projection_matrix.project(Vec4::from(vertex));

    projected.x *= half_width;
    projected.y *= half_height;

    projected.y = -projected.y;

    projected.x += half_width;
    projected.y += half_height;

    projected
}
