//! First-person camera.
//!
//! # Coordinate System
//!
//! - X: positive right
//! - Y: positive up
//! - Z: positive forward (into screen)
//!
//! # Orientation
//!
//! Orientation is stored as yaw/pitch angles. The look direction is derived
//! from them whenever the look-at target is requested:
//!
//! - **Yaw**: Rotation around Y-axis (positive = look right)
//! - **Pitch**: Rotation around X-axis (positive = look down)

use crate::math::mat4::Mat4;
use crate::math::vec3::Vec3;
use crate::math::vec4::Vec4;

/// First-person camera with position, yaw/pitch orientation and a forward
/// velocity used for stepping along the look direction.
///
/// Created once by the frame driver, mutated by the input layer every frame
/// and read by the transform stage to build the view matrix.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    direction: Vec3,
    forward_velocity: Vec3,
    yaw: f32,   // Rotation around Y-axis (radians)
    pitch: f32, // Rotation around X-axis (radians)
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

impl Camera {
    /// Pitch is kept within this range so the world-up vector is never
    /// parallel to the look direction.
    pub const PITCH_LIMIT: f32 = 89.0 * std::f32::consts::PI / 180.0;

    /// Creates a camera at the given position, looking along +Z.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            direction: Vec3::FORWARD,
            forward_velocity: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    // =========================================================================
    // Orientation
    // =========================================================================

    /// Rotates the camera horizontally (around Y-axis).
    pub fn rotate_yaw(&mut self, delta: f32) {
        self.yaw = (self.yaw + delta).rem_euclid(std::f32::consts::TAU);
        self.direction = self.derive_direction();
    }

    /// Rotates the camera vertically (around X-axis), clamped to [`Self::PITCH_LIMIT`].
    pub fn rotate_pitch(&mut self, delta: f32) {
        self.pitch = (self.pitch + delta).clamp(-Self::PITCH_LIMIT, Self::PITCH_LIMIT);
        self.direction = self.derive_direction();
    }

    /// The canonical +Z vector rotated by pitch, then by yaw.
    fn derive_direction(&self) -> Vec3 {
        let rotation = Mat4::rotation_y(self.yaw) * Mat4::rotation_x(self.pitch);
        (rotation * Vec4::from(Vec3::FORWARD)).to_vec3()
    }

    // =========================================================================
    // Movement
    // =========================================================================

    /// Sets the forward velocity to `distance` along the look direction and
    /// steps the camera by it.
    pub fn move_forward(&mut self, distance: f32) {
        self.forward_velocity = self.direction * distance;
        self.position = self.position + self.forward_velocity;
    }

    /// Steps the camera backwards by `distance` along the look direction.
    pub fn move_backward(&mut self, distance: f32) {
        self.forward_velocity = self.direction * distance;
        self.position = self.position - self.forward_velocity;
    }

    /// Teleports the camera to a new position without changing orientation.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Returns the look direction (unit length).
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// The displacement applied by the most recent forward/backward step.
    pub fn forward_velocity(&self) -> Vec3 {
        self.forward_velocity
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// The world point one unit ahead of the camera.
    pub fn look_at_target(&self) -> Vec3 {
        self.position + self.direction
    }

    // =========================================================================
    // Matrix Generation
    // =========================================================================

    /// Computes the view matrix for the rendering pipeline, using a fixed
    /// world up of `(0, 1, 0)`.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at(self.position, self.look_at_target(), Vec3::UP)
    }
}

// =============================================================================
// Tests
// =============================================================================
