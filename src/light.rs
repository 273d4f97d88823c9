//! Flat per-face lighting from a single directional light.

use crate::math::vec3::Vec3;

/// A directional light that illuminates the scene uniformly from a direction.
///
/// Directional lights model distant light sources like the sun, where all
/// rays are effectively parallel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    /// The normalized direction the light is travelling (not where it comes from).
    pub direction: Vec3,
}

impl Default for DirectionalLight {
    /// Light shining straight down +Z, away from a camera at the origin.
    fn default() -> Self {
        Self::new(Vec3::FORWARD)
    }
}

impl DirectionalLight {
    /// Create a new directional light pointing in the given direction.
    /// The direction will be normalized automatically.
    pub fn new(direction: Vec3) -> Self {
        DirectionalLight {
            direction: direction.normalize(),
        }
    }

    /// Calculate light intensity for flat shading.
    ///
    /// Returns `-dot(normal, direction)` clamped to [0.0, 1.0]: faces turned
    /// towards the light are lit, faces turned away are black.
    pub fn intensity(&self, normal: Vec3) -> f32 {
        (-normal.dot(self.direction)).clamp(0.0, 1.0)
    }

    /// Shades an ARGB colour for a face with the given normal.
    pub fn shade(&self, color: u32, normal: Vec3) -> u32 {
        apply_intensity(color, self.intensity(normal))
    }
}

/// Scales the RGB channels of an ARGB colour by `factor`, leaving alpha alone.
///
/// Each channel is multiplied in place and truncated back into its 8-bit
/// slot. A negative factor leaves the colour unmodified; factors above 1
/// behave like 1.
pub fn apply_intensity(color: u32, factor: f32) -> u32 {
    if factor < 0.0 {
        return color;
    }
    let factor = factor.min(1.0);

    let a = color & 0xFF00_0000;
    let r = ((color & 0x00FF_0000) as f32 * factor) as u32 & 0x00FF_0000;
    let g = ((color & 0x0000_FF00) as f32 * factor) as u32 & 0x0000_FF00;
    let b = ((color & 0x0000_00FF) as f32 * factor) as u32 & 0x0000_00FF;

    a | r | g | b
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_direct_illumination() {
        // Light travelling +Z hits a face whose normal points back along -Z.
        let light = DirectionalLight::new(Vec3::new(0.0, 0.0, 1.0));
        assert_relative_eq!(light.intensity(Vec3::new(0.0, 0.0, -1.0)), 1.0);
    }

    #[test]
    fn test_no_illumination() {
        let light = DirectionalLight::new(Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(light.intensity(Vec3::new(0.0, 0.0, 1.0)), 0.0);
    }

    #[test]
    fn test_angled_illumination() {
        // Light pointing straight down (-Y), normal at 45 degrees
        let light = DirectionalLight::new(Vec3::new(0.0, -1.0, 0.0));
        let normal = Vec3::new(0.0, 1.0, 1.0).normalize();
        assert_relative_eq!(light.intensity(normal), 0.70710677, epsilon = 1e-5);
    }

    #[test]
    fn full_intensity_keeps_color() {
        assert_eq!(apply_intensity(0xFF12_3456, 1.0), 0xFF12_3456);
    }

    #[test]
    fn zero_intensity_is_black_with_alpha_kept() {
        assert_eq!(apply_intensity(0x80FF_FFFF, 0.0), 0x8000_0000);
    }

    #[test]
    fn half_intensity_truncates_each_channel() {
        assert_eq!(apply_intensity(0xFFFF_FFFF, 0.5), 0xFF7F_7F7F);
        assert_eq!(apply_intensity(0xFF64_C832, 0.5), 0xFF32_6419);
    }

    #[test]
    fn negative_factor_leaves_color_unmodified() {
        assert_eq!(apply_intensity(0xFF64_C832, -0.25), 0xFF64_C832);
    }

    #[test]
    fn factor_above_one_matches_one() {
        assert_eq!(
            apply_intensity(0xFF64_C832, 3.0),
            apply_intensity(0xFF64_C832, 1.0)
        );
    }

    #[test]
    fn shade_combines_intensity_and_color() {
        let light = DirectionalLight::default();
        assert_eq!(light.shade(0xFFFF_FFFF, Vec3::new(0.0, 0.0, -1.0)), 0xFFFF_FFFF);
        assert_eq!(light.shade(0xFFFF_FFFF, Vec3::new(0.0, 0.0, 1.0)), 0xFF00_0000);
    }
}
