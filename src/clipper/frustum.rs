use crate::math::vec3::Vec3;

/// Which side of the view volume a [`FrustumPlane`] bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaneSide {
    Left,
    Right,
    Top,
    Bottom,
    Near,
    Far,
}

/// A plane defined by a point on the plane and its unit normal vector.
///
/// The normal points toward the inside of the view volume, so the signed
/// distance of a visible point is positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrustumPlane {
    pub side: PlaneSide,
    pub point: Vec3,
    pub normal: Vec3,
}

impl FrustumPlane {
    pub fn new(side: PlaneSide, point: Vec3, normal: Vec3) -> Self {
        Self {
            side,
            point,
            normal,
        }
    }

    /// Returns the signed distance from a point to this plane.
    /// Positive = inside (same side as normal), Negative = outside.
    #[inline]
    pub fn signed_distance(&self, position: Vec3) -> f32 {
        (position - self.point).dot(self.normal)
    }
}

/// Camera-space view frustum defined by 6 clipping planes.
///
/// The planes are computed once from the projection parameters and never
/// change afterwards; the frame driver hands the frustum to the pipeline by
/// reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Frustum {
    planes: [FrustumPlane; 6],
}

impl Frustum {
    /// Creates the frustum for a camera at the origin looking down +Z.
    ///
    /// # Arguments
    /// * `fov_x` - Horizontal field of view in radians
    /// * `fov_y` - Vertical field of view in radians
    /// * `z_near` - Near clipping plane distance
    /// * `z_far` - Far clipping plane distance
    pub fn new(fov_x: f32, fov_y: f32, z_near: f32, z_far: f32) -> Self {
        let (sin_half_x, cos_half_x) = (fov_x / 2.0).sin_cos();
        let (sin_half_y, cos_half_y) = (fov_y / 2.0).sin_cos();
        let origin = Vec3::ZERO;

        Self {
            planes: [
                FrustumPlane::new(
                    PlaneSide::Left,
                    origin,
                    Vec3::new(cos_half_x, 0.0, sin_half_x),
                ),
                FrustumPlane::new(
                    PlaneSide::Right,
                    origin,
                    Vec3::new(-cos_half_x, 0.0, sin_half_x),
                ),
                FrustumPlane::new(
                    PlaneSide::Top,
                    origin,
                    Vec3::new(0.0, -cos_half_y, sin_half_y),
                ),
                FrustumPlane::new(
                    PlaneSide::Bottom,
                    origin,
                    Vec3::new(0.0, cos_half_y, sin_half_y),
                ),
                FrustumPlane::new(
                    PlaneSide::Near,
                    Vec3::new(0.0, 0.0, z_near),
                    Vec3::new(0.0, 0.0, 1.0),
                ),
                FrustumPlane::new(
                    PlaneSide::Far,
                    Vec3::new(0.0, 0.0, z_far),
                    Vec3::new(0.0, 0.0, -1.0),
                ),
            ],
        }
    }

    /// The planes in clipping order: left, right, top, bottom, near, far.
    pub fn planes(&self) -> &[FrustumPlane; 6] {
        &self.planes
    }

    /// Returns the plane bounding the given side.
    pub fn plane(&self, side: PlaneSide) -> &FrustumPlane {
        let index = match side {
            PlaneSide::Left => 0,
            PlaneSide::Right => 1,
            PlaneSide::Top => 2,
            PlaneSide::Bottom => 3,
            PlaneSide::Near => 4,
            PlaneSide::Far => 5,
        };
        &self.planes[index]
    }

    /// Returns true if the point lies strictly inside all six half-spaces.
    pub fn contains(&self, position: Vec3) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.signed_distance(position) > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_3};

    #[test]
    fn planes_are_in_clipping_order() {
        let frustum = Frustum::new(FRAC_PI_3, FRAC_PI_3, 0.1, 100.0);
        let sides: Vec<PlaneSide> = frustum.planes().iter().map(|p| p.side).collect();
        assert_eq!(
            sides,
            vec![
                PlaneSide::Left,
                PlaneSide::Right,
                PlaneSide::Top,
                PlaneSide::Bottom,
                PlaneSide::Near,
                PlaneSide::Far,
            ]
        );
    }

    #[test]
    fn normals_are_unit_length() {
        let frustum = Frustum::new(1.2, 0.9, 0.1, 100.0);
        for plane in frustum.planes() {
            assert_relative_eq!(plane.normal.magnitude(), 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn side_planes_pass_through_fov_edge() {
        // With a 90 degree FOV the left/right edges run along x = +-z.
        let frustum = Frustum::new(FRAC_PI_2, FRAC_PI_2, 0.1, 100.0);
        let left = frustum.plane(PlaneSide::Left);
        let right = frustum.plane(PlaneSide::Right);
        assert_relative_eq!(left.signed_distance(Vec3::new(-3.0, 0.0, 3.0)), 0.0, epsilon = 1e-5);
        assert_relative_eq!(right.signed_distance(Vec3::new(3.0, 0.0, 3.0)), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn contains_points_along_view_axis_only_between_near_and_far() {
        let frustum = Frustum::new(FRAC_PI_3, FRAC_PI_3, 0.1, 100.0);
        assert!(frustum.contains(Vec3::new(0.0, 0.0, 5.0)));
        assert!(!frustum.contains(Vec3::new(0.0, 0.0, 0.05)));
        assert!(!frustum.contains(Vec3::new(0.0, 0.0, 150.0)));
        assert!(!frustum.contains(Vec3::new(0.0, 0.0, -5.0)));
        assert!(!frustum.contains(Vec3::new(10.0, 0.0, 5.0)));
    }
}
