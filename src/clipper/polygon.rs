use super::frustum::{Frustum, FrustumPlane};
use crate::math::{vec2::Vec2, vec3::Vec3};

/// Upper bound on the vertex count of a clipped triangle: each of the six
/// planes can add at most one vertex to the initial three.
pub const MAX_POLYGON_VERTICES: usize = 9;

/// A camera-space vertex with the attributes that must be carried through
/// clipping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipVertex {
    pub position: Vec3,
    pub texcoord: Vec2,
}

impl ClipVertex {
    pub fn new(position: Vec3, texcoord: Vec2) -> Self {
        Self { position, texcoord }
    }

    /// Linearly interpolate position and texcoord between two vertices.
    /// Used when a polygon edge crosses a clipping plane.
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            position: self.position.lerp(other.position, t),
            texcoord: self.texcoord.lerp(other.texcoord, t),
        }
    }
}

/// A convex polygon represented as an ordered list of vertices.
///
/// Starts life as a triangle, is narrowed by one clipping pass per frustum
/// plane and is finally fanned back into triangles for projection.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<ClipVertex>,
}

impl Polygon {
    /// Create a polygon from a triangle (3 vertices).
    pub fn from_triangle(v0: ClipVertex, v1: ClipVertex, v2: ClipVertex) -> Self {
        let mut vertices = Vec::with_capacity(MAX_POLYGON_VERTICES);
        vertices.extend([v0, v1, v2]);
        Self { vertices }
    }

    pub fn vertices(&self) -> &[ClipVertex] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the polygon has been clipped below a triangle.
    pub fn is_empty(&self) -> bool {
        self.vertices.len() < 3
    }

    /// Clip this polygon against a single plane (one Sutherland-Hodgman pass).
    ///
    /// Each edge runs from the previous vertex to the current one, wrapping
    /// around. An edge whose endpoints lie on opposite sides contributes its
    /// intersection point; a current vertex strictly inside is kept as is.
    pub fn clip_against_plane(self, plane: &FrustumPlane) -> Self {
        let mut output = Vec::with_capacity(MAX_POLYGON_VERTICES);

        let Some(&last) = self.vertices.last() else {
            return Self { vertices: output };
        };

        let mut previous = last;
        let mut previous_dot = plane.signed_distance(previous.position);

        for &current in &self.vertices {
            let current_dot = plane.signed_distance(current.position);

            if previous_dot * current_dot < 0.0 {
                let t = previous_dot / (previous_dot - current_dot);
                output.push(previous.lerp(&current, t));
            }

            if current_dot > 0.0 {
                output.push(current);
            }

            previous = current;
            previous_dot = current_dot;
        }

        debug_assert!(output.len() <= MAX_POLYGON_VERTICES + 1);
        Self { vertices: output }
    }

    /// Triangulate this convex polygon using fan triangulation from vertex 0.
    ///
    /// Yields `n - 2` triangles for `n >= 3` vertices and none otherwise.
    pub fn triangulate(&self) -> impl Iterator<Item = [ClipVertex; 3]> + '_ {
        (1..self.vertices.len().saturating_sub(1))
            .map(move |i| [self.vertices[0], self.vertices[i], self.vertices[i + 1]])
    }
}

impl Frustum {
    /// Clip a polygon against all frustum planes, in order.
    ///
    /// Returns the clipped polygon, which may be empty if fully outside.
    pub fn clip_polygon(&self, polygon: Polygon) -> Polygon {
        let mut result = polygon;

        for plane in self.planes() {
            if result.is_empty() {
                break;
            }
            result = result.clip_against_plane(plane);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipper::frustum::PlaneSide;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_3;

    fn frustum() -> Frustum {
        Frustum::new(FRAC_PI_3, FRAC_PI_3, 0.1, 100.0)
    }

    fn vertex(x: f32, y: f32, z: f32, u: f32, v: f32) -> ClipVertex {
        ClipVertex::new(Vec3::new(x, y, z), Vec2::new(u, v))
    }

    #[test]
    fn triangle_inside_is_unchanged() {
        let a = vertex(-0.5, -0.5, 5.0, 0.0, 1.0);
        let b = vertex(0.0, 0.5, 5.0, 0.0, 0.0);
        let c = vertex(0.5, -0.5, 6.0, 1.0, 0.0);

        let clipped = frustum().clip_polygon(Polygon::from_triangle(a, b, c));

        assert_eq!(clipped.vertices(), &[a, b, c]);
        let triangles: Vec<_> = clipped.triangulate().collect();
        assert_eq!(triangles, vec![[a, b, c]]);
    }

    #[test]
    fn triangle_behind_near_plane_is_removed() {
        let polygon = Polygon::from_triangle(
            vertex(-1.0, 0.0, 0.05, 0.0, 0.0),
            vertex(0.0, 1.0, 0.02, 0.0, 0.0),
            vertex(1.0, 0.0, -3.0, 0.0, 0.0),
        );

        let clipped = frustum().clip_polygon(polygon);

        assert!(clipped.is_empty());
        assert_eq!(clipped.triangulate().count(), 0);
    }

    #[test]
    fn triangle_outside_left_plane_is_removed() {
        let polygon = Polygon::from_triangle(
            vertex(-50.0, 0.0, 5.0, 0.0, 0.0),
            vertex(-40.0, 1.0, 5.0, 0.0, 0.0),
            vertex(-45.0, -1.0, 6.0, 0.0, 0.0),
        );

        let clipped = frustum().clip_polygon(polygon);
        assert_eq!(clipped.len(), 0);
        assert_eq!(clipped.triangulate().count(), 0);
    }

    #[test]
    fn triangle_straddling_near_plane_becomes_quad() {
        // One vertex closer than the near plane, the other two beyond it and
        // well inside every other plane.
        let frustum = frustum();
        let polygon = Polygon::from_triangle(
            vertex(0.0, 0.0, 0.05, 0.0, 0.0),
            vertex(-0.5, 0.0, 2.0, 0.0, 1.0),
            vertex(0.5, 0.0, 2.0, 1.0, 1.0),
        );

        let clipped = frustum.clip_polygon(polygon);

        assert_eq!(clipped.len(), 4);
        assert_eq!(clipped.triangulate().count(), 2);

        let near = frustum.plane(PlaneSide::Near);
        for v in clipped.vertices() {
            assert!(near.signed_distance(v.position) >= -1e-6);
        }
    }

    #[test]
    fn intersection_interpolates_position_and_uv() {
        let frustum = frustum();
        let near = *frustum.plane(PlaneSide::Near);
        // Edge from z = -0.9 to z = 1.1 crosses z = 0.1 exactly halfway.
        let polygon = Polygon::from_triangle(
            vertex(0.0, 0.0, -0.9, 0.0, 0.0),
            vertex(0.0, 0.1, 1.1, 1.0, 1.0),
            vertex(0.1, 0.0, 1.1, 1.0, 1.0),
        );

        let clipped = polygon.clip_against_plane(&near);

        // Edge c->a crosses first, so its intersection leads, followed by the
        // a->b intersection, then b and c.
        assert_eq!(clipped.len(), 4);
        let entry = clipped.vertices()[0];
        assert_relative_eq!(entry.position.z, 0.1, epsilon = 1e-5);
        assert_relative_eq!(entry.texcoord.x, 0.5, epsilon = 1e-5);
        assert_relative_eq!(entry.texcoord.y, 0.5, epsilon = 1e-5);
    }

    #[test]
    fn fan_triangulation_shares_first_vertex() {
        let frustum = frustum();
        // Wide triangle crossing both the left and right planes.
        let polygon = Polygon::from_triangle(
            vertex(-20.0, 0.0, 5.0, 0.0, 0.0),
            vertex(0.0, 1.0, 5.0, 0.5, 1.0),
            vertex(20.0, 0.0, 5.0, 1.0, 0.0),
        );

        let clipped = frustum.clip_polygon(polygon);
        let first = clipped.vertices()[0];
        let triangles: Vec<_> = clipped.triangulate().collect();

        assert_eq!(triangles.len(), clipped.len() - 2);
        assert!(triangles.iter().all(|t| t[0] == first));
        for v in clipped.vertices() {
            for plane in frustum.planes() {
                assert!(plane.signed_distance(v.position) >= -1e-4);
            }
        }
    }
}
