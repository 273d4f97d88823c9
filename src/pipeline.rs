//! The geometry half of a frame: Transform -> Cull -> Clip -> Triangulate
//! -> Project -> Light.
//!
//! [`process_mesh`] turns one mesh into render-ready screen-space
//! [`Triangle`]s. It reads nothing but its arguments, so the frame driver
//! decides what camera, frustum and settings apply.

use std::ops::AddAssign;

use crate::camera::Camera;
use crate::clipper::{ClipVertex, Frustum, Polygon};
use crate::engine::RenderMode;
use crate::light::DirectionalLight;
use crate::math::{mat4::Mat4, vec3::Vec3, vec4::Vec4};
use crate::mesh::Mesh;
use crate::projection::project_to_screen;
use crate::render::Triangle;

/// Which faces are discarded before clipping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CullMode {
    /// Keep every face.
    None,
    /// Drop faces whose normal points away from the camera.
    #[default]
    Backface,
}

/// Per-frame rendering options, owned by the frame driver and passed down
/// explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderSettings {
    pub render_mode: RenderMode,
    pub cull_mode: CullMode,
}

/// Counters describing what the pipeline did with a mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PipelineStats {
    /// Faces read from the mesh.
    pub faces: usize,
    /// Faces discarded by back-face culling.
    pub culled: usize,
    /// Faces that clipping reduced to nothing.
    pub clipped_away: usize,
    /// Screen-space triangles emitted.
    pub triangles: usize,
}

impl AddAssign for PipelineStats {
    fn add_assign(&mut self, rhs: Self) {
        self.faces += rhs.faces;
        self.culled += rhs.culled;
        self.clipped_away += rhs.clipped_away;
        self.triangles += rhs.triangles;
    }
}

/// Everything about the frame that is shared by all meshes.
#[derive(Debug, Clone, Copy)]
pub struct PipelineContext<'a> {
    pub view_matrix: Mat4,
    pub projection_matrix: Mat4,
    pub frustum: &'a Frustum,
    pub light: &'a DirectionalLight,
    pub cull_mode: CullMode,
    pub width: u32,
    pub height: u32,
}

impl<'a> PipelineContext<'a> {
    pub fn new(
        camera: &Camera,
        projection_matrix: Mat4,
        frustum: &'a Frustum,
        light: &'a DirectionalLight,
        cull_mode: CullMode,
        (width, height): (u32, u32),
    ) -> Self {
        Self {
            view_matrix: camera.view_matrix(),
            projection_matrix,
            frustum,
            light,
            cull_mode,
            width,
            height,
        }
    }
}

/// Moves a face's model-space vertices into camera space.
pub fn transform_face(world_view: &Mat4, vertices: [Vec3; 3]) -> [Vec3; 3] {
    vertices.map(|v| (*world_view * Vec4::from(v)).to_vec3())
}

/// Unit normal of triangle ABC, `normalize((B - A) x (C - A))`.
pub fn face_normal([a, b, c]: &[Vec3; 3]) -> Vec3 {
    (*b - *a).cross(*c - *a).normalize()
}

/// Whether a camera-space face points away from the camera at the origin.
pub fn is_back_face(normal: Vec3, a: Vec3) -> bool {
    let camera_ray = Vec3::ZERO - a;
    normal.dot(camera_ray) < 0.0
}

/// Runs one mesh through the geometry pipeline, appending its screen-space
/// triangles to `out`.
pub fn process_mesh(mesh: &Mesh, ctx: &PipelineContext<'_>, out: &mut Vec<Triangle>) -> PipelineStats {
    let world_view = ctx.view_matrix * mesh.transform().to_matrix();
    let mut stats = PipelineStats::default();

    for (face, model_vertices) in mesh.triangles() {
        stats.faces += 1;

        let camera_vertices = transform_face(&world_view, model_vertices);
        let normal = face_normal(&camera_vertices);

        if ctx.cull_mode == CullMode::Backface && is_back_face(normal, camera_vertices[0]) {
            stats.culled += 1;
            continue;
        }

        let [a, b, c] = camera_vertices;
        let polygon = Polygon::from_triangle(
            ClipVertex::new(a, face.texcoords[0]),
            ClipVertex::new(b, face.texcoords[1]),
            ClipVertex::new(c, face.texcoords[2]),
        );
        let polygon = ctx.frustum.clip_polygon(polygon);
        if polygon.is_empty() {
            stats.clipped_away += 1;
            continue;
        }

        let color = ctx.light.shade(face.color, normal);

        for corners in polygon.triangulate() {
            let points = corners.map(|v| {
                project_to_screen(&ctx.projection_matrix, v.position, ctx.width, ctx.height)
            });
            out.push(Triangle::new(
                points,
                corners.map(|v| v.texcoord),
                color,
                mesh.texture().cloned(),
            ));
            stats.triangles += 1;
        }
    }

    stats
}
