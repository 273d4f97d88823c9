//! Core rendering engine.
//!
//! The [`Engine`] struct is the frame driver. It owns the scene (meshes,
//! camera, light), the projection and frustum, and the render target. Each
//! frame, [`Engine::update`] runs every mesh through the geometry pipeline
//! and [`Engine::render`] rasterizes the resulting triangles.

use std::collections::HashSet;
use std::path::Path;
use std::rc::Rc;

use log::{debug, trace, warn};

use crate::camera::Camera;
use crate::clipper::Frustum;
use crate::colors;
use crate::light::DirectionalLight;
use crate::math::vec3::Vec3;
use crate::mesh::{LoadError, Mesh};
use crate::pipeline::{process_mesh, CullMode, PipelineContext, PipelineStats, RenderSettings};
use crate::projection::Projection;
use crate::render::{Renderer, ScanlineRasterizer, Triangle};
use crate::texture::Texture;

/// Distance between background grid dots, in pixels.
const GRID_SPACING: usize = 10;

/// Rendering mode presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Wireframe only (key: 1)
    Wireframe,
    /// Wireframe + vertices (key: 2)
    WireframeVertices,
    /// Flat-shaded fill (key: 3)
    Filled,
    /// Flat-shaded fill + wireframe (key: 4)
    FilledWireframe,
    /// Textured fill (key: 5)
    #[default]
    Textured,
    /// Textured fill + wireframe (key: 6)
    TexturedWireframe,
}

impl RenderMode {
    /// All modes, in key order.
    pub const ALL: [RenderMode; 6] = [
        RenderMode::Wireframe,
        RenderMode::WireframeVertices,
        RenderMode::Filled,
        RenderMode::FilledWireframe,
        RenderMode::Textured,
        RenderMode::TexturedWireframe,
    ];

    pub fn draws_filled(self) -> bool {
        matches!(self, RenderMode::Filled | RenderMode::FilledWireframe)
    }

    pub fn draws_textured(self) -> bool {
        matches!(self, RenderMode::Textured | RenderMode::TexturedWireframe)
    }

    pub fn draws_wireframe(self) -> bool {
        matches!(
            self,
            RenderMode::Wireframe
                | RenderMode::WireframeVertices
                | RenderMode::FilledWireframe
                | RenderMode::TexturedWireframe
        )
    }

    pub fn draws_vertices(self) -> bool {
        self == RenderMode::WireframeVertices
    }
}

impl std::fmt::Display for RenderMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RenderMode::Wireframe => "Wireframe",
            RenderMode::WireframeVertices => "Wireframe + Vertices",
            RenderMode::Filled => "Filled",
            RenderMode::FilledWireframe => "Filled + Wireframe",
            RenderMode::Textured => "Textured",
            RenderMode::TexturedWireframe => "Textured + Wireframe",
        };
        f.write_str(name)
    }
}

pub struct Engine {
    renderer: Renderer,
    rasterizer: ScanlineRasterizer,
    triangles_to_render: Vec<Triangle>,
    meshes: Vec<Mesh>,
    camera: Camera,
    light: DirectionalLight,
    projection: Projection,
    frustum: Frustum,
    settings: RenderSettings,
    warned_untextured: HashSet<usize>,
    pub draw_grid: bool,
}

impl Engine {
    pub fn new(width: u32, height: u32) -> Self {
        let projection = Projection::for_viewport(width, height);
        debug!(
            "engine {}x{}: fov {:.1} deg, near {}, far {}",
            width,
            height,
            projection.fov_y().to_degrees(),
            projection.z_near(),
            projection.z_far()
        );

        Self {
            renderer: Renderer::new(width, height),
            rasterizer: ScanlineRasterizer::new(),
            triangles_to_render: Vec::new(),
            meshes: Vec::new(),
            camera: Camera::new(Vec3::ZERO),
            light: DirectionalLight::default(),
            frustum: projection.frustum(),
            projection,
            settings: RenderSettings::default(),
            warned_untextured: HashSet::new(),
            draw_grid: true,
        }
    }

    // ============ Settings ============

    pub fn settings(&self) -> RenderSettings {
        self.settings
    }

    pub fn set_render_mode(&mut self, mode: RenderMode) {
        self.settings.render_mode = mode;
    }

    pub fn render_mode(&self) -> RenderMode {
        self.settings.render_mode
    }

    pub fn set_cull_mode(&mut self, mode: CullMode) {
        self.settings.cull_mode = mode;
    }

    pub fn cull_mode(&self) -> CullMode {
        self.settings.cull_mode
    }

    // ============ Scene ============

    /// Adds a mesh to the scene and returns its index.
    pub fn add_mesh(&mut self, mesh: Mesh) -> usize {
        debug!(
            "adding mesh '{}' ({} faces, textured: {})",
            mesh.name(),
            mesh.faces().len(),
            mesh.texture().is_some()
        );
        self.meshes.push(mesh);
        self.meshes.len() - 1
    }

    pub fn load_cube_mesh(&mut self) -> usize {
        self.add_mesh(Mesh::cube())
    }

    /// Loads an OBJ file, optionally with a texture image, as a new mesh.
    pub fn load_mesh(
        &mut self,
        obj_path: impl AsRef<Path>,
        texture_path: Option<&Path>,
    ) -> Result<usize, LoadError> {
        let mut mesh = Mesh::from_obj(obj_path)?;
        if let Some(path) = texture_path {
            mesh.set_texture(Some(Rc::new(Texture::from_file(path)?)));
        }
        Ok(self.add_mesh(mesh))
    }

    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }

    pub fn mesh(&self, index: usize) -> Option<&Mesh> {
        self.meshes.get(index)
    }

    pub fn mesh_mut(&mut self, index: usize) -> Option<&mut Mesh> {
        self.meshes.get_mut(index)
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn light(&self) -> &DirectionalLight {
        &self.light
    }

    pub fn set_light(&mut self, light: DirectionalLight) {
        self.light = light;
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Replaces the projection and rebuilds the frustum from it.
    pub fn set_projection(&mut self, projection: Projection) {
        self.projection = projection;
        self.frustum = projection.frustum();
    }

    pub fn frustum(&self) -> &Frustum {
        &self.frustum
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        debug!("resizing to {}x{}", width, height);
        self.renderer.resize(width, height);
        self.projection
            .set_aspect_ratio(width as f32 / height as f32);
        self.frustum = self.projection.frustum();
    }

    pub fn width(&self) -> u32 {
        self.renderer.width()
    }

    pub fn height(&self) -> u32 {
        self.renderer.height()
    }

    // ============ Frame ============

    /// Returns the rendered frame as bytes (ARGB8888 format)
    pub fn frame_buffer(&self) -> &[u8] {
        self.renderer.as_bytes()
    }

    pub fn color_buffer(&self) -> &[u32] {
        self.renderer.color_buffer()
    }

    /// Triangles produced by the last [`Engine::update`].
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles_to_render
    }

    /// Runs every mesh through the geometry pipeline and collects the
    /// screen-space triangles for this frame.
    pub fn update(&mut self) -> PipelineStats {
        let ctx = PipelineContext::new(
            &self.camera,
            self.projection.matrix(),
            &self.frustum,
            &self.light,
            self.settings.cull_mode,
            (self.renderer.width(), self.renderer.height()),
        );

        self.triangles_to_render.clear();
        let mut stats = PipelineStats::default();

        for (index, mesh) in self.meshes.iter().enumerate() {
            if self.settings.render_mode.draws_textured()
                && mesh.texture().is_none()
                && self.warned_untextured.insert(index)
            {
                warn!(
                    "mesh '{}' has no texture, filling it with its face colour",
                    mesh.name()
                );
            }

            stats += process_mesh(mesh, &ctx, &mut self.triangles_to_render);
        }

        trace!(
            "frame: {} faces, {} culled, {} clipped away, {} triangles",
            stats.faces,
            stats.culled,
            stats.clipped_away,
            stats.triangles
        );
        stats
    }

    /// Render the current frame
    pub fn render(&mut self) {
        let mode = self.settings.render_mode;

        self.renderer.clear(colors::BACKGROUND);
        self.renderer.clear_depth();

        if self.draw_grid {
            self.renderer.draw_grid(GRID_SPACING, colors::GRID);
        }

        if mode.draws_filled() || mode.draws_textured() {
            let mut fb = self.renderer.as_framebuffer();
            for triangle in &self.triangles_to_render {
                if mode.draws_textured() {
                    self.rasterizer.texture_triangle(triangle, &mut fb);
                } else {
                    self.rasterizer.fill_triangle(triangle, &mut fb);
                }
            }
        }

        for triangle in &self.triangles_to_render {
            if mode.draws_wireframe() {
                self.renderer
                    .draw_triangle_wireframe(triangle, colors::WIREFRAME);
            }
            if mode.draws_vertices() {
                for vertex in &triangle.points {
                    self.renderer
                        .draw_vertex_marker(vertex.x as i32, vertex.y as i32, colors::VERTEX);
                }
            }
        }
    }
}
