//! Triangle meshes and the loaders that produce them.

use std::fmt;
use std::path::Path;
use std::rc::Rc;

use log::debug;

use crate::colors;
use crate::math::{vec2::Vec2, vec3::Vec3};
use crate::texture::Texture;
use crate::transform::Transform;

pub const CUBE_VERTICES: [Vec3; 8] = [
    Vec3::new(-1.0, -1.0, -1.0),
    Vec3::new(-1.0, 1.0, -1.0),
    Vec3::new(1.0, 1.0, -1.0),
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(-1.0, 1.0, 1.0),
    Vec3::new(-1.0, -1.0, 1.0),
];

const UV_TOP_LEFT: [Vec2; 3] = [Vec2::new(0.0, 1.0), Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0)];
const UV_BOTTOM_RIGHT: [Vec2; 3] = [Vec2::new(0.0, 1.0), Vec2::new(1.0, 0.0), Vec2::new(1.0, 1.0)];

const fn cube_face(a: usize, b: usize, c: usize, texcoords: [Vec2; 3]) -> Face {
    Face {
        a,
        b,
        c,
        texcoords,
        color: colors::FILL,
    }
}

pub const CUBE_FACES: [Face; 12] = [
    // Front
    cube_face(0, 1, 2, UV_TOP_LEFT),
    cube_face(0, 2, 3, UV_BOTTOM_RIGHT),
    // Right
    cube_face(3, 2, 4, UV_TOP_LEFT),
    cube_face(3, 4, 5, UV_BOTTOM_RIGHT),
    // Back
    cube_face(5, 4, 6, UV_TOP_LEFT),
    cube_face(5, 6, 7, UV_BOTTOM_RIGHT),
    // Left
    cube_face(7, 6, 1, UV_TOP_LEFT),
    cube_face(7, 1, 0, UV_BOTTOM_RIGHT),
    // Top
    cube_face(1, 6, 4, UV_TOP_LEFT),
    cube_face(1, 4, 2, UV_BOTTOM_RIGHT),
    // Bottom
    cube_face(5, 7, 0, UV_TOP_LEFT),
    cube_face(5, 0, 3, UV_BOTTOM_RIGHT),
];

/// A triangle of a mesh: three indices into the vertex list, the UV of each
/// corner and a flat ARGB base colour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    pub a: usize,
    pub b: usize,
    pub c: usize,
    pub texcoords: [Vec2; 3],
    pub color: u32,
}

impl Face {
    pub fn new(a: usize, b: usize, c: usize, texcoords: [Vec2; 3], color: u32) -> Self {
        Self {
            a,
            b,
            c,
            texcoords,
            color,
        }
    }

    pub fn indices(&self) -> [usize; 3] {
        [self.a, self.b, self.c]
    }
}

/// Errors produced while building or loading a mesh or its texture.
#[derive(Debug)]
pub enum LoadError {
    Obj(tobj::LoadError),
    Image(image::ImageError),
    InvalidFaceIndex {
        face: usize,
        index: usize,
        vertex_count: usize,
    },
}

impl From<tobj::LoadError> for LoadError {
    fn from(err: tobj::LoadError) -> Self {
        LoadError::Obj(err)
    }
}

impl From<image::ImageError> for LoadError {
    fn from(err: image::ImageError) -> Self {
        LoadError::Image(err)
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Obj(err) => write!(f, "obj error: {}", err),
            LoadError::Image(err) => write!(f, "image error: {}", err),
            LoadError::InvalidFaceIndex {
                face,
                index,
                vertex_count,
            } => write!(
                f,
                "face {} references vertex {} but the mesh has {} vertices",
                face, index, vertex_count
            ),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Obj(err) => Some(err),
            LoadError::Image(err) => Some(err),
            LoadError::InvalidFaceIndex { .. } => None,
        }
    }
}

/// A triangle mesh with its world placement and an optional texture.
///
/// Every face index is guaranteed to be a valid index into `vertices`.
#[derive(Debug, Clone)]
pub struct Mesh {
    name: String,
    vertices: Vec<Vec3>,
    faces: Vec<Face>,
    transform: Transform,
    texture: Option<Rc<Texture>>,
}

impl Mesh {
    /// Build a mesh, rejecting faces that index past the vertex list.
    pub fn new(
        name: impl Into<String>,
        vertices: Vec<Vec3>,
        faces: Vec<Face>,
    ) -> Result<Self, LoadError> {
        let vertex_count = vertices.len();
        for (face_index, face) in faces.iter().enumerate() {
            if let Some(&index) = face.indices().iter().find(|&&i| i >= vertex_count) {
                return Err(LoadError::InvalidFaceIndex {
                    face: face_index,
                    index,
                    vertex_count,
                });
            }
        }

        Ok(Self {
            name: name.into(),
            vertices,
            faces,
            transform: Transform::default(),
            texture: None,
        })
    }

    /// The built-in cube: 8 vertices at +-1 and 12 white faces.
    pub fn cube() -> Self {
        Self {
            name: "cube".to_string(),
            vertices: CUBE_VERTICES.to_vec(),
            faces: CUBE_FACES.to_vec(),
            transform: Transform::default(),
            texture: None,
        }
    }

    /// Load every object of an OBJ file into a single mesh.
    ///
    /// Polygons are triangulated, faces are white, and UVs default to
    /// (0, 0) when the file carries none.
    pub fn from_obj<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let (models, _materials) = tobj::load_obj(
            path,
            &tobj::LoadOptions {
                triangulate: true,
                ..Default::default()
            },
        )?;

        let mut vertices = Vec::new();
        let mut faces = Vec::new();

        for model in &models {
            let mesh = &model.mesh;
            let base = vertices.len();

            vertices.extend(
                mesh.positions
                    .chunks_exact(3)
                    .map(|p| Vec3::new(p[0], p[1], p[2])),
            );

            let texcoord = |corner: usize| -> Vec2 {
                mesh.texcoord_indices
                    .get(corner)
                    .map(|&ti| ti as usize * 2)
                    .and_then(|i| mesh.texcoords.get(i..i + 2))
                    .map_or(Vec2::ZERO, |uv| Vec2::new(uv[0], uv[1]))
            };

            for (triangle, corners) in mesh.indices.chunks_exact(3).enumerate() {
                let first = triangle * 3;
                faces.push(Face::new(
                    base + corners[0] as usize,
                    base + corners[1] as usize,
                    base + corners[2] as usize,
                    [texcoord(first), texcoord(first + 1), texcoord(first + 2)],
                    colors::FILL,
                ));
            }
        }

        debug!(
            "loaded {} ({} objects, {} vertices, {} faces)",
            path.display(),
            models.len(),
            vertices.len(),
            faces.len()
        );

        let name = path
            .file_stem()
            .map_or_else(|| "mesh".to_string(), |s| s.to_string_lossy().into_owned());
        Self::new(name, vertices, faces)
    }

    /// Attach a texture, replacing any previous one.
    pub fn with_texture(mut self, texture: Rc<Texture>) -> Self {
        self.texture = Some(texture);
        self
    }

    pub fn set_texture(&mut self, texture: Option<Rc<Texture>>) {
        self.texture = texture;
    }

    pub fn texture(&self) -> Option<&Rc<Texture>> {
        self.texture.as_ref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Iterate over faces together with their three model-space vertices.
    pub fn triangles(&self) -> impl Iterator<Item = (&Face, [Vec3; 3])> + '_ {
        self.faces.iter().map(move |face| {
            (
                face,
                [
                    self.vertices[face.a],
                    self.vertices[face.b],
                    self.vertices[face.c],
                ],
            )
        })
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn cube_has_twelve_valid_faces() {
        let cube = Mesh::cube();
        assert_eq!(cube.vertices().len(), 8);
        assert_eq!(cube.faces().len(), 12);
        assert!(cube
            .faces()
            .iter()
            .all(|f| f.indices().iter().all(|&i| i < 8)));
        assert!(cube.faces().iter().all(|f| f.color == colors::FILL));
    }

    #[test]
    fn new_rejects_out_of_range_index() {
        let vertices = vec![Vec3::ZERO, Vec3::ONE, Vec3::UP];
        let faces = vec![
            Face::new(0, 1, 2, [Vec2::ZERO; 3], colors::FILL),
            Face::new(0, 3, 2, [Vec2::ZERO; 3], colors::FILL),
        ];

        match Mesh::new("bad", vertices, faces) {
            Err(LoadError::InvalidFaceIndex {
                face,
                index,
                vertex_count,
            }) => {
                assert_eq!((face, index, vertex_count), (1, 3, 3));
            }
            other => panic!("expected InvalidFaceIndex, got {:?}", other),
        }
    }

    #[test]
    fn triangles_resolve_vertex_positions() {
        let cube = Mesh::cube();
        let (face, [a, b, c]) = cube.triangles().next().unwrap();
        assert_eq!(face.indices(), [0, 1, 2]);
        assert_eq!(a, CUBE_VERTICES[0]);
        assert_eq!(b, CUBE_VERTICES[1]);
        assert_eq!(c, CUBE_VERTICES[2]);
    }

    #[test]
    fn texture_is_shared() {
        let texture = Rc::new(Texture::from_pixels(vec![0xFFFF_FFFF], 1, 1));
        let mesh = Mesh::cube().with_texture(Rc::clone(&texture));
        assert!(Rc::ptr_eq(mesh.texture().unwrap(), &texture));
    }

    #[test]
    fn from_obj_merges_objects_and_reads_uvs() {
        let path = std::env::temp_dir().join("softrast_mesh_test.obj");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            "o first\n\
             v 0 0 0\nv 1 0 0\nv 0 1 0\n\
             vt 0 0\nvt 1 0\nvt 0 1\n\
             f 1/1 2/2 3/3\n\
             o second\n\
             v 0 0 1\nv 1 0 1\nv 1 1 1\nv 0 1 1\n\
             f 4 5 6 7\n"
        )
        .unwrap();
        drop(file);

        let mesh = Mesh::from_obj(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(mesh.name(), "softrast_mesh_test");
        assert_eq!(mesh.vertices().len(), 7);
        // One triangle plus a quad split in two.
        assert_eq!(mesh.faces().len(), 3);
        assert_eq!(mesh.faces()[0].texcoords[1], Vec2::new(1.0, 0.0));
        assert!(mesh.faces()[1].indices().iter().all(|&i| i >= 3));
        assert_eq!(mesh.faces()[2].texcoords, [Vec2::ZERO; 3]);
    }

    #[test]
    fn from_obj_missing_file_is_an_error() {
        assert!(matches!(
            Mesh::from_obj("does/not/exist.obj"),
            Err(LoadError::Obj(_))
        ));
    }
}
