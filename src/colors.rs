//! ARGB8888 colour constants used by the renderer.

/// Frame clear colour.
pub const BACKGROUND: u32 = 0xFF00_0000;
/// Dot grid drawn behind the scene.
pub const GRID: u32 = 0xFF33_3333;
/// Triangle edges in the wireframe render modes.
pub const WIREFRAME: u32 = 0xFFFF_FFFF;
/// Vertex markers.
pub const VERTEX: u32 = 0xFFFF_0000;
/// Base colour of faces that do not specify one.
pub const FILL: u32 = 0xFFFF_FFFF;
