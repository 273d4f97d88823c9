//! View-frustum clipping in camera space.
//!
//! Triangles are clipped with the Sutherland-Hodgman algorithm against the six
//! planes of the view frustum before projection, which guarantees every vertex
//! handed to the projector lies in front of the near plane.
//!
//! - [`frustum`]: the six planes, built once from FOV and near/far distances.
//! - [`polygon`]: the clip polygon, a single-plane pass, and fan triangulation.

pub mod frustum;
pub mod polygon;

pub use frustum::{Frustum, FrustumPlane, PlaneSide};
pub use polygon::{ClipVertex, Polygon, MAX_POLYGON_VERTICES};
