//! Largest-area triangles on convex polygons.
//!
//! Pipeline
//! - `geom2`: point samplers and the monotone-chain hull (`ConvexPolygon`).
//! - `largest`: rooted two-pointer search, median root, six-bucket split, and
//!   the recursive solver on top of them.
//! - `geometry`: triangle area and orientation primitives.
//!
//! API Policy
//! - `api` is the curated surface for the CLI and bindings. Everything else is
//!   public for tests and benches but carries no stability promise.

pub mod api;
pub mod geom2;
pub mod geometry;
pub mod largest;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geometry::triangle_area;
pub use largest::{largest_triangle, try_largest_triangle, SolveCfg, SolveError};

/// Ordered convex hull of an arbitrary point set (CCW, no closing duplicate).
///
/// Inputs with at most one distinct point are returned deduplicated.
#[inline]
pub fn convex_hull_from_points(points: &[geom2::Point]) -> Vec<geom2::Point> {
    geom2::convex_hull(points)
}

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{circle_points, random_points, ReplayToken, SampleError};
    pub use crate::geom2::{ConvexPolygon, Point, Triangle, TriangleIdx};
    pub use crate::largest::{largest_triangle, try_largest_triangle, SolveCfg, SolveError};
    pub use crate::{convex_hull_from_points, triangle_area};
    pub use nalgebra::Vector2 as Vec2;
}
