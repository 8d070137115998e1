//! Curated API for the CLI, benches and bindings.
//!
//! Prefer these re-exports over reaching into submodules so call sites stay
//! stable while the internals move.

// Hull and primitives
pub use crate::convex_hull_from_points;
pub use crate::geom2::{convex_polygon_from_points, ConvexPolygon, Point, Triangle};
pub use crate::geometry::triangle_area;
// Point samplers
pub use crate::geom2::rand::{circle_points, random_points, ReplayToken, SampleError};
// Solver
pub use crate::largest::{
    largest_rooted_triangle, largest_triangle, select_median, solve_polygon, split_polygon,
    try_largest_triangle, SolveCfg, SolveError, SplitResult, Usable,
};
