//! 2D points, convex polygons and the monotone-chain hull.
//!
//! Purpose
//! - Turn an unordered point cloud into a `ConvexPolygon` (CCW ring, no
//!   repeated closing point) that the triangle search can index cyclically.
//! - Keep the representation minimal: plain `Vector2<f64>` vertices, indices
//!   reduced modulo `n` through explicit helpers.
//!
//! Code cross-refs: `ConvexPolygon`, `convex_hull`, `crate::largest`

mod hull;
pub mod rand;
mod types;

pub use hull::{convex_hull, convex_polygon_from_points};
pub use types::{ConvexPolygon, Point, Triangle, TriangleIdx};
