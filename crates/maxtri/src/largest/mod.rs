//! Largest-area triangle on a convex polygon by divide and conquer.
//!
//! Purpose
//! - Avoid the O(n³) scan of all vertex triples: find the best triangle
//!   rooted at one vertex with a two-pointer sweep, pick a second root across
//!   the widest gap of that triangle, cut the polygon along both triangles and
//!   recurse into the pieces.
//!
//! Exactness
//! - Each rooted search is exact. The split step is a heuristic: on random
//!   hulls the recursion misses the global optimum on a sizeable minority of
//!   inputs (see the regression tests). Callers that need the exact answer must
//!   check against an exhaustive search.
//!
//! Layout
//! - `rooted.rs` (rooted sweep), `median.rs` (second root), `split.rs`
//!   (six-bucket partition), `solve.rs` (recursion), `types.rs` (config,
//!   split result, errors).

mod median;
mod rooted;
mod solve;
mod split;
mod types;

pub use median::select_median;
pub use rooted::largest_rooted_triangle;
pub use solve::{largest_triangle, solve_polygon, try_largest_triangle};
pub use split::split_polygon;
pub use types::{SolveCfg, SolveError, SplitResult, Usable};
