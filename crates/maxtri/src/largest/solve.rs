//! Recursive orchestration: root, median root, split, recurse.

use tracing::{debug, trace};

use super::median::select_median;
use super::rooted::largest_rooted_triangle;
use super::split::split_polygon;
use super::types::{SolveCfg, SolveError, Usable};
use crate::geom2::{ConvexPolygon, Point, Triangle};

/// Largest triangle with vertices on the convex polygon `polygon`.
///
/// `start` picks the first root vertex (reduced modulo `n`). Exactly three
/// points are returned unchanged.
///
/// # Panics
/// If `polygon` has fewer than three points.
pub fn largest_triangle(polygon: &[Point], start: usize) -> Triangle {
    assert!(
        polygon.len() >= 3,
        "largest_triangle needs at least 3 points, got {}",
        polygon.len()
    );
    let poly = ConvexPolygon::new(polygon.to_vec());
    recurse(&poly, start, &SolveCfg::default(), 0)
}

/// Checked form of [`largest_triangle`] with an explicit configuration.
pub fn try_largest_triangle(
    polygon: &[Point],
    start: usize,
    cfg: SolveCfg,
) -> Result<Triangle, SolveError> {
    solve_polygon(&ConvexPolygon::new(polygon.to_vec()), start, cfg)
}

/// Same as [`try_largest_triangle`], for a polygon that is already built.
pub fn solve_polygon(
    poly: &ConvexPolygon,
    start: usize,
    cfg: SolveCfg,
) -> Result<Triangle, SolveError> {
    if poly.len() < 3 {
        return Err(SolveError::TooFewVertices { got: poly.len() });
    }
    Ok(recurse(poly, start, &cfg, 0))
}

fn recurse(poly: &ConvexPolygon, start: usize, cfg: &SolveCfg, depth: usize) -> Triangle {
    let n = poly.len();
    if n == 3 {
        return Triangle([poly.verts[0], poly.verts[1], poly.verts[2]]);
    }
    // children restart one step after this root, on their own ring
    let a = start % n;
    let t_a = largest_rooted_triangle(poly, a);
    let m = select_median(n, &t_a.0);
    let t_m = largest_rooted_triangle(poly, m);
    trace!(depth, n, a, m, ?t_a, ?t_m, "rooted triangles");

    if cfg.max_depth.is_some_and(|limit| depth >= limit) {
        debug!(depth, n, "depth cutoff; keeping best rooted triangle");
        return if poly.area_of(t_m) > poly.area_of(t_a) {
            poly.triangle(t_m)
        } else {
            poly.triangle(t_a)
        };
    }

    let split = split_polygon(n, t_a, t_m);
    let descend = |idx: &[usize]| {
        assert!(
            idx.len() >= 3,
            "split produced a {}-vertex side from a {n}-gon",
            idx.len()
        );
        let sub = poly.select(idx);
        let next_start = (a + 1) % sub.len();
        recurse(&sub, next_start, cfg, depth + 1)
    };
    match split.usable {
        Usable::Both => {
            let first = descend(&split.p1);
            let second = descend(&split.p2);
            if second.area() > first.area() {
                second
            } else {
                first
            }
        }
        Usable::OnlySecond => {
            debug!(depth, n, ?t_a, ?t_m, "degenerate split; first side dropped");
            descend(&split.p2)
        }
        Usable::OnlyFirst => {
            debug!(depth, n, ?t_a, ?t_m, "degenerate split; second side dropped");
            descend(&split.p1)
        }
    }
}
