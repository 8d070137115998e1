use std::cmp::Ordering;

use super::types::{ConvexPolygon, Point};
use crate::geometry::cross;

#[inline]
fn lex_cmp(a: &Point, b: &Point) -> Ordering {
    match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    }
}

/// Andrew’s monotone chain convex hull.
///
/// Returns the hull in CCW order starting at the lexicographically smallest
/// point, without a repeated closing point. Collinear boundary points are
/// dropped. Inputs with at most one distinct point come back deduplicated and
/// otherwise unchanged; a fully collinear input yields its two extreme points.
pub fn convex_hull(points: &[Point]) -> Vec<Point> {
    let mut pts: Vec<Point> = points.to_vec();
    pts.sort_by(lex_cmp);
    pts.dedup();
    if pts.len() <= 1 {
        return pts;
    }
    let mut lower: Vec<Point> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], *p) <= 0.0 {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<Point> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], *p) <= 0.0 {
            upper.pop();
        }
        upper.push(*p);
    }
    // both chains end where the other starts
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    hull
}

/// Hull as a `ConvexPolygon`.
#[inline]
pub fn convex_polygon_from_points(points: &[Point]) -> ConvexPolygon {
    ConvexPolygon::new(convex_hull(points))
}
