use crate::geom2::{ConvexPolygon, TriangleIdx};

/// Largest triangle of `poly` that uses vertex `a` as a corner.
///
/// Two-pointer sweep: `b` walks once around the ring starting after `a`; `c`
/// only moves forward, and only while that strictly grows area(a, b, c).
/// For fixed (a, b) the area along the ring is unimodal on a convex polygon,
/// so `c` stops at the peak and the whole sweep is O(n).
///
/// Pre: `poly.len() >= 3`, `a < poly.len()`.
/// Post: ties keep the earliest candidate; a triangle input returns `[0, 1, 2]`.
pub fn largest_rooted_triangle(poly: &ConvexPolygon, a: usize) -> TriangleIdx {
    debug_assert!(poly.len() >= 3 && a < poly.len());
    if poly.len() == 3 {
        return TriangleIdx([0, 1, 2]);
    }
    let mut b = poly.next(a);
    let mut c = poly.next(b);
    let mut best = TriangleIdx([a, b, c]);
    let mut best_area = poly.area_of(best);
    while b != a {
        let mut cur = poly.area_of(TriangleIdx([a, b, c]));
        loop {
            let ahead = poly.area_of(TriangleIdx([a, b, poly.next(c)]));
            if ahead <= cur {
                break;
            }
            c = poly.next(c);
            cur = ahead;
        }
        if cur > best_area {
            best = TriangleIdx([a, b, c]);
            best_area = cur;
        }
        b = poly.next(b);
    }
    best
}
