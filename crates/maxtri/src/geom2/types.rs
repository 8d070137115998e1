//! Basic 2D types for the triangle search.
//!
//! - `Point`: a plain `Vector2<f64>` (lexicographic order is applied by the hull builder).
//! - `ConvexPolygon`: cyclic vertex ring with explicit modulo index helpers.
//! - `TriangleIdx`, `Triangle`: a candidate triangle by indices or by extracted points.
//!
//! Code cross-refs: `hull::convex_hull`, `crate::largest`

use nalgebra::Vector2;

use crate::geometry::triangle_area;

/// A point in the plane.
pub type Point = Vector2<f64>;

/// Convex polygon as a cyclic vertex sequence.
///
/// Invariants (by construction, not checked):
/// - Vertices are distinct and in convex position.
/// - Consecutive vertices are adjacent on the boundary; index `n` wraps to `0`.
/// - No repeated closing vertex.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConvexPolygon {
    pub verts: Vec<Point>,
}

impl ConvexPolygon {
    #[inline]
    pub fn new(verts: Vec<Point>) -> Self {
        Self { verts }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.verts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    /// Successor of `i` on the ring.
    #[inline]
    pub fn next(&self, i: usize) -> usize {
        (i + 1) % self.verts.len()
    }

    /// Area of the triangle spanned by three vertex indices.
    #[inline]
    pub fn area_of(&self, t: TriangleIdx) -> f64 {
        let [a, b, c] = t.0;
        triangle_area(self.verts[a], self.verts[b], self.verts[c])
    }

    /// Sub-polygon made of the listed vertices, in the given order.
    ///
    /// Pre: `idx` is ascending, so the sub-polygon keeps the parent's winding.
    pub fn select(&self, idx: &[usize]) -> ConvexPolygon {
        debug_assert!(idx.windows(2).all(|w| w[0] < w[1]), "indices must be ascending");
        ConvexPolygon {
            verts: idx.iter().map(|&i| self.verts[i]).collect(),
        }
    }

    /// Extract the points of an index triangle.
    #[inline]
    pub fn triangle(&self, t: TriangleIdx) -> Triangle {
        let [a, b, c] = t.0;
        Triangle([self.verts[a], self.verts[b], self.verts[c]])
    }
}

/// Three vertex indices into some `ConvexPolygon`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TriangleIdx(pub [usize; 3]);

impl TriangleIdx {
    #[inline]
    pub fn contains(&self, i: usize) -> bool {
        self.0.contains(&i)
    }
}

/// Three literal points, as returned to callers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle(pub [Point; 3]);

impl Triangle {
    #[inline]
    pub fn area(&self) -> f64 {
        let [a, b, c] = self.0;
        triangle_area(a, b, c)
    }

    #[inline]
    pub fn points(&self) -> [Point; 3] {
        self.0
    }
}
