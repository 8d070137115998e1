//! Data types for the divide-and-conquer triangle search.

use std::fmt;

/// Solver configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SolveCfg {
    /// Maximum recursion depth. `None` recurses until every branch reaches a
    /// triangle. At the cutoff the solver keeps the better of the two rooted
    /// triangles of that level instead of splitting further.
    pub max_depth: Option<usize>,
}

/// Which halves of a split may be recursed into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Usable {
    Both,
    /// `p1` collapsed (degenerate bucket on the even side).
    OnlySecond,
    /// `p2` collapsed (degenerate bucket on the odd side).
    OnlyFirst,
}

impl Usable {
    /// Map a degenerate bucket index to the side that survives.
    #[inline]
    pub(crate) fn from_bad_bucket(bucket: usize) -> Self {
        if bucket % 2 == 0 {
            Usable::OnlySecond
        } else {
            Usable::OnlyFirst
        }
    }
}

/// Partition of a polygon's indices by two triangles.
///
/// `p1` and `p2` are ascending and duplicate-free. Vertices of the triangles
/// may appear on both sides.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitResult {
    pub p1: Vec<usize>,
    pub p2: Vec<usize>,
    pub usable: Usable,
}

/// Errors surfaced by the checked solver entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// A triangle needs at least three polygon vertices.
    TooFewVertices { got: usize },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::TooFewVertices { got } => {
                write!(f, "polygon has {got} vertices (needs at least 3)")
            }
        }
    }
}

impl std::error::Error for SolveError {}
