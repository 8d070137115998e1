use super::types::{SplitResult, Usable};
use crate::geom2::TriangleIdx;

/// Partition `0..n` into two index sets along the edges of `t1` and `t2`.
///
/// Indices are dealt into six buckets in ring order. Every triangle vertex
/// closes the current bucket and opens the next one, where it becomes the
/// first element; a vertex shared by both triangles is also copied into the
/// bucket after that. Even buckets form `p1`, odd buckets form `p2`.
///
/// Two consecutive boundaries owned by `t1` alone (no `t2` vertex between them)
/// collapse one side: the parity of the bucket reached at the second boundary
/// names the collapsed side. The last such event wins.
///
/// Pre: all triangle indices `< n`.
pub fn split_polygon(n: usize, t1: TriangleIdx, t2: TriangleIdx) -> SplitResult {
    let mut buckets: [Vec<usize>; 6] = Default::default();
    let mut cur = 0usize;
    let mut last_t1_only = false;
    let mut bad: Option<usize> = None;
    for p in 0..n {
        let in1 = t1.contains(p);
        let in2 = t2.contains(p);
        if !in1 && !in2 {
            buckets[cur].push(p);
            continue;
        }
        cur = (cur + 1) % 6;
        buckets[cur].push(p);
        match (in1, in2) {
            (true, false) => {
                if last_t1_only {
                    bad = Some(cur);
                }
                last_t1_only = true;
            }
            (true, true) => {
                last_t1_only = false;
                cur = (cur + 1) % 6;
                buckets[cur].push(p);
            }
            _ => last_t1_only = false,
        }
    }
    let side = |parity: usize| {
        let mut out: Vec<usize> = buckets
            .iter()
            .skip(parity)
            .step_by(2)
            .flatten()
            .copied()
            .collect();
        out.sort_unstable();
        out.dedup();
        out
    };
    SplitResult {
        p1: side(0),
        p2: side(1),
        usable: bad.map_or(Usable::Both, Usable::from_bad_bucket),
    }
}
