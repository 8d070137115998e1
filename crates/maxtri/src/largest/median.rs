/// Vertex opposite the triangles' footprint: midpoint of the widest cyclic gap.
///
/// Sorts `indices`, measures the forward gaps between neighbours (the last one
/// wraps through `n`), and returns `(start + gap / 2) mod n` for the first
/// widest gap.
///
/// Pre: `indices` non-empty, every entry `< n`.
pub fn select_median(n: usize, indices: &[usize]) -> usize {
    debug_assert!(!indices.is_empty() && indices.iter().all(|&i| i < n));
    let mut sorted = indices.to_vec();
    sorted.sort_unstable();
    let k = sorted.len();
    let mut widest = (0usize, 0usize);
    for (slot, pair) in sorted.windows(2).enumerate() {
        let gap = pair[1] - pair[0];
        if slot == 0 || gap > widest.0 {
            widest = (gap, slot);
        }
    }
    let wrap = n - sorted[k - 1] + sorted[0];
    if k == 1 || wrap > widest.0 {
        widest = (wrap, k - 1);
    }
    let (gap, slot) = widest;
    (gap / 2 + sorted[slot]) % n
}
