//! Overlap diagnostics. Never feeds back into grouping or extraction.

use std::collections::HashSet;

use crate::geom::Rect;

/// Unordered pairs of rectangles whose open interiors overlap.
///
/// Triangular scan (`i < j`). Pairs of value-equal rectangles are skipped, and
/// each unordered pair is reported once, in scan order.
pub fn detect_intersections(rects: &[Rect]) -> Vec<(Rect, Rect)> {
    let mut seen: HashSet<(Rect, Rect)> = HashSet::new();
    let mut out = Vec::new();
    for (i, a) in rects.iter().enumerate() {
        for b in &rects[i + 1..] {
            if a == b || !a.intersects(b) {
                continue;
            }
            if seen.contains(&(*b, *a)) || !seen.insert((*a, *b)) {
                continue;
            }
            out.push((*a, *b));
        }
    }
    out
}
