use super::types::Rect;

/// Sorted, deduplicated edge coordinates along one axis.
fn compressed<F>(rects: &[Rect], edges: F) -> Vec<i64>
where
    F: Fn(&Rect) -> [i64; 2],
{
    let mut out: Vec<i64> = rects.iter().flat_map(|r| edges(r)).collect();
    out.sort_unstable();
    out.dedup();
    out
}

/// Exact area of the union of `rects` via coordinate compression.
///
/// O(n³) over the compressed grid; meant for verification and small sections,
/// not for hot paths. Zero-extent rectangles contribute nothing.
pub fn union_area(rects: &[Rect]) -> i64 {
    let xs = compressed(rects, |r| [r.left(), r.right()]);
    let ys = compressed(rects, |r| [r.top(), r.bottom()]);
    let mut total = 0;
    for wx in xs.windows(2) {
        for wy in ys.windows(2) {
            let (x0, x1, y0, y1) = (wx[0], wx[1], wy[0], wy[1]);
            let covered = rects.iter().any(|r| {
                r.left() <= x0 && x1 <= r.right() && r.top() <= y0 && y1 <= r.bottom()
            });
            if covered {
                total += (x1 - x0) * (y1 - y0);
            }
        }
    }
    total
}
