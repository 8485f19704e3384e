//! Boundary loops of a rectilinear union by vertex parity.
//!
//! Steps
//! 1. Toggle every rectangle corner in a set. Corners seen an even number of
//!    times are interior and cancel; the survivors are the boundary vertices.
//! 2. Pair survivors along rows (sorted by `(y, x)`) into horizontal edges and
//!    along columns (sorted by `(x, y)`) into vertical edges. Each survivor is
//!    the endpoint of exactly one edge of each kind.
//! 3. Check that every paired edge has coverage on exactly one side; overlapping
//!    or otherwise malformed groups are rejected here.
//! 4. Walk alternating horizontal/vertical edges until the loop closes.
//!
//! Winding
//! - Each loop starts at its smallest point (by `(x, y)`), which is a convex
//!   corner. If the cell down-right of it is covered the loop is an outer
//!   boundary and is walked horizontal-first (positive area, same winding as
//!   `Rect::polygon`); otherwise it is a hole and is walked vertical-first
//!   (negative area).

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::geom::{Point, Polygon, Rect};

/// The parity/pairing bookkeeping found a vertex it cannot connect.
///
/// Signals input that is not a clean rectilinear union (e.g. overlapping
/// rectangles routed into extraction). Deterministic; retrying is pointless.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoundaryError {
    /// No other boundary vertex on the same row to pair with.
    UnpairedHorizontal { point: Point },
    /// No other boundary vertex on the same column to pair with.
    UnpairedVertical { point: Point },
    /// A paired edge has covered cells on both sides or on neither side.
    InteriorEdge { from: Point, to: Point },
    /// The walk reached a vertex whose edge was already consumed.
    OpenLoop { point: Point },
}

impl fmt::Display for BoundaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryError::UnpairedHorizontal { point } => write!(
                f,
                "boundary vertex ({}, {}) has no horizontal partner",
                point.x, point.y
            ),
            BoundaryError::UnpairedVertical { point } => write!(
                f,
                "boundary vertex ({}, {}) has no vertical partner",
                point.x, point.y
            ),
            BoundaryError::InteriorEdge { from, to } => write!(
                f,
                "edge ({}, {})-({}, {}) does not separate inside from outside",
                from.x, from.y, to.x, to.y
            ),
            BoundaryError::OpenLoop { point } => write!(
                f,
                "boundary walk did not close (edge at ({}, {}) already used)",
                point.x, point.y
            ),
        }
    }
}

impl std::error::Error for BoundaryError {}

/// Corners surviving XOR cancellation, sorted by `(x, y)`.
pub fn boundary_points(rects: &[Rect]) -> Vec<Point> {
    let mut live: HashSet<Point> = HashSet::new();
    for r in rects {
        for p in r.polygon().into_points() {
            if !live.remove(&p) {
                live.insert(p);
            }
        }
    }
    let mut pts: Vec<Point> = live.into_iter().collect();
    pts.sort_unstable();
    pts
}

/// Pairs of consecutive points that agree on `same`.
fn pair_consecutive<F>(
    sorted: &[Point],
    same: F,
    unpaired: fn(Point) -> BoundaryError,
) -> Result<Vec<(Point, Point)>, BoundaryError>
where
    F: Fn(&Point, &Point) -> bool,
{
    let mut chunks = sorted.chunks_exact(2);
    let mut pairs = Vec::with_capacity(sorted.len() / 2);
    for pair in chunks.by_ref() {
        let (a, b) = (pair[0], pair[1]);
        if !same(&a, &b) {
            return Err(unpaired(a));
        }
        pairs.push((a, b));
    }
    if let Some(&last) = chunks.remainder().first() {
        return Err(unpaired(last));
    }
    Ok(pairs)
}

/// Horizontal edges from points sorted by `(y, x)`.
pub(super) fn pair_rows(by_y: &[Point]) -> Result<Vec<(Point, Point)>, BoundaryError> {
    pair_consecutive(by_y, |a, b| a.y == b.y, |point| {
        BoundaryError::UnpairedHorizontal { point }
    })
}

/// Vertical edges from points sorted by `(x, y)`.
pub(super) fn pair_columns(by_x: &[Point]) -> Result<Vec<(Point, Point)>, BoundaryError> {
    pair_consecutive(by_x, |a, b| a.x == b.x, |point| {
        BoundaryError::UnpairedVertical { point }
    })
}

#[inline]
fn covered(group: &[Rect], cell: Point) -> bool {
    group.iter().any(|r| r.covers_cell(cell))
}

/// Exactly one of the two unit cells flanking the first unit of edge `a`–`b`
/// is covered.
fn separates(group: &[Rect], a: Point, b: Point) -> bool {
    let lo = a.min(b);
    let across = if a.y == b.y {
        Point::new(lo.x, lo.y - 1)
    } else {
        Point::new(lo.x - 1, lo.y)
    };
    covered(group, lo) != covered(group, across)
}

/// Symmetric lookup table for `pairs`, rejecting edges with coverage on both
/// or neither side.
fn edge_table(
    group: &[Rect],
    pairs: &[(Point, Point)],
) -> Result<HashMap<Point, Point>, BoundaryError> {
    let mut edges = HashMap::with_capacity(pairs.len() * 2);
    for &(a, b) in pairs {
        if !separates(group, a, b) {
            return Err(BoundaryError::InteriorEdge { from: a, to: b });
        }
        edges.insert(a, b);
        edges.insert(b, a);
    }
    Ok(edges)
}

/// Consume the edge at `from` (both directed entries) and return its far end.
fn take_edge(edges: &mut HashMap<Point, Point>, from: Point) -> Result<Point, BoundaryError> {
    let to = edges
        .remove(&from)
        .ok_or(BoundaryError::OpenLoop { point: from })?;
    match edges.remove(&to) {
        Some(back) if back == from => Ok(to),
        _ => Err(BoundaryError::OpenLoop { point: to }),
    }
}

/// Boundary polygons of a connected group of rectangles.
///
/// Value-equal duplicates are dropped first; they do not change the union but
/// would cancel each other's corners. The even-odd fill of the result equals
/// the union of `group`; with the winding rule above, the signed areas sum to
/// the union area. Loops are
/// returned in order of their smallest point. A single rectangle yields exactly
/// `Rect::polygon`.
pub fn extract_boundaries(group: &[Rect]) -> Result<Vec<Polygon>, BoundaryError> {
    let mut seen: HashSet<Rect> = HashSet::with_capacity(group.len());
    let unique: Vec<Rect> = group.iter().copied().filter(|r| seen.insert(*r)).collect();
    let group = unique.as_slice();

    let by_x = boundary_points(group);
    let mut by_y = by_x.clone();
    by_y.sort_unstable_by_key(|p| (p.y, p.x));

    let mut horizontal = edge_table(group, &pair_rows(&by_y)?)?;
    let mut vertical = edge_table(group, &pair_columns(&by_x)?)?;

    let mut polygons = Vec::new();
    for &start in &by_x {
        if !horizontal.contains_key(&start) {
            continue;
        }
        let outer = covered(group, start);
        let (first, second) = if outer {
            (&mut horizontal, &mut vertical)
        } else {
            (&mut vertical, &mut horizontal)
        };
        let mut ring = Vec::new();
        let mut cur = start;
        loop {
            ring.push(cur);
            let mid = take_edge(first, cur)?;
            ring.push(mid);
            cur = take_edge(second, mid)?;
            if cur == start {
                break;
            }
        }
        polygons.push(Polygon::new(ring));
    }
    if let Some(&point) = vertical.keys().min() {
        return Err(BoundaryError::OpenLoop { point });
    }
    Ok(polygons)
}
